pub mod cli;
pub mod error;
pub mod normalize;
pub mod output;
pub mod tally;

pub use error::{Result, TallyError};
pub use tally::{WordCount, WordTally, WordsStatistics};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
