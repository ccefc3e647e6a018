// src/main.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context as _;
use clap::Parser;

use word_tally::cli::Args;
use word_tally::output;
use word_tally::tally::{WordTally, WordsStatistics};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut tally = WordTally::new();

    if args.paths.is_empty() {
        ingest(&mut tally, io::stdin().lock())?;
    } else {
        for path in &args.paths {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            ingest(&mut tally, BufReader::new(file))?;
        }
    }

    let rows = tally.get_statistics();
    let mut out = io::BufWriter::new(io::stdout().lock());
    output::emit(&mut out, &rows, args.format, args.top)?;
    out.flush()?;
    Ok(())
}

/// 1行を1単語として取り込む（行内の空白はそのまま単語の一部）
fn ingest(tally: &mut WordTally, reader: impl BufRead) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        tally.add_word(Some(&line))?;
    }
    Ok(())
}
