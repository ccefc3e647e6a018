// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::output::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "word_tally", version = crate::VERSION, about = "単語頻度の集計ツール")]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// 上位N件のみ表示
    #[arg(long)]
    pub top: Option<usize>,

    /// 入力ファイル (1行1単語、省略時は標準入力)
    pub paths: Vec<PathBuf>,
}
