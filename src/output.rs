// src/output.rs
use std::io::Write;

use serde::Serialize;

use crate::tally::WordCount;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

pub fn emit(
    out: &mut impl Write,
    rows: &[WordCount],
    format: ReportFormat,
    top: Option<usize>,
) -> anyhow::Result<()> {
    let rows = limited(rows, top);
    match format {
        ReportFormat::Table => emit_table(out, rows),
        ReportFormat::Csv => emit_delimited(out, rows, ','),
        ReportFormat::Tsv => emit_delimited(out, rows, '\t'),
        ReportFormat::Json => emit_json(out, rows),
    }
}

fn limited(rows: &[WordCount], top: Option<usize>) -> &[WordCount] {
    let limit = top.unwrap_or(rows.len()).min(rows.len());
    &rows[..limit]
}

fn emit_table(out: &mut impl Write, rows: &[WordCount]) -> anyhow::Result<()> {
    writeln!(out, "{:>10}\tWORD", "COUNT")?;
    writeln!(out, "----------------------------------------------")?;
    for row in rows {
        writeln!(out, "{:10}\t{}", row.count, row.word)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{:10}\tTOTAL ({} words)", total(rows), rows.len())?;
    Ok(())
}

fn emit_delimited(out: &mut impl Write, rows: &[WordCount], sep: char) -> anyhow::Result<()> {
    writeln!(out, "count{sep}word")?;
    for row in rows {
        writeln!(out, "{}{}{}", row.count, sep, escape_if_needed(&row.word, sep))?;
    }
    Ok(())
}

fn escape_if_needed(s: &str, sep: char) -> String {
    if sep == ',' && (s.contains(',') || s.contains('"')) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    words: &'a [WordCount],
    summary: JsonSummary,
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    distinct: usize,
    occurrences: usize,
}

fn emit_json(out: &mut impl Write, rows: &[WordCount]) -> anyhow::Result<()> {
    let report = JsonReport {
        words: rows,
        summary: JsonSummary { distinct: rows.len(), occurrences: total(rows) },
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn total(rows: &[WordCount]) -> usize {
    rows.iter().map(|r| r.count).sum()
}
