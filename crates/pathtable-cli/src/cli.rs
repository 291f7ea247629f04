use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pathtable::IngestOptions;

/// Read NUL-delimited paths (e.g. from `find -print0`) and print them sorted.
#[derive(Debug, Parser)]
#[command(name = "pathtable", version, about)]
pub struct Args {
    /// File to read instead of stdin.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Drop empty records produced by adjacent NUL bytes.
    #[arg(long)]
    pub skip_empty: bool,

    /// How to print each record.
    #[arg(short, long, value_enum, default_value_t = Format::Lines)]
    pub format: Format,

    /// Print only the record at this position of the sorted table.
    #[arg(short, long, value_name = "INDEX")]
    pub select: Option<usize>,

    /// Log ingestion details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One path per line.
    Lines,
    /// NUL-terminated paths, suitable for `xargs -0`.
    Print0,
    /// Index, directory length and path, tab separated.
    Long,
    /// One JSON object per line.
    Json,
}

impl Args {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            skip_empty_records: self.skip_empty,
            ..Default::default()
        }
    }
}
