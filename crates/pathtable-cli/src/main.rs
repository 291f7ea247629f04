//! `pathtable`: print the sorted table built from a NUL-delimited path stream.
//!
//! ```text
//! find /srv -type f -print0 | pathtable --format long
//! ```

mod cli;
mod output;

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
};

use anyhow::{Context, bail};
use clap::Parser;
use pathtable::{PathTable, Session};
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{cli::Args, output::write_record};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let source: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(args.ingest_options());
    let table = session.ingest(source);
    report(table);

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    print_table(&mut out, &args, table)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn init_tracing(verbose: bool, rust_log: Option<&str>) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(verbose, rust_log))
        .init();
}

/// `RUST_LOG` when set and valid, `info` otherwise; `--verbose` adds `debug`.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(Level::INFO.into()));
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}

fn report(table: &PathTable) {
    let stats = table.stats();
    info!(
        records = table.record_count(),
        bytes = stats.bytes_read,
        reads = stats.reads,
        "ingested path listing"
    );
    if let Some(err) = table.read_error() {
        warn!(error = %err, "listing may be incomplete");
    }
}

fn print_table<W: Write>(out: &mut W, args: &Args, table: &PathTable) -> anyhow::Result<()> {
    if let Some(index) = args.select {
        let Some(record) = table.record_at(index) else {
            bail!(
                "index {index} is out of range for {} records",
                table.record_count()
            );
        };
        write_record(out, args.format, index, record)?;
        return Ok(());
    }

    for (index, record) in table.iter().enumerate() {
        write_record(out, args.format, index, record)?;
    }
    Ok(())
}
