//! Replays a market-by-order CSV file and writes MBP-10 depth snapshots.
//!
//! Usage:
//!   cargo run --bin mbo_replay -- mbo.csv > mbp.csv
//!   cargo run --bin mbo_replay -- mbo.csv --emit every-event --format json-lines -o mbp.jsonl

use anyhow::{Context, Result};
use clap::Parser;
use mbp_rs::feed::{EmitMode, LedgerKey, OutputFormat};
use mbp_rs::{ReplayConfig, init_tracing, replay_file};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mbo_replay")]
#[command(about = "Reconstruct MBP-10 depth snapshots from a market-by-order CSV feed")]
struct Args {
    /// Market-by-order CSV file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// How events are assigned to ledgers
    #[arg(long, value_enum)]
    key: Option<LedgerKey>,

    /// When snapshots are written
    #[arg(long, value_enum)]
    emit: Option<EmitMode>,

    /// Snapshot encoding
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Apply a leading Refresh instead of dropping it
    #[arg(long)]
    keep_initial_refresh: bool,

    /// Records between progress log lines (0 disables them)
    #[arg(long)]
    progress_interval: Option<u64>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

impl Args {
    fn to_config(&self) -> Result<ReplayConfig> {
        let mut config = match &self.config {
            Some(path) => ReplayConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ReplayConfig::default(),
        };

        if let Some(key) = self.key {
            config.ledger_key = key;
        }
        if let Some(emit) = self.emit {
            config.emit = emit;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.keep_initial_refresh {
            config.skip_initial_refresh = false;
        }
        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let config = args.to_config()?;
    info!("Replaying {} with {:?}", args.input.display(), config);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = replay_file(&args.input, out, &config)
        .with_context(|| format!("replaying {}", args.input.display()))?;

    if summary.initial_refresh_dropped {
        info!("Initial refresh dropped");
    }
    info!(
        "Done: {} events applied across {} ledgers",
        summary.applied, summary.ledgers
    );
    Ok(())
}
