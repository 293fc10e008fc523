//! Replay configuration

use super::error::FeedError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How events are assigned to ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LedgerKey {
    /// One ledger per instrument
    #[default]
    Instrument,
    /// One ledger per order id. Each ledger then only ever holds a single
    /// order; kept for output compatibility with per-order keyed feeds.
    OrderId,
}

/// When snapshots are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EmitMode {
    /// One row per ledger with depth at end of input
    #[default]
    Final,
    /// One row for the touched ledger after every applied event
    EveryEvent,
}

/// Snapshot output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// MBP-10 CSV with a header row
    #[default]
    Csv,
    /// One JSON object per line
    JsonLines,
}

/// Settings of a feed replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Ledger assignment
    pub ledger_key: LedgerKey,
    /// Drop the first event of the run when it is a Refresh
    pub skip_initial_refresh: bool,
    /// Snapshot emission policy
    pub emit: EmitMode,
    /// Snapshot encoding
    pub format: OutputFormat,
    /// Records between progress log lines; 0 disables them
    pub progress_interval: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            ledger_key: LedgerKey::Instrument,
            skip_initial_refresh: true,
            emit: EmitMode::Final,
            format: OutputFormat::Csv,
            progress_interval: 100_000,
        }
    }
}

impl ReplayConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}
