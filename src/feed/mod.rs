//! Feed ingestion and output: decoding market-by-order CSV, routing events to
//! per-instrument ledgers and writing depth snapshots.

pub mod config;
mod error;
pub mod price;
pub mod reader;
mod record;
pub mod replay;
pub mod router;
pub mod sink;

pub use config::{EmitMode, LedgerKey, OutputFormat, ReplayConfig};
pub use error::FeedError;
pub use price::price_to_ticks;
pub use reader::MboReader;
pub use record::MBO_FIELD_COUNT;
pub use replay::{ReplaySummary, replay, replay_file};
pub use router::{BookRouter, RouterStats};
pub use sink::{CsvSink, JsonLinesSink, SnapshotSink};
