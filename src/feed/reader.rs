//! Streaming reader over a market-by-order CSV source

use super::error::FeedError;
use crate::orderbook::MboEvent;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Decodes market-by-order events from CSV, one record at a time.
///
/// The first line is a header. Malformed records are logged, counted and
/// skipped; only I/O failures end iteration with an error. Progress is logged
/// every `progress_interval` data lines, whether or not they decode.
pub struct MboReader<R> {
    inner: Reader<R>,
    record: StringRecord,
    lines: u64,
    skipped: u64,
    progress_interval: u64,
    progress_reports: u64,
}

impl MboReader<File> {
    /// Open a CSV file. Fails if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> MboReader<R> {
    pub fn new(source: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);
        Self {
            inner,
            record: StringRecord::new(),
            lines: 0,
            skipped: 0,
            progress_interval: 0,
            progress_reports: 0,
        }
    }

    /// Log a progress line every `interval` data lines; 0 disables it
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Data lines read so far, including skipped ones
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Malformed records skipped so far
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Progress lines logged so far
    pub fn progress_reports(&self) -> u64 {
        self.progress_reports
    }

    /// Read the next well-formed event.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_event(&mut self) -> Result<Option<MboEvent>, FeedError> {
        loop {
            let decoded = match self.inner.read_record(&mut self.record) {
                Ok(false) => return Ok(None),
                Ok(true) => MboEvent::from_record(&self.record),
                Err(err) => Err(FeedError::from(err)),
            };
            self.lines += 1;
            if self.progress_interval > 0 && self.lines % self.progress_interval == 0 {
                info!("Processed {} lines...", self.lines);
                self.progress_reports += 1;
            }

            match decoded {
                Ok(event) => return Ok(Some(event)),
                Err(err) if err.is_record_error() => {
                    self.skipped += 1;
                    warn!("Skipping malformed record at line {}: {}", self.lines + 1, err);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl<R: Read> Iterator for MboReader<R> {
    type Item = Result<MboEvent, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}
