//! Snapshot output

use super::error::FeedError;
use crate::orderbook::DepthSnapshot;
use csv::Writer;
use std::io::Write;

/// Destination for rendered snapshots
pub trait SnapshotSink {
    /// Write one snapshot
    fn write_snapshot(&mut self, snapshot: &DepthSnapshot) -> Result<(), FeedError>;

    /// Flush buffered output
    fn flush(&mut self) -> Result<(), FeedError>;
}

/// MBP-10 CSV output. The header row is written on creation.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Result<Self, FeedError> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(DepthSnapshot::csv_header())?;
        Ok(Self { writer })
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W, FeedError> {
        self.writer
            .into_inner()
            .map_err(|err| FeedError::Io(err.into_error()))
    }
}

impl<W: Write> SnapshotSink for CsvSink<W> {
    fn write_snapshot(&mut self, snapshot: &DepthSnapshot) -> Result<(), FeedError> {
        self.writer.write_record(snapshot.csv_row())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), FeedError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per snapshot, newline separated
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotSink for JsonLinesSink<W> {
    fn write_snapshot(&mut self, snapshot: &DepthSnapshot) -> Result<(), FeedError> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), FeedError> {
        self.out.flush()?;
        Ok(())
    }
}
