//! Feed ingestion error types

use thiserror::Error;

/// Errors raised at the ingestion and output boundary.
///
/// Record-level variants describe a single malformed input record, which the
/// reader skips. The rest are fatal to a replay.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader or writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record has too few fields
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount {
        /// Minimum number of fields
        expected: usize,
        /// Number of fields present
        found: usize,
    },

    /// A field could not be decoded
    #[error("invalid {field}: {value:?}")]
    InvalidField {
        /// Column name
        field: &'static str,
        /// Raw text of the field
        value: String,
    },
}

impl FeedError {
    /// True for faults confined to one record, which are skipped rather than
    /// aborting the run
    pub fn is_record_error(&self) -> bool {
        match self {
            FeedError::FieldCount { .. } | FeedError::InvalidField { .. } => true,
            FeedError::Csv(err) => !err.is_io_error(),
            FeedError::Io(_) | FeedError::Json(_) => false,
        }
    }

    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        FeedError::InvalidField {
            field,
            value: value.to_string(),
        }
    }
}
