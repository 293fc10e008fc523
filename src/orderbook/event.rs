//! Decoded market-by-order events

use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action carried by a market-by-order event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Book reset: every order, level and pending trade is dropped
    Refresh,
    /// New resting order
    Add,
    /// Full or partial cancellation, or the closing leg of an execution
    Cancel,
    /// Price and/or size replacement of a resting order
    Modify,
    /// Execution report, held pending until confirmed by a fill
    Trade,
    /// Fill confirming the pending trade
    Fill,
    /// Any other action code; applying it is a no-op
    Unsupported(char),
}

impl Action {
    /// Single character wire code of this action
    pub fn code(&self) -> char {
        match self {
            Action::Refresh => 'R',
            Action::Add => 'A',
            Action::Cancel => 'C',
            Action::Modify => 'M',
            Action::Trade => 'T',
            Action::Fill => 'F',
            Action::Unsupported(code) => *code,
        }
    }
}

impl From<char> for Action {
    fn from(code: char) -> Self {
        match code {
            'R' => Action::Refresh,
            'A' => Action::Add,
            'C' => Action::Cancel,
            'M' => Action::Modify,
            'T' => Action::Trade,
            'F' => Action::Fill,
            other => Action::Unsupported(other),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Map a side code to a book side.
///
/// `B` is the bid side; `A` and `S` are both accepted for the ask side.
/// Everything else (notably `N`) means the event has no applicable side.
pub fn side_from_code(code: char) -> Option<Side> {
    match code {
        'B' => Some(Side::Buy),
        'A' | 'S' => Some(Side::Sell),
        _ => None,
    }
}

/// Record metadata echoed into the next rendered snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Receipt timestamp, verbatim
    pub ts_recv: String,
    /// Event timestamp, verbatim
    pub ts_event: String,
    /// Record type code
    pub rtype: u8,
    /// Publisher identifier
    pub publisher_id: u16,
    /// Event flags
    pub flags: u8,
    /// Inter-arrival delta
    pub ts_in_delta: i64,
    /// Venue sequence number
    pub sequence: u64,
    /// Instrument symbol
    pub symbol: String,
}

/// One decoded market-by-order event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MboEvent {
    pub meta: RecordMeta,
    pub instrument_id: u32,
    pub action: Action,
    /// `None` when the side code is not applicable
    pub side: Option<Side>,
    /// Price in integer ticks
    pub price: i64,
    pub size: u32,
    pub order_id: u64,
    /// Event timestamp in nanoseconds since epoch, stored on added orders
    pub ts_event_nanos: u64,
}

impl MboEvent {
    /// Build an event with empty metadata. Mostly useful for driving a ledger
    /// directly, without a decoded feed.
    pub fn new(action: Action, side: Option<Side>, order_id: u64, price: i64, size: u32) -> Self {
        Self {
            meta: RecordMeta::default(),
            instrument_id: 0,
            action,
            side,
            price,
            size,
            order_id,
            ts_event_nanos: 0,
        }
    }

    /// Attach record metadata
    pub fn with_meta(mut self, meta: RecordMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Attach the instrument identifier
    pub fn with_instrument(mut self, instrument_id: u32) -> Self {
        self.instrument_id = instrument_id;
        self
    }

    /// Attach the event timestamp
    pub fn with_ts_event(mut self, ts_event_nanos: u64) -> Self {
        self.ts_event_nanos = ts_event_nanos;
        self
    }
}
