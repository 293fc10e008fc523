//! Top-of-book depth snapshot (MBP-10) for market data

use super::book::OrderLedger;
use super::event::RecordMeta;
use super::level::PriceLevel;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of levels rendered per side
pub const MBP_DEPTH: usize = 10;

/// Action tag written on every snapshot row
pub const SNAPSHOT_ACTION: char = 'T';

/// Side tag written on every snapshot row
pub const SNAPSHOT_SIDE: char = 'N';

/// One rendered level. A zero `size` marks an absent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Price in integer ticks
    pub price: i64,
    pub size: u64,
    pub count: u32,
}

impl LevelSnapshot {
    /// True when this slot holds no level
    pub fn is_absent(&self) -> bool {
        self.size == 0
    }
}

impl From<&PriceLevel> for LevelSnapshot {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price,
            size: level.size,
            count: level.count,
        }
    }
}

/// An immutable view of the top levels of one instrument, stamped with the
/// metadata of the last event applied before rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// Metadata of the last processed event
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// Key of the ledger this snapshot was rendered from
    pub instrument_id: u64,

    /// Best bid levels, highest price first, zero-filled
    pub bids: [LevelSnapshot; MBP_DEPTH],

    /// Best ask levels, lowest price first, zero-filled
    pub asks: [LevelSnapshot; MBP_DEPTH],
}

/// Render a tick price as currency units, exactly (`10050` → `100.50`)
pub fn format_price(ticks: i64) -> String {
    let sign = if ticks < 0 { "-" } else { "" };
    let abs = ticks.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

fn zero_filled<'a>(levels: impl Iterator<Item = &'a PriceLevel>) -> [LevelSnapshot; MBP_DEPTH] {
    let mut rendered = [LevelSnapshot::default(); MBP_DEPTH];
    for (slot, level) in rendered.iter_mut().zip(levels) {
        *slot = LevelSnapshot::from(level);
    }
    rendered
}

impl OrderLedger {
    /// Create a snapshot of the current top-of-book state
    pub fn snapshot(&self) -> DepthSnapshot {
        trace!("Ledger {}: Rendering snapshot", self.instrument_id);
        DepthSnapshot {
            meta: self.meta.clone(),
            instrument_id: self.instrument_id,
            bids: zero_filled(self.depth.best_levels(Side::Buy, MBP_DEPTH)),
            asks: zero_filled(self.depth.best_levels(Side::Sell, MBP_DEPTH)),
        }
    }
}

impl DepthSnapshot {
    /// Get the best bid price and size
    pub fn best_bid(&self) -> Option<(i64, u64)> {
        let bid = self
            .bids
            .first()
            .filter(|level| !level.is_absent())
            .map(|level| (level.price, level.size));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and size
    pub fn best_ask(&self) -> Option<(i64, u64)> {
        let ask = self
            .asks
            .first()
            .filter(|level| !level.is_absent())
            .map(|level| (level.price, level.size));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price in ticks (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid) in ticks
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some(ask_price - bid_price),
            _ => None,
        }
    }

    /// Total size across the rendered bid levels
    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|level| level.size).sum()
    }

    /// Total size across the rendered ask levels
    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|level| level.size).sum()
    }

    /// Column names of the MBP-10 row layout
    pub fn csv_header() -> Vec<String> {
        let mut header: Vec<String> = [
            "ts_recv",
            "ts_event",
            "rtype",
            "publisher_id",
            "instrument_id",
            "action",
            "side",
            "depth",
            "flags",
            "ts_in_delta",
            "sequence",
        ]
        .iter()
        .map(|name| name.to_string())
        .collect();

        for i in 0..MBP_DEPTH {
            for column in ["bid_px", "bid_sz", "bid_ct", "ask_px", "ask_sz", "ask_ct"] {
                header.push(format!("{column}_{i:02}"));
            }
        }

        header.push("symbol".to_string());
        header.push("order_id".to_string());
        header
    }

    /// Fields of this snapshot in MBP-10 row layout
    pub fn csv_row(&self) -> Vec<String> {
        let meta = &self.meta;
        let mut row = vec![
            meta.ts_recv.clone(),
            meta.ts_event.clone(),
            meta.rtype.to_string(),
            meta.publisher_id.to_string(),
            self.instrument_id.to_string(),
            SNAPSHOT_ACTION.to_string(),
            SNAPSHOT_SIDE.to_string(),
            MBP_DEPTH.to_string(),
            meta.flags.to_string(),
            meta.ts_in_delta.to_string(),
            meta.sequence.to_string(),
        ];

        for (bid, ask) in self.bids.iter().zip(self.asks.iter()) {
            row.push(format_price(bid.price));
            row.push(bid.size.to_string());
            row.push(bid.count.to_string());
            row.push(format_price(ask.price));
            row.push(ask.size.to_string());
            row.push(ask.count.to_string());
        }

        row.push(meta.symbol.clone());
        row.push("0".to_string());
        row
    }
}
