//! Core OrderLedger implementation: resting orders plus the depth they aggregate into

use super::depth::DepthBook;
use super::event::RecordMeta;
use super::matching::TradeMatcher;
use pricelevel::Side;
use std::collections::HashMap;

/// A resting order as tracked by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// Order identifier
    pub id: u64,
    /// Side the order rests on
    pub side: Side,
    /// Price in integer ticks
    pub price: i64,
    /// Remaining size
    pub size: u32,
    /// Event timestamp of the add, nanoseconds since epoch
    pub ts_event: u64,
}

impl Order {
    pub fn new(id: u64, side: Side, price: i64, size: u32, ts_event: u64) -> Self {
        Self {
            id,
            side,
            price,
            size,
            ts_event,
        }
    }
}

/// The OrderLedger owns every open order of one instrument and the aggregated
/// depth built from them.
///
/// The order index and the depth book are only ever changed together: every
/// public mutation updates both before returning, so per-level size and count
/// always reflect the resting orders. Events are applied one at a time through
/// `&mut self`; sharding across threads must be done by instrument.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    /// Instrument (or, in compatibility mode, order) key of this ledger
    pub(super) instrument_id: u64,

    /// Open orders by identifier
    pub(super) orders: HashMap<u64, Order>,

    /// Aggregated bid/ask levels
    pub(super) depth: DepthBook,

    /// In-flight execution tracking
    pub(super) matcher: TradeMatcher,

    /// Metadata of the last processed event
    pub(super) meta: RecordMeta,
}

impl OrderLedger {
    /// Create an empty ledger for the given instrument
    pub fn new(instrument_id: u64) -> Self {
        Self {
            instrument_id,
            orders: HashMap::new(),
            depth: DepthBook::new(),
            matcher: TradeMatcher::new(),
            meta: RecordMeta::default(),
        }
    }

    /// Get the instrument id of this ledger
    pub fn instrument_id(&self) -> u64 {
        self.instrument_id
    }

    /// Get a resting order by id
    pub fn order(&self, order_id: u64) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate over all resting orders, in no particular order
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.values()
    }

    /// Read-only view of the aggregated depth
    pub fn depth(&self) -> &DepthBook {
        &self.depth
    }

    /// Read-only view of the trade matcher
    pub fn matcher(&self) -> &TradeMatcher {
        &self.matcher
    }

    /// Metadata of the last processed event
    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<i64> {
        self.depth.best_price(Side::Buy)
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<i64> {
        self.depth.best_price(Side::Sell)
    }

    /// Get the spread (best ask - best bid) in ticks
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Get the mid price in ticks (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// True when the ledger holds no order and no depth
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.depth.is_empty()
    }
}
