//! Routing of decoded events to per-instrument ledgers

use super::config::LedgerKey;
use crate::orderbook::{Action, DepthSnapshot, MboEvent, OrderLedger};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Counters kept while routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterStats {
    /// Events applied to a ledger
    pub applied: u64,
    /// Whether the run's leading Refresh was dropped
    pub initial_refresh_dropped: bool,
    /// Ledgers created
    pub ledgers: usize,
}

/// Owns every ledger of a run and dispatches events to them.
///
/// Ledgers are created on first reference and live for the whole run. They are
/// kept ordered by key so end-of-run output is deterministic.
#[derive(Debug)]
pub struct BookRouter {
    books: BTreeMap<u64, OrderLedger>,
    key: LedgerKey,
    skip_initial_refresh: bool,
    first_seen: bool,
    stats: RouterStats,
}

impl BookRouter {
    pub fn new(key: LedgerKey, skip_initial_refresh: bool) -> Self {
        Self {
            books: BTreeMap::new(),
            key,
            skip_initial_refresh,
            first_seen: false,
            stats: RouterStats::default(),
        }
    }

    /// Ledger key an event belongs to
    pub fn key_of(&self, event: &MboEvent) -> u64 {
        match self.key {
            LedgerKey::Instrument => u64::from(event.instrument_id),
            LedgerKey::OrderId => event.order_id,
        }
    }

    /// Apply one event to the ledger owning it.
    ///
    /// The very first event of the run is dropped when it is a Refresh (and
    /// dropping is enabled); this happens at most once per router, not once per
    /// instrument. Returns the ledger the event was applied to.
    pub fn route(&mut self, event: &MboEvent) -> Option<&OrderLedger> {
        let first = !self.first_seen;
        self.first_seen = true;
        if first && self.skip_initial_refresh && event.action == Action::Refresh {
            debug!("Dropping initial refresh for instrument {}", event.instrument_id);
            self.stats.initial_refresh_dropped = true;
            return None;
        }

        let key = self.key_of(event);
        let stats = &mut self.stats;
        let book = self.books.entry(key).or_insert_with(|| {
            trace!("Creating ledger {}", key);
            stats.ledgers += 1;
            OrderLedger::new(key)
        });
        stats.applied += 1;

        book.apply(event);
        Some(&*book)
    }

    /// Get a ledger by key
    pub fn book(&self, key: u64) -> Option<&OrderLedger> {
        self.books.get(&key)
    }

    /// Iterate all ledgers in ascending key order
    pub fn books(&self) -> impl Iterator<Item = &OrderLedger> + '_ {
        self.books.values()
    }

    /// Snapshots of every ledger that still has depth on either side.
    ///
    /// A ledger whose last level was taken out by an execution can still hold
    /// the executed order; it renders no levels and is left out.
    pub fn snapshots(&self) -> Vec<DepthSnapshot> {
        self.books
            .values()
            .filter(|book| !book.depth().is_empty())
            .map(OrderLedger::snapshot)
            .collect()
    }

    pub fn stats(&self) -> RouterStats {
        self.stats
    }
}

impl Default for BookRouter {
    fn default() -> Self {
        Self::new(LedgerKey::default(), true)
    }
}
