//! Bid and ask level collections of a single instrument

use super::level::PriceLevel;
use pricelevel::Side;
use std::collections::BTreeMap;
use tracing::trace;

/// The two sides of aggregated depth.
///
/// Both sides are keyed by integer tick price, so each price appears at most once
/// per side. Bids are read highest price first, asks lowest price first.
/// Mutation is restricted to the `orderbook` module: only the ledger may change
/// depth, and it always does so together with its order index.
#[derive(Debug, Clone, Default)]
pub struct DepthBook {
    /// Bid side levels (buy orders)
    pub(super) bids: BTreeMap<i64, PriceLevel>,

    /// Ask side levels (sell orders)
    pub(super) asks: BTreeMap<i64, PriceLevel>,
}

impl DepthBook {
    /// Create an empty depth book
    pub fn new() -> Self {
        Self::default()
    }

    fn side_levels(&self, side: Side) -> &BTreeMap<i64, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_levels_mut(&mut self, side: Side) -> &mut BTreeMap<i64, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Get the level at an exact price, if one exists
    pub fn level(&self, side: Side, price: i64) -> Option<&PriceLevel> {
        self.side_levels(side).get(&price)
    }

    /// Iterate all levels of one side in priority order
    /// (descending price for bids, ascending for asks)
    pub fn levels(&self, side: Side) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match side {
            Side::Buy => Box::new(self.bids.values().rev()),
            Side::Sell => Box::new(self.asks.values()),
        }
    }

    /// Iterate the best `depth` levels of one side
    pub fn best_levels(&self, side: Side, depth: usize) -> impl Iterator<Item = &PriceLevel> + '_ {
        self.levels(side).take(depth)
    }

    /// Best price on one side, if the side has any level
    pub fn best_price(&self, side: Side) -> Option<i64> {
        self.levels(side).next().map(|level| level.price)
    }

    /// Number of levels on one side
    pub fn level_count(&self, side: Side) -> usize {
        self.side_levels(side).len()
    }

    /// Total resting size on one side
    pub fn total_size(&self, side: Side) -> u64 {
        self.side_levels(side).values().map(|level| level.size).sum()
    }

    /// True when neither side has a level
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Add a new order's size to its level, creating the level if absent
    pub(super) fn credit(&mut self, side: Side, price: i64, size: u64) {
        let level = self
            .side_levels_mut(side)
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price));
        level.size += size;
        level.count += 1;
        trace!(
            "Credited {} at {} on {:?}: level now {}/{}",
            size, price, side, level.size, level.count
        );
    }

    /// Remove size belonging to one order from its level.
    ///
    /// `retire` is set when the order's whole remaining size goes away, in which
    /// case the order count drops by one. An exhausted level is removed.
    pub(super) fn debit(&mut self, side: Side, price: i64, size: u64, retire: bool) {
        let levels = self.side_levels_mut(side);
        let Some(level) = levels.get_mut(&price) else {
            trace!("No level at {} on {:?} to debit", price, side);
            return;
        };

        level.size = level.size.saturating_sub(size);
        if retire {
            level.count = level.count.saturating_sub(1);
        }
        trace!(
            "Debited {} at {} on {:?}: level now {}/{}",
            size, price, side, level.size, level.count
        );

        if level.is_exhausted() {
            levels.remove(&price);
        }
    }

    /// Apply an execution against a level: size drops by at most the level's
    /// size, the order count is left alone. Returns the executed quantity.
    pub(super) fn execute(&mut self, side: Side, price: i64, size: u64) -> u64 {
        let levels = self.side_levels_mut(side);
        let Some(level) = levels.get_mut(&price) else {
            trace!("No level at {} on {:?} to execute against", price, side);
            return 0;
        };

        let executed = size.min(level.size);
        level.size -= executed;
        trace!(
            "Executed {} at {} on {:?}: level now {}/{}",
            executed, price, side, level.size, level.count
        );

        if level.is_exhausted() {
            levels.remove(&price);
        }
        executed
    }

    pub(super) fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }
}
