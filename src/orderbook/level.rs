//! Aggregated price level

use serde::{Deserialize, Serialize};

/// Aggregate of all resting orders at one exact price on one side of the book.
///
/// `size` always equals the sum of the remaining sizes of the orders resting at
/// `price`, and `count` the number of those orders. Executions debit `size`
/// without touching `count`, since the count tracks order identifiers, not fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price in integer ticks (1 tick = 1/100 currency unit)
    pub price: i64,

    /// Aggregate resting size
    pub size: u64,

    /// Number of distinct resting orders
    pub count: u32,
}

impl PriceLevel {
    /// Create an empty level at the given price
    pub fn new(price: i64) -> Self {
        Self {
            price,
            size: 0,
            count: 0,
        }
    }

    /// A level with no size left must not stay in the book
    pub fn is_exhausted(&self) -> bool {
        self.size == 0
    }
}
