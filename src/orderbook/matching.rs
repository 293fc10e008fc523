//! Trade / fill / cancel correlation.
//!
//! A venue reports an execution against a resting order as three events sharing
//! the order id: a `Trade`, a `Fill` confirming it, then a `Cancel` removing the
//! executed quantity. Only that confirmed triple is an execution; a `Cancel`
//! that does not close a confirmed trade is an ordinary cancellation.

use pricelevel::Side;
use tracing::debug;

/// Trade awaiting fill confirmation and its closing cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTrade {
    pub order_id: u64,
    /// Side reported on the trade; the execution debits the opposite side
    pub side: Side,
    /// Price in integer ticks
    pub price: i64,
    pub size: u32,
}

/// State of the per-instrument trade matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// No trade in flight
    #[default]
    Idle,
    /// Trade seen, waiting for its fill
    TradeSeen(PendingTrade),
    /// Fill confirmed, waiting for the closing cancel
    FillConfirmed(PendingTrade),
}

/// Tracks at most one in-flight execution per instrument.
///
/// A newer trade always replaces the one in flight, confirmed or not.
#[derive(Debug, Clone, Default)]
pub struct TradeMatcher {
    state: MatchState,
}

impl TradeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The trade in flight, confirmed or not
    pub fn pending(&self) -> Option<&PendingTrade> {
        match &self.state {
            MatchState::Idle => None,
            MatchState::TradeSeen(trade) | MatchState::FillConfirmed(trade) => Some(trade),
        }
    }

    /// Record a trade, discarding whatever was in flight
    pub fn on_trade(&mut self, trade: PendingTrade) {
        if let Some(previous) = self.pending() {
            debug!(
                "Trade for order {} supersedes pending trade for order {}",
                trade.order_id, previous.order_id
            );
        }
        self.state = MatchState::TradeSeen(trade);
    }

    /// Confirm the pending trade if the fill references its order.
    /// Returns true when the matcher holds a confirmed trade for `order_id`.
    pub fn on_fill(&mut self, order_id: u64) -> bool {
        match self.state {
            MatchState::TradeSeen(trade) if trade.order_id == order_id => {
                debug!("Fill confirms trade for order {}", order_id);
                self.state = MatchState::FillConfirmed(trade);
                true
            }
            MatchState::FillConfirmed(trade) => trade.order_id == order_id,
            _ => false,
        }
    }

    /// Consume the confirmed trade if the cancel closes it.
    ///
    /// Returns the trade to execute, or `None` when the cancel is an ordinary
    /// cancellation, in which case the state is left unchanged.
    pub fn on_cancel(&mut self, order_id: u64) -> Option<PendingTrade> {
        match self.state {
            MatchState::FillConfirmed(trade) if trade.order_id == order_id => {
                debug!("Cancel closes confirmed trade for order {}", order_id);
                self.state = MatchState::Idle;
                Some(trade)
            }
            _ => None,
        }
    }

    /// Drop any trade in flight
    pub fn reset(&mut self) {
        self.state = MatchState::Idle;
    }
}
