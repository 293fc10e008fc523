//! Order ledger operations: adding, cancelling, modifying and executing orders,
//! and the dispatch of decoded events onto them

use super::book::{Order, OrderLedger};
use super::event::{Action, MboEvent};
use super::matching::PendingTrade;
use tracing::trace;

impl OrderLedger {
    /// Add a resting order.
    ///
    /// An order reusing a live id replaces it: the old order's size is taken out
    /// of its level first. Zero-size orders never rest.
    pub fn add_order(&mut self, order: Order) {
        trace!(
            "Ledger {}: Adding order {} {:?} {} @ {}",
            self.instrument_id, order.id, order.side, order.size, order.price
        );
        if self.orders.contains_key(&order.id) {
            self.cancel_order(order.id, 0);
        }
        if order.size == 0 {
            trace!("Ledger {}: Ignoring zero-size order {}", self.instrument_id, order.id);
            return;
        }

        self.depth.credit(order.side, order.price, u64::from(order.size));
        self.orders.insert(order.id, order);
    }

    /// Cancel `size` of an order; a size of 0 cancels everything that remains.
    /// Unknown ids are ignored.
    pub fn cancel_order(&mut self, order_id: u64, size: u32) {
        let Some(order) = self.orders.get_mut(&order_id) else {
            trace!("Ledger {}: Cancel for unknown order {}", self.instrument_id, order_id);
            return;
        };

        let cancelled = if size == 0 { order.size } else { size.min(order.size) };
        let retire = cancelled == order.size;
        trace!(
            "Ledger {}: Cancelling {} of order {} ({} remaining)",
            self.instrument_id, cancelled, order_id, order.size
        );

        self.depth
            .debit(order.side, order.price, u64::from(cancelled), retire);

        order.size -= cancelled;
        if order.size == 0 {
            self.orders.remove(&order_id);
        }
    }

    /// Replace an order's price and size, keeping its id, side and timestamp.
    ///
    /// The order loses its old level contribution and gains one at the new price.
    /// Unknown ids are ignored; a new size of 0 leaves the order cancelled.
    pub fn modify_order(&mut self, order_id: u64, new_size: u32, new_price: i64) {
        let Some(existing) = self.orders.get(&order_id).copied() else {
            trace!("Ledger {}: Modify for unknown order {}", self.instrument_id, order_id);
            return;
        };
        trace!(
            "Ledger {}: Modifying order {} from {} @ {} to {} @ {}",
            self.instrument_id, order_id, existing.size, existing.price, new_size, new_price
        );

        self.cancel_order(order_id, 0);
        self.add_order(Order::new(
            order_id,
            existing.side,
            new_price,
            new_size,
            existing.ts_event,
        ));
    }

    /// Execute a confirmed trade against the side opposite to the one it reports.
    /// Returns the executed quantity.
    pub fn apply_trade(&mut self, trade: &PendingTrade) -> u64 {
        let side = trade.side.opposite();
        let executed = self
            .depth
            .execute(side, trade.price, u64::from(trade.size));
        trace!(
            "Ledger {}: Trade for order {} executed {} of {} at {}",
            self.instrument_id, trade.order_id, executed, trade.size, trade.price
        );
        executed
    }

    /// Drop every order, level and pending trade
    pub fn clear(&mut self) {
        trace!("Ledger {}: Clearing", self.instrument_id);
        self.orders.clear();
        self.depth.clear();
        self.matcher.reset();
    }

    /// Apply one decoded event.
    ///
    /// The event's metadata is cached for the next snapshot whatever the action;
    /// events without an applicable side are ignored by Add, Modify and Trade.
    pub fn apply(&mut self, event: &MboEvent) {
        self.meta.clone_from(&event.meta);

        match event.action {
            Action::Refresh => self.clear(),
            Action::Add => {
                if let Some(side) = event.side {
                    self.add_order(Order::new(
                        event.order_id,
                        side,
                        event.price,
                        event.size,
                        event.ts_event_nanos,
                    ));
                }
            }
            Action::Cancel => match self.matcher.on_cancel(event.order_id) {
                Some(trade) => {
                    self.apply_trade(&trade);
                }
                None => self.cancel_order(event.order_id, event.size),
            },
            Action::Modify => {
                if event.side.is_some() {
                    self.modify_order(event.order_id, event.size, event.price);
                }
            }
            Action::Trade => {
                if let Some(side) = event.side {
                    self.matcher.on_trade(PendingTrade {
                        order_id: event.order_id,
                        side,
                        price: event.price,
                        size: event.size,
                    });
                }
            }
            Action::Fill => {
                self.matcher.on_fill(event.order_id);
            }
            Action::Unsupported(code) => {
                trace!("Ledger {}: Ignoring action '{}'", self.instrument_id, code);
            }
        }
    }
}
