//! # Market-By-Price Depth Reconstruction
//!
//! Rebuilds aggregated book depth from a market-by-order (MBO) event stream and renders
//! top-of-book snapshots with ten levels per side (MBP-10). Consumers get depth-of-book
//! analytics without handling order-level events themselves.
//!
//! ## Key Features
//!
//! - **Per-Instrument Ledger**: `OrderLedger` owns every open order of an instrument together
//!   with its bid and ask `PriceLevel` aggregates. Orders and levels are only ever changed
//!   together, so each level's size and count always match the orders resting at its price.
//!
//! - **Execution Correlation**: a `Trade`, its confirming `Fill` and the closing `Cancel` for the
//!   same order id are applied as one execution against the opposite side of the book. A bare
//!   `Cancel` is always an ordinary cancellation.
//!
//! - **Fixed-Point Prices**: prices are integer ticks of 1/100 currency unit, so level keys compare
//!   exactly. Decimal text is converted once at ingestion, rounding half away from zero.
//!
//! - **Depth Snapshots**: `DepthSnapshot` holds the ten best levels per side, zero-filled when a
//!   side is shallower, stamped with the metadata of the last applied event.
//!
//! - **Feed Replay**: the `feed` module decodes MBO CSV, routes events to one ledger per instrument
//!   and writes MBP-10 CSV or JSON lines, either once at end of input or after every event.
//!
//! ## Event Semantics
//!
//! | Action | Effect |
//! |--------|--------|
//! | `R` Refresh | clears orders, levels and the pending trade |
//! | `A` Add | rests a new order (ignored without a side) |
//! | `C` Cancel | closes a confirmed trade, or cancels size (0 = all remaining) |
//! | `M` Modify | cancels the order and re-adds it at the new price and size |
//! | `T` Trade | becomes the pending trade (ignored without a side) |
//! | `F` Fill | confirms the pending trade with the same order id |
//!
//! Unknown order ids and unsupported actions are ignored: late and duplicate control messages
//! are routine in real feeds.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. A ledger is mutated through `&mut self` and
//! performs no locking; to parallelise, shard by instrument and give each ledger to exactly one
//! thread. Events of one instrument must be applied in their original sequence order.
//!
//! ## Example
//!
//! ```
//! use mbp_rs::{Action, MboEvent, OrderLedger};
//! use pricelevel::Side;
//!
//! let mut ledger = OrderLedger::new(1);
//! ledger.apply(&MboEvent::new(Action::Add, Some(Side::Buy), 1, 10000, 100));
//! ledger.apply(&MboEvent::new(Action::Add, Some(Side::Sell), 2, 10100, 50));
//!
//! let snapshot = ledger.snapshot();
//! assert_eq!(snapshot.best_bid(), Some((10000, 100)));
//! assert_eq!(snapshot.best_ask(), Some((10100, 50)));
//! ```

pub mod feed;
pub mod orderbook;

mod utils;

pub use feed::{BookRouter, FeedError, ReplayConfig, ReplaySummary, replay, replay_file};
pub use orderbook::{
    Action, DepthBook, DepthSnapshot, LevelSnapshot, MboEvent, Order, OrderLedger, PriceLevel,
    RecordMeta, TradeMatcher,
};
pub use utils::{init_tracing, parse_timestamp_nanos};
