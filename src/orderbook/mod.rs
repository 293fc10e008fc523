//! OrderLedger implementation for maintaining aggregated depth from order-level events.

pub mod book;
pub mod depth;
pub mod event;
pub mod level;
mod operations;
mod snapshot;

pub mod matching;

pub use book::{Order, OrderLedger};
pub use depth::DepthBook;
pub use event::{Action, MboEvent, RecordMeta, side_from_code};
pub use level::PriceLevel;
pub use matching::{MatchState, PendingTrade, TradeMatcher};
pub use snapshot::{
    DepthSnapshot, LevelSnapshot, MBP_DEPTH, SNAPSHOT_ACTION, SNAPSHOT_SIDE, format_price,
};
