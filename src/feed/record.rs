//! Market-by-order CSV record decoding

use super::error::FeedError;
use super::price::price_to_ticks;
use crate::orderbook::{Action, MboEvent, RecordMeta, side_from_code};
use crate::utils::parse_timestamp_nanos;
use csv::StringRecord;
use std::str::FromStr;

/// Minimum number of columns in a market-by-order record
pub const MBO_FIELD_COUNT: usize = 15;

// Column positions
const TS_RECV: usize = 0;
const TS_EVENT: usize = 1;
const RTYPE: usize = 2;
const PUBLISHER_ID: usize = 3;
const INSTRUMENT_ID: usize = 4;
const ACTION: usize = 5;
const SIDE: usize = 6;
const PRICE: usize = 7;
const SIZE: usize = 8;
const ORDER_ID: usize = 10;
const FLAGS: usize = 11;
const TS_IN_DELTA: usize = 12;
const SEQUENCE: usize = 13;
const SYMBOL: usize = 14;

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or_default()
}

fn parse_field<T: FromStr>(record: &StringRecord, index: usize, name: &'static str) -> Result<T, FeedError> {
    let text = field(record, index).trim();
    text.parse().map_err(|_| FeedError::invalid(name, text))
}

/// First character of a code field, `N` when the field is empty
fn code(record: &StringRecord, index: usize) -> char {
    field(record, index).trim().chars().next().unwrap_or('N')
}

impl MboEvent {
    /// Decode one market-by-order record.
    ///
    /// Columns beyond the fifteenth are ignored; `channel_id` is not used.
    pub fn from_record(record: &StringRecord) -> Result<Self, FeedError> {
        if record.len() < MBO_FIELD_COUNT {
            return Err(FeedError::FieldCount {
                expected: MBO_FIELD_COUNT,
                found: record.len(),
            });
        }

        let ts_event = field(record, TS_EVENT);
        let ts_event_nanos =
            parse_timestamp_nanos(ts_event).ok_or_else(|| FeedError::invalid("ts_event", ts_event))?;

        let meta = RecordMeta {
            ts_recv: field(record, TS_RECV).to_string(),
            ts_event: ts_event.to_string(),
            rtype: parse_field(record, RTYPE, "rtype")?,
            publisher_id: parse_field(record, PUBLISHER_ID, "publisher_id")?,
            flags: parse_field(record, FLAGS, "flags")?,
            ts_in_delta: parse_field(record, TS_IN_DELTA, "ts_in_delta")?,
            sequence: parse_field(record, SEQUENCE, "sequence")?,
            symbol: field(record, SYMBOL).to_string(),
        };

        Ok(MboEvent {
            meta,
            instrument_id: parse_field(record, INSTRUMENT_ID, "instrument_id")?,
            action: Action::from(code(record, ACTION)),
            side: side_from_code(code(record, SIDE)),
            price: price_to_ticks(field(record, PRICE))?,
            size: parse_field(record, SIZE, "size")?,
            order_id: parse_field(record, ORDER_ID, "order_id")?,
            ts_event_nanos,
        })
    }
}
