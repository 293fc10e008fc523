//! Decimal price text to fixed-point ticks

use super::error::FeedError;

/// Ticks per currency unit
pub const TICKS_PER_UNIT: f64 = 100.0;

/// Convert a decimal price to integer ticks, rounding half away from zero.
///
/// An empty field carries no price and converts to 0 ticks.
pub fn price_to_ticks(text: &str) -> Result<i64, FeedError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| FeedError::invalid("price", text))?;
    let ticks = (value * TICKS_PER_UNIT).round();
    if !ticks.is_finite() || ticks.abs() >= i64::MAX as f64 {
        return Err(FeedError::invalid("price", text));
    }
    Ok(ticks as i64)
}
