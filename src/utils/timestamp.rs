use chrono::DateTime;

/// Parse an event timestamp into nanoseconds since UNIX epoch.
///
/// Accepts either a plain integer count of nanoseconds or RFC 3339 text such as
/// `2024-01-02T14:30:00.123456789Z`. Returns `None` for anything else, including
/// instants before the epoch.
pub fn parse_timestamp_nanos(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Ok(nanos) = text.parse::<u64>() {
        return Some(nanos);
    }

    let parsed = DateTime::parse_from_rfc3339(text).ok()?;
    let nanos = parsed.timestamp_nanos_opt()?;
    u64::try_from(nanos).ok()
}
