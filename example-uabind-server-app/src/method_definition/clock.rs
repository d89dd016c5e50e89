use chrono::{DateTime, TimeDelta, Utc};

/// Moves `timestamp` by `seconds`. Saturates instead of overflowing; a
/// result before 1601 is rejected when the return value is encoded.
pub fn shift_timestamp(timestamp: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| timestamp.checked_add_signed(delta))
        .unwrap_or(if seconds < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
