use super::{DataTypeId, VariantDecodeError, VariantEncodeError};
use crate::constants::{DATE_TIME_TICKS_PER_SECOND, DATE_TIME_UNIX_EPOCH_OFFSET_SECS};
use chrono::{DateTime, Utc};

/// A protocol `DateTime`: signed 100 ns ticks since 1601-01-01T00:00:00Z.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UaDateTime(pub i64);

impl UaDateTime {
    /// 1601-01-01T00:00:00Z.
    pub const EPOCH: UaDateTime = UaDateTime(0);

    pub fn ticks(self) -> i64 {
        self.0
    }

    /// Converts a UTC timestamp into ticks.
    ///
    /// Fails for instants before the protocol epoch or past the last
    /// representable tick.
    pub fn try_from_utc(value: &DateTime<Utc>) -> Result<Self, VariantEncodeError> {
        let out_of_range = || VariantEncodeError::OutOfRange {
            data_type: DataTypeId::DateTime,
            value: value.to_rfc3339(),
        };

        let ticks = value
            .timestamp()
            .checked_add(DATE_TIME_UNIX_EPOCH_OFFSET_SECS)
            .and_then(|secs| secs.checked_mul(DATE_TIME_TICKS_PER_SECOND))
            .and_then(|ticks| ticks.checked_add(i64::from(value.timestamp_subsec_nanos() / 100)))
            .ok_or_else(out_of_range)?;

        if ticks < 0 {
            return Err(out_of_range());
        }

        Ok(UaDateTime(ticks))
    }

    /// Converts ticks back into a UTC timestamp.
    ///
    /// Every non-negative tick count is representable; negative tick counts
    /// (which a peer may still send) resolve to instants before 1601.
    pub fn to_utc(self) -> Result<DateTime<Utc>, VariantDecodeError> {
        let secs = self.0.div_euclid(DATE_TIME_TICKS_PER_SECOND) - DATE_TIME_UNIX_EPOCH_OFFSET_SECS;
        let nanos = (self.0.rem_euclid(DATE_TIME_TICKS_PER_SECOND) * 100) as u32;

        DateTime::from_timestamp(secs, nanos).ok_or(VariantDecodeError::OutOfRange {
            expected: DataTypeId::DateTime.name(),
            reason: format!("{} ticks", self.0),
        })
    }
}
