//! Physical time
//!
//! Operations never read the clock themselves; callers pass `now` in.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One second in milliseconds.
pub const SECOND_MS: u64 = 1_000;
/// One hour in milliseconds.
pub const HOUR_MS: u64 = 60 * 60 * SECOND_MS;
/// One day in milliseconds.
pub const DAY_MS: u64 = 24 * HOUR_MS;

/// Wall-clock timestamp in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhysicalTime {
    /// Milliseconds since the Unix epoch
    pub ts_ms: u64,
}

impl PhysicalTime {
    /// Create from milliseconds since the epoch.
    pub const fn from_ms(ts_ms: u64) -> Self {
        Self { ts_ms }
    }

    /// Read the system clock.
    pub fn now() -> Self {
        let ms = Utc::now().timestamp_millis();
        Self::from_ms(u64::try_from(ms).unwrap_or(0))
    }

    /// Timestamp `delta_ms` later, saturating at `u64::MAX`.
    pub fn plus_ms(self, delta_ms: u64) -> Self {
        Self::from_ms(self.ts_ms.saturating_add(delta_ms))
    }

    /// Timestamp `delta_ms` earlier, saturating at the epoch.
    pub fn minus_ms(self, delta_ms: u64) -> Self {
        Self::from_ms(self.ts_ms.saturating_sub(delta_ms))
    }

    /// Convert to a UTC `DateTime`.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let ms = i64::try_from(self.ts_ms).ok()?;
        DateTime::<Utc>::from_timestamp_millis(ms)
    }

    /// Wall-clock time of day at the given offset from UTC.
    pub fn time_of_day(self, utc_offset_minutes: i32) -> Option<NaiveTime> {
        let shifted = i64::try_from(self.ts_ms)
            .ok()?
            .checked_add(i64::from(utc_offset_minutes) * 60_000)?;
        DateTime::<Utc>::from_timestamp_millis(shifted).map(|dt| dt.time())
    }
}

impl fmt::Display for PhysicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}ms", self.ts_ms),
        }
    }
}
