//! Time keeping module for PineTime

use chrono::{DateTime, Duration, NaiveDateTime};
use embassy_time::Instant;

/// Wall clock derived from a known reference and the monotonic uptime
#[derive(Clone, Copy)]
pub struct TimeManager {
    /// Clock time in UTC
    reference: NaiveDateTime,
    /// Related system time
    instant: Instant,
    /// Offset of local time in seconds
    utc_offset: i32,
}

impl TimeManager {
    /// Start the clock at a UTC epoch timestamp, taken as the current instant
    pub fn from_timestamp(epoch: i64, utc_offset: i32) -> Self {
        let reference = DateTime::from_timestamp(epoch, 0)
            .map(|time| time.naive_utc())
            .unwrap_or(NaiveDateTime::UNIX_EPOCH);
        Self {
            reference,
            instant: Instant::now(),
            utc_offset,
        }
    }

    /// Get current local time
    pub fn local_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.instant).as_secs() as i64;
        self.reference
            .checked_add_signed(Duration::seconds(elapsed + self.utc_offset as i64))
            .unwrap_or(self.reference)
    }
}
