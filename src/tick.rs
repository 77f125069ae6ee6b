//! Clock tick granularity

use chrono::{Datelike, Timelike};

/// Calendar unit that changed between two clock readings, ordered by size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Whether a change of `self` should wake a subscriber of `subscribed`.
    ///
    /// A new hour is also a new minute, so larger units cover smaller ones.
    pub fn covers(self, subscribed: TimeUnit) -> bool {
        self >= subscribed
    }
}

/// Return the largest unit that differs between `previous` and `now`.
pub fn changed_units<T>(previous: &T, now: &T) -> Option<TimeUnit>
where
    T: Datelike + Timelike,
{
    if previous.year() != now.year() {
        Some(TimeUnit::Year)
    } else if previous.month() != now.month() {
        Some(TimeUnit::Month)
    } else if previous.day() != now.day() {
        Some(TimeUnit::Day)
    } else if previous.hour() != now.hour() {
        Some(TimeUnit::Hour)
    } else if previous.minute() != now.minute() {
        Some(TimeUnit::Minute)
    } else if previous.second() != now.second() {
        Some(TimeUnit::Second)
    } else {
        None
    }
}
