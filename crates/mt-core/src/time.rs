//! Anchoring times of day to absolute Unix timestamps.
//!
//! Partition schemes describe demand windows as wall-clock times ("06:00 for
//! two hours").  A `DayAnchor` fixes the calendar date those times refer to,
//! so the same scheme yields reproducible timestamps when the date is pinned
//! and "today" otherwise.  All arithmetic is in UTC.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, TimeDelta, Utc};

/// The calendar day (UTC) that time-of-day values are resolved against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayAnchor {
    pub date: NaiveDate,
}

impl DayAnchor {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Anchor to the current UTC date.
    pub fn today() -> Self {
        Self { date: Utc::now().date_naive() }
    }

    /// Unix seconds of `time` on the anchored day.
    #[inline]
    pub fn unix_secs_at(&self, time: NaiveTime) -> i64 {
        self.date.and_time(time).and_utc().timestamp()
    }

    /// Unix seconds of `time` on the anchored day, shifted by `offset`.
    /// Sub-second precision is kept, so callers decide where to truncate.
    pub fn unix_secs_f64_at(&self, time: NaiveTime, offset_secs: f64) -> f64 {
        self.unix_secs_at(time) as f64 + offset_secs
    }
}

impl fmt::Display for DayAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}

/// Length of a [`TimeDelta`] in fractional seconds.
#[inline]
pub fn delta_secs_f64(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 1_000.0
}
