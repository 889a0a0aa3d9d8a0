//! Time-of-day demand partitions.
//!
//! A [`PartitionScheme`] splits a day into ordered demand windows.  Each
//! window takes a fixed share of the trips and spreads their start times
//! evenly across its duration, approximating a diurnal demand curve with a
//! step function.

use chrono::{NaiveTime, TimeDelta};

use mt_core::time::delta_secs_f64;

use crate::{TraceError, TraceResult};

/// Absorbs `0.29 * 100 = 28.999…` style rounding before flooring quotas.
const QUOTA_EPSILON: f64 = 1e-9;

/// One demand window: `fraction` of all trips start between `start` and
/// `start + duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    pub fraction: f64,
    pub start:    NaiveTime,
    pub duration: TimeDelta,
}

impl Partition {
    /// Validate and construct.  `fraction` must lie in `(0, 1]` and
    /// `duration` must be positive.
    pub fn new(fraction: f64, start: NaiveTime, duration: TimeDelta) -> TraceResult<Self> {
        let fraction_ok = fraction.is_finite() && fraction > 0.0 && fraction <= 1.0;
        if !fraction_ok {
            return Err(TraceError::Config(format!(
                "partition fraction must be in (0, 1], got {fraction}"
            )));
        }
        if duration <= TimeDelta::zero() {
            return Err(TraceError::Config(format!(
                "partition starting {start} has non-positive duration {duration}"
            )));
        }
        Ok(Self { fraction, start, duration })
    }

    /// Rows this partition absorbs out of `total_rows`:
    /// `floor(fraction * total_rows)`.
    pub fn quota(&self, total_rows: usize) -> usize {
        (self.fraction * total_rows as f64 + QUOTA_EPSILON).floor() as usize
    }

    /// Seconds between consecutive start times when `quota` rows share the
    /// window.
    pub fn delay_per_row_secs(&self, quota: usize) -> f64 {
        delta_secs_f64(self.duration) / quota.max(1) as f64
    }
}

/// Ordered, non-empty list of [`Partition`]s.
///
/// Fractions need not sum to 1; rows beyond the summed quotas are left
/// unscheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionScheme {
    partitions: Vec<Partition>,
}

impl PartitionScheme {
    pub fn new(partitions: Vec<Partition>) -> TraceResult<Self> {
        if partitions.is_empty() {
            return Err(TraceError::Config("partition scheme has no partitions".into()));
        }
        Ok(Self { partitions })
    }

    /// Weekday micromobility demand between 06:00 and 18:00:
    ///
    /// | Window        | Share |
    /// |---------------|-------|
    /// | 06:00 – 08:00 | 10 %  |
    /// | 08:00 – 10:00 | 20 %  |
    /// | 10:00 – 14:00 | 30 %  |
    /// | 14:00 – 16:00 | 20 %  |
    /// | 16:00 – 18:00 | 20 %  |
    pub fn diurnal() -> Self {
        let window = |fraction, hour, hours| Partition {
            fraction,
            start:    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
            duration: TimeDelta::hours(hours),
        };
        Self {
            partitions: vec![
                window(0.1, 6, 2),
                window(0.2, 8, 2),
                window(0.3, 10, 4),
                window(0.2, 14, 2),
                window(0.2, 16, 2),
            ],
        }
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Per-partition quotas for a batch of `total_rows`.
    pub fn quotas(&self, total_rows: usize) -> Vec<usize> {
        self.partitions.iter().map(|p| p.quota(total_rows)).collect()
    }
}

impl Default for PartitionScheme {
    fn default() -> Self {
        Self::diurnal()
    }
}
