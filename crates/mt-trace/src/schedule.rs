//! Partition scheduling as an explicit fold state.
//!
//! The schedule for a batch is fixed once the batch size is known: partition
//! `i` takes `quota_i` rows, and row `r` of that partition starts at
//! `start_i + r * duration_i / quota_i`.  [`ScheduleState`] is the only thing
//! that changes between rows, and [`Schedule::next`] maps one state to the
//! slot for the current row plus the state for the following row.

use mt_core::DayAnchor;

use crate::PartitionScheme;

/// Position within the partition sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleState {
    /// Index of the partition currently being filled.
    pub partition: usize,
    /// Rows already placed in that partition.
    pub rows_in_partition: usize,
}

/// Where a row landed in the schedule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot {
    pub partition: usize,
    /// Row index within the partition.
    pub row: usize,
    /// Start time in fractional Unix seconds.
    pub start_unix: f64,
}

/// Fixed per-batch schedule derived from a scheme, a batch size and a day.
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    scheme: &'a PartitionScheme,
    quotas: Vec<usize>,
    anchor: DayAnchor,
}

impl<'a> Schedule<'a> {
    pub fn new(scheme: &'a PartitionScheme, total_rows: usize, anchor: DayAnchor) -> Self {
        Self { scheme, quotas: scheme.quotas(total_rows), anchor }
    }

    pub fn quotas(&self) -> &[usize] {
        &self.quotas
    }

    /// Total number of rows the schedule can place.
    pub fn capacity(&self) -> usize {
        self.quotas.iter().sum()
    }

    /// Slot for the row at `state`, and the state for the row after it.
    ///
    /// Partitions with a zero quota are passed over.  Returns `None` once
    /// every quota is filled.
    pub fn next(&self, state: ScheduleState) -> Option<(Slot, ScheduleState)> {
        let mut partition = state.partition;
        let mut row = state.rows_in_partition;
        while partition < self.quotas.len() && row >= self.quotas[partition] {
            partition += 1;
            row = 0;
        }
        let quota = *self.quotas.get(partition)?;
        let p = &self.scheme.partitions()[partition];

        let offset = row as f64 * p.delay_per_row_secs(quota);
        let slot = Slot {
            partition,
            row,
            start_unix: self.anchor.unix_secs_f64_at(p.start, offset),
        };

        let following = if row + 1 >= quota {
            ScheduleState { partition: partition + 1, rows_in_partition: 0 }
        } else {
            ScheduleState { partition, rows_in_partition: row + 1 }
        };
        Some((slot, following))
    }
}
