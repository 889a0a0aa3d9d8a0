//! The `TripWriter` trait implemented by all file backends.

use mt_trace::Trip;

use crate::OutputResult;

pub trait TripWriter {
    /// Append a batch of trips.  May be called any number of times.
    fn write_trips(&mut self, trips: &[Trip]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
