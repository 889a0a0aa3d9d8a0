//! Route → trip transformation.
//!
//! # Timing model
//!
//! A route densified into `n` points is treated as `n` equal pieces of
//! `partition_length = length_km / n` each.  At a constant `speed_kmh` every
//! piece takes `partition_length / speed_kmh * 3600` seconds, so:
//!
//! ```text
//! t[0] = trunc(slot.start_unix)
//! t[k] = trunc(t[k-1] + partition_length / speed_kmh * 3600)
//! ```
//!
//! Truncation is applied at every step, so sub-second remainders do not carry
//! over between points.

use mt_core::{DayAnchor, GeoPoint, TripId};
use mt_sampler::Route;

use crate::schedule::{Schedule, ScheduleState};
use crate::{PartitionScheme, Polyline, TraceError, TraceResult, Trip};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts of what happened to each input row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub input_rows:          usize,
    pub trips:               usize,
    /// Rows with fewer than two coordinates.
    pub skipped_degenerate:  usize,
    /// Rows whose polyline could not be built or sampled.
    pub skipped_geometry:    usize,
    /// Rows left over after every partition quota was filled.
    pub skipped_unscheduled: usize,
}

impl TransformReport {
    pub fn skipped(&self) -> usize {
        self.skipped_degenerate + self.skipped_geometry + self.skipped_unscheduled
    }
}

/// Trips plus the per-row accounting for one batch.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub trips:  Vec<Trip>,
    pub report: TransformReport,
}

/// Densifies routes and assigns diurnal timestamps.
#[derive(Debug, Clone)]
pub struct TraceTransformer {
    speed_kmh:         f64,
    distance_delta_km: f64,
    scheme:            PartitionScheme,
    anchor:            DayAnchor,
}

impl TraceTransformer {
    /// Validate and construct.
    ///
    /// `speed_kmh` and `distance_delta_km` must be positive and finite.
    pub fn new(
        speed_kmh:         f64,
        distance_delta_km: f64,
        scheme:            PartitionScheme,
        anchor:            DayAnchor,
    ) -> TraceResult<Self> {
        if !(speed_kmh.is_finite() && speed_kmh > 0.0) {
            return Err(TraceError::Config(format!("speed must be positive, got {speed_kmh} km/h")));
        }
        if !(distance_delta_km.is_finite() && distance_delta_km > 0.0) {
            return Err(TraceError::Config(format!(
                "distance delta must be positive, got {distance_delta_km} km"
            )));
        }
        Ok(Self { speed_kmh, distance_delta_km, scheme, anchor })
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn distance_delta_km(&self) -> f64 {
        self.distance_delta_km
    }

    pub fn scheme(&self) -> &PartitionScheme {
        &self.scheme
    }

    pub fn anchor(&self) -> DayAnchor {
        self.anchor
    }

    /// Transform `routes` into trips, skipping rows that cannot form a line.
    pub fn transform(&self, routes: &[Route]) -> Vec<Trip> {
        self.transform_with_report(routes).trips
    }

    /// Like [`transform`](Self::transform) but also returns per-row counts.
    pub fn transform_with_report(&self, routes: &[Route]) -> TransformOutput {
        #[cfg(feature = "parallel")]
        let densified: Vec<TraceResult<Vec<GeoPoint>>> =
            routes.par_iter().map(|r| self.densify(r)).collect();
        #[cfg(not(feature = "parallel"))]
        let densified: Vec<TraceResult<Vec<GeoPoint>>> =
            routes.iter().map(|r| self.densify(r)).collect();

        let schedule = Schedule::new(&self.scheme, routes.len(), self.anchor);
        log::debug!(
            "scheduling {} rows into quotas {:?} on {}",
            routes.len(),
            schedule.quotas(),
            self.anchor
        );

        let init = Accumulator {
            trips:  Vec::with_capacity(routes.len()),
            report: TransformReport { input_rows: routes.len(), ..Default::default() },
            state:  ScheduleState::default(),
        };
        let acc = routes
            .iter()
            .zip(densified)
            .enumerate()
            .fold(init, |acc, (row, (route, points))| {
                acc.step(self, &schedule, row, route, points)
            });

        log::info!(
            "transformed {} of {} routes ({} skipped)",
            acc.report.trips,
            acc.report.input_rows,
            acc.report.skipped()
        );
        TransformOutput { trips: acc.trips, report: acc.report }
    }

    /// Evenly spaced points along one route.
    pub fn densify(&self, route: &Route) -> TraceResult<Vec<GeoPoint>> {
        if route.len() < 2 {
            return Err(TraceError::DegenerateRoute(route.len()));
        }
        let length_km = route.length_km();
        if !(length_km.is_finite() && length_km >= 0.0) {
            return Err(TraceError::Geometry(format!("route length {length_km} km is not a distance")));
        }
        Polyline::new(route.coordinates())?.resample(self.distance_delta_km)
    }

    /// Seconds between consecutive points of a route of `length_km` sampled
    /// into `points` points.
    pub fn step_secs(&self, length_km: f64, points: usize) -> f64 {
        let partition_length = length_km / points as f64;
        partition_length / self.speed_kmh * 3_600.0
    }
}

/// Timestamps for `n` points: `trunc(start)`, then repeated
/// `trunc(prev + step)`.
pub fn timestamps(start_unix: f64, n: usize, step_secs: f64) -> Vec<i64> {
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }
    let mut prev = start_unix.trunc() as i64;
    out.push(prev);
    for _ in 1..n {
        prev = (prev as f64 + step_secs).trunc() as i64;
        out.push(prev);
    }
    out
}

// ── Fold accumulator ──────────────────────────────────────────────────────────

struct Accumulator {
    trips:  Vec<Trip>,
    report: TransformReport,
    state:  ScheduleState,
}

impl Accumulator {
    fn step(
        mut self,
        transformer: &TraceTransformer,
        schedule:    &Schedule<'_>,
        row:         usize,
        route:       &Route,
        points:      TraceResult<Vec<GeoPoint>>,
    ) -> Self {
        let points = match points {
            Ok(p) => p,
            Err(e) => {
                log::warn!("skipping row {row}: {e}");
                match e {
                    TraceError::DegenerateRoute(_) => self.report.skipped_degenerate += 1,
                    _ => self.report.skipped_geometry += 1,
                }
                return self;
            }
        };

        let Some((slot, next_state)) = schedule.next(self.state) else {
            log::warn!("skipping row {row}: {}", TraceError::Unscheduled);
            self.report.skipped_unscheduled += 1;
            return self;
        };

        let step = transformer.step_secs(route.length_km(), points.len());
        let ts = timestamps(slot.start_unix, points.len(), step);

        let id = TripId(self.trips.len() as u32);
        self.trips.push(Trip::new(id, row, slot.partition, points, route.length_km(), ts));
        self.report.trips += 1;
        self.state = next_state;
        self
    }
}
