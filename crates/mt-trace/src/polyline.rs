//! Arc-length parameterised polyline over geographic coordinates.
//!
//! Arc length is measured along great-circle segments in kilometres, the
//! same unit as `Route::length_km` and the sampling interval.  Points between
//! vertices are placed by linear interpolation in (lon, lat) within the
//! segment, which is indistinguishable from the geodesic at street scale.

use mt_core::GeoPoint;

use crate::{TraceError, TraceResult};

/// Upper bound on the number of samples produced for one route.
const MAX_SAMPLES: usize = 1_000_000;

/// A validated polyline with cumulative segment lengths.
#[derive(Debug, Clone)]
pub struct Polyline {
    points: Vec<GeoPoint>,
    /// `cum_km[i]` = arc length from the first vertex to vertex `i`.
    cum_km: Vec<f64>,
}

impl Polyline {
    /// Build a polyline through `points`.
    ///
    /// Fails on fewer than two points or on any coordinate that is not a
    /// finite, in-range `(lon, lat)` pair.
    pub fn new(points: &[GeoPoint]) -> TraceResult<Self> {
        if points.len() < 2 {
            return Err(TraceError::DegenerateRoute(points.len()));
        }
        for &p in points {
            GeoPoint::try_new(p.lon, p.lat)?;
        }

        let mut cum_km = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        cum_km.push(acc);
        for w in points.windows(2) {
            acc += w[0].distance_km(w[1]);
            cum_km.push(acc);
        }

        Ok(Self { points: points.to_vec(), cum_km })
    }

    /// Total great-circle length in kilometres.
    #[inline]
    pub fn length_km(&self) -> f64 {
        self.cum_km[self.cum_km.len() - 1]
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.points
    }

    /// The point `offset_km` along the line, clamped to its ends.
    pub fn interpolate(&self, offset_km: f64) -> GeoPoint {
        let last = self.points.len() - 1;
        if offset_km <= 0.0 {
            return self.points[0];
        }
        if offset_km >= self.length_km() {
            return self.points[last];
        }

        // First vertex strictly beyond the offset closes the segment.
        let end = self.cum_km.partition_point(|&d| d <= offset_km).clamp(1, last);
        let start = end - 1;
        let seg = self.cum_km[end] - self.cum_km[start];
        let t = if seg > 0.0 { (offset_km - self.cum_km[start]) / seg } else { 0.0 };
        self.points[start].lerp(self.points[end], t.clamp(0.0, 1.0))
    }

    /// Number of samples [`resample`](Self::resample) produces for `delta_km`:
    /// `floor(length / delta) + 1`.
    pub fn sample_count(&self, delta_km: f64) -> TraceResult<usize> {
        let valid = delta_km.is_finite() && delta_km > 0.0;
        if !valid {
            return Err(TraceError::Config(format!(
                "sampling interval must be a positive distance, got {delta_km}"
            )));
        }
        let steps = (self.length_km() / delta_km).floor();
        if steps >= MAX_SAMPLES as f64 {
            return Err(TraceError::Geometry(format!(
                "{:.3} km at {delta_km} km spacing exceeds {MAX_SAMPLES} samples",
                self.length_km()
            )));
        }
        Ok(steps as usize + 1)
    }

    /// Points at arc-length offsets `0, δ, 2δ, …` up to the line's length.
    pub fn resample(&self, delta_km: f64) -> TraceResult<Vec<GeoPoint>> {
        let n = self.sample_count(delta_km)?;
        Ok((0..n).map(|k| self.interpolate(k as f64 * delta_km)).collect())
    }
}
