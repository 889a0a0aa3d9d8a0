//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` stores `(lon, lat)` in double precision.  Routes are densified
//! at sub-kilometre spacing and the resulting timestamps depend on summed
//! segment lengths, so the `f32` rounding error (≈1 m per coordinate) would
//! accumulate visibly over long routes.

use crate::{MtError, MtResult};

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate, longitude first.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Construct without validation.  Use [`try_new`](Self::try_new) for data
    /// that crosses a crate boundary (CSV rows, caller-supplied routes).
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Construct a point, rejecting non-finite values and coordinates outside
    /// `[-180, 180] × [-90, 90]`.
    pub fn try_new(lon: f64, lat: f64) -> MtResult<Self> {
        let p = Self { lon, lat };
        if p.is_valid() {
            Ok(p)
        } else {
            Err(MtError::InvalidCoordinate { lon, lat })
        }
    }

    /// Build from an `[lon, lat]` pair, validating it.
    pub fn from_pair(pair: [f64; 2]) -> MtResult<Self> {
        Self::try_new(pair[0], pair[1])
    }

    /// `true` if both components are finite and within WGS-84 range.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// The `[lon, lat]` pair used in exported tables.
    #[inline]
    pub fn to_pair(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Great-circle distance in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        self.distance_m(other) / 1_000.0
    }

    /// Linear interpolation in (lon, lat) space; `t = 0` is `self`, `t = 1`
    /// is `other`.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// A lon/lat rectangle given by its four edges, in the `(north, south, east,
/// west)` order map-data providers use for bbox downloads.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east:  f64,
    pub west:  f64,
}

impl BoundingBox {
    /// Validate and construct.  Boxes crossing the antimeridian
    /// (`west > east`) are rejected.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> MtResult<Self> {
        let corners_ok = GeoPoint::new(west, south).is_valid()
            && GeoPoint::new(east, north).is_valid();
        if !corners_ok {
            return Err(MtError::InvalidBoundingBox(format!(
                "edges out of range: n={north} s={south} e={east} w={west}"
            )));
        }
        if south > north {
            return Err(MtError::InvalidBoundingBox(format!(
                "south ({south}) is above north ({north})"
            )));
        }
        if west > east {
            return Err(MtError::InvalidBoundingBox(format!(
                "west ({west}) is east of east ({east})"
            )));
        }
        Ok(Self { north, south, east, west })
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lon)
    }

    /// South-west corner as `[lon, lat]`.
    #[inline]
    pub fn min_corner(&self) -> [f64; 2] {
        [self.west, self.south]
    }

    /// North-east corner as `[lon, lat]`.
    #[inline]
    pub fn max_corner(&self) -> [f64; 2] {
        [self.east, self.north]
    }
}
