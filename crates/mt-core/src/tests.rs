//! Unit tests for mt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, TripId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TripId(7).to_string(), "TripId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, GeoPoint, MtError};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(13.404, 52.520);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_hundredth_degree_of_latitude() {
        // 0.01° of latitude ≈ 1.112 km on a 6371 km sphere.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.01);
        let d = a.distance_km(b);
        assert!((d - 1.111_95).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(13.40, 52.52);
        let b = GeoPoint::new(13.45, 52.50);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(13.4, 52.5).is_ok());
        assert_eq!(
            GeoPoint::try_new(52.5, 113.4),
            Err(MtError::InvalidCoordinate { lon: 52.5, lat: 113.4 })
        );
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(181.0, 0.0).is_err());
    }

    #[test]
    fn lerp_midpoint() {
        let m = GeoPoint::new(0.0, 0.0).lerp(GeoPoint::new(2.0, 4.0), 0.5);
        assert_eq!(m, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn pair_order_is_lon_lat() {
        let p = GeoPoint::from_pair([13.4, 52.5]).unwrap();
        assert_eq!(p.lon, 13.4);
        assert_eq!(p.lat, 52.5);
        assert_eq!(p.to_pair(), [13.4, 52.5]);
    }

    #[test]
    fn bbox_contains() {
        let bbox = BoundingBox::new(52.6, 52.4, 13.5, 13.3).unwrap();
        assert!(bbox.contains(GeoPoint::new(13.4, 52.5)));
        assert!(bbox.contains(GeoPoint::new(13.3, 52.4)));
        assert!(!bbox.contains(GeoPoint::new(13.6, 52.5)));
        assert_eq!(bbox.min_corner(), [13.3, 52.4]);
        assert_eq!(bbox.max_corner(), [13.5, 52.6]);
    }

    #[test]
    fn bbox_rejects_inverted_edges() {
        assert!(BoundingBox::new(52.4, 52.6, 13.5, 13.3).is_err());
        assert!(BoundingBox::new(52.6, 52.4, 13.3, 13.5).is_err());
        assert!(BoundingBox::new(95.0, 52.4, 13.5, 13.3).is_err());
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, NaiveTime, TimeDelta};

    use crate::DayAnchor;
    use crate::time::delta_secs_f64;

    #[test]
    fn anchor_resolves_time_of_day() {
        let anchor = DayAnchor::new(NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        let midnight = anchor.unix_secs_at(NaiveTime::MIN);
        assert_eq!(midnight, 1_699_920_000);

        let six = anchor.unix_secs_at(NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(six - midnight, 6 * 3_600);
    }

    #[test]
    fn offset_keeps_fraction() {
        let anchor = DayAnchor::new(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        let t = anchor.unix_secs_f64_at(NaiveTime::from_hms_opt(0, 0, 10).unwrap(), 0.75);
        assert_eq!(t, 10.75);
    }

    #[test]
    fn delta_in_seconds() {
        assert_eq!(delta_secs_f64(TimeDelta::hours(2)), 7_200.0);
        assert_eq!(delta_secs_f64(TimeDelta::milliseconds(1_500)), 1.5);
    }
}

#[cfg(test)]
mod rng {
    use crate::SampleRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SampleRng::new(12345);
        let mut r2 = SampleRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SampleRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn unseeded_generator_works() {
        let mut rng = SampleRng::from_seed(None);
        let v = rng.gen_range(0.0f64..1.0);
        assert!((0.0..1.0).contains(&v));
    }
}
