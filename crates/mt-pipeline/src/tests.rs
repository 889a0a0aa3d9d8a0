//! Unit tests for mt-pipeline.

#[cfg(test)]
mod helpers {
    use chrono::{NaiveDate, NaiveTime};

    use mt_core::GeoPoint;
    use mt_spatial::{RoadNetwork, RoadNetworkBuilder};

    use crate::{PartitionConfig, PipelineConfig};

    /// 5×5 street grid, 0.002° spacing, two-way roads of 30 s each.
    pub fn grid() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        let mut ids = Vec::new();
        for row in 0..5 {
            for col in 0..5 {
                ids.push(b.add_node(GeoPoint::new(col as f64 * 0.002, row as f64 * 0.002)));
            }
        }
        for row in 0..5 {
            for col in 0..5 {
                let here = ids[row * 5 + col];
                if col + 1 < 5 {
                    b.add_road(here, ids[row * 5 + col + 1], 30_000);
                }
                if row + 1 < 5 {
                    b.add_road(here, ids[(row + 1) * 5 + col], 30_000);
                }
            }
        }
        b.build()
    }

    /// Seeded config with a single all-day window on 2023-11-14.
    pub fn config(sample_size: usize) -> PipelineConfig {
        PipelineConfig {
            sample_size,
            seed: Some(7),
            date: NaiveDate::from_ymd_opt(2023, 11, 14),
            partitions: vec![PartitionConfig {
                fraction:      1.0,
                start:         NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                duration_mins: 600,
            }],
            ..PipelineConfig::default()
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use chrono::NaiveTime;

    use mt_trace::PartitionScheme;

    use crate::{PipelineConfig, PipelineError};

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = PipelineConfig::from_json(r#"{ "sample_size": 12 }"#).unwrap();
        assert_eq!(cfg.sample_size, 12);
        assert_eq!(cfg.speed_kmh, PipelineConfig::default().speed_kmh);
        assert!(cfg.bbox.is_none());
        assert_eq!(cfg.scheme().unwrap(), PartitionScheme::diurnal());
    }

    #[test]
    fn partitions_and_bbox_parse() {
        let cfg = PipelineConfig::from_json(
            r#"{
                "bbox": { "north": 52.53, "south": 52.50, "east": 13.42, "west": 13.37 },
                "seed": 3,
                "date": "2024-05-01",
                "partitions": [
                    { "fraction": 0.6, "start": "07:30:00", "duration_mins": 90 },
                    { "fraction": 0.4, "start": "17:00:00", "duration_mins": 120 }
                ]
            }"#,
        )
        .unwrap();

        let bbox = cfg.checked_bbox().unwrap().unwrap();
        assert_eq!(bbox.west, 13.37);
        assert_eq!(cfg.anchor().to_string(), "2024-05-01");

        let scheme = cfg.scheme().unwrap();
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme.partitions()[0].start, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(scheme.partitions()[1].duration.num_minutes(), 120);
    }

    #[test]
    fn json_survives_a_round_trip() {
        let cfg = super::helpers::config(5);
        let text = cfg.to_json_pretty().unwrap();
        assert_eq!(PipelineConfig::from_json(&text).unwrap(), cfg);
    }

    #[test]
    fn inverted_bbox_rejected() {
        let cfg = PipelineConfig::from_json(
            r#"{ "bbox": { "north": 1.0, "south": 2.0, "east": 1.0, "west": 0.0 } }"#,
        )
        .unwrap();
        assert!(matches!(cfg.checked_bbox(), Err(PipelineError::Geo(_))));
    }

    #[test]
    fn bad_partition_rejected() {
        let cfg = PipelineConfig::from_json(
            r#"{ "partitions": [ { "fraction": 1.5, "start": "06:00:00", "duration_mins": 60 } ] }"#,
        )
        .unwrap();
        assert!(matches!(cfg.scheme(), Err(PipelineError::Trace(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(PipelineConfig::from_json("{ nope"), Err(PipelineError::Json(_))));
    }
}

// ── Pipeline runs ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use mt_core::BoundingBox;
    use mt_sampler::SamplerError;

    use crate::{Pipeline, PipelineConfig, PipelineError};

    use super::helpers::{config, grid};

    /// 2023-11-14 08:00 UTC.
    const EIGHT_AM: i64 = 1_699_920_000 + 8 * 3_600;

    #[test]
    fn produces_one_trip_per_route() {
        let out = Pipeline::from_config(&config(20)).unwrap().run(&grid()).unwrap();
        assert_eq!(out.routes.len(), 20);
        assert_eq!(out.trips.len(), 20);
        assert_eq!(out.report.skipped(), 0);

        for (route, trip) in out.routes.iter().zip(&out.trips) {
            assert!(route.len() >= 2);
            assert_eq!(trip.length_km(), route.length_km());
            assert_eq!(trip.timestamps().len(), trip.coordinates().len());
            assert!(trip.start_time() >= EIGHT_AM);
            assert!(trip.end_time() < EIGHT_AM + 11 * 3_600);
        }
    }

    #[test]
    fn same_seed_same_trips() {
        let p = Pipeline::from_config(&config(10)).unwrap();
        let a = p.run(&grid()).unwrap();
        let b = p.run(&grid()).unwrap();
        assert_eq!(a.trips, b.trips);
    }

    #[test]
    fn routes_stay_inside_bbox() {
        let bbox = BoundingBox::new(0.0041, -0.001, 0.0041, -0.001).unwrap();
        let cfg = PipelineConfig { bbox: Some(bbox), ..config(15) };
        let out = Pipeline::from_config(&cfg).unwrap().run(&grid()).unwrap();

        assert_eq!(out.routes.len(), 15);
        for route in &out.routes {
            assert!(route.coordinates().iter().all(|&p| bbox.contains(p)));
        }
    }

    #[test]
    fn empty_crop_is_an_error() {
        let bbox = BoundingBox::new(10.0, 9.0, 10.0, 9.0).unwrap();
        let cfg = PipelineConfig { bbox: Some(bbox), ..config(5) };
        let err = Pipeline::from_config(&cfg).unwrap().run(&grid()).unwrap_err();
        assert!(matches!(err, PipelineError::Sampler(SamplerError::EmptyNetwork)));
    }

    #[test]
    fn invalid_speed_rejected_up_front() {
        let cfg = PipelineConfig { speed_kmh: 0.0, ..config(5) };
        assert!(matches!(Pipeline::from_config(&cfg), Err(PipelineError::Trace(_))));
    }
}
