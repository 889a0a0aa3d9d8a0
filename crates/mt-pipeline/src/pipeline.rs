//! The crop → sample → transform driver.

use mt_core::BoundingBox;
use mt_sampler::{Route, RouteSampler};
use mt_spatial::RoadNetwork;
use mt_trace::{TraceTransformer, TransformReport, Trip};

use crate::{PipelineConfig, PipelineResult};

/// Result of one [`Pipeline::run`].
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub routes: Vec<Route>,
    pub trips:  Vec<Trip>,
    pub report: TransformReport,
}

/// A validated, reusable pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    bbox:        Option<BoundingBox>,
    sample_size: usize,
    sampler:     RouteSampler,
    transformer: TraceTransformer,
}

impl Pipeline {
    /// Validate `config` and build the sampler and transformer it describes.
    pub fn from_config(config: &PipelineConfig) -> PipelineResult<Self> {
        let transformer = TraceTransformer::new(
            config.speed_kmh,
            config.distance_delta_km,
            config.scheme()?,
            config.anchor(),
        )?;

        let mut sampler = RouteSampler::new().seed_opt(config.seed);
        if let Some(cap) = config.max_attempts {
            sampler = sampler.max_attempts(cap);
        }

        Ok(Self {
            bbox: config.checked_bbox()?,
            sample_size: config.sample_size,
            sampler,
            transformer,
        })
    }

    pub fn transformer(&self) -> &TraceTransformer {
        &self.transformer
    }

    /// Crop `network` to the configured box, sample routes on it and turn
    /// them into timestamped trips.
    pub fn run(&self, network: &RoadNetwork) -> PipelineResult<PipelineOutput> {
        let cropped;
        let area = match &self.bbox {
            Some(bbox) => {
                cropped = network.crop(bbox);
                log::info!(
                    "cropped network to {} nodes / {} edges",
                    cropped.node_count(),
                    cropped.edge_count()
                );
                &cropped
            }
            None => network,
        };

        let routes = self.sampler.sample(area, self.sample_size)?;
        let out = self.transformer.transform_with_report(&routes);
        Ok(PipelineOutput { routes, trips: out.trips, report: out.report })
    }
}
