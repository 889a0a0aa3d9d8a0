//! Serializable pipeline configuration.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use mt_core::{BoundingBox, DayAnchor};
use mt_trace::{Partition, PartitionScheme};

use crate::{PipelineError, PipelineResult};

/// One demand window as written in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Share of all trips starting in this window, in `(0, 1]`.
    pub fraction:      f64,
    /// Window start, `"HH:MM:SS"`.
    pub start:         NaiveTime,
    pub duration_mins: i64,
}

impl PartitionConfig {
    pub fn to_partition(&self) -> PipelineResult<Partition> {
        let duration = TimeDelta::try_minutes(self.duration_mins).ok_or_else(|| {
            PipelineError::Config(format!("duration of {} minutes overflows", self.duration_mins))
        })?;
        Ok(Partition::new(self.fraction, self.start, duration)?)
    }
}

impl From<&Partition> for PartitionConfig {
    fn from(p: &Partition) -> Self {
        Self { fraction: p.fraction, start: p.start, duration_mins: p.duration.num_minutes() }
    }
}

/// Everything one run needs apart from the network itself.
///
/// Missing fields take the values of [`PipelineConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Restrict sampling to this area.  `None` uses the whole network.
    pub bbox:              Option<BoundingBox>,
    pub sample_size:       usize,
    /// `None` seeds from OS entropy.
    pub seed:              Option<u64>,
    /// Sampling attempt cap.  `None` uses the sampler's default.
    pub max_attempts:      Option<usize>,
    pub speed_kmh:         f64,
    pub distance_delta_km: f64,
    /// Day the timestamps fall on (UTC).  `None` means today.
    pub date:              Option<NaiveDate>,
    /// Demand windows.  Empty means the built-in diurnal curve.
    pub partitions:        Vec<PartitionConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bbox:              None,
            sample_size:       100,
            seed:              None,
            max_attempts:      None,
            speed_kmh:         15.0,
            distance_delta_km: 0.05,
            date:              None,
            partitions:        Vec::new(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json(text: &str) -> PipelineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The partition scheme this config describes.
    pub fn scheme(&self) -> PipelineResult<PartitionScheme> {
        if self.partitions.is_empty() {
            return Ok(PartitionScheme::diurnal());
        }
        let parts = self
            .partitions
            .iter()
            .map(PartitionConfig::to_partition)
            .collect::<PipelineResult<Vec<_>>>()?;
        Ok(PartitionScheme::new(parts)?)
    }

    pub fn anchor(&self) -> DayAnchor {
        self.date.map(DayAnchor::new).unwrap_or_else(DayAnchor::today)
    }

    /// The bounding box, re-checked since deserialisation bypasses
    /// [`BoundingBox::new`].
    pub fn checked_bbox(&self) -> PipelineResult<Option<BoundingBox>> {
        self.bbox
            .map(|b| BoundingBox::new(b.north, b.south, b.east, b.west))
            .transpose()
            .map_err(PipelineError::from)
    }
}
