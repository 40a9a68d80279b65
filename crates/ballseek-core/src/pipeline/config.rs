use serde::{Deserialize, Serialize};

use crate::color::HlsRange;
use crate::detection::FilterCriteria;
use crate::distance::CameraCalibration;
use crate::error::Result;
use crate::steering::SteeringConfig;

/// Everything a [`super::BallTracker`] needs, one section per stage.
///
/// Every section has defaults, so a TOML file only lists what it changes.
/// Range sections validate while deserializing; [`VisionConfig::validate`]
/// covers the scalar sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Trace only outermost borders, ignoring holes.
    pub external_only: bool,
    /// HLS thresholds for the ball color.
    pub color: HlsRange,
    pub filter: FilterCriteria,
    pub calibration: CameraCalibration,
    pub steering: SteeringConfig,
}

impl VisionConfig {
    pub fn validate(&self) -> Result<()> {
        self.calibration.validate()?;
        self.steering.validate()
    }
}
