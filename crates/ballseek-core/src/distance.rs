use serde::{Deserialize, Serialize};

use crate::detection::Contour;
use crate::error::{BallseekError, Result};

/// Pinhole camera constants. Both default to zero, the uncalibrated
/// placeholder: distances then come out as 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraCalibration {
    /// Focal length in pixels.
    pub focal_length: f64,
    /// Real width of the ball, in the unit distances are reported in.
    pub object_width: f64,
}

impl CameraCalibration {
    pub fn new(focal_length: f64, object_width: f64) -> Result<Self> {
        let calibration = Self {
            focal_length,
            object_width,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("focal_length", self.focal_length),
            ("object_width", self.object_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BallseekError::InvalidCalibration(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn estimate(&self, contour: &Contour) -> Result<f64> {
        estimate_distance(contour, self.focal_length, self.object_width)
    }
}

/// Horizontal pixel span of the contour: `max(x) - min(x)`.
pub fn pixel_width(contour: &Contour) -> u32 {
    let (min_x, max_x) = contour.x_extent();
    // Never exceeds u32::MAX: the widest i32 span is 2^32 - 1.
    (max_x as i64 - min_x as i64) as u32
}

/// Distance to the ball by similar triangles:
/// `object_width * focal_length / pixel_width`.
///
/// Fails with [`BallseekError::ZeroPixelWidth`] when the contour has no
/// horizontal extent.
pub fn estimate_distance(contour: &Contour, focal_length: f64, object_width: f64) -> Result<f64> {
    let px = pixel_width(contour);
    if px == 0 {
        return Err(BallseekError::ZeroPixelWidth);
    }
    Ok(object_width * focal_length / px as f64)
}
