use tracing::debug;

use crate::color::{segment, HlsRange};
use crate::detection::{
    extract_contours, filter_contours, locate, BallLocation, Contour, FilterCriteria,
};
use crate::error::Result;
use crate::frame::Frame;

use super::config::VisionConfig;
use super::types::FrameReport;

/// Segment, trace and filter one frame, returning the ball candidates.
pub fn run_pipeline(
    frame: &Frame,
    color_range: &HlsRange,
    external_only: bool,
    criteria: &FilterCriteria,
) -> Vec<Contour> {
    let mask = segment(frame, color_range);
    let contours = extract_contours(&mask, external_only);
    filter_contours(&contours, criteria)
}

/// Run the pipeline and locate the largest surviving candidate.
///
/// `None` means no contour survived filtering: the ball is out of view.
pub fn locate_ball(
    frame: &Frame,
    color_range: &HlsRange,
    external_only: bool,
    criteria: &FilterCriteria,
) -> Option<BallLocation> {
    let candidates = run_pipeline(frame, color_range, external_only, criteria);
    locate(&candidates, frame.width())
}

/// Per-frame perception with a validated, immutable configuration.
///
/// Holds no state between calls: every [`BallTracker::process`] result
/// depends only on that frame and the config.
#[derive(Clone, Debug)]
pub struct BallTracker {
    config: VisionConfig,
}

impl BallTracker {
    pub fn new(config: VisionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Full perception pass: segment -> trace -> filter -> locate, then
    /// distance and steering for the located ball.
    pub fn process(&self, frame: &Frame) -> FrameReport {
        let config = &self.config;

        let mask = segment(frame, &config.color);
        let mask_pixels = mask.iter().filter(|&&inside| inside).count();

        let contours = extract_contours(&mask, config.external_only);
        let candidates = filter_contours(&contours, &config.filter);
        let location = locate(&candidates, frame.width());

        let (distance, steering) = match &location {
            Some(loc) => (
                Some(config.calibration.estimate(&loc.contour)),
                Some(config.steering.steer(loc.offset)),
            ),
            None => (None, None),
        };

        debug!(
            frame = frame.metadata.frame_index,
            mask_pixels,
            contours = contours.len(),
            candidates = candidates.len(),
            found = location.is_some(),
            "Frame processed"
        );

        FrameReport {
            frame_index: frame.metadata.frame_index,
            mask_pixels,
            contour_count: contours.len(),
            candidate_count: candidates.len(),
            location,
            distance,
            steering,
        }
    }
}
