use crate::detection::BallLocation;
use crate::error::Result;
use crate::steering::SteeringCommand;

/// Everything learned from one frame.
#[derive(Debug)]
pub struct FrameReport {
    pub frame_index: usize,
    /// Pixels inside the color range.
    pub mask_pixels: usize,
    /// Contours traced before filtering.
    pub contour_count: usize,
    /// Contours that passed the filter.
    pub candidate_count: usize,
    /// `None` when the ball is not in view.
    pub location: Option<BallLocation>,
    /// `None` when the ball is not in view; `Some(Err(_))` for degenerate
    /// geometry such as a zero pixel width.
    pub distance: Option<Result<f64>>,
    /// `None` when the ball is not in view.
    pub steering: Option<SteeringCommand>,
}

impl FrameReport {
    pub fn found(&self) -> bool {
        self.location.is_some()
    }

    pub fn offset(&self) -> Option<f64> {
        self.location.as_ref().map(|loc| loc.offset)
    }
}

/// One-line status: where the ball is and how far away.
impl std::fmt::Display for FrameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame {}: ", self.frame_index)?;
        let Some(offset) = self.offset() else {
            return write!(f, "can't find ball");
        };
        write!(f, "offset {offset:+.3}, ")?;
        match &self.distance {
            Some(Ok(d)) => write!(f, "distance {d:.2}"),
            Some(Err(e)) => write!(f, "distance unavailable ({e})"),
            None => write!(f, "distance unknown"),
        }
    }
}

/// Counters for a tracking run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackingSummary {
    /// Frames that reached the perception core.
    pub frames: usize,
    /// Frames in which the ball was located.
    pub detections: usize,
    /// Commands the actuator accepted.
    pub commands: usize,
    /// Ticks with no frame because the source failed.
    pub skipped: usize,
    /// Ticks where the distance could not be computed.
    pub distance_failures: usize,
    /// Commands the actuator rejected.
    pub actuator_failures: usize,
}

impl TrackingSummary {
    /// Ticks consumed from the source, processed or skipped.
    pub fn ticks(&self) -> usize {
        self.frames + self.skipped
    }
}
