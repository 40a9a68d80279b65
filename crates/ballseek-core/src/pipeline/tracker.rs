use tracing::{info, warn};

use crate::frame::Frame;
use crate::io::source::FrameSource;

use super::actuator::Actuator;
use super::orchestrator::BallTracker;
use super::types::{FrameReport, TrackingSummary};

/// Drive the perception core from `source` for at most `max_frames` ticks.
///
/// A failed read skips the tick, a missing ball issues no command, and
/// distance or actuator failures are logged. None of these stop the loop;
/// only an exhausted source ends it early. `on_frame` sees every processed
/// frame with its report, after the command was issued.
pub fn track<S, A, F>(
    source: &mut S,
    tracker: &BallTracker,
    actuator: &mut A,
    max_frames: usize,
    mut on_frame: F,
) -> TrackingSummary
where
    S: FrameSource + ?Sized,
    A: Actuator + ?Sized,
    F: FnMut(&Frame, &FrameReport),
{
    let mut summary = TrackingSummary::default();

    for tick in 0..max_frames {
        let frame = match source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!(tick, "Frame source exhausted");
                break;
            }
            Err(e) => {
                warn!(tick, error = %e, "No frame this tick");
                summary.skipped += 1;
                continue;
            }
        };

        let report = tracker.process(&frame);
        summary.frames += 1;

        if let Some(Err(e)) = &report.distance {
            warn!(frame = report.frame_index, error = %e, "Distance unavailable");
            summary.distance_failures += 1;
        }

        if let Some(command) = &report.steering {
            summary.detections += 1;
            match actuator.apply(command) {
                Ok(()) => summary.commands += 1,
                Err(e) => {
                    warn!(frame = report.frame_index, error = %e, "Actuator rejected command");
                    summary.actuator_failures += 1;
                }
            }
        }

        on_frame(&frame, &report);
    }

    info!(
        frames = summary.frames,
        detections = summary.detections,
        skipped = summary.skipped,
        "Tracking finished"
    );
    summary
}
