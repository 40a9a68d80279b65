pub mod config;
mod actuator;
mod orchestrator;
mod tracker;
mod types;

pub use actuator::{Actuator, LogActuator};
pub use orchestrator::{locate_ball, run_pipeline, BallTracker};
pub use tracker::track;
pub use types::{FrameReport, TrackingSummary};
