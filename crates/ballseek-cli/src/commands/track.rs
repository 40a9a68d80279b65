use std::path::PathBuf;

use anyhow::{Context, Result};
use ballseek_core::consts::{DEFAULT_TRACK_FRAMES, MARKER_COLOR};
use ballseek_core::error::Result as CoreResult;
use ballseek_core::io::image_io::save_frame;
use ballseek_core::io::overlay::draw_contour;
use ballseek_core::io::source::ImageSequenceSource;
use ballseek_core::pipeline::{track, Actuator, BallTracker};
use ballseek_core::steering::SteeringCommand;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::summary::{print_config_summary, print_tracking_summary};

#[derive(Args)]
pub struct TrackArgs {
    /// Directory of frames, replayed in file-name order
    pub dir: PathBuf,

    /// Vision config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Trace only outer borders, ignoring holes
    #[arg(long)]
    pub external_only: bool,

    /// Maximum number of frames to process
    #[arg(long, default_value_t = DEFAULT_TRACK_FRAMES)]
    pub frames: usize,

    /// Write annotated frames to this directory
    #[arg(long)]
    pub annotate_dir: Option<PathBuf>,
}

/// Prints each command above the progress bar, as the motor driver would
/// receive it.
struct ConsoleActuator {
    pb: ProgressBar,
}

impl Actuator for ConsoleActuator {
    fn apply(&mut self, command: &SteeringCommand) -> CoreResult<()> {
        self.pb.println(command.to_string());
        Ok(())
    }
}

pub fn run(args: &TrackArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if args.external_only {
        config.external_only = true;
    }
    let tracker = BallTracker::new(config).context("Invalid vision config")?;

    let mut source = ImageSequenceSource::open(&args.dir)
        .with_context(|| format!("Failed to open frames in {}", args.dir.display()))?;

    if let Some(ref dir) = args.annotate_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    print_config_summary(tracker.config(), &args.dir);

    let total = source.len().min(args.frames);
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Tracking");

    let mut actuator = ConsoleActuator { pb: pb.clone() };
    let summary = track(&mut source, &tracker, &mut actuator, args.frames, |frame, report| {
        pb.inc(1);
        pb.println(report.to_string());
        let Some(ref dir) = args.annotate_dir else {
            return;
        };
        let annotated = match &report.location {
            Some(loc) => draw_contour(frame, &loc.contour, MARKER_COLOR),
            None => frame.clone(),
        };
        let path = dir.join(format!("frame_{:05}.png", report.frame_index));
        if let Err(e) = save_frame(&annotated, &path) {
            warn!(path = %path.display(), error = %e, "Failed to write annotated frame");
        }
    });

    // Skipped ticks never reach the callback; settle the bar on what was consumed.
    let ticks = summary.ticks() as u64;
    pb.set_length(ticks);
    pb.set_position(ticks);
    pb.finish_with_message("Done");
    print_tracking_summary(&summary);

    Ok(())
}
