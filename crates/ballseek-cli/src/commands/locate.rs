use std::path::PathBuf;

use anyhow::{Context, Result};
use ballseek_core::color::segment;
use ballseek_core::consts::MARKER_COLOR;
use ballseek_core::io::image_io::{load_frame, save_frame, save_mask};
use ballseek_core::io::overlay::draw_contour;
use ballseek_core::pipeline::BallTracker;
use clap::Args;

use crate::summary::{print_config_summary, print_frame_report};

#[derive(Args)]
pub struct LocateArgs {
    /// Input image
    pub file: PathBuf,

    /// Vision config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Trace only outer borders, ignoring holes
    #[arg(long)]
    pub external_only: bool,

    /// Save a copy of the frame with the selected contour marked
    #[arg(long)]
    pub annotate: Option<PathBuf>,

    /// Save the color-threshold mask
    #[arg(long)]
    pub mask: Option<PathBuf>,
}

pub fn run(args: &LocateArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if args.external_only {
        config.external_only = true;
    }
    let tracker = BallTracker::new(config).context("Invalid vision config")?;

    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_config_summary(tracker.config(), &args.file);
    let report = tracker.process(&frame);
    print_frame_report(&report);

    if let Some(ref path) = args.mask {
        save_mask(&segment(&frame, &tracker.config().color), path)
            .with_context(|| format!("Failed to write mask {}", path.display()))?;
        println!("\nMask saved to {}", path.display());
    }

    if let Some(ref path) = args.annotate {
        let annotated = match &report.location {
            Some(loc) => draw_contour(&frame, &loc.contour, MARKER_COLOR),
            None => frame.clone(),
        };
        save_frame(&annotated, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nAnnotated frame saved to {}", path.display());
    }

    Ok(())
}
