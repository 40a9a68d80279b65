use std::path::Path;

use ballseek_core::pipeline::config::VisionConfig;
use ballseek_core::pipeline::{FrameReport, TrackingSummary};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &VisionConfig, input: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Ballseek"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Contours"),
        s.method.apply_to(if config.external_only {
            "external only"
        } else {
            "all borders"
        })
    );
    println!();

    // Color
    println!("  {}", s.header.apply_to("Color (HLS)"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Hue"),
        s.value.apply_to(config.color.hue)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Saturation"),
        s.value.apply_to(config.color.saturation)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Luminance"),
        s.value.apply_to(config.color.luminance)
    );
    println!();

    // Filter
    let f = &config.filter;
    println!("  {}", s.header.apply_to("Filter"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min area"),
        s.value.apply_to(f.min_area)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min perim."),
        s.value.apply_to(f.min_perimeter)
    );
    for (label, interval) in [
        ("Width", f.width),
        ("Height", f.height),
        ("Solidity", f.solidity),
        ("Vertices", f.vertices),
        ("Ratio", f.ratio),
    ] {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.value.apply_to(interval)
        );
    }
    println!();

    // Steering / distance
    println!("  {}", s.header.apply_to("Steering"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max angle"),
        s.value.apply_to(config.steering.max_angle)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Deadband"),
        s.value.apply_to(config.steering.deadband)
    );
    let cal = &config.calibration;
    if cal.focal_length == 0.0 || cal.object_width == 0.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Distance"),
            s.disabled.apply_to("uncalibrated")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Focal"),
            s.value.apply_to(cal.focal_length)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Ball width"),
            s.value.apply_to(cal.object_width)
        );
    }
    println!();
}

pub fn print_frame_report(report: &FrameReport) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Result"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mask pixels"),
        s.value.apply_to(report.mask_pixels)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Contours"),
        s.value.apply_to(format!(
            "{} traced, {} kept",
            report.contour_count, report.candidate_count
        ))
    );

    let Some(ref loc) = report.location else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Ball"),
            s.disabled.apply_to("can't find ball")
        );
        return;
    };

    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("{:+.4}", loc.offset))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Area"),
        s.value.apply_to(format!("{:.1} px\u{b2}", loc.area))
    );
    match &report.distance {
        Some(Ok(d)) => println!(
            "    {:<12}{}",
            s.label.apply_to("Distance"),
            s.value.apply_to(format!("{d:.2}"))
        ),
        Some(Err(e)) => println!(
            "    {:<12}{}",
            s.label.apply_to("Distance"),
            s.disabled.apply_to(e)
        ),
        None => {}
    }
    if let Some(ref cmd) = report.steering {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Steering"),
            s.method.apply_to(cmd)
        );
    }
}

pub fn print_tracking_summary(summary: &TrackingSummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Tracking"));
    for (label, value) in [
        ("Frames", summary.frames),
        ("Detections", summary.detections),
        ("Commands", summary.commands),
        ("Skipped", summary.skipped),
        ("No distance", summary.distance_failures),
        ("Act. errors", summary.actuator_failures),
    ] {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.value.apply_to(value)
        );
    }
    println!();
}
