use ballseek_core::color::Interval;
use ballseek_core::pipeline::config::VisionConfig;

#[test]
fn test_default_config_matches_tuned_values() {
    let config = VisionConfig::default();
    assert!(!config.external_only);
    assert_eq!(config.color.hue.max(), 35.63139931740616);
    assert_eq!(config.color.saturation.min(), 135.29676258992808);
    assert_eq!(config.filter.solidity.min(), 81.83453237410072);
    assert_eq!(config.filter.width.max(), 1000.0);
    assert_eq!(config.calibration.focal_length, 0.0);
    assert_eq!(config.steering.max_angle, 40.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_json_round_trip() {
    let config = VisionConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: VisionConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let json = r#"{
        "external_only": true,
        "color": { "hue": [10.0, 20.0] },
        "filter": { "min_area": 5.0 },
        "steering": { "max_angle": 30.0 }
    }"#;
    let config: VisionConfig = serde_json::from_str(json).unwrap();

    assert!(config.external_only);
    assert_eq!(config.color.hue, Interval::new(10.0, 20.0).unwrap());
    assert_eq!(config.color.luminance, VisionConfig::default().color.luminance);
    assert_eq!(config.filter.min_area, 5.0);
    assert_eq!(config.filter.ratio, VisionConfig::default().filter.ratio);
    assert_eq!(config.steering.max_angle, 30.0);
    assert_eq!(config.steering.deadband, 0.1);
}

#[test]
fn test_inverted_range_rejected_while_parsing() {
    let json = r#"{ "filter": { "width": [150.0, 50.0] } }"#;
    let err = serde_json::from_str::<VisionConfig>(json).unwrap_err();
    assert!(err.to_string().contains("min must not exceed max"), "got: {err}");
}

#[test]
fn test_negative_calibration_fails_validation() {
    let json = r#"{ "calibration": { "focal_length": -3.0 } }"#;
    let config: VisionConfig = serde_json::from_str(json).unwrap();
    assert!(config.validate().is_err());
}
