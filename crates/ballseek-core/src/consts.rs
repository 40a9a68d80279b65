/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Small epsilon below which a channel spread counts as achromatic.
pub const ACHROMATIC_EPSILON: f32 = f32::EPSILON;

/// Finite sentinel for "no effective upper bound" in filter criteria.
pub const NO_UPPER_BOUND: f64 = f64::MAX;

/// Default hue interval for an orange ball, 8-bit HLS scale.
pub const DEFAULT_HUE: [f64; 2] = [0.0, 35.63139931740616];

/// Default saturation interval, 8-bit HLS scale.
pub const DEFAULT_SATURATION: [f64; 2] = [135.29676258992808, 255.0];

/// Default luminance interval, 8-bit HLS scale.
pub const DEFAULT_LUMINANCE: [f64; 2] = [89.43345323741006, 200.6058020477816];

/// Default minimum contour area in square pixels.
pub const DEFAULT_MIN_AREA: f64 = 50.0;

/// Default bounding-box width and height upper bound in pixels.
pub const DEFAULT_MAX_EXTENT: f64 = 1000.0;

/// Default solidity interval in percent.
pub const DEFAULT_SOLIDITY: [f64; 2] = [81.83453237410072, 100.0];

/// Default maximum vertex count. Large enough to never bind in practice.
pub const DEFAULT_MAX_VERTICES: f64 = 1.0e11;

/// Default width/height ratio upper bound.
pub const DEFAULT_MAX_RATIO: f64 = 1000.0;

/// Default maximum steering angle in degrees.
pub const DEFAULT_MAX_ANGLE: f64 = 40.0;

/// Default dead-zone: offsets with a smaller magnitude keep the rudder centered.
pub const DEFAULT_DEADBAND: f64 = 0.1;

/// Default number of frames processed by the tracking loop.
pub const DEFAULT_TRACK_FRAMES: usize = 100;

/// Most recent steering commands kept by the logging actuator.
pub const DEFAULT_ACTUATOR_HISTORY: usize = 256;

/// Marker color used when overlaying the selected contour (green).
pub const MARKER_COLOR: [u8; 3] = [0, 255, 0];
