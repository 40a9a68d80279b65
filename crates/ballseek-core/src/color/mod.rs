pub mod hls;
pub mod range;
pub mod segment;

pub use hls::{rgb_to_hls, Hls};
pub use range::{HlsRange, Interval};
pub use segment::segment;
