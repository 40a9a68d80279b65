pub mod contours;
pub mod filter;
pub mod geometry;
pub mod locate;

pub use contours::{extract_contours, Contour, Point};
pub use filter::{filter_contours, FilterCriteria, Rejection};
pub use geometry::BoundingBox;
pub use locate::{horizontal_offset, locate, BallLocation};
