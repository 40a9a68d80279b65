use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::Interval;
use crate::consts::{
    DEFAULT_MAX_EXTENT, DEFAULT_MAX_RATIO, DEFAULT_MAX_VERTICES, DEFAULT_MIN_AREA,
    DEFAULT_SOLIDITY,
};

use super::contours::Contour;
use super::geometry::polygon_area;

/// Shape and size bounds a contour must satisfy to count as a ball candidate.
///
/// Area and perimeter only have lower bounds. Unbounded maxima use the finite
/// sentinel [`crate::consts::NO_UPPER_BOUND`] rather than infinity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Minimum polygon area in square pixels.
    pub min_area: f64,
    /// Minimum closed perimeter in pixels.
    pub min_perimeter: f64,
    /// Bounding-box width in pixels.
    pub width: Interval,
    /// Bounding-box height in pixels.
    pub height: Interval,
    /// 100 * area / convex hull area.
    pub solidity: Interval,
    /// Number of contour vertices after chain compression.
    pub vertices: Interval,
    /// Bounding-box width / height.
    pub ratio: Interval,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            min_perimeter: 0.0,
            width: Interval::from_ordered([0.0, DEFAULT_MAX_EXTENT]),
            height: Interval::from_ordered([0.0, DEFAULT_MAX_EXTENT]),
            solidity: Interval::from_ordered(DEFAULT_SOLIDITY),
            vertices: Interval::from_ordered([0.0, DEFAULT_MAX_VERTICES]),
            ratio: Interval::from_ordered([0.0, DEFAULT_MAX_RATIO]),
        }
    }
}

/// Why a contour failed [`FilterCriteria`]. Checks run in declaration order
/// and stop at the first failure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    Width(u64),
    Height(u64),
    Area(f64),
    Perimeter(f64),
    /// Convex hull encloses no area, so solidity is undefined.
    DegenerateHull,
    Solidity(f64),
    Vertices(usize),
    /// Bounding box has zero height, so the aspect ratio is undefined.
    ZeroHeight,
    Ratio(f64),
}

impl FilterCriteria {
    /// Run every check against `contour`.
    ///
    /// Degenerate geometry is reported as a rejection, never as a NaN or
    /// infinite measurement slipping through a comparison.
    pub fn check(&self, contour: &Contour) -> Result<(), Rejection> {
        let bbox = contour.bounding_box();
        if !self.width.contains(bbox.width as f64) {
            return Err(Rejection::Width(bbox.width));
        }
        if !self.height.contains(bbox.height as f64) {
            return Err(Rejection::Height(bbox.height));
        }

        let area = contour.area();
        if area < self.min_area {
            return Err(Rejection::Area(area));
        }

        let perimeter = contour.perimeter();
        if perimeter < self.min_perimeter {
            return Err(Rejection::Perimeter(perimeter));
        }

        let hull_area = polygon_area(&contour.convex_hull());
        if hull_area <= 0.0 {
            return Err(Rejection::DegenerateHull);
        }
        let solidity = 100.0 * area / hull_area;
        if !self.solidity.contains(solidity) {
            return Err(Rejection::Solidity(solidity));
        }

        let vertices = contour.vertex_count();
        if !self.vertices.contains(vertices as f64) {
            return Err(Rejection::Vertices(vertices));
        }

        if bbox.height == 0 {
            return Err(Rejection::ZeroHeight);
        }
        let ratio = bbox.width as f64 / bbox.height as f64;
        if !self.ratio.contains(ratio) {
            return Err(Rejection::Ratio(ratio));
        }

        Ok(())
    }
}

/// Keep the contours that pass every check in `criteria`, in input order.
pub fn filter_contours(contours: &[Contour], criteria: &FilterCriteria) -> Vec<Contour> {
    let kept: Vec<Contour> = contours
        .iter()
        .filter(|contour| match criteria.check(contour) {
            Ok(()) => true,
            Err(reason) => {
                trace!(?reason, vertices = contour.vertex_count(), "Contour rejected");
                false
            }
        })
        .cloned()
        .collect();

    debug!(
        input = contours.len(),
        kept = kept.len(),
        "Contours filtered"
    );
    kept
}
