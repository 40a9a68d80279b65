use super::contours::Point;

/// Axis-aligned bounding box in pixel units, inclusive of both edge pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u64,
    pub height: u64,
}

/// Inclusive bounding box: a single point is 1x1. Empty input yields 0x0.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    };

    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    BoundingBox {
        x: min_x,
        y: min_y,
        width: span(min_x, max_x) + 1,
        height: span(min_y, max_y) + 1,
    }
}

/// `max - min` without overflowing `i32`; the full `i32` range spans `u32::MAX`.
pub(crate) fn span(min: i32, max: i32) -> u64 {
    (max as i64 - min as i64) as u64
}

/// Unsigned polygon area by the shoelace formula over the closed polyline.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: i128 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128
        })
        .sum();
    twice.abs() as f64 / 2.0
}

/// Length of the closed polyline, including the closing edge.
pub fn perimeter(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let dx = b.x as f64 - a.x as f64;
            let dy = b.y as f64 - a.y as f64;
            dx.hypot(dy)
        })
        .sum()
}

/// Convex hull by Andrew's monotone chain, counter-clockwise in image
/// coordinates with collinear points removed.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable_by_key(|p| (p.x, p.y));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull = half_hull(sorted.iter().copied());
    hull.extend(half_hull(sorted.iter().rev().copied()));
    hull
}

/// One monotone chain, without its last point (it starts the other chain).
fn half_hull(points: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for p in points {
        while chain.len() >= 2 {
            let n = chain.len();
            if cross(chain[n - 2], chain[n - 1], p) > 0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}

fn cross(o: Point, a: Point, b: Point) -> i128 {
    let d = |p: i32, q: i32| p as i128 - q as i128;
    d(a.x, o.x) * d(b.y, o.y) - d(a.y, o.y) * d(b.x, o.x)
}
