mod common;

use ballseek_core::detection::{extract_contours, Point};
use ndarray::Array2;

use common::mask_with_rect;

fn sorted_points(points: &[Point]) -> Vec<(i32, i32)> {
    let mut v: Vec<(i32, i32)> = points.iter().map(|p| (p.x, p.y)).collect();
    v.sort_unstable();
    v
}

#[test]
fn test_empty_mask_has_no_contours() {
    let mask = Array2::from_elem((50, 60), false);
    assert!(extract_contours(&mask, true).is_empty());
    assert!(extract_contours(&mask, false).is_empty());
}

#[test]
fn test_filled_square_compresses_to_corners() {
    let mask = mask_with_rect(200, 200, (50, 50, 149, 149));
    let contours = extract_contours(&mask, true);

    assert_eq!(contours.len(), 1);
    let c = &contours[0];
    assert_eq!(c.vertex_count(), 4);
    assert_eq!(
        sorted_points(c.points()),
        vec![(50, 50), (50, 149), (149, 50), (149, 149)]
    );

    let bbox = c.bounding_box();
    assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (50, 50, 100, 100));
    assert_eq!(c.area(), 99.0 * 99.0);
}

#[test]
fn test_hole_suppressed_when_external_only() {
    let mut mask = mask_with_rect(60, 60, (10, 10, 49, 49));
    for row in 20..40 {
        for col in 20..40 {
            mask[[row, col]] = false;
        }
    }

    let outer = extract_contours(&mask, true);
    assert_eq!(outer.len(), 1);
    assert_eq!(outer[0].bounding_box().width, 40);

    let all = extract_contours(&mask, false);
    assert_eq!(all.len(), 2);
    let widths: Vec<u64> = {
        let mut w: Vec<u64> = all.iter().map(|c| c.bounding_box().width).collect();
        w.sort_unstable();
        w
    };
    assert!(widths[0] < 40, "hole border should be inside the outer border");
    assert_eq!(widths[1], 40);
}

#[test]
fn test_separate_regions_each_get_a_contour() {
    let mut mask = mask_with_rect(100, 40, (5, 5, 20, 20));
    for row in 10..30 {
        for col in 60..90 {
            mask[[row, col]] = true;
        }
    }
    let contours = extract_contours(&mask, true);
    assert_eq!(contours.len(), 2);
}

#[test]
fn test_single_pixel_region() {
    let mut mask = Array2::from_elem((10, 10), false);
    mask[[4, 6]] = true;
    let contours = extract_contours(&mask, true);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points(), &[Point::new(6, 4)]);
    assert_eq!(contours[0].area(), 0.0);
}

#[test]
fn test_extraction_is_deterministic() {
    let mut mask = mask_with_rect(80, 80, (10, 10, 30, 30));
    for row in 40..70 {
        for col in 45..75 {
            mask[[row, col]] = true;
        }
    }
    let first = extract_contours(&mask, false);
    let second = extract_contours(&mask, false);
    assert_eq!(first, second);
}
