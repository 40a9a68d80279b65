mod common;

use approx::assert_abs_diff_eq;
use ballseek_core::color::HlsRange;
use ballseek_core::detection::{horizontal_offset, locate, FilterCriteria};
use ballseek_core::pipeline::locate_ball;

use common::{frame_with_disk, rect_contour, solid_frame, BLUE, ORANGE};

#[test]
fn test_offset_slightly_left_of_center() {
    let c = rect_contour(40, 0, 140, 30);
    let loc = locate(&[c], 200).expect("one contour");
    assert_abs_diff_eq!(loc.offset, -0.1, epsilon = 1e-12);
}

#[test]
fn test_offset_sign_convention() {
    // Negative = left of center, positive = right.
    let left = rect_contour(0, 0, 20, 20);
    let right = rect_contour(180, 0, 199, 20);
    let centered = rect_contour(90, 0, 110, 20);

    assert!(horizontal_offset(&left, 200) < 0.0);
    assert!(horizontal_offset(&right, 200) > 0.0);
    assert_abs_diff_eq!(horizontal_offset(&centered, 200), 0.0, epsilon = 1e-12);
}

#[test]
fn test_offset_uses_extent_midpoint_not_centroid() {
    let lopsided = common::contour(&[(100, 0), (190, 0), (190, 50), (100, 50), (10, 25)]);
    // Extent [10, 190] around middle 100: midpoint 0 even though most area is right.
    assert_abs_diff_eq!(horizontal_offset(&lopsided, 200), 0.0, epsilon = 1e-12);
}

#[test]
fn test_largest_area_selected() {
    let small = rect_contour(0, 0, 10, 10);
    let large = rect_contour(100, 0, 150, 50);
    let medium = rect_contour(50, 50, 80, 80);
    let loc = locate(&[small, large.clone(), medium], 200).unwrap();
    assert_eq!(loc.index, 1);
    assert_eq!(loc.contour, large);
    assert_eq!(loc.area, 2500.0);
}

#[test]
fn test_area_tie_keeps_first() {
    let first = rect_contour(0, 0, 20, 20);
    let second = rect_contour(100, 100, 120, 120);
    let loc = locate(&[first.clone(), second], 200).unwrap();
    assert_eq!(loc.index, 0);
    assert_eq!(loc.contour, first);
}

#[test]
fn test_zero_area_contours_still_selectable() {
    let dot = common::contour(&[(150, 10)]);
    let loc = locate(&[dot], 200).unwrap();
    assert_abs_diff_eq!(loc.offset, 0.5, epsilon = 1e-12);
}

#[test]
fn test_no_contours_not_found() {
    assert!(locate(&[], 200).is_none());
}

#[test]
fn test_empty_frame_not_found_for_any_criteria() {
    let frame = solid_frame(64, 48, BLUE);
    let permissive = FilterCriteria {
        min_area: 0.0,
        solidity: ballseek_core::color::Interval::new(0.0, 100.0).unwrap(),
        ..FilterCriteria::default()
    };
    for criteria in [FilterCriteria::default(), permissive] {
        assert!(locate_ball(&frame, &HlsRange::default(), false, &criteria).is_none());
        assert!(locate_ball(&frame, &HlsRange::default(), true, &criteria).is_none());
    }
}

#[test]
fn test_locate_ball_in_frame() {
    // Disk spans x in [135, 165] on a 200-wide frame: midpoint 150 -> +0.5.
    let frame = frame_with_disk(200, 100, 150.0, 50.0, 15.0, ORANGE, BLUE);
    let loc = locate_ball(&frame, &HlsRange::default(), false, &FilterCriteria::default())
        .expect("ball in view");
    assert_abs_diff_eq!(loc.offset, 0.5, epsilon = 1e-12);
    assert_eq!(loc.contour.x_extent(), (135, 165));
}
