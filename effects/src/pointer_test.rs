#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn centre_of_card_has_no_tilt() {
    assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
}

#[test]
fn corners_tilt_towards_pointer() {
    // top-left: rotateX negative, rotateY positive
    let (rx, ry) = tilt_angles(0.0, 0.0, 200.0, 100.0);
    assert_eq!(rx, -2.5);
    assert_eq!(ry, 5.0);
}

#[test]
fn tilt_transform_formats_degrees() {
    assert_eq!(
        tilt_transform(0.0, 0.0, 200.0, 100.0),
        "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) translateY(-8px)"
    );
}

#[test]
fn normalized_pointer_spans_minus_one_to_one() {
    assert_eq!(normalized_pointer(0.0, 0.0, 1000.0, 800.0), (-1.0, -1.0));
    assert_eq!(normalized_pointer(500.0, 400.0, 1000.0, 800.0), (0.0, 0.0));
    assert_eq!(normalized_pointer(1000.0, 800.0, 1000.0, 800.0), (1.0, 1.0));
}

#[test]
fn zero_window_maps_to_centre() {
    assert_eq!(normalized_pointer(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
}

#[test]
fn deeper_orbs_travel_further() {
    let offsets = parallax_offsets((1.0, -0.5), 3);
    assert_eq!(offsets, vec![(20.0, -10.0), (40.0, -20.0), (60.0, -30.0)]);
}

#[test]
fn translate_formats_pixels() {
    assert_eq!(translate((20.0, -10.0)), "translate(20px, -10px)");
}
