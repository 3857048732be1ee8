#![allow(clippy::float_cmp)]

use super::*;

fn sections() -> Vec<Section> {
    vec![
        Section::new("intro", 400.0, 600.0),
        Section::new("body", 1000.0, 1000.0),
        Section::new("outro", 2000.0, 500.0),
    ]
}

fn vp(scroll_y: f64) -> ViewportState {
    ViewportState::new(scroll_y, 800.0, 80.0)
}

// --- Step::from_key ---

#[test]
fn j_and_k_map_to_steps() {
    assert_eq!(Step::from_key("j", false, false, false), Some(Step::Next));
    assert_eq!(Step::from_key("k", false, false, false), Some(Step::Previous));
    assert_eq!(Step::from_key("x", false, false, false), None);
}

#[test]
fn modifiers_and_typing_suppress_steps() {
    assert_eq!(Step::from_key("j", true, false, false), None);
    assert_eq!(Step::from_key("j", false, true, false), None);
    assert_eq!(Step::from_key("k", false, false, true), None);
}

// --- next / previous ---

#[test]
fn next_skips_sections_already_under_nav() {
    // intro: 400 - 80 - 60 = 260 > 0
    assert_eq!(next_section(&sections(), &vp(0.0)).map(|s| s.id.as_str()), Some("intro"));
    // at 300: intro 260 !> 300, body 860 > 300
    assert_eq!(next_section(&sections(), &vp(300.0)).map(|s| s.id.as_str()), Some("body"));
}

#[test]
fn next_at_end_is_none() {
    assert!(next_section(&sections(), &vp(5000.0)).is_none());
}

#[test]
fn previous_requires_slack() {
    // body threshold 860; needs 860 < scroll - 100
    assert_eq!(previous_section(&sections(), &vp(960.0)).map(|s| s.id.as_str()), Some("intro"));
    assert_eq!(previous_section(&sections(), &vp(961.0)).map(|s| s.id.as_str()), Some("body"));
}

#[test]
fn previous_at_top_is_none() {
    assert!(previous_section(&sections(), &vp(0.0)).is_none());
}

#[test]
fn step_dispatches() {
    let s = sections();
    assert_eq!(step(&s, &vp(0.0), Step::Next).map(|s| s.id.as_str()), Some("intro"));
    assert_eq!(step(&s, &vp(3000.0), Step::Previous).map(|s| s.id.as_str()), Some("outro"));
}

// --- anchors ---

#[test]
fn anchor_scroll_top_subtracts_nav_and_gap() {
    assert_eq!(anchor_scroll_top(1000.0, 80.0, 40.0), 880.0);
    assert_eq!(anchor_scroll_top(1000.0, 80.0, 20.0), 900.0);
}

#[test]
fn fragment_target_only_accepts_in_page_links() {
    assert_eq!(fragment_target("#intro"), Some("intro"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("/posts/other"), None);
}
