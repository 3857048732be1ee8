#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn three_sections() -> Vec<Section> {
    vec![
        Section::new("s1", 0.0, 1000.0),
        Section::new("s2", 1000.0, 1000.0),
        Section::new("s3", 2000.0, 1000.0),
    ]
}

fn vp(scroll_y: f64) -> ViewportState {
    ViewportState::new(scroll_y, 800.0, 80.0)
}

// =============================================================
// BandPolicy
// =============================================================

#[test]
fn toc_band_matches_default_insets() {
    let p = BandPolicy::TABLE_OF_CONTENTS;
    assert_eq!(p.top_inset_pct(), 20.0);
    assert_eq!(p.bottom_inset_pct(), 70.0);
    assert_eq!(p.threshold(), 0.0);
}

#[test]
fn counter_band_matches_default_insets() {
    let p = BandPolicy::POSITION_COUNTER;
    assert_eq!(p.top_inset_pct(), 30.0);
    assert_eq!(p.bottom_inset_pct(), 60.0);
}

#[test]
fn band_is_in_document_coordinates() {
    let (top, bottom) = BandPolicy::TABLE_OF_CONTENTS.band(&vp(1850.0));
    assert_eq!(top, 2010.0);
    assert_eq!(bottom, 2090.0);
}

#[test]
fn new_rejects_inset_out_of_range() {
    assert_eq!(BandPolicy::new(-1.0, 10.0, 0.0), Err(ConfigError::InsetOutOfRange(-1.0)));
    assert_eq!(BandPolicy::new(10.0, 101.0, 0.0), Err(ConfigError::InsetOutOfRange(101.0)));
    assert!(BandPolicy::new(f64::NAN, 10.0, 0.0).is_err());
}

#[test]
fn new_rejects_empty_band() {
    assert_eq!(
        BandPolicy::new(50.0, 50.0, 0.0),
        Err(ConfigError::EmptyBand { top: 50.0, bottom: 50.0 })
    );
}

#[test]
fn new_rejects_threshold_out_of_range() {
    assert_eq!(BandPolicy::new(0.0, 0.0, 1.5), Err(ConfigError::ThresholdOutOfRange(1.5)));
}

#[test]
fn root_margin_formats_like_css() {
    assert_eq!(BandPolicy::TABLE_OF_CONTENTS.root_margin(), "-20% 0px -70% 0px");
    assert_eq!(BandPolicy::POSITION_COUNTER.root_margin(), "-30% 0px -60% 0px");
    let full = BandPolicy::new(0.0, 0.0, 0.0).unwrap();
    assert_eq!(full.root_margin(), "0% 0px 0% 0px");
}

#[test]
fn deserialize_validates() {
    let ok: BandPolicy =
        serde_json::from_str(r#"{ "top_inset_pct": 20, "bottom_inset_pct": 70 }"#).unwrap();
    assert_eq!(ok, BandPolicy::TABLE_OF_CONTENTS);
    let bad = serde_json::from_str::<BandPolicy>(r#"{ "top_inset_pct": 80, "bottom_inset_pct": 30 }"#);
    assert!(bad.is_err());
}

#[test]
fn intersects_needs_positive_overlap() {
    let p = BandPolicy::TABLE_OF_CONTENTS;
    // band at scroll 0: [160, 240]
    assert!(p.intersects(&Section::new("a", 200.0, 10.0), &vp(0.0)));
    assert!(!p.intersects(&Section::new("edge", 240.0, 100.0), &vp(0.0)));
    assert!(!p.intersects(&Section::new("above", 0.0, 160.0), &vp(0.0)));
}

#[test]
fn zero_height_section_never_intersects() {
    let p = BandPolicy::TABLE_OF_CONTENTS;
    assert!(!p.intersects(&Section::new("empty", 200.0, 0.0), &vp(0.0)));
}

#[test]
fn threshold_requires_ratio_of_section() {
    let p = BandPolicy::new(0.0, 0.0, 0.5).unwrap();
    // viewport [0, 800]; section [600, 1000] -> 200/400 = 0.5
    assert!(p.intersects(&Section::new("half", 600.0, 400.0), &vp(0.0)));
    // section [700, 1100] -> 100/400 = 0.25
    assert!(!p.intersects(&Section::new("quarter", 700.0, 400.0), &vp(0.0)));
}

// =============================================================
// VisibilityTracker
// =============================================================

#[test]
fn first_sample_reports_every_section() {
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    let events = t.sample(&vp(0.0));
    assert_eq!(
        events,
        vec![VisibilityEvent::entered("s1"), VisibilityEvent::left("s2"), VisibilityEvent::left("s3")]
    );
}

#[test]
fn sample_reports_only_transitions() {
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    t.sample(&vp(0.0));
    assert!(t.sample(&vp(100.0)).is_empty());
    let events = t.sample(&vp(1850.0));
    assert_eq!(events, vec![VisibilityEvent::left("s1"), VisibilityEvent::entered("s3")]);
}

#[test]
fn example_scroll_lands_in_third_section() {
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    t.sample(&vp(1850.0));
    assert_eq!(t.is_intersecting("s3"), Some(true));
    assert_eq!(t.is_intersecting("s2"), Some(false));
}

#[test]
fn observe_refreshes_geometry_without_duplicating() {
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    t.observe(vec![Section::new("s2", 1000.0, 1200.0)]);
    assert_eq!(t.sections().len(), 3);
    assert_eq!(t.sections()[1].height, 1200.0);
}

#[test]
fn unobserve_forgets_section() {
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    t.sample(&vp(0.0));
    assert!(t.unobserve("s1"));
    assert!(!t.unobserve("s1"));
    assert_eq!(t.is_intersecting("s1"), None);
    assert!(!t.is_observed("s1"));
}

#[test]
fn deliver_drops_unknown_ids() {
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    assert!(!t.deliver(&VisibilityEvent::entered("ghost")));
    assert!(t.deliver(&VisibilityEvent::entered("s2")));
    assert_eq!(t.is_intersecting("s2"), Some(true));
}

#[test]
fn subscribers_receive_sampled_and_delivered_events() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut t = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    t.observe(three_sections());
    let sub = t.subscribe(|e| e.is_intersecting, move |e| sink.borrow_mut().push(e.section_id.clone()));
    t.sample(&vp(0.0));
    t.deliver(&VisibilityEvent::entered("s2"));
    assert!(t.unsubscribe(sub));
    t.deliver(&VisibilityEvent::entered("s3"));
    assert_eq!(*seen.borrow(), vec!["s1".to_owned(), "s2".to_owned()]);
}

#[test]
fn independent_trackers_use_their_own_bands() {
    let sections = vec![Section::new("a", 0.0, 250.0), Section::new("b", 250.0, 1000.0)];
    let mut toc = VisibilityTracker::new(BandPolicy::TABLE_OF_CONTENTS);
    let mut counter = VisibilityTracker::new(BandPolicy::POSITION_COUNTER);
    toc.observe(sections.clone());
    counter.observe(sections);
    toc.sample(&vp(0.0));
    counter.sample(&vp(0.0));
    // toc band [160, 240] sits in "a"; counter band [240, 320] spans both.
    assert_eq!(toc.is_intersecting("b"), Some(false));
    assert_eq!(counter.is_intersecting("b"), Some(true));
}
