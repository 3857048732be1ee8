#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::geometry::StaticGeometry;

// =============================================================
// Helpers
// =============================================================

fn sections() -> Vec<Section> {
    vec![
        Section::new("s1", 0.0, 1000.0),
        Section::new("s2", 1000.0, 1000.0),
        Section::new("s3", 2000.0, 1000.0),
    ]
}

fn hrefs() -> Vec<String> {
    vec!["#s1".to_owned(), "#s2".to_owned(), "#s3".to_owned()]
}

fn engine() -> EngineCore {
    EngineCore::new(EngineConfig::default(), sections(), hrefs())
}

fn vp(scroll_y: f64) -> ViewportState {
    ViewportState::new(scroll_y, 800.0, 80.0)
}

fn article() -> Option<Bounds> {
    Some(Bounds::new(500.0, 4000.0))
}

// =============================================================
// Start / scroll
// =============================================================

#[test]
fn start_reports_counter_and_initial_progress() {
    let mut e = engine();
    let actions = e.start(&vp(0.0), article());
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], Action::SetCounter { current: 1, total: 3 });
    let Action::SetProgress(pct) = actions[1] else {
        panic!("expected progress, got {:?}", actions[1]);
    };
    assert!((pct - 7.5).abs() < 1e-9);
}

#[test]
fn start_mid_article_leaves_counter_hidden_until_first_scroll() {
    let mut e = engine();
    let actions = e.start(&vp(1700.0), article());
    assert_eq!(actions, vec![Action::SetCounter { current: 1, total: 3 }, Action::SetProgress(50.0)]);
    assert!(!e.counter().is_visible());
    assert_eq!(e.on_scroll(&vp(1700.0), article()), vec![Action::SetCounterVisible(true)]);
}

#[test]
fn scroll_to_midpoint_reports_fifty_percent_and_shows_counter() {
    let mut e = engine();
    e.start(&vp(0.0), article());
    let actions = e.on_scroll(&vp(1700.0), article());
    assert_eq!(actions, vec![Action::SetProgress(50.0), Action::SetCounterVisible(true)]);
    assert_eq!(e.progress(), Some(50.0));
    assert!(e.counter().is_visible());
}

#[test]
fn repeated_scroll_to_same_offset_emits_nothing() {
    let mut e = engine();
    e.on_scroll(&vp(1700.0), article());
    assert!(e.on_scroll(&vp(1700.0), article()).is_empty());
}

#[test]
fn scroll_without_article_only_touches_counter_visibility() {
    let mut e = engine();
    assert!(e.on_scroll(&vp(1700.0), None).is_empty());
    assert_eq!(e.progress(), None);
}

#[test]
fn on_sample_reads_article_container() {
    let mut e = engine();
    let geo = StaticGeometry::new(vp(3700.0)).with_container(ARTICLE_CONTAINER, Bounds::new(500.0, 4000.0));
    let actions = e.on_sample(&geo);
    assert_eq!(actions, vec![Action::SetProgress(100.0)]);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn example_scroll_activates_third_link() {
    let mut e = engine();
    let actions = e.simulate_visibility(&vp(1850.0));
    assert!(actions.contains(&Action::SetActiveLink { section_id: "s3".to_owned(), index: Some(2) }));
    assert_eq!(e.active_section(), Some("s3"));
    assert_eq!(e.link_states(), vec![false, false, true]);
}

#[test]
fn platform_events_last_writer_wins() {
    let mut e = engine();
    for id in ["s1", "s3", "s2"] {
        e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered(id));
    }
    assert_eq!(e.active_section(), Some("s2"));
}

#[test]
fn replayed_event_is_noop() {
    let mut e = engine();
    let first = e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered("s2"));
    assert_eq!(first.len(), 1);
    let again = e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered("s2"));
    assert!(again.is_empty());
}

#[test]
fn leaving_event_keeps_stale_highlight() {
    let mut e = engine();
    e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered("s3"));
    e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::left("s3"));
    assert_eq!(e.active_section(), Some("s3"));
}

#[test]
fn unknown_section_event_is_dropped() {
    let mut e = engine();
    assert!(e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered("ghost")).is_empty());
    assert!(e.on_visibility(TrackerKind::PositionCounter, &VisibilityEvent::entered("ghost")).is_empty());
    assert_eq!(e.active_section(), None);
}

#[test]
fn active_section_is_always_observed() {
    let mut e = engine();
    for id in ["s2", "ghost", "s3", "s1", "s4"] {
        e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered(id));
        e.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::left(id));
        let active = e.active_section().expect("a section was entered");
        assert!(e.is_observed(TrackerKind::TableOfContents, active), "{active} is not observed");
    }
    assert_eq!(e.active_section(), Some("s1"));
}

#[test]
fn repeated_section_id_is_tracked_once() {
    let mut doubled = sections();
    doubled.push(Section::new("s2", 3000.0, 1000.0));
    let mut e = EngineCore::new(EngineConfig::default(), doubled, hrefs());
    assert_eq!(e.sections().len(), 3);
    assert_eq!(e.counter().total(), 3);
    let actions = e.on_visibility(TrackerKind::PositionCounter, &VisibilityEvent::entered("s2"));
    assert_eq!(actions, vec![Action::SetCounter { current: 2, total: 3 }]);
}

#[test]
fn policy_reports_each_band() {
    let e = engine();
    assert_eq!(e.policy(TrackerKind::TableOfContents), BandPolicy::TABLE_OF_CONTENTS);
    assert_eq!(e.policy(TrackerKind::PositionCounter), BandPolicy::POSITION_COUNTER);
}

#[test]
fn counter_tracker_is_independent_of_toc() {
    let mut e = engine();
    let actions = e.on_visibility(TrackerKind::PositionCounter, &VisibilityEvent::entered("s2"));
    assert_eq!(actions, vec![Action::SetCounter { current: 2, total: 3 }]);
    assert_eq!(e.active_section(), None);
}

#[test]
fn simulated_visibility_updates_both_projections() {
    let mut e = engine();
    e.simulate_visibility(&vp(0.0));
    let actions = e.simulate_visibility(&vp(1850.0));
    assert_eq!(
        actions,
        vec![
            Action::SetActiveLink { section_id: "s3".to_owned(), index: Some(2) },
            Action::SetCounter { current: 3, total: 3 },
        ]
    );
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscribers_receive_matching_actions() {
    let widths = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&widths);
    let mut e = engine();
    e.subscribe(
        |a| matches!(a, Action::SetProgress(_)),
        move |a| {
            if let Action::SetProgress(pct) = a {
                sink.borrow_mut().push(*pct);
            }
        },
    );
    e.start(&vp(-300.0), article());
    e.on_scroll(&vp(1700.0), article());
    assert_eq!(*widths.borrow(), vec![0.0, 50.0]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let mut e = engine();
    let sub = e.subscribe(|_| true, move |_| *sink.borrow_mut() += 1);
    e.start(&vp(0.0), article());
    assert!(e.unsubscribe(sub));
    e.on_scroll(&vp(1700.0), article());
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn engines_do_not_share_state() {
    let mut a = engine();
    let b = engine();
    a.on_visibility(TrackerKind::TableOfContents, &VisibilityEvent::entered("s1"));
    assert_eq!(a.active_section(), Some("s1"));
    assert_eq!(b.active_section(), None);
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_deserializes_partial_override() {
    let cfg: EngineConfig =
        serde_json::from_str(r#"{ "toc_band": { "top_inset_pct": 10, "bottom_inset_pct": 80 } }"#).unwrap();
    assert_eq!(cfg.toc_band.top_inset_pct(), 10.0);
    assert_eq!(cfg.counter_band, BandPolicy::POSITION_COUNTER);
}
