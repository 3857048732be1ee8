#![allow(clippy::float_cmp)]

use super::*;

// --- Section / Bounds ---

#[test]
fn section_bottom_is_top_plus_height() {
    let s = Section::new("intro", 120.0, 480.0);
    assert_eq!(s.bottom(), 600.0);
    assert_eq!(s.id, "intro");
}

#[test]
fn bounds_bottom_is_top_plus_height() {
    assert_eq!(Bounds::new(500.0, 4000.0).bottom(), 4500.0);
}

#[test]
fn viewport_at_keeps_heights() {
    let vp = ViewportState::new(0.0, 800.0, 80.0).at(1234.0);
    assert_eq!(vp.scroll_y, 1234.0);
    assert_eq!(vp.viewport_height, 800.0);
    assert_eq!(vp.nav_height, 80.0);
}

// --- StaticGeometry ---

#[test]
fn static_geometry_reports_named_container() {
    let geo = StaticGeometry::new(ViewportState::new(0.0, 800.0, 80.0))
        .with_container("article", Bounds::new(500.0, 4000.0));
    assert_eq!(geo.container("article"), Some(Bounds::new(500.0, 4000.0)));
    assert_eq!(geo.container("missing"), None);
}

#[test]
fn static_geometry_scroll_to_updates_viewport_only() {
    let mut geo = StaticGeometry::new(ViewportState::new(0.0, 800.0, 80.0))
        .with_sections(vec![Section::new("a", 0.0, 100.0)]);
    geo.scroll_to(300.0);
    assert_eq!(geo.viewport().scroll_y, 300.0);
    assert_eq!(geo.viewport().nav_height, 80.0);
    assert_eq!(geo.sections().len(), 1);
}

// --- section_ids ---

#[test]
fn section_ids_name_anonymous_sections_by_position() {
    assert_eq!(section_ids(["intro", "", "outro"]), vec!["intro", "section-2", "outro"]);
}

#[test]
fn section_ids_keep_duplicates_distinct() {
    assert_eq!(section_ids(["setup", "setup", "setup"]), vec!["setup", "setup-2", "setup-3"]);
}

#[test]
fn generated_ids_never_take_a_declared_id() {
    let ids = section_ids(["", "section-1"]);
    assert_eq!(ids, vec!["section-1-1", "section-1"]);
}
