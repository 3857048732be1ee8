//! Shared numeric constants for the viewport crate.

// ── Visibility bands ────────────────────────────────────────────

/// Table-of-contents band: inset from the top of the viewport, in percent.
pub const TOC_TOP_INSET_PCT: f64 = 20.0;

/// Table-of-contents band: inset from the bottom of the viewport, in percent.
pub const TOC_BOTTOM_INSET_PCT: f64 = 70.0;

/// Position-counter band: inset from the top of the viewport, in percent.
pub const COUNTER_TOP_INSET_PCT: f64 = 30.0;

/// Position-counter band: inset from the bottom of the viewport, in percent.
pub const COUNTER_BOTTOM_INSET_PCT: f64 = 60.0;

// ── Progress ────────────────────────────────────────────────────

/// Upper bound of the reading-progress percentage.
pub const PROGRESS_MAX: f64 = 100.0;

// ── Keyboard navigation ─────────────────────────────────────────

/// Extra clearance below the navigation bar when deciding which section is "next".
pub const SECTION_STEP_GAP_PX: f64 = 60.0;

/// Slack subtracted from the scroll offset when stepping to the previous section.
pub const SECTION_STEP_BACK_SLACK_PX: f64 = 100.0;

// ── Anchor scrolling ────────────────────────────────────────────

/// Gap left above an anchor target on the homepage.
pub const HOME_ANCHOR_GAP_PX: f64 = 20.0;

/// Gap left above an anchor target on article pages.
pub const ARTICLE_ANCHOR_GAP_PX: f64 = 40.0;
