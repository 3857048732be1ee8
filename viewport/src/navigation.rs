//! Section stepping (`j` / `k`) and anchor scroll targets.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::consts::{SECTION_STEP_BACK_SLACK_PX, SECTION_STEP_GAP_PX};
use crate::geometry::{Section, ViewportState};

/// Direction of a keyboard section step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    /// Map a key press to a step. Ignored while a modifier is held or while
    /// the user is typing into a field.
    #[must_use]
    pub fn from_key(key: &str, ctrl: bool, meta: bool, typing: bool) -> Option<Self> {
        if ctrl || meta || typing {
            return None;
        }
        match key {
            "j" => Some(Self::Next),
            "k" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// First section whose top sits below the navigation bar plus gap.
#[must_use]
pub fn next_section<'a>(sections: &'a [Section], viewport: &ViewportState) -> Option<&'a Section> {
    sections
        .iter()
        .find(|s| s.top - viewport.nav_height - SECTION_STEP_GAP_PX > viewport.scroll_y)
}

/// Last section whose top is comfortably above the current scroll offset.
#[must_use]
pub fn previous_section<'a>(sections: &'a [Section], viewport: &ViewportState) -> Option<&'a Section> {
    sections.iter().rev().find(|s| {
        s.top - viewport.nav_height - SECTION_STEP_GAP_PX < viewport.scroll_y - SECTION_STEP_BACK_SLACK_PX
    })
}

/// Resolve a step against the current layout.
#[must_use]
pub fn step<'a>(sections: &'a [Section], viewport: &ViewportState, step: Step) -> Option<&'a Section> {
    match step {
        Step::Next => next_section(sections, viewport),
        Step::Previous => previous_section(sections, viewport),
    }
}

/// Scroll offset that places `target_top` just below the navigation bar.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, nav_height: f64, gap: f64) -> f64 {
    target_top - nav_height - gap
}

/// The fragment id of an in-page link, or `None` for anything else.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
