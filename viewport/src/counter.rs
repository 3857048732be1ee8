//! Floating "current / total" section counter.
//!
//! The ordinal follows the same forward-only rule as the table of contents,
//! but with its own band. Visibility is a separate, scroll-driven check: the
//! counter shows only while the reader is inside the article body.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::active::ActiveSection;
use crate::geometry::Bounds;
use crate::visibility::VisibilityEvent;

/// Whether the counter should be shown. Both bounds are exclusive.
#[must_use]
pub fn counter_visible(scroll_y: f64, article_start: f64, article_end: f64, viewport_height: f64) -> bool {
    scroll_y > article_start && scroll_y < article_end - viewport_height
}

#[derive(Debug, Clone)]
pub struct PositionCounter {
    section_ids: Vec<String>,
    state: ActiveSection,
    /// 1-based; shows 1 before any section has been reported.
    current: usize,
    visible: bool,
}

impl PositionCounter {
    #[must_use]
    pub fn new(section_ids: Vec<String>) -> Self {
        Self { section_ids, state: ActiveSection::Unset, current: 1, visible: false }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.section_ids.len()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn active(&self) -> &ActiveSection {
        &self.state
    }

    /// Text rendered by the indicator, e.g. `2/5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.current, self.total())
    }

    /// Handle a visibility event. Returns the new ordinal when it changed.
    pub fn on_visibility(&mut self, event: &VisibilityEvent) -> Option<usize> {
        let index = self.section_ids.iter().position(|id| *id == event.section_id)?;
        if !self.state.advance(event) {
            return None;
        }
        self.current = index + 1;
        Some(self.current)
    }

    /// Re-evaluate visibility for a scroll tick. Returns the new flag only on
    /// a toggle. A missing article counts as zero-sized at the top.
    pub fn on_scroll(&mut self, scroll_y: f64, article: Option<Bounds>, viewport_height: f64) -> Option<bool> {
        let article = article.unwrap_or_default();
        let next = counter_visible(scroll_y, article.top, article.bottom(), viewport_height);
        if next == self.visible {
            return None;
        }
        self.visible = next;
        Some(next)
    }
}
