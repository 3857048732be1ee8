//! Active-section state machine and table-of-contents highlighting.
//!
//! The state only moves forward: once a section is active, the page keeps an
//! active section until it is torn down. Events reporting a section leaving
//! the band are ignored, so scrolling quickly past the last section can leave
//! a stale highlight. When several sections enter in one batch the last one
//! delivered wins.

#[cfg(test)]
#[path = "active_test.rs"]
mod active_test;

use crate::visibility::VisibilityEvent;

/// Which section, if any, is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveSection {
    /// Nothing has entered the band since the page loaded.
    #[default]
    Unset,
    /// The id of the last section reported as entering the band.
    Section(String),
}

impl ActiveSection {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Section(id) => Some(id),
        }
    }

    /// Apply a visibility event. Returns `true` when the active id changed.
    pub fn advance(&mut self, event: &VisibilityEvent) -> bool {
        if !event.is_intersecting || self.id() == Some(event.section_id.as_str()) {
            return false;
        }
        *self = Self::Section(event.section_id.clone());
        true
    }
}

/// A highlight change for the navigation links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHighlight {
    /// Section that became active.
    pub section_id: String,
    /// Index of the link targeting `#<section_id>`, or `None` when no link
    /// matches (every link is cleared in that case).
    pub link_index: Option<usize>,
}

/// Maps the active section onto exactly one highlighted navigation link.
#[derive(Debug, Clone, Default)]
pub struct ActiveLinkProjector {
    /// `href` attribute of each navigation link, in document order.
    hrefs: Vec<String>,
    /// Section ids this projector accepts.
    section_ids: Vec<String>,
    state: ActiveSection,
}

impl ActiveLinkProjector {
    #[must_use]
    pub fn new(hrefs: Vec<String>, section_ids: Vec<String>) -> Self {
        Self { hrefs, section_ids, state: ActiveSection::Unset }
    }

    #[must_use]
    pub fn active(&self) -> &ActiveSection {
        &self.state
    }

    /// Index of the link whose `href` is `#<id>`.
    #[must_use]
    pub fn link_for(&self, id: &str) -> Option<usize> {
        self.hrefs
            .iter()
            .position(|href| href.strip_prefix('#') == Some(id))
    }

    /// Handle a visibility event. Returns the highlight to render, or `None`
    /// when nothing changes (leaving events, repeats, unknown sections).
    pub fn on_visibility(&mut self, event: &VisibilityEvent) -> Option<LinkHighlight> {
        if !self.section_ids.iter().any(|id| *id == event.section_id) {
            return None;
        }
        if !self.state.advance(event) {
            return None;
        }
        Some(LinkHighlight { section_id: event.section_id.clone(), link_index: self.link_for(&event.section_id) })
    }

    /// Active flag for every link, in link order.
    #[must_use]
    pub fn link_states(&self) -> Vec<bool> {
        let active = self.state.id().and_then(|id| self.link_for(id));
        (0..self.hrefs.len()).map(|i| Some(i) == active).collect()
    }
}
