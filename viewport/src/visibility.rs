//! Band policies and the visibility tracker.
//!
//! A [`BandPolicy`] shrinks the viewport to a horizontal strip (the
//! "intersection band"); a section is visible while it overlaps that strip.
//! Each consumer owns its own [`VisibilityTracker`] because each needs a
//! different band.
//!
//! In the browser the platform's intersection facility produces the events
//! and the host forwards them with [`VisibilityTracker::deliver`]. Natively
//! (and as a fallback) [`VisibilityTracker::sample`] computes the same
//! transitions from a [`ViewportState`].

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::consts::{COUNTER_BOTTOM_INSET_PCT, COUNTER_TOP_INSET_PCT, TOC_BOTTOM_INSET_PCT, TOC_TOP_INSET_PCT};
use crate::geometry::{Section, ViewportState};
use crate::observer::{Observer, Subscription};

/// Rejected band policy parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An inset is negative, above 100, or not a number.
    #[error("band inset must be within 0..=100 percent, got {0}")]
    InsetOutOfRange(f64),
    /// The two insets leave no band at all.
    #[error("band insets leave no visible band: top {top}% + bottom {bottom}% >= 100%")]
    EmptyBand { top: f64, bottom: f64 },
    /// The intersection ratio threshold is outside `0..=1`.
    #[error("intersection threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f64),
}

/// A transition of one section into or out of a tracker's band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityEvent {
    pub section_id: String,
    pub is_intersecting: bool,
}

impl VisibilityEvent {
    #[must_use]
    pub fn entered(section_id: impl Into<String>) -> Self {
        Self { section_id: section_id.into(), is_intersecting: true }
    }

    #[must_use]
    pub fn left(section_id: impl Into<String>) -> Self {
        Self { section_id: section_id.into(), is_intersecting: false }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBandPolicy {
    top_inset_pct: f64,
    bottom_inset_pct: f64,
    #[serde(default)]
    threshold: f64,
}

/// Vertical insets (percent of viewport height) and intersection threshold.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawBandPolicy")]
pub struct BandPolicy {
    top_inset_pct: f64,
    bottom_inset_pct: f64,
    threshold: f64,
}

impl TryFrom<RawBandPolicy> for BandPolicy {
    type Error = ConfigError;

    fn try_from(raw: RawBandPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.top_inset_pct, raw.bottom_inset_pct, raw.threshold)
    }
}

impl BandPolicy {
    /// Narrow band in the upper-middle of the viewport used for table-of-contents tracking.
    pub const TABLE_OF_CONTENTS: Self =
        Self { top_inset_pct: TOC_TOP_INSET_PCT, bottom_inset_pct: TOC_BOTTOM_INSET_PCT, threshold: 0.0 };

    /// Band used by the floating section counter.
    pub const POSITION_COUNTER: Self =
        Self { top_inset_pct: COUNTER_TOP_INSET_PCT, bottom_inset_pct: COUNTER_BOTTOM_INSET_PCT, threshold: 0.0 };

    /// Build a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an inset is outside `0..=100`, the insets
    /// sum to 100 or more, or the threshold is outside `0..=1`.
    pub fn new(top_inset_pct: f64, bottom_inset_pct: f64, threshold: f64) -> Result<Self, ConfigError> {
        for inset in [top_inset_pct, bottom_inset_pct] {
            if !(0.0..=100.0).contains(&inset) {
                return Err(ConfigError::InsetOutOfRange(inset));
            }
        }
        if top_inset_pct + bottom_inset_pct >= 100.0 {
            return Err(ConfigError::EmptyBand { top: top_inset_pct, bottom: bottom_inset_pct });
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self { top_inset_pct, bottom_inset_pct, threshold })
    }

    #[must_use]
    pub fn top_inset_pct(&self) -> f64 {
        self.top_inset_pct
    }

    #[must_use]
    pub fn bottom_inset_pct(&self) -> f64 {
        self.bottom_inset_pct
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The band as `(top, bottom)` in document coordinates.
    #[must_use]
    pub fn band(&self, viewport: &ViewportState) -> (f64, f64) {
        let vh = viewport.viewport_height;
        let top = viewport.scroll_y + vh * self.top_inset_pct / 100.0;
        let bottom = viewport.scroll_y + vh - vh * self.bottom_inset_pct / 100.0;
        (top, bottom)
    }

    /// Whether `section` counts as intersecting the band.
    ///
    /// Overlap must be positive; zero-height sections never intersect.
    #[must_use]
    pub fn intersects(&self, section: &Section, viewport: &ViewportState) -> bool {
        if section.height <= 0.0 {
            return false;
        }
        let (band_top, band_bottom) = self.band(viewport);
        let overlap = section.bottom().min(band_bottom) - section.top.max(band_top);
        overlap > 0.0 && overlap / section.height >= self.threshold
    }

    /// CSS margin string for the platform observer, e.g. `-20% 0px -70% 0px`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("{} 0px {} 0px", css_inset(self.top_inset_pct), css_inset(self.bottom_inset_pct))
    }
}

fn css_inset(pct: f64) -> String {
    if pct <= 0.0 { "0%".to_owned() } else { format!("-{pct}%") }
}

/// Tracks which registered sections currently intersect one band.
#[derive(Debug)]
pub struct VisibilityTracker {
    policy: BandPolicy,
    sections: Vec<Section>,
    /// Last reported state per section; absent until first reported.
    reported: HashMap<String, bool>,
    events: Observer<VisibilityEvent>,
}

impl VisibilityTracker {
    #[must_use]
    pub fn new(policy: BandPolicy) -> Self {
        Self { policy, sections: Vec::new(), reported: HashMap::new(), events: Observer::new() }
    }

    #[must_use]
    pub fn policy(&self) -> BandPolicy {
        self.policy
    }

    /// Registered sections in registration order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn is_observed(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// Last reported state for `id`, or `None` if nothing was reported yet.
    #[must_use]
    pub fn is_intersecting(&self, id: &str) -> Option<bool> {
        self.reported.get(id).copied()
    }

    /// Register sections. Re-observing a known id refreshes its geometry
    /// and keeps its position and reported state.
    pub fn observe(&mut self, sections: impl IntoIterator<Item = Section>) {
        for section in sections {
            if let Some(existing) = self.sections.iter_mut().find(|s| s.id == section.id) {
                *existing = section;
            } else {
                self.sections.push(section);
            }
        }
    }

    /// Stop tracking `id`. Returns `false` if it was not registered.
    pub fn unobserve(&mut self, id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        self.reported.remove(id);
        self.sections.len() != before
    }

    /// Listen for visibility transitions accepted by `predicate`.
    pub fn subscribe<P, C>(&mut self, predicate: P, callback: C) -> Subscription
    where
        P: Fn(&VisibilityEvent) -> bool + 'static,
        C: FnMut(&VisibilityEvent) + 'static,
    {
        self.events.subscribe(predicate, callback)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.events.unsubscribe(subscription)
    }

    /// Recompute intersections for `viewport` and emit a transition for
    /// every section whose state changed, in registration order. The first
    /// sample after a section is observed always reports it.
    pub fn sample(&mut self, viewport: &ViewportState) -> Vec<VisibilityEvent> {
        let mut changed = Vec::new();
        for section in &self.sections {
            let now = self.policy.intersects(section, viewport);
            if self.reported.get(&section.id) != Some(&now) {
                changed.push(VisibilityEvent { section_id: section.id.clone(), is_intersecting: now });
            }
        }
        for event in &changed {
            self.reported.insert(event.section_id.clone(), event.is_intersecting);
            self.events.emit(event);
        }
        changed
    }

    /// Forward a platform-produced transition. Events for unregistered ids
    /// are dropped and reported as `false`.
    pub fn deliver(&mut self, event: &VisibilityEvent) -> bool {
        if !self.is_observed(&event.section_id) {
            return false;
        }
        self.reported.insert(event.section_id.clone(), event.is_intersecting);
        self.events.emit(event);
        true
    }
}
