//! Layout snapshots consumed by the engine.
//!
//! Everything here is a plain value read from the live document on demand.
//! Nothing is cached: layout can change between two calls (resize, fonts
//! loading, images decoding), so hosts sample fresh on every event.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::collections::{HashMap, HashSet};

/// An addressable region of the article, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable element id; navigation links target it as `#<id>`.
    pub id: String,
    /// Offset of the section's top edge from the top of the document.
    pub top: f64,
    /// Rendered height of the section.
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Offset of the section's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Engine ids for section elements given their DOM ids, in document order.
///
/// Every returned id is distinct. An element without an id becomes
/// `section-<n>` (1-based position); a repeated or colliding id gets a
/// `-<n>` suffix. Generated ids never take an id some element declares.
#[must_use]
pub fn section_ids<I, S>(dom_ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let raw: Vec<String> = dom_ids.into_iter().map(Into::into).collect();
    let declared: HashSet<&str> = raw.iter().map(String::as_str).filter(|id| !id.is_empty()).collect();
    let mut used: HashSet<String> = HashSet::new();
    let mut ids = Vec::with_capacity(raw.len());
    for (i, id) in raw.iter().enumerate() {
        let n = i + 1;
        let mut candidate = if id.is_empty() { format!("section-{n}") } else { id.clone() };
        let generated = id.is_empty();
        while used.contains(&candidate) || (generated && declared.contains(candidate.as_str())) {
            candidate = format!("{candidate}-{n}");
        }
        used.insert(candidate.clone());
        ids.push(candidate);
    }
    ids
}

/// Top offset and height of a container element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Scroll and viewport metrics sampled for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
    /// Height of the layout viewport.
    pub viewport_height: f64,
    /// Height of the fixed navigation bar.
    pub nav_height: f64,
}

impl ViewportState {
    #[must_use]
    pub fn new(scroll_y: f64, viewport_height: f64, nav_height: f64) -> Self {
        Self { scroll_y, viewport_height, nav_height }
    }

    /// Same viewport, scrolled to `scroll_y`.
    #[must_use]
    pub fn at(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }
}

/// Read access to the current document layout.
///
/// Implementations must be cheap enough to call on every scroll tick.
pub trait GeometrySampler {
    /// Current scroll offset, viewport height and navigation bar height.
    fn viewport(&self) -> ViewportState;

    /// Bounds of the container registered under `name`, if it exists.
    fn container(&self, name: &str) -> Option<Bounds>;

    /// Tracked sections in document order.
    fn sections(&self) -> Vec<Section>;
}

/// A frozen layout. Used by tests and by hosts that sample once per event.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    pub viewport: ViewportState,
    pub containers: HashMap<String, Bounds>,
    pub sections: Vec<Section>,
}

impl StaticGeometry {
    #[must_use]
    pub fn new(viewport: ViewportState) -> Self {
        Self { viewport, ..Self::default() }
    }

    #[must_use]
    pub fn with_container(mut self, name: &str, bounds: Bounds) -> Self {
        self.containers.insert(name.to_owned(), bounds);
        self
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Move the frozen viewport to a new scroll offset.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
    }
}

impl GeometrySampler for StaticGeometry {
    fn viewport(&self) -> ViewportState {
        self.viewport
    }

    fn container(&self, name: &str) -> Option<Bounds> {
        self.containers.get(name).copied()
    }

    fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }
}
