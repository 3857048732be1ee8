use std::collections::HashSet;

use serde::Deserialize;

use crate::active::ActiveLinkProjector;
use crate::counter::PositionCounter;
use crate::geometry::{Bounds, GeometrySampler, Section, ViewportState};
use crate::observer::{Observer, Subscription};
use crate::progress::ProgressProjector;
use crate::visibility::{BandPolicy, VisibilityEvent, VisibilityTracker};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Name under which hosts register the article body with their sampler.
pub const ARTICLE_CONTAINER: &str = "article";

/// Render instructions returned from engine inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the progress bar width, in percent.
    SetProgress(f64),
    /// Mark one navigation link active and clear the rest. `index` is `None`
    /// when no link targets the section.
    SetActiveLink { section_id: String, index: Option<usize> },
    /// Update the counter's ordinal.
    SetCounter { current: usize, total: usize },
    /// Show or hide the counter.
    SetCounterVisible(bool),
}

/// Which tracker a platform visibility event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerKind {
    TableOfContents,
    PositionCounter,
}

/// Band policies for the two trackers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub toc_band: BandPolicy,
    pub counter_band: BandPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { toc_band: BandPolicy::TABLE_OF_CONTENTS, counter_band: BandPolicy::POSITION_COUNTER }
    }
}

/// Core engine state: every projection, none of the DOM.
///
/// Each instance owns its own trackers and projector state, so several
/// engines (one per test, say) never interfere.
#[derive(Debug)]
pub struct EngineCore {
    sections: Vec<Section>,
    toc: VisibilityTracker,
    counter_tracker: VisibilityTracker,
    progress: ProgressProjector,
    links: ActiveLinkProjector,
    counter: PositionCounter,
    actions: Observer<Action>,
}

impl EngineCore {
    /// Build an engine over `sections` (document order) and the `href`s of
    /// the table-of-contents links. A repeated id keeps only its first
    /// section, so the trackers and the counter agree on the set.
    #[must_use]
    pub fn new(config: EngineConfig, mut sections: Vec<Section>, link_hrefs: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        sections.retain(|s| seen.insert(s.id.clone()));
        let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
        let mut toc = VisibilityTracker::new(config.toc_band);
        toc.observe(sections.clone());
        let mut counter_tracker = VisibilityTracker::new(config.counter_band);
        counter_tracker.observe(sections.clone());
        Self {
            sections,
            toc,
            counter_tracker,
            progress: ProgressProjector::new(),
            links: ActiveLinkProjector::new(link_hrefs, ids.clone()),
            counter: PositionCounter::new(ids),
            actions: Observer::new(),
        }
    }

    // --- Subscriptions ---

    /// Listen for emitted actions accepted by `predicate`.
    pub fn subscribe<P, C>(&mut self, predicate: P, callback: C) -> Subscription
    where
        P: Fn(&Action) -> bool + 'static,
        C: FnMut(&Action) + 'static,
    {
        self.actions.subscribe(predicate, callback)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.actions.unsubscribe(subscription)
    }

    // --- Inputs ---

    /// Eager first computation: the counter's starting label and the initial
    /// progress. Counter visibility waits for the first scroll tick.
    pub fn start(&mut self, viewport: &ViewportState, article: Option<Bounds>) -> Vec<Action> {
        let mut actions =
            vec![Action::SetCounter { current: self.counter.current(), total: self.counter.total() }];
        actions.extend(self.project_progress(viewport, article));
        self.dispatch(actions)
    }

    /// Handle a scroll tick.
    pub fn on_scroll(&mut self, viewport: &ViewportState, article: Option<Bounds>) -> Vec<Action> {
        let actions = self.project_scroll(viewport, article);
        self.dispatch(actions)
    }

    /// Sample `sampler` and handle the result as a scroll tick.
    pub fn on_sample(&mut self, sampler: &impl GeometrySampler) -> Vec<Action> {
        let viewport = sampler.viewport();
        let article = sampler.container(ARTICLE_CONTAINER);
        self.on_scroll(&viewport, article)
    }

    /// Handle a platform-delivered visibility event.
    pub fn on_visibility(&mut self, kind: TrackerKind, event: &VisibilityEvent) -> Vec<Action> {
        let actions = match kind {
            TrackerKind::TableOfContents => {
                if !self.toc.deliver(event) {
                    return Vec::new();
                }
                self.project_toc(event).into_iter().collect()
            }
            TrackerKind::PositionCounter => {
                if !self.counter_tracker.deliver(event) {
                    return Vec::new();
                }
                self.project_counter(event).into_iter().collect()
            }
        };
        self.dispatch(actions)
    }

    /// Compute visibility transitions for both trackers from `viewport`
    /// instead of waiting for the platform. Used where no intersection
    /// facility exists, and by tests.
    pub fn simulate_visibility(&mut self, viewport: &ViewportState) -> Vec<Action> {
        let mut actions = Vec::new();
        for event in self.toc.sample(viewport) {
            actions.extend(self.project_toc(&event));
        }
        for event in self.counter_tracker.sample(viewport) {
            actions.extend(self.project_counter(&event));
        }
        self.dispatch(actions)
    }

    // --- Queries ---

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Band the platform observer for `kind` should use.
    #[must_use]
    pub fn policy(&self, kind: TrackerKind) -> BandPolicy {
        self.tracker(kind).policy()
    }

    /// Whether `id` is registered with `kind`'s tracker.
    #[must_use]
    pub fn is_observed(&self, kind: TrackerKind, id: &str) -> bool {
        self.tracker(kind).is_observed(id)
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.links.active().id()
    }

    #[must_use]
    pub fn link_states(&self) -> Vec<bool> {
        self.links.link_states()
    }

    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.progress.current()
    }

    #[must_use]
    pub fn counter(&self) -> &PositionCounter {
        &self.counter
    }

    // --- Internals ---

    fn tracker(&self, kind: TrackerKind) -> &VisibilityTracker {
        match kind {
            TrackerKind::TableOfContents => &self.toc,
            TrackerKind::PositionCounter => &self.counter_tracker,
        }
    }

    fn project_progress(&mut self, viewport: &ViewportState, article: Option<Bounds>) -> Option<Action> {
        let bounds = article?;
        self.progress.project(viewport.scroll_y, bounds, viewport.viewport_height).map(Action::SetProgress)
    }

    fn project_scroll(&mut self, viewport: &ViewportState, article: Option<Bounds>) -> Vec<Action> {
        let mut actions: Vec<Action> = self.project_progress(viewport, article).into_iter().collect();
        if let Some(visible) = self.counter.on_scroll(viewport.scroll_y, article, viewport.viewport_height) {
            actions.push(Action::SetCounterVisible(visible));
        }
        actions
    }

    fn project_toc(&mut self, event: &VisibilityEvent) -> Option<Action> {
        self.links
            .on_visibility(event)
            .map(|hl| Action::SetActiveLink { section_id: hl.section_id, index: hl.link_index })
    }

    fn project_counter(&mut self, event: &VisibilityEvent) -> Option<Action> {
        self.counter
            .on_visibility(event)
            .map(|current| Action::SetCounter { current, total: self.counter.total() })
    }

    fn dispatch(&mut self, actions: Vec<Action>) -> Vec<Action> {
        for action in &actions {
            self.actions.emit(action);
        }
        actions
    }
}
