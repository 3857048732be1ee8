//! One-shot entrance animations.
//!
//! Elements start hidden and offset; the first time one scrolls into view it
//! gains [`ANIMATE_IN_CLASS`] and is never watched again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Class that moves an element to its resting state.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Stylesheet injected once so [`ANIMATE_IN_CLASS`] wins over inline styles.
pub const ANIMATE_IN_CSS: &str =
    ".animate-in {\n    opacity: 1 !important;\n    transform: translateY(0) !important;\n}";

/// Easing shared by card reveals.
pub const REVEAL_EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

/// Observer threshold for cards and callouts.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset for cards and callouts, so they reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observer threshold for section headings.
pub const HEADING_THRESHOLD: f64 = 0.5;

/// Starting offset and timing for one family of revealed elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Initial CSS transform, e.g. `translateY(40px)`.
    pub initial_transform: &'static str,
    pub duration_ms: u32,
    /// Delay added per element index; zero for un-staggered reveals.
    pub stagger_ms: u32,
    /// `None` uses [`REVEAL_EASING`] with stagger; `Some` is a plain easing keyword.
    pub easing: Option<&'static str>,
}

impl RevealStyle {
    /// Homepage cards.
    pub const HOME: Self =
        Self { initial_transform: "translateY(40px)", duration_ms: 800, stagger_ms: 50, easing: None };

    /// Article callouts, stats and cards.
    pub const ARTICLE: Self =
        Self { initial_transform: "translateY(30px)", duration_ms: 600, stagger_ms: 30, easing: None };

    /// Article section headings.
    pub const HEADING: Self =
        Self { initial_transform: "translateX(-20px)", duration_ms: 500, stagger_ms: 0, easing: Some("ease") };

    /// Inline `transition` value for the element at `index`.
    #[must_use]
    pub fn transition(&self, index: u32) -> String {
        let duration = self.duration_ms;
        match self.easing {
            Some(easing) => format!("opacity {duration}ms {easing}, transform {duration}ms {easing}"),
            None => {
                let delay = index.saturating_mul(self.stagger_ms);
                format!(
                    "opacity {duration}ms {REVEAL_EASING} {delay}ms, transform {duration}ms {REVEAL_EASING} {delay}ms"
                )
            }
        }
    }
}

/// Tracks which watched elements have already been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    pending: HashSet<usize>,
}

impl RevealSet {
    /// Watch elements `0..count`.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { pending: (0..count).collect() }
    }

    /// Handle a visibility report. Returns `true` exactly once per element:
    /// the first time it intersects. The caller then adds the class and
    /// stops observing it.
    pub fn on_visibility(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.pending.remove(&index)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}
