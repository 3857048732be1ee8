//! Navigation bar reaction to scrolling: solid background once the hero is
//! passed, and auto-hide while scrolling down.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Scroll offset past which the bar gets a solid background.
pub const SOLID_AFTER_PX: f64 = 100.0;

/// Scroll offset past which scrolling down hides the bar.
pub const HIDE_AFTER_PX: f64 = 200.0;

/// Transition applied to the bar on every update.
pub const NAVBAR_TRANSITION_CSS: &str = "transform 0.3s ease, background-color 0.3s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub solid: bool,
    pub hidden: bool,
}

impl NavbarStyle {
    /// Inline `transform` for the bar.
    #[must_use]
    pub fn transform(self) -> &'static str {
        if self.hidden { "translateY(-100%)" } else { "translateY(0)" }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavbarTracker {
    last_scroll: f64,
}

impl NavbarTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, current: f64) -> NavbarStyle {
        let style = NavbarStyle {
            solid: current > SOLID_AFTER_PX,
            hidden: current > self.last_scroll && current > HIDE_AFTER_PX,
        };
        self.last_scroll = current;
        style
    }

    #[must_use]
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}
