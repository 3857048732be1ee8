//! Reading-progress projection.
//!
//! Progress is 0% when the tracked container's top edge has just entered the
//! bottom of the viewport and 100% when its bottom edge reaches the bottom of
//! the viewport. The output is always a finite value in `0..=100`.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::consts::PROGRESS_MAX;
use crate::geometry::Bounds;

/// Percentage of `container` that has passed the bottom of the viewport.
///
/// Degenerate geometry never produces NaN: a non-finite input yields 0, and
/// a container with no height steps from 0 to 100 at its end offset.
#[must_use]
pub fn reading_progress(scroll_y: f64, container: Bounds, viewport_height: f64) -> f64 {
    if !(scroll_y.is_finite() && container.top.is_finite() && container.height.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }
    let start = container.top - viewport_height;
    let end = container.bottom() - viewport_height;
    let total = end - start;
    if total <= 0.0 {
        return if scroll_y >= end { PROGRESS_MAX } else { 0.0 };
    }
    let progress = (scroll_y - start) / total * PROGRESS_MAX;
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, PROGRESS_MAX) }
}

/// Remembers the last emitted percentage so unchanged values are not re-rendered.
#[derive(Debug, Clone, Default)]
pub struct ProgressProjector {
    last: Option<f64>,
}

impl ProgressProjector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute progress. Returns the new value only when it changed.
    pub fn project(&mut self, scroll_y: f64, container: Bounds, viewport_height: f64) -> Option<f64> {
        let next = reading_progress(scroll_y, container, viewport_height);
        if self.last == Some(next) {
            return None;
        }
        self.last = Some(next);
        Some(next)
    }

    /// Last projected value, if any.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        self.last
    }
}
