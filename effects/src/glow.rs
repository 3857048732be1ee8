//! Cursor glow that trails the mouse.
//!
//! Every animation frame the glow moves a fixed fraction of the way towards
//! the last pointer position. The frame loop itself is modelled by
//! [`FrameTask`]: the host reschedules only while the task is running, so
//! stopping it (e.g. when the glow element is removed) ends the loop.

#[cfg(test)]
#[path = "glow_test.rs"]
mod glow_test;

/// Fraction of the remaining distance covered per frame.
pub const GLOW_LERP_FACTOR: f64 = 0.1;

/// Linear interpolation from `from` towards `to`.
#[must_use]
pub fn lerp(from: f64, to: f64, factor: f64) -> f64 {
    from + (to - from) * factor
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFollower {
    target: (f64, f64),
    position: (f64, f64),
    factor: f64,
}

impl Default for GlowFollower {
    fn default() -> Self {
        Self { target: (0.0, 0.0), position: (0.0, 0.0), factor: GLOW_LERP_FACTOR }
    }
}

impl GlowFollower {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest pointer position (client coordinates).
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    /// Advance one frame and return the new position.
    pub fn step(&mut self) -> (f64, f64) {
        self.position = (
            lerp(self.position.0, self.target.0, self.factor),
            lerp(self.position.1, self.target.1, self.factor),
        );
        self.position
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        self.target
    }
}

/// Lifecycle of a per-frame task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// A cancellable, self-rescheduling frame task.
#[derive(Debug, Clone, Default)]
pub struct FrameTask {
    state: TaskState,
    frames: u64,
}

impl FrameTask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> TaskState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TaskState::Running
    }

    /// Frames run since the task was created.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start (or restart) the task. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = TaskState::Running;
        true
    }

    /// Stop the task. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = TaskState::Stopped;
        true
    }

    /// Account for one frame. Returns whether the host should schedule the next.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.frames += 1;
        true
    }
}
