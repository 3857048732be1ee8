//! Transient notifications.
//!
//! At most one toast is on screen. Showing a new one replaces the old one
//! immediately. Each toast fades in on the next frame, stays for
//! [`TOAST_VISIBLE_MS`], then fades out over [`TOAST_FADE_MS`] and is removed.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_FADE_MS: u32 = 300;

/// Where a toast is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Appended but not yet faded in.
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl ToastPhase {
    /// Phase `elapsed_ms` after the toast was shown.
    #[must_use]
    pub fn at(elapsed_ms: u32) -> Self {
        match elapsed_ms {
            0 => Self::Entering,
            t if t < TOAST_VISIBLE_MS => Self::Visible,
            t if t < TOAST_VISIBLE_MS + TOAST_FADE_MS => Self::Leaving,
            _ => Self::Removed,
        }
    }

    /// Inline `opacity` and `transform` for this phase.
    #[must_use]
    pub fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Visible => ("1", "translateX(-50%) translateY(0)"),
            Self::Entering | Self::Leaving | Self::Removed => ("0", "translateX(-50%) translateY(20px)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// The single on-screen toast slot.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show `message`. Returns the new toast and the one it replaced, if any.
    pub fn show(&mut self, message: impl Into<String>) -> (Toast, Option<Toast>) {
        let toast = Toast { id: self.next_id, message: message.into() };
        self.next_id += 1;
        let replaced = self.current.replace(toast.clone());
        (toast, replaced)
    }

    /// Remove toast `id` if it is still the current one. Timers belonging to
    /// a replaced toast therefore never remove its successor.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}
