//! Simulated newsletter signup.
//!
//! No request is made: the button shows progress, then success, then resets.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

/// Delay before the fake submission "succeeds".
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// How long the success state is shown before the form resets.
pub const SUCCESS_HOLD_MS: u32 = 2000;

/// Button background while showing success.
pub const SUCCESS_COLOR: &str = "#10b981";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Subscribing,
    Subscribed,
}

impl SubmitState {
    /// Button inner HTML; `None` means restore the original markup.
    #[must_use]
    pub fn button_html(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Subscribing => Some("<span>Subscribing...</span>"),
            Self::Subscribed => Some("<span>Subscribed!</span>"),
        }
    }

    #[must_use]
    pub fn button_disabled(self) -> bool {
        self != Self::Idle
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    state: SubmitState,
}

impl NewsletterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Start a submission. Returns the delay until [`Self::advance`] should
    /// run, or `None` if a submission is already in flight.
    pub fn submit(&mut self) -> Option<u32> {
        if self.state != SubmitState::Idle {
            return None;
        }
        self.state = SubmitState::Subscribing;
        Some(SUBMIT_DELAY_MS)
    }

    /// Move to the next state. Returns the delay until the following
    /// advance, or `None` once the form is idle again.
    pub fn advance(&mut self) -> Option<u32> {
        match self.state {
            SubmitState::Idle => None,
            SubmitState::Subscribing => {
                self.state = SubmitState::Subscribed;
                Some(SUCCESS_HOLD_MS)
            }
            SubmitState::Subscribed => {
                self.state = SubmitState::Idle;
                None
            }
        }
    }
}
