//! Share actions: provider links, copy-to-clipboard, and quoting a selection.
//!
//! URL components are passed in already percent-encoded; the browser layer
//! encodes them with `encodeURIComponent` semantics.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Window features for provider popups.
pub const POPUP_FEATURES: &str = "width=600,height=400";

/// Toast shown after the page link is copied.
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";

/// Toast shown after a quote is copied.
pub const QUOTE_COPIED_MESSAGE: &str = "Quote copied!";

/// Attribution appended to tweeted quotes.
pub const QUOTE_ATTRIBUTION: &str = "AI Fluency";

/// Shortest selection (exclusive) that offers the share tooltip.
pub const SELECTION_MIN_CHARS: usize = 20;

/// Longest selection (exclusive) that offers the share tooltip.
pub const SELECTION_MAX_CHARS: usize = 500;

/// Vertical gap between the tooltip and the selection.
pub const TOOLTIP_OFFSET_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    LinkedIn,
    Twitter,
    CopyLink,
}

impl ShareTarget {
    /// Classify a share button by its `aria-label` (or text content).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label.contains("LinkedIn") {
            Some(Self::LinkedIn)
        } else if label.contains("Twitter") {
            Some(Self::Twitter)
        } else if label.contains("Copy") || label.contains("Share") {
            Some(Self::CopyLink)
        } else {
            None
        }
    }

    /// Provider URL for popup targets; `None` for [`ShareTarget::CopyLink`].
    #[must_use]
    pub fn url(self, encoded_page_url: &str, encoded_title: &str) -> Option<String> {
        match self {
            Self::LinkedIn => {
                Some(format!("https://www.linkedin.com/sharing/share-offsite/?url={encoded_page_url}"))
            }
            Self::Twitter => {
                Some(format!("https://twitter.com/intent/tweet?url={encoded_page_url}&text={encoded_title}"))
            }
            Self::CopyLink => None,
        }
    }
}

/// Whether a selection is long enough, and short enough, to quote.
#[must_use]
pub fn selection_shareable(selected: &str) -> bool {
    let len = selected.trim().chars().count();
    len > SELECTION_MIN_CHARS && len < SELECTION_MAX_CHARS
}

/// Tweet body for a quoted selection (before encoding).
#[must_use]
pub fn quote_text(selected: &str) -> String {
    format!("\"{}\" — {QUOTE_ATTRIBUTION}", selected.trim())
}

/// Tweet intent URL for an encoded quote and page URL.
#[must_use]
pub fn quote_tweet_url(encoded_quote: &str, encoded_page_url: &str) -> String {
    format!("https://twitter.com/intent/tweet?text={encoded_quote}&url={encoded_page_url}")
}

/// Fixed-position anchor for the tooltip: centred above the selection.
#[must_use]
pub fn tooltip_anchor(rect_top: f64, rect_left: f64, rect_width: f64) -> (f64, f64) {
    (rect_top - TOOLTIP_OFFSET_PX, rect_left + rect_width / 2.0)
}
