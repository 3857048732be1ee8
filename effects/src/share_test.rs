#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn label_classification() {
    assert_eq!(ShareTarget::from_label("Share on LinkedIn"), Some(ShareTarget::LinkedIn));
    assert_eq!(ShareTarget::from_label("Share on Twitter"), Some(ShareTarget::Twitter));
    assert_eq!(ShareTarget::from_label("Copy link"), Some(ShareTarget::CopyLink));
    assert_eq!(ShareTarget::from_label("Share"), Some(ShareTarget::CopyLink));
    assert_eq!(ShareTarget::from_label("Print"), None);
}

#[test]
fn linkedin_url_carries_page_url() {
    let url = ShareTarget::LinkedIn.url("https%3A%2F%2Fblog.test%2Fa", "T");
    assert_eq!(
        url.as_deref(),
        Some("https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fblog.test%2Fa")
    );
}

#[test]
fn twitter_url_carries_url_and_title() {
    let url = ShareTarget::Twitter.url("u", "Hello%20World");
    assert_eq!(url.as_deref(), Some("https://twitter.com/intent/tweet?url=u&text=Hello%20World"));
}

#[test]
fn copy_link_has_no_url() {
    assert_eq!(ShareTarget::CopyLink.url("u", "t"), None);
}

#[test]
fn selection_bounds_are_exclusive() {
    assert!(!selection_shareable(&"a".repeat(20)));
    assert!(selection_shareable(&"a".repeat(21)));
    assert!(selection_shareable(&"a".repeat(499)));
    assert!(!selection_shareable(&"a".repeat(500)));
}

#[test]
fn selection_length_ignores_surrounding_whitespace() {
    let padded = format!("   {}   ", "b".repeat(20));
    assert!(!selection_shareable(&padded));
}

#[test]
fn quote_text_wraps_and_attributes() {
    assert_eq!(quote_text("  models predict tokens "), "\"models predict tokens\" — AI Fluency");
}

#[test]
fn quote_tweet_url_orders_text_first() {
    assert_eq!(quote_tweet_url("q", "u"), "https://twitter.com/intent/tweet?text=q&url=u");
}

#[test]
fn tooltip_sits_centred_above_selection() {
    assert_eq!(tooltip_anchor(300.0, 100.0, 200.0), (250.0, 200.0));
}
