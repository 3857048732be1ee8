//! Page settings.
//!
//! Defaults reproduce the shipped pages. A page may override any subset by
//! embedding JSON in `<script type="application/json" id="fluency-config">`;
//! unknown keys are ignored and missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use effects::count_up::COUNT_UP_VISIBILITY_THRESHOLD;
use effects::reveal::{HEADING_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use effects::theme::THEME_TRANSITION_MS;
use effects::toast::{TOAST_FADE_MS, TOAST_VISIBLE_MS};
use serde::Deserialize;
use viewport::consts::{ARTICLE_ANCHOR_GAP_PX, HOME_ANCHOR_GAP_PX};
use viewport::engine::EngineConfig;

/// Id of the inline JSON override element.
pub const CONFIG_ELEMENT_ID: &str = "fluency-config";

/// CSS selectors for every element the page enhances.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub theme_toggle: String,
    pub cursor_glow: String,
    pub counters: String,
    pub home_reveal: String,
    pub article_reveal: String,
    pub section_headings: String,
    pub mobile_menu_button: String,
    pub newsletter_form: String,
    pub gradient_orbs: String,
    pub tilt_cards: String,
    pub home_anchors: String,
    pub article: String,
    pub progress_bar: String,
    pub toc_links: String,
    pub sections: String,
    pub article_anchors: String,
    pub share_buttons: String,
    pub reading_time: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".nav".into(),
            theme_toggle: ".theme-toggle".into(),
            cursor_glow: ".cursor-glow".into(),
            counters: ".counter".into(),
            home_reveal: ".featured-article, .perspective-card, .framework-item, .future-card, \
                          .newsletter-content"
                .into(),
            article_reveal: ".highlight-stat, .callout, .data-visualization, .pull-quote, \
                             .analogy-box, .comparison-grid, .concept-card, .spectrum-visual, \
                             .limitation-card, .risk-cascade, .method-card, .takeaway-card, \
                             .next-article"
                .into(),
            section_headings: ".section-heading".into(),
            mobile_menu_button: ".mobile-menu-btn".into(),
            newsletter_form: ".newsletter-form".into(),
            gradient_orbs: ".gradient-orb".into(),
            tilt_cards: ".perspective-card, .future-card".into(),
            home_anchors: "a[href^=\"#\"]".into(),
            article: ".article-main".into(),
            progress_bar: ".progress-bar".into(),
            toc_links: ".toc-link".into(),
            sections: ".article-section".into(),
            article_anchors: ".toc-link, a[href^=\"#\"]".into(),
            share_buttons: ".share-btn, .share-article".into(),
            reading_time: "[data-reading-time]".into(),
        }
    }
}

/// Thresholds and margins for one-shot reveal observers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub heading_threshold: f64,
    pub counter_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.into(),
            heading_threshold: HEADING_THRESHOLD,
            counter_threshold: COUNT_UP_VISIBILITY_THRESHOLD,
        }
    }
}

/// Durations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
    pub theme_transition_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast_visible_ms: TOAST_VISIBLE_MS,
            toast_fade_ms: TOAST_FADE_MS,
            theme_transition_ms: THEME_TRANSITION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub engine: EngineConfig,
    pub reveal: RevealConfig,
    pub timings: Timings,
    pub home_anchor_gap_px: f64,
    pub article_anchor_gap_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            engine: EngineConfig::default(),
            reveal: RevealConfig::default(),
            timings: Timings::default(),
            home_anchor_gap_px: HOME_ANCHOR_GAP_PX,
            article_anchor_gap_px: ARTICLE_ANCHOR_GAP_PX,
        }
    }
}

impl PageConfig {
    /// Parse an override blob.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON, wrong value types, or an
    /// invalid band policy.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults, or `raw` applied over them when it parses.
    #[must_use]
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    /// Settings for the current page.
    #[must_use]
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            Self::from_override(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
