//! Page features.
//!
//! Each module exposes `mount(page, config, ..) -> Result<(), DomError>`.
//! A missing element yields [`crate::error::DomError::MissingElement`] and
//! the feature is skipped; nothing here panics on absent markup.

pub mod anchors;
pub mod counters;
pub mod cursor_glow;
pub mod keyboard_nav;
pub mod mobile_menu;
pub mod navbar;
pub mod newsletter;
pub mod pointer_effects;
pub mod reading_position;
pub mod reading_time;
pub mod reveal;
pub mod selection_share;
pub mod share_buttons;
pub mod theme_toggle;
pub mod toast;
