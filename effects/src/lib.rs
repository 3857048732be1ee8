//! Browser-free models for the blog's page enhancements.
//!
//! Each module owns the state and arithmetic of one effect. The `fluency`
//! crate reads DOM input, calls into these models, and writes the results
//! back as attributes, classes and inline styles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference, persistence seam |
//! | [`glow`] | Cursor-follow lerp and the cancellable frame task |
//! | [`count_up`] | Eased number counters |
//! | [`reveal`] | One-shot entrance animations |
//! | [`navbar`] | Navigation bar background and auto-hide |
//! | [`share`] | Share targets, provider URLs, selection sharing |
//! | [`toast`] | Single-slot transient notifications |
//! | [`pointer`] | Card tilt and parallax orbs |
//! | [`menu`] | Mobile menu toggle |
//! | [`newsletter`] | Simulated newsletter signup |
//! | [`reading`] | Reading-time estimate |

pub mod count_up;
pub mod glow;
pub mod menu;
pub mod navbar;
pub mod newsletter;
pub mod pointer;
pub mod reading;
pub mod reveal;
pub mod share;
pub mod theme;
pub mod toast;
