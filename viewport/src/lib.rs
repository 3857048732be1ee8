//! Viewport position engine for long-form article pages.
//!
//! This crate tracks where the reader is inside a scrollable document and
//! projects that into three pieces of UI state: a reading-progress
//! percentage, the highlighted table-of-contents entry, and a
//! "current / total" section counter. It has no browser dependencies; the
//! host feeds it layout samples and visibility events and renders the
//! [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] wiring trackers to projectors |
//! | [`geometry`] | Sections, viewport snapshots and the [`geometry::GeometrySampler`] seam |
//! | [`observer`] | Subscription registry with explicit unsubscribe |
//! | [`visibility`] | Band policies and the per-consumer visibility tracker |
//! | [`progress`] | Scroll position to reading-progress percentage |
//! | [`active`] | Active-section state machine and table-of-contents highlighting |
//! | [`counter`] | Section ordinal counter and its show/hide rule |
//! | [`navigation`] | Keyboard section stepping and anchor scroll targets |
//! | [`consts`] | Shared numeric constants |

pub mod active;
pub mod consts;
pub mod counter;
pub mod engine;
pub mod geometry;
pub mod navigation;
pub mod observer;
pub mod progress;
pub mod visibility;
