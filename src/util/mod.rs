//! Browser glue shared by the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage`, `media` and `created_nodes` compile everywhere and fall back to inert values
//! off the browser so native tests can call them. The rest wrap web-sys
//! handles whose lifetime the page owns, and exist only under `hydrate`.

pub mod created_nodes;
pub mod media;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod clipboard;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
#[cfg(feature = "hydrate")]
pub mod intersection;
#[cfg(feature = "hydrate")]
pub mod listener;
#[cfg(feature = "hydrate")]
pub mod page;
#[cfg(feature = "hydrate")]
pub mod scroll;
