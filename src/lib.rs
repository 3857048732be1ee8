//! Browser behaviour for the AI Fluency site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pages are static HTML. This crate is loaded as a WASM module and
//! enhances whatever markup it finds: theme switching, reveal animations,
//! the navbar, and on article pages the reading-progress bar, table of
//! contents highlight, position counter, share tools, and keyboard stepping.
//!
//! All decisions live in the pure `viewport` and `effects` crates; the
//! modules here only read geometry, wire listeners, and write styles.
//!
//! | Module        | Responsibility                                     |
//! |---------------|----------------------------------------------------|
//! | `config`      | Page settings and the inline JSON override         |
//! | `error`       | `DomError`, the failure type of every initializer  |
//! | `util`        | Storage, media queries, and browser glue           |
//! | `components`  | One module per page feature (hydrate only)         |
//! | `pages`       | Boot order for home and article pages              |

pub mod config;
pub mod error;
pub mod pages;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod components;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, read settings, and enhance the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    let config = config::PageConfig::load();
    pages::boot(&config);
}

/// Detach every listener, observer, and animation loop the page installed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn teardown() {
    pages::teardown();
}
