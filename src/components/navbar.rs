//! Navbar that turns solid after the hero and hides while scrolling down.

use effects::navbar::{NAVBAR_TRANSITION_CSS, NavbarTracker};
use web_sys::{Element, Window};

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::page::Page;

const SOLID_BACKGROUND_VAR: &str = "--bg-secondary";

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let nav = dom::require(&page.document, &config.selectors.nav)?;
    let root = page.document.document_element().ok_or_else(|| DomError::MissingElement("html".into()))?;
    let window = page.window.clone();
    let mut tracker = NavbarTracker::new();
    page.on_scroll(move |tick| {
        let style = tracker.on_scroll(tick.scroll_y);
        let background = if style.solid { solid_background(&window, &root) } else { String::new() };
        dom::set_style(&nav, "background-color", &background);
        dom::set_style(&nav, "transform", style.transform());
        dom::set_style(&nav, "transition", NAVBAR_TRANSITION_CSS);
    });
    Ok(())
}

/// Current value of the theme's secondary background.
fn solid_background(window: &Window, root: &Element) -> String {
    match window.get_computed_style(root) {
        Ok(Some(computed)) => computed.get_property_value(SOLID_BACKGROUND_VAR).unwrap_or_default(),
        Ok(None) => String::new(),
        Err(err) => {
            log::warn!("navbar background: {}", DomError::from(err));
            String::new()
        }
    }
}
