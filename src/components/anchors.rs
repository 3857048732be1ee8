//! Smooth scrolling for in-page links, stopping clear of the fixed navbar.

use viewport::navigation::{anchor_scroll_top, fragment_target};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::DomError;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::page::Page;

/// How a followed link updates the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum History {
    /// Leave the URL alone.
    Keep,
    /// Push the fragment so the back button returns to the previous spot.
    Push,
}

pub fn mount(
    page: &mut Page,
    anchors_selector: &str,
    nav_selector: &str,
    gap: f64,
    history: History,
) -> Result<(), DomError> {
    let anchors = dom::require_all(&page.document, anchors_selector)?;
    let nav = dom::query(&page.document, nav_selector)?;
    for anchor in anchors {
        let (window, doc, nav, link) = (page.window.clone(), page.document.clone(), nav.clone(), anchor.clone());
        page.listen(EventListener::new(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Err(err) = follow(&window, &doc, nav.as_ref(), id, &href, gap, history) {
                log::warn!("anchor {href}: {err}");
            }
        })?);
    }
    Ok(())
}

fn follow(
    window: &Window,
    doc: &Document,
    nav: Option<&HtmlElement>,
    id: &str,
    href: &str,
    gap: f64,
    history: History,
) -> Result<(), DomError> {
    let Some(target) = doc.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        log::debug!("anchor {href} has no target");
        return Ok(());
    };
    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(target.offset_top()), dom::height_of(nav), gap));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    if history == History::Push {
        window.history()?.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))?;
    }
    Ok(())
}
