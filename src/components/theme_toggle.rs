//! Light/dark theme switch.
//!
//! The resolved theme is written to `<html data-theme>` before the toggle
//! is looked up, so pages without a toggle still honour the saved choice.

use std::cell::RefCell;
use std::rc::Rc;

use effects::theme::{THEME_TRANSITION_CSS, Theme, ThemeController};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::media;
use crate::util::page::Page;
use crate::util::storage::LocalStore;

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let root = page
        .document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingElement("html".into()))?;

    let controller = ThemeController::load(LocalStore::open(), media::prefers_dark_scheme());
    apply(&root, controller.theme())?;
    log::debug!("theme: {}", controller.theme());

    let toggle = dom::require(&page.document, &config.selectors.theme_toggle)?;
    let controller = Rc::new(RefCell::new(controller));
    let transition_ms = config.timings.theme_transition_ms;
    page.listen(EventListener::new(&toggle, "click", move |_| {
        let toggled = controller.borrow_mut().toggle();
        let next = match toggled {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("theme not saved: {err}");
                controller.borrow().theme()
            }
        };
        if let Err(err) = apply(&root, next) {
            log::warn!("theme not applied: {err}");
            return;
        }
        dom::set_style(&root, "transition", THEME_TRANSITION_CSS);
        let root = root.clone();
        Timeout::new(transition_ms, move || dom::set_style(&root, "transition", "")).forget();
    })?);
    Ok(())
}

fn apply(root: &HtmlElement, theme: Theme) -> Result<(), DomError> {
    root.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}
