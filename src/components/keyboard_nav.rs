//! `j` / `k` step to the next / previous article section.

use std::rc::Rc;

use viewport::geometry::GeometrySampler;
use viewport::navigation::{self, Step};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::DomError;
use crate::util::dom::{self, DomGeometry};
use crate::util::listener::EventListener;
use crate::util::page::Page;

pub fn mount(page: &mut Page, geometry: &Rc<DomGeometry>) -> Result<(), DomError> {
    let geometry = Rc::clone(geometry);
    let doc = page.document.clone();
    page.listen(EventListener::new(&page.document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(step) = Step::from_key(&event.key(), event.ctrl_key(), event.meta_key(), dom::is_typing(&doc))
        else {
            return;
        };
        let sections = geometry.sections();
        let Some(section) = navigation::step(&sections, &geometry.viewport(), step) else {
            log::debug!("{step:?}: no section in that direction");
            return;
        };
        if let Some(el) = geometry.section_element(&section.id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })?);
    Ok(())
}
