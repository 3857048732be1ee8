//! Mouse-driven parallax on the hero orbs and tilt on feature cards.

use effects::pointer::{normalized_pointer, parallax_offsets, tilt_transform, translate};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::page::Page;

pub fn mount_parallax(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let orbs = dom::require_all(&page.document, &config.selectors.gradient_orbs)?;
    let window = page.window.clone();
    page.listen(EventListener::new(&page.document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pointer = normalized_pointer(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            dom::inner_width(&window),
            dom::inner_height(&window),
        );
        for (orb, offset) in orbs.iter().zip(parallax_offsets(pointer, orbs.len())) {
            dom::set_style(orb, "transform", &translate(offset));
        }
    })?);
    Ok(())
}

pub fn mount_tilt(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let cards = dom::require_all(&page.document, &config.selectors.tilt_cards)?;
    for card in cards {
        let target = card.clone();
        page.listen(EventListener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            dom::set_style(&target, "transform", &tilt_transform(x, y, rect.width(), rect.height()));
        })?);
        let target = card.clone();
        page.listen(EventListener::new(&card, "mouseleave", move |_| {
            dom::set_style(&target, "transform", "");
        })?);
    }
    Ok(())
}
