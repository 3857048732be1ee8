//! Soft glow that trails the mouse.

use std::cell::RefCell;
use std::rc::Rc;

use effects::glow::GlowFollower;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::frame_loop::FrameLoop;
use crate::util::listener::EventListener;
use crate::util::media;
use crate::util::page::Page;

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let glow = dom::require(&page.document, &config.selectors.cursor_glow)?;
    if media::has_coarse_pointer() {
        log::debug!("cursor glow: coarse pointer, skipped");
        return Ok(());
    }

    let follower = Rc::new(RefCell::new(GlowFollower::new()));
    let target = Rc::clone(&follower);
    page.listen(EventListener::new(&page.document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            target.borrow_mut().set_target(f64::from(event.client_x()), f64::from(event.client_y()));
        }
    })?);

    page.animate(FrameLoop::start(move || {
        if !glow.is_connected() {
            return false;
        }
        let (x, y) = follower.borrow_mut().step();
        dom::set_style(&glow, "left", &format!("{x}px"));
        dom::set_style(&glow, "top", &format!("{y}px"));
        true
    })?);
    Ok(())
}
