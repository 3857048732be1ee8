//! Transient notification pinned to the bottom of the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use effects::toast::{Toast, ToastPhase, ToastSlot};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::config::Timings;
use crate::error::DomError;
use crate::util::dom;

const TOAST_CSS: &str = "
    position: fixed;
    bottom: 40px;
    left: 50%;
    transform: translateX(-50%) translateY(20px);
    padding: 16px 24px;
    background: var(--text-primary);
    color: var(--bg-primary);
    font-family: var(--font-display);
    font-size: 0.875rem;
    font-weight: 500;
    border-radius: 8px;
    z-index: 10000;
    opacity: 0;
    transition: opacity 0.3s ease, transform 0.3s ease;
";

/// Owns the single toast slot for a page.
#[derive(Debug)]
pub struct Toaster {
    slot: RefCell<ToastSlot>,
    shown: RefCell<Option<HtmlElement>>,
    timings: Timings,
}

impl Toaster {
    pub fn new(timings: Timings) -> Rc<Self> {
        Rc::new(Self { slot: RefCell::new(ToastSlot::new()), shown: RefCell::new(None), timings })
    }

    /// Show `message`, replacing any toast already on screen.
    pub fn show(self: &Rc<Self>, message: &str) -> Result<(), DomError> {
        let doc = dom::document()?;
        let body = dom::body(&doc)?;
        let el = dom::create(&doc, "div", "toast", TOAST_CSS)?;
        el.set_text_content(Some(message));

        let (toast, replaced) = self.slot.borrow_mut().show(message);
        if replaced.is_some() {
            if let Some(old) = self.shown.borrow_mut().take() {
                old.remove();
            }
        }
        body.append_child(&el)?;
        *self.shown.borrow_mut() = Some(el.clone());

        let entering = el.clone();
        let fade_in = Closure::once_into_js(move || apply_phase(&entering, ToastPhase::Visible));
        dom::window()?.request_animation_frame(fade_in.unchecked_ref())?;

        self.schedule_exit(&toast, el);
        Ok(())
    }

    fn schedule_exit(self: &Rc<Self>, toast: &Toast, el: HtmlElement) {
        let id = toast.id;
        let fade_ms = self.timings.toast_fade_ms;
        let toaster = Rc::clone(self);
        Timeout::new(self.timings.toast_visible_ms, move || {
            apply_phase(&el, ToastPhase::Leaving);
            Timeout::new(fade_ms, move || toaster.dismiss(id, &el)).forget();
        })
        .forget();
    }

    /// Remove toast `id` if nothing replaced it in the meantime.
    fn dismiss(&self, id: u64, el: &HtmlElement) {
        if !self.slot.borrow_mut().dismiss(id) {
            return;
        }
        el.remove();
        self.shown.borrow_mut().take();
    }
}

fn apply_phase(el: &HtmlElement, phase: ToastPhase) {
    let (opacity, transform) = phase.style();
    dom::set_style(el, "opacity", opacity);
    dom::set_style(el, "transform", transform);
}
