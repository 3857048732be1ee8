//! Owned DOM event listeners.
//!
//! The listener stays registered for as long as the handle lives; dropping
//! it removes the listener and frees the closure.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::DomError;

pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    /// Register as passive: the callback never calls `preventDefault`.
    pub fn passive<F>(target: &EventTarget, kind: &'static str, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref()) {
            log::warn!("removing {} listener failed: {}", self.kind, DomError::from(err));
        }
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener").field("kind", &self.kind).finish_non_exhaustive()
    }
}
