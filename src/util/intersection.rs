//! Owned `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer plus its callback. Dropping it disconnects the observer.
pub struct ObservedSet {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl ObservedSet {
    /// Watch with `root_margin` (CSS margin syntax) and a single ratio
    /// `threshold`. `on_entry` receives each entry's target, whether it is
    /// intersecting, and the observer so it can unobserve one-shot targets.
    pub fn new<F>(root_margin: &str, threshold: f64, mut on_entry: F) -> Result<Self, DomError>
    where
        F: FnMut(&Element, bool, &IntersectionObserver) + 'static,
    {
        let callback: EntryCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(&entry.target(), entry.is_intersecting(), &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn observe_all<'a, I>(&self, targets: I)
    where
        I: IntoIterator<Item = &'a web_sys::HtmlElement>,
    {
        for target in targets {
            self.observer.observe(target);
        }
    }
}

impl Drop for ObservedSet {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl std::fmt::Debug for ObservedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservedSet").finish_non_exhaustive()
    }
}
