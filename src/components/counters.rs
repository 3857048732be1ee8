//! Count-up animation for `.counter[data-target]` elements.

use effects::count_up::{CountUp, FRAME_INTERVAL_MS, parse_target};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::intersection::ObservedSet;
use crate::util::page::Page;

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let counters = dom::require_all(&page.document, &config.selectors.counters)?;
    let observed = ObservedSet::new("0px", config.reveal.counter_threshold, |target, intersecting, observer| {
        if !intersecting {
            return;
        }
        observer.unobserve(target);
        let Some(el) = target.dyn_ref::<HtmlElement>() else {
            return;
        };
        let raw = el.get_attribute("data-target").unwrap_or_default();
        match parse_target(&raw) {
            Some(value) => run(el.clone(), CountUp::new(value)),
            None => log::debug!("counter without a numeric data-target: {raw:?}"),
        }
    })?;
    observed.observe_all(&counters);
    page.observe(observed);
    Ok(())
}

fn run(el: HtmlElement, mut count: CountUp) {
    if let Some(text) = count.tick() {
        el.set_text_content(Some(&text));
    }
    if count.is_done() {
        return;
    }
    Timeout::new(FRAME_INTERVAL_MS, move || run(el, count)).forget();
}
