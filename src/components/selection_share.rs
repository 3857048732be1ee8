//! Tweet or copy a highlighted passage.
//!
//! A tooltip appears above a quotable selection. It disappears on the next
//! mouse-up, on a click outside it, or after one of its buttons is used.

use std::cell::RefCell;
use std::rc::Rc;

use effects::share::{
    POPUP_FEATURES, QUOTE_COPIED_MESSAGE, quote_text, quote_tweet_url, selection_shareable, tooltip_anchor,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node, Window};

use crate::components::share_buttons::encode;
use crate::components::toast::Toaster;
use crate::error::DomError;
use crate::util::clipboard;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::page::Page;

const TOOLTIP_CSS: &str = "
    position: fixed;
    transform: translateX(-50%);
    display: flex;
    gap: 8px;
    padding: 8px;
    background: var(--bg-elevated, #1f1f23);
    border: 1px solid var(--border-medium, rgba(255,255,255,0.1));
    border-radius: 8px;
    z-index: 10000;
    box-shadow: 0 8px 24px rgba(0,0,0,0.3);
";

const BUTTON_CSS: &str = "
    padding: 6px 12px;
    background: transparent;
    border: 1px solid var(--border-subtle, rgba(255,255,255,0.06));
    border-radius: 4px;
    color: var(--text-primary, #fafafa);
    font-family: var(--font-display, sans-serif);
    font-size: 0.75rem;
    cursor: pointer;
    transition: all 0.2s ease;
";

const TOOLTIP_MARKUP: &str = "<button class=\"tooltip-btn tweet-selection\">Tweet</button>\
<button class=\"tooltip-btn copy-selection\">Copy</button>";

/// The tooltip on screen and the listeners that belong to it. Those
/// listeners refer back to the slot weakly.
struct Tooltip {
    el: HtmlElement,
    _listeners: Vec<EventListener>,
}

type Slot = Rc<RefCell<Option<Tooltip>>>;

pub fn mount(page: &mut Page, toaster: &Rc<Toaster>) -> Result<(), DomError> {
    let slot: Slot = Rc::new(RefCell::new(None));
    let window = page.window.clone();
    let doc = page.document.clone();
    let toaster = Rc::clone(toaster);
    page.listen(EventListener::new(&page.document, "mouseup", move |event| {
        if is_inside(&slot, &event) {
            return;
        }
        close(&slot);
        if let Err(err) = open(&window, &doc, &slot, &toaster) {
            log::warn!("selection share: {err}");
        }
    })?);
    Ok(())
}

fn open(window: &Window, doc: &Document, slot: &Slot, toaster: &Rc<Toaster>) -> Result<(), DomError> {
    let Some(selection) = window.get_selection()? else {
        return Ok(());
    };
    let selected: String = selection.to_string().into();
    if !selection_shareable(&selected) || selection.range_count() == 0 {
        return Ok(());
    }
    let rect = selection.get_range_at(0)?.get_bounding_client_rect();
    let (top, left) = tooltip_anchor(rect.top(), rect.left(), rect.width());

    let el = dom::create(doc, "div", "selection-tooltip", TOOLTIP_CSS)?;
    el.set_inner_html(TOOLTIP_MARKUP);
    dom::set_style(&el, "top", &format!("{top}px"));
    dom::set_style(&el, "left", &format!("{left}px"));
    dom::body(doc)?.append_child(&el)?;
    let buttons = el.query_selector_all(".tooltip-btn")?;
    for button in (0..buttons.length()).filter_map(|i| buttons.get(i)) {
        if let Some(button) = button.dyn_ref::<HtmlElement>() {
            button.style().set_css_text(BUTTON_CSS);
        }
    }

    let selected = selected.trim().to_owned();
    let mut listeners = Vec::with_capacity(3);

    let tweet = required_child(&el, ".tweet-selection")?;
    let (tweet_window, tweet_slot, quote) = (window.clone(), Rc::downgrade(slot), quote_text(&selected));
    listeners.push(EventListener::new(&tweet, "click", move |_| {
        let href = tweet_window.location().href().unwrap_or_default();
        let url = quote_tweet_url(&encode(&quote), &encode(&href));
        if let Err(err) = tweet_window.open_with_url_and_target_and_features(&url, "_blank", POPUP_FEATURES) {
            log::warn!("tweet popup: {}", DomError::from(err));
        }
        if let Some(slot) = tweet_slot.upgrade() {
            close_later(&slot);
        }
    })?);

    let copy = required_child(&el, ".copy-selection")?;
    let (copy_slot, copy_toaster) = (Rc::downgrade(slot), Rc::clone(toaster));
    listeners.push(EventListener::new(&copy, "click", move |_| {
        let (slot, toaster) = (copy_slot.clone(), Rc::clone(&copy_toaster));
        let copied = clipboard::copy_text(selected.clone(), move || {
            if let Err(err) = toaster.show(QUOTE_COPIED_MESSAGE) {
                log::warn!("toast: {err}");
            }
            if let Some(slot) = slot.upgrade() {
                close(&slot);
            }
        });
        if let Err(err) = copied {
            log::warn!("copy quote: {err}");
        }
    })?);

    let outside_slot = Rc::downgrade(slot);
    listeners.push(EventListener::new(doc, "mousedown", move |event| {
        let Some(slot) = outside_slot.upgrade() else {
            return;
        };
        if !is_inside(&slot, &event) {
            close_later(&slot);
        }
    })?);

    *slot.borrow_mut() = Some(Tooltip { el, _listeners: listeners });
    Ok(())
}

fn required_child(el: &HtmlElement, selector: &str) -> Result<Element, DomError> {
    el.query_selector(selector)?.ok_or_else(|| DomError::MissingElement(selector.to_owned()))
}

/// Whether `event` happened on the open tooltip.
fn is_inside(slot: &Slot, event: &Event) -> bool {
    let Some(node) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    slot.borrow().as_ref().is_some_and(|tooltip| tooltip.el.contains(Some(&node)))
}

fn close(slot: &Slot) {
    if let Some(tooltip) = slot.borrow_mut().take() {
        tooltip.el.remove();
    }
}

/// Close from inside one of the tooltip's own listeners: hide now, release
/// the listeners once the current event has finished dispatching.
fn close_later(slot: &Slot) {
    let Some(tooltip) = slot.borrow_mut().take() else {
        return;
    };
    tooltip.el.remove();
    Timeout::new(0, move || drop(tooltip)).forget();
}
