//! Newsletter signup with a simulated round trip.

use std::cell::RefCell;
use std::rc::Rc;

use effects::newsletter::{NewsletterForm, SUCCESS_COLOR, SubmitState};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlInputElement};

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::page::Page;

struct FormView {
    form: NewsletterForm,
    input: Option<HtmlInputElement>,
    button: HtmlButtonElement,
    original_html: String,
}

impl FormView {
    fn render(&self) {
        let state = self.form.state();
        self.button.set_disabled(state.button_disabled());
        match state.button_html() {
            Some(html) => self.button.set_inner_html(html),
            None => self.button.set_inner_html(&self.original_html),
        }
        let background = if state == SubmitState::Subscribed { SUCCESS_COLOR } else { "" };
        dom::set_style(&self.button, "background", background);
        if state == SubmitState::Subscribed {
            if let Some(input) = &self.input {
                input.set_value("");
            }
        }
    }
}

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let selector = &config.selectors.newsletter_form;
    let form = dom::require(&page.document, selector)?;
    let button = form
        .query_selector("button")?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| DomError::MissingElement(format!("{selector} button")))?;
    let input = form.query_selector("input")?.and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let original_html = button.inner_html();
    let view = Rc::new(RefCell::new(FormView { form: NewsletterForm::new(), input, button, original_html }));

    page.listen(EventListener::new(&form, "submit", move |event| {
        event.prevent_default();
        let delay = view.borrow_mut().form.submit();
        let Some(delay) = delay else {
            return;
        };
        view.borrow().render();
        schedule_advance(Rc::clone(&view), delay);
    })?);
    Ok(())
}

fn schedule_advance(view: Rc<RefCell<FormView>>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let next = view.borrow_mut().form.advance();
        view.borrow().render();
        if let Some(next) = next {
            schedule_advance(view, next);
        }
    })
    .forget();
}
