//! LinkedIn, Twitter, and copy-link buttons.

use std::rc::Rc;

use effects::share::{LINK_COPIED_MESSAGE, POPUP_FEATURES, ShareTarget};
use web_sys::{HtmlElement, Window};

use crate::components::toast::Toaster;
use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::clipboard;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::page::Page;

pub fn mount(page: &mut Page, config: &PageConfig, toaster: &Rc<Toaster>) -> Result<(), DomError> {
    let buttons = dom::require_all(&page.document, &config.selectors.share_buttons)?;
    for button in buttons {
        let target = button.clone();
        let window = page.window.clone();
        let toaster = Rc::clone(toaster);
        page.listen(EventListener::new(&button, "click", move |_| {
            if let Err(err) = share(&window, &target, &toaster) {
                log::warn!("share: {err}");
            }
        })?);
    }
    Ok(())
}

fn share(window: &Window, button: &HtmlElement, toaster: &Rc<Toaster>) -> Result<(), DomError> {
    let label = button
        .get_attribute("aria-label")
        .filter(|label| !label.is_empty())
        .or_else(|| button.text_content())
        .unwrap_or_default();
    let Some(target) = ShareTarget::from_label(&label) else {
        log::debug!("share button with unrecognised label {label:?}");
        return Ok(());
    };

    let href = window.location().href()?;
    let title = window.document().map(|doc| doc.title()).unwrap_or_default();
    match target.url(&encode(&href), &encode(&title)) {
        Some(url) => {
            window.open_with_url_and_target_and_features(&url, "_blank", POPUP_FEATURES)?;
        }
        None => {
            let toaster = Rc::clone(toaster);
            clipboard::copy_text(href, move || {
                if let Err(err) = toaster.show(LINK_COPIED_MESSAGE) {
                    log::warn!("toast: {err}");
                }
            })?;
        }
    }
    Ok(())
}

/// Percent-encode one URL component.
pub fn encode(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}
