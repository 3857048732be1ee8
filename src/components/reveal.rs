//! One-shot entrance animations.

use std::cell::RefCell;

use effects::reveal::{ANIMATE_IN_CLASS, ANIMATE_IN_CSS, RevealSet, RevealStyle};
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::intersection::ObservedSet;
use crate::util::page::Page;

const STYLESHEET_ID: &str = "fluency-reveal";

/// Homepage cards and panels.
pub fn mount_home(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    if let Some(style) = dom::inject_stylesheet(&page.document, STYLESHEET_ID, ANIMATE_IN_CSS)? {
        page.adopt(style);
    }
    let elements = dom::require_all(&page.document, &config.selectors.home_reveal)?;
    mount_group(page, elements, RevealStyle::HOME, &config.reveal.root_margin, config.reveal.threshold)
}

/// Article callouts, figures, and cards, then the section headings.
pub fn mount_article(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let elements = dom::query_all(&page.document, &config.selectors.article_reveal)?;
    let headings = dom::query_all(&page.document, &config.selectors.section_headings)?;
    if elements.is_empty() && headings.is_empty() {
        return Err(DomError::MissingElement(config.selectors.article_reveal.clone()));
    }
    if let Some(style) = dom::inject_stylesheet(&page.document, STYLESHEET_ID, ANIMATE_IN_CSS)? {
        page.adopt(style);
    }
    if !elements.is_empty() {
        mount_group(page, elements, RevealStyle::ARTICLE, &config.reveal.root_margin, config.reveal.threshold)?;
    }
    if !headings.is_empty() {
        mount_group(page, headings, RevealStyle::HEADING, "0px", config.reveal.heading_threshold)?;
    }
    Ok(())
}

fn mount_group(
    page: &mut Page,
    elements: Vec<HtmlElement>,
    style: RevealStyle,
    root_margin: &str,
    threshold: f64,
) -> Result<(), DomError> {
    for (index, el) in (0u32..).zip(&elements) {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", style.initial_transform);
        dom::set_style(el, "transition", &style.transition(index));
    }

    let revealed = RefCell::new(RevealSet::new(elements.len()));
    let targets = elements.clone();
    let observed = ObservedSet::new(root_margin, threshold, move |target, intersecting, observer| {
        let Some(index) = dom::index_of(&targets, target) else {
            return;
        };
        if !revealed.borrow_mut().on_visibility(index, intersecting) {
            return;
        }
        if let Err(err) = target.class_list().add_1(ANIMATE_IN_CLASS) {
            log::warn!("reveal: {}", DomError::from(err));
        }
        observer.unobserve(target);
    })?;
    observed.observe_all(&elements);
    page.observe(observed);
    Ok(())
}
