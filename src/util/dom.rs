//! Element lookup, styling, and live geometry.

use viewport::engine::ARTICLE_CONTAINER;
use viewport::geometry::{Bounds, GeometrySampler, Section, ViewportState, section_ids};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body(doc: &Document) -> Result<HtmlElement, DomError> {
    doc.body().ok_or_else(|| DomError::MissingElement("body".into()))
}

/// First element matching `selector`, if any.
pub fn query(doc: &Document, selector: &str) -> Result<Option<HtmlElement>, DomError> {
    Ok(doc.query_selector(selector)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// First element matching `selector`, or [`DomError::MissingElement`].
pub fn require(doc: &Document, selector: &str) -> Result<HtmlElement, DomError> {
    query(doc, selector)?.ok_or_else(|| DomError::MissingElement(selector.to_owned()))
}

/// Every HTML element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Like [`query_all`] but an empty result is [`DomError::MissingElement`].
pub fn require_all(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let found = query_all(doc, selector)?;
    if found.is_empty() {
        return Err(DomError::MissingElement(selector.to_owned()));
    }
    Ok(found)
}

/// Set one inline style property. Failures are logged, not returned; a
/// rejected declaration only loses that one visual.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style {property}: {value} rejected: {}", DomError::from(err));
    }
}

/// Create an element of `tag` with `class` and inline `css`.
pub fn create(doc: &Document, tag: &str, class: &str, css: &str) -> Result<HtmlElement, DomError> {
    let el = doc
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js(format!("<{tag}> is not an HTML element")))?;
    el.set_class_name(class);
    if !css.is_empty() {
        el.style().set_css_text(css);
    }
    Ok(el)
}

/// Append a `<style id=..>` block to `<head>` unless one with `id` exists.
/// Returns the new block, or `None` when it was already present.
pub fn inject_stylesheet(doc: &Document, id: &str, css: &str) -> Result<Option<Element>, DomError> {
    if doc.get_element_by_id(id).is_some() {
        return Ok(None);
    }
    let head = doc.head().ok_or_else(|| DomError::MissingElement("head".into()))?;
    let style = doc.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(Some(style))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn inner_height(window: &Window) -> f64 {
    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn inner_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Rendered height of `el`, or zero when the element is absent.
pub fn height_of(el: Option<&HtmlElement>) -> f64 {
    el.map_or(0.0, |el| f64::from(el.offset_height()))
}

/// Whether focus is in a text field, where single-letter shortcuts are typing.
pub fn is_typing(doc: &Document) -> bool {
    let Some(active) = doc.active_element() else {
        return false;
    };
    let tag = active.tag_name();
    tag.eq_ignore_ascii_case("INPUT")
        || tag.eq_ignore_ascii_case("TEXTAREA")
        || active.dyn_ref::<HtmlElement>().is_some_and(HtmlElement::is_content_editable)
}

/// Position of `target` within `elements`.
pub fn index_of(elements: &[HtmlElement], target: &Element) -> Option<usize> {
    elements.iter().position(|el| el.unchecked_ref::<Element>() == target)
}

/// Live layout of the article page.
///
/// Each section gets a distinct engine id from [`section_ids`], so sections
/// without an `id` are still counted and duplicates stay separate.
#[derive(Debug, Clone)]
pub struct DomGeometry {
    window: Window,
    nav: Option<HtmlElement>,
    article: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    ids: Vec<String>,
}

impl DomGeometry {
    pub fn new(
        window: Window,
        nav: Option<HtmlElement>,
        article: Option<HtmlElement>,
        sections: Vec<HtmlElement>,
    ) -> Self {
        let ids = section_ids(sections.iter().map(|el| el.id()));
        Self { window, nav, article, sections, ids }
    }

    pub fn section_elements(&self) -> &[HtmlElement] {
        &self.sections
    }

    /// Engine id of the section element `target`.
    pub fn section_id(&self, target: &Element) -> Option<&str> {
        index_of(&self.sections, target).map(|i| self.ids[i].as_str())
    }

    /// Section element for an engine id.
    pub fn section_element(&self, id: &str) -> Option<&HtmlElement> {
        self.ids.iter().position(|candidate| candidate == id).map(|i| &self.sections[i])
    }
}

impl GeometrySampler for DomGeometry {
    fn viewport(&self) -> ViewportState {
        ViewportState::new(scroll_y(&self.window), inner_height(&self.window), height_of(self.nav.as_ref()))
    }

    fn container(&self, name: &str) -> Option<Bounds> {
        if name != ARTICLE_CONTAINER {
            return None;
        }
        self.article.as_ref().map(|el| Bounds::new(f64::from(el.offset_top()), f64::from(el.offset_height())))
    }

    fn sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .zip(&self.ids)
            .map(|(el, id)| Section::new(id.clone(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect()
    }
}
