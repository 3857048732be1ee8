//! Reading progress bar, table-of-contents highlight, and the floating
//! section counter, all driven by one [`EngineCore`].
//!
//! The engine decides; this module samples [`DomGeometry`] on scroll,
//! forwards intersection entries from two observers (one per band), and
//! renders the returned actions. Each renderer is installed only when its
//! markup exists.

use std::cell::RefCell;
use std::rc::Rc;

use viewport::engine::{Action, ARTICLE_CONTAINER, EngineCore, TrackerKind};
use viewport::geometry::GeometrySampler;
use viewport::visibility::VisibilityEvent;
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom::{self, DomGeometry};
use crate::util::intersection::ObservedSet;
use crate::util::page::Page;

const ACTIVE_LINK_CLASS: &str = "active";

const INDICATOR_CSS: &str = "
    position: fixed;
    bottom: 40px;
    right: 40px;
    padding: 12px 16px;
    background: var(--bg-elevated, #1f1f23);
    border: 1px solid var(--border-subtle, rgba(255,255,255,0.06));
    border-radius: 8px;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    color: var(--text-secondary);
    z-index: 100;
    opacity: 0;
    transition: opacity 0.3s ease;
";

type SharedEngine = Rc<RefCell<EngineCore>>;

/// Install the engine. Returns the geometry so keyboard navigation can share
/// the same section list.
pub fn mount(page: &mut Page, config: &PageConfig) -> Result<Rc<DomGeometry>, DomError> {
    let doc = page.document.clone();
    let selectors = &config.selectors;
    let sections = dom::query_all(&doc, &selectors.sections)?;
    let links = dom::query_all(&doc, &selectors.toc_links)?;
    let progress_bar = dom::query(&doc, &selectors.progress_bar)?;
    let article = dom::query(&doc, &selectors.article)?;
    let nav = dom::query(&doc, &selectors.nav)?;

    let geometry = Rc::new(DomGeometry::new(page.window.clone(), nav, article, sections));
    let hrefs = links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect();
    let mut engine = EngineCore::new(config.engine, geometry.sections(), hrefs);

    match progress_bar {
        Some(bar) if geometry.container(ARTICLE_CONTAINER).is_some() => render_progress(&mut engine, bar),
        Some(_) => log::debug!("reading progress: no `{}`", selectors.article),
        None => log::debug!("reading progress: no `{}`", selectors.progress_bar),
    }
    if links.is_empty() {
        log::debug!("table of contents: no `{}`", selectors.toc_links);
    } else {
        render_links(&mut engine, links);
    }
    if engine.counter().total() == 0 {
        log::debug!("position counter: no `{}`", selectors.sections);
    } else {
        render_counter(page, &mut engine)?;
    }

    let engine: SharedEngine = Rc::new(RefCell::new(engine));
    observe_band(page, &engine, &geometry, TrackerKind::TableOfContents)?;
    observe_band(page, &engine, &geometry, TrackerKind::PositionCounter)?;

    let (on_scroll, sampler) = (Rc::clone(&engine), Rc::clone(&geometry));
    page.on_scroll(move |_| {
        on_scroll.borrow_mut().on_sample(sampler.as_ref());
    });

    let first = geometry.viewport();
    let started = engine.borrow_mut().start(&first, geometry.container(ARTICLE_CONTAINER));
    log::debug!("reading position: {} sections, {} initial actions", geometry.section_elements().len(), started.len());
    Ok(geometry)
}

fn render_progress(engine: &mut EngineCore, bar: HtmlElement) {
    engine.subscribe(
        |action| matches!(action, Action::SetProgress(_)),
        move |action| {
            if let Action::SetProgress(percent) = action {
                dom::set_style(&bar, "width", &format!("{percent}%"));
            }
        },
    );
}

fn render_links(engine: &mut EngineCore, links: Vec<HtmlElement>) {
    engine.subscribe(
        |action| matches!(action, Action::SetActiveLink { .. }),
        move |action| {
            let Action::SetActiveLink { index, .. } = action else {
                return;
            };
            for (i, link) in links.iter().enumerate() {
                if let Err(err) = link.class_list().toggle_with_force(ACTIVE_LINK_CLASS, *index == Some(i)) {
                    log::warn!("table of contents: {}", DomError::from(err));
                }
            }
        },
    );
}

fn render_counter(page: &mut Page, engine: &mut EngineCore) -> Result<(), DomError> {
    let total = engine.counter().total();
    let indicator = dom::create(&page.document, "div", "position-indicator", INDICATOR_CSS)?;
    indicator.set_inner_html(&format!("<span class=\"current\">1</span>/<span class=\"total\">{total}</span>"));
    dom::body(&page.document)?.append_child(&indicator)?;
    page.adopt(indicator.clone());
    let current = indicator
        .query_selector(".current")?
        .ok_or_else(|| DomError::MissingElement(".position-indicator .current".into()))?;

    engine.subscribe(
        |action| matches!(action, Action::SetCounter { .. } | Action::SetCounterVisible(_)),
        move |action| match action {
            Action::SetCounter { current: ordinal, .. } => current.set_text_content(Some(&ordinal.to_string())),
            Action::SetCounterVisible(visible) => {
                dom::set_style(&indicator, "opacity", if *visible { "1" } else { "0" });
            }
            Action::SetProgress(_) | Action::SetActiveLink { .. } => {}
        },
    );
    Ok(())
}

/// Forward entries from the platform observer for `kind`'s band.
fn observe_band(
    page: &mut Page,
    engine: &SharedEngine,
    geometry: &Rc<DomGeometry>,
    kind: TrackerKind,
) -> Result<(), DomError> {
    let policy = engine.borrow().policy(kind);
    let (engine, lookup) = (Rc::clone(engine), Rc::clone(geometry));
    let observed = ObservedSet::new(&policy.root_margin(), policy.threshold(), move |target, intersecting, _| {
        let Some(id) = lookup.section_id(target) else {
            return;
        };
        let event = VisibilityEvent { section_id: id.to_owned(), is_intersecting: intersecting };
        engine.borrow_mut().on_visibility(kind, &event);
    })?;
    observed.observe_all(geometry.section_elements());
    page.observe(observed);
    Ok(())
}
