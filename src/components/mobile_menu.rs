//! Full-screen mobile navigation behind the hamburger button.

use std::cell::RefCell;
use std::rc::Rc;

use effects::menu::{MENU_ACTIVE_CLASS, MobileMenu};
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::listener::EventListener;
use crate::util::page::Page;

const STYLESHEET_ID: &str = "fluency-mobile-menu";

const MENU_CSS: &str = "
.mobile-menu {
    position: fixed;
    top: var(--nav-height);
    left: 0;
    right: 0;
    bottom: 0;
    background: var(--bg-primary);
    z-index: 999;
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.3s ease, visibility 0.3s ease;
}
.mobile-menu.active { opacity: 1; visibility: visible; }
.mobile-menu-content { display: flex; flex-direction: column; padding: 40px 24px; gap: 8px; }
.mobile-link {
    font-family: var(--font-display);
    font-size: 1.5rem;
    font-weight: 600;
    padding: 16px 0;
    border-bottom: 1px solid var(--border-subtle);
    transition: color 0.3s ease;
}
.mobile-link:hover { color: var(--accent-primary); }
.mobile-link.btn {
    margin-top: 24px;
    text-align: center;
    background: var(--accent-primary);
    color: var(--bg-primary);
    border-radius: 12px;
    border: none;
}
.mobile-menu-btn.active span:first-child { transform: rotate(45deg) translate(5px, 5px); }
.mobile-menu-btn.active span:last-child { transform: rotate(-45deg) translate(5px, -5px); }
";

struct MenuView {
    state: MobileMenu,
    button: HtmlElement,
    panel: HtmlElement,
    body: HtmlElement,
}

impl MenuView {
    fn render(&self) {
        let open = self.state.is_open();
        for el in [&self.button, &self.panel] {
            if let Err(err) = el.class_list().toggle_with_force(MENU_ACTIVE_CLASS, open) {
                log::warn!("mobile menu: {}", DomError::from(err));
            }
        }
        dom::set_style(&self.body, "overflow", self.state.body_overflow());
    }
}

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let doc = page.document.clone();
    let button = dom::require(&doc, &config.selectors.mobile_menu_button)?;
    let body = dom::body(&doc)?;
    let panel = dom::create(&doc, "div", "mobile-menu", "")?;
    panel.set_inner_html(&MobileMenu::markup());
    if let Some(style) = dom::inject_stylesheet(&doc, STYLESHEET_ID, MENU_CSS)? {
        page.adopt(style);
    }
    body.append_child(&panel)?;
    page.adopt(panel.clone());

    let links = panel.query_selector_all(".mobile-link")?;
    let view = Rc::new(RefCell::new(MenuView { state: MobileMenu::new(), button: button.clone(), panel, body }));

    let on_toggle = Rc::clone(&view);
    page.listen(EventListener::new(&button, "click", move |_| {
        let mut view = on_toggle.borrow_mut();
        view.state.toggle();
        view.render();
    })?);

    for link in (0..links.length()).filter_map(|i| links.get(i)) {
        let on_close = Rc::clone(&view);
        page.listen(EventListener::new(&link, "click", move |_| {
            let mut view = on_close.borrow_mut();
            view.state.close();
            view.render();
        })?);
    }
    Ok(())
}
