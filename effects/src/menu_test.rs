use super::*;

#[test]
fn starts_closed_with_scrolling_enabled() {
    let menu = MobileMenu::new();
    assert!(!menu.is_open());
    assert_eq!(menu.body_overflow(), "");
}

#[test]
fn toggle_opens_and_locks_scroll() {
    let mut menu = MobileMenu::new();
    assert!(menu.toggle());
    assert_eq!(menu.body_overflow(), "hidden");
    assert!(!menu.toggle());
}

#[test]
fn close_is_unconditional() {
    let mut menu = MobileMenu::new();
    menu.close();
    assert!(!menu.is_open());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn markup_lists_every_link() {
    let html = MobileMenu::markup();
    for (href, label) in MENU_LINKS {
        assert!(html.contains(href));
        assert!(html.contains(label));
    }
    assert!(html.contains("class=\"mobile-link btn\">Subscribe"));
}
