//! Mobile navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Links rendered into the mobile menu, as `(href, label)`.
pub const MENU_LINKS: &[(&str, &str)] = &[
    ("#insights", "Insights"),
    ("#perspectives", "Perspectives"),
    ("#frameworks", "Frameworks"),
    ("#futures", "Futures"),
    ("#subscribe", "Subscribe"),
];

/// Class toggled on both the button and the menu while open.
pub const MENU_ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close after a link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// `overflow` for `<body>`: scrolling is locked while the menu is open.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    /// Inner HTML for the menu container.
    #[must_use]
    pub fn markup() -> String {
        let links: String = MENU_LINKS
            .iter()
            .map(|(href, label)| {
                let class = if *href == "#subscribe" { "mobile-link btn" } else { "mobile-link" };
                format!("<a href=\"{href}\" class=\"{class}\">{label}</a>")
            })
            .collect();
        format!("<div class=\"mobile-menu-content\">{links}</div>")
    }
}
