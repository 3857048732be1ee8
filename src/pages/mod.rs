//! Page bootstraps.
//!
//! Site-wide features mount on every page; `home` and `article` add the
//! features specific to each layout. A page is an article when its markup
//! contains the article container.
//!
//! Every feature mounts independently: a failure is logged and the rest of
//! the page still initializes.


#[cfg(feature = "hydrate")]
pub mod article;
#[cfg(feature = "hydrate")]
pub mod home;

use crate::config::PageConfig;
use crate::error::DomError;

/// Which layout the current document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Article,
}

impl PageKind {
    #[must_use]
    pub fn detect(has_article_container: bool) -> Self {
        if has_article_container { Self::Article } else { Self::Home }
    }
}

/// Outcome of mounting one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mounted {
    Ready,
    /// The page has no markup for this feature.
    Skipped(String),
    Failed(String),
}

/// Classify and log a feature's mount result.
pub fn report(feature: &str, result: Result<(), DomError>) -> Mounted {
    match result {
        Ok(()) => {
            log::debug!("{feature}: ready");
            Mounted::Ready
        }
        Err(DomError::MissingElement(selector)) => {
            log::debug!("{feature}: skipped, no `{selector}`");
            Mounted::Skipped(selector)
        }
        Err(err) => {
            log::warn!("{feature}: {err}");
            Mounted::Failed(err.to_string())
        }
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static PAGE: std::cell::RefCell<Option<crate::util::page::Page>> = const { std::cell::RefCell::new(None) };
}

/// Enhance the current document.
pub fn boot(config: &PageConfig) {
    #[cfg(feature = "hydrate")]
    {
        use crate::components::toast::Toaster;
        use crate::util::dom;
        use crate::util::page::Page;

        let mut page = match Page::attach() {
            Ok(page) => page,
            Err(err) => {
                log::warn!("page not enhanced: {err}");
                return;
            }
        };
        let kind = match dom::query(&page.document, &config.selectors.article) {
            Ok(found) => PageKind::detect(found.is_some()),
            Err(err) => {
                log::warn!("page detection: {err}");
                PageKind::Home
            }
        };
        let mut mounted = site_wide(&mut page, config);
        match kind {
            PageKind::Home => mounted.extend(home::mount(&mut page, config)),
            PageKind::Article => {
                let toaster = Toaster::new(config.timings);
                mounted.extend(article::mount(&mut page, config, &toaster));
            }
        }
        let ready = mounted.iter().filter(|m| **m == Mounted::Ready).count();
        log::info!("{kind:?} page: {ready}/{} features, {} handles", mounted.len(), page.handle_count());
        PAGE.with(|slot| {
            slot.borrow_mut().replace(page);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Features present on every layout.
#[cfg(feature = "hydrate")]
fn site_wide(page: &mut crate::util::page::Page, config: &PageConfig) -> Vec<Mounted> {
    use crate::components::{counters, cursor_glow, mobile_menu, navbar, newsletter, pointer_effects, theme_toggle};

    vec![
        report("theme toggle", theme_toggle::mount(page, config)),
        report("cursor glow", cursor_glow::mount(page, config)),
        report("navbar", navbar::mount(page, config)),
        report("mobile menu", mobile_menu::mount(page, config)),
        report("counters", counters::mount(page, config)),
        report("newsletter", newsletter::mount(page, config)),
        report("parallax", pointer_effects::mount_parallax(page, config)),
        report("card tilt", pointer_effects::mount_tilt(page, config)),
    ]
}

/// Drop everything [`boot`] installed.
pub fn teardown() {
    #[cfg(feature = "hydrate")]
    PAGE.with(|slot| {
        slot.borrow_mut().take();
    });
}
