//! Article page: reading position, share tools, and keyboard stepping.

use std::rc::Rc;

use crate::components::anchors::{self, History};
use crate::components::toast::Toaster;
use crate::components::{keyboard_nav, reading_position, reading_time, reveal, selection_share, share_buttons};
use crate::config::PageConfig;
use crate::pages::{Mounted, report};
use crate::util::page::Page;

pub fn mount(page: &mut Page, config: &PageConfig, toaster: &Rc<Toaster>) -> Vec<Mounted> {
    let selectors = &config.selectors;
    let mut mounted = Vec::new();

    match reading_position::mount(page, config) {
        Ok(geometry) => {
            mounted.push(report("reading position", Ok(())));
            mounted.push(report("keyboard navigation", keyboard_nav::mount(page, &geometry)));
        }
        Err(err) => mounted.push(report("reading position", Err(err))),
    }
    mounted.push(report("reveal", reveal::mount_article(page, config)));
    mounted.push(report("share buttons", share_buttons::mount(page, config, toaster)));
    mounted.push(report("selection share", selection_share::mount(page, toaster)));
    mounted.push(report("reading time", reading_time::mount(page, config)));
    mounted.push(report(
        "anchors",
        anchors::mount(page, &selectors.article_anchors, &selectors.nav, config.article_anchor_gap_px, History::Push),
    ));
    mounted
}
