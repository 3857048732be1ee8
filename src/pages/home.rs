//! Homepage: card reveals and short-gap anchor scrolling.

use crate::components::anchors::{self, History};
use crate::components::reveal;
use crate::config::PageConfig;
use crate::pages::{Mounted, report};
use crate::util::page::Page;

pub fn mount(page: &mut Page, config: &PageConfig) -> Vec<Mounted> {
    let selectors = &config.selectors;
    vec![
        report("reveal", reveal::mount_home(page, config)),
        report(
            "anchors",
            anchors::mount(page, &selectors.home_anchors, &selectors.nav, config.home_anchor_gap_px, History::Keep),
        ),
    ]
}
