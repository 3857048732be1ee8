//! Fill `[data-reading-time]` placeholders from the article's word count.

use effects::reading::reading_time_minutes;

use crate::config::PageConfig;
use crate::error::DomError;
use crate::util::dom;
use crate::util::page::Page;

pub fn mount(page: &mut Page, config: &PageConfig) -> Result<(), DomError> {
    let slots = dom::require_all(&page.document, &config.selectors.reading_time)?;
    let article = dom::require(&page.document, &config.selectors.article)?;
    let minutes = reading_time_minutes(&article.text_content().unwrap_or_default());
    let label = format!("{minutes} min read");
    for slot in slots {
        slot.set_text_content(Some(&label));
    }
    log::debug!("reading time: {label}");
    Ok(())
}
