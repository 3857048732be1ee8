//! Asynchronous clipboard writes.

use wasm_bindgen_futures::JsFuture;

use crate::error::DomError;
use crate::util::dom;

/// Write `text` to the clipboard and run `on_copied` once the browser
/// confirms. Refusals are logged.
pub fn copy_text<F>(text: String, on_copied: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let window = dom::window()?;
    let Some(clipboard) = window.navigator().clipboard() else {
        return Err(DomError::Js("clipboard API unavailable".into()));
    };
    let promise = clipboard.write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => on_copied(),
            Err(err) => log::warn!("clipboard write refused: {}", DomError::from(err)),
        }
    });
    Ok(())
}
