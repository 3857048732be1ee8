//! Error type shared by page initializers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a page feature could not be installed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// The feature's markup is absent; the page simply does not use it.
    #[error("no element matches `{0}`")]
    MissingElement(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl DomError {
    /// Missing markup is expected on pages that omit a feature.
    #[must_use]
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
