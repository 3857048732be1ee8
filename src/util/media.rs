//! Media query probes.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Whether the operating system prefers a dark colour scheme.
pub fn prefers_dark_scheme() -> bool {
    matches(DARK_SCHEME_QUERY)
}

/// Whether the primary pointer is a finger rather than a mouse.
pub fn has_coarse_pointer() -> bool {
    matches(COARSE_POINTER_QUERY)
}

fn matches(query: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        false
    }
}
