//! Reading-time estimate.

#[cfg(test)]
#[path = "reading_test.rs"]
mod reading_test;

pub const WORDS_PER_MINUTE: usize = 200;

/// Minutes to read `text`, rounded up. Empty text reads in zero minutes.
#[must_use]
pub fn reading_time_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_MINUTE)
}
