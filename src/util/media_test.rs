#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn queries_are_false_in_non_hydrate_tests() {
    assert!(!prefers_dark_scheme());
    assert!(!has_coarse_pointer());
}
