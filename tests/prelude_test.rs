//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for
//! ordinary usage: the four operations, their `_by` forms, the search
//! primitive, and the supporting types.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification

use core::cmp::Ordering;

use ordseq::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that a complete search/insert/remove workflow compiles and runs
/// with prelude imports alone.
#[test]
fn test_prelude_imports() {
    let mut seq = vec![1, 3, 5];

    insert(&mut seq, 4);
    assert!(includes(&seq, &4));
    assert_eq!(index_of(&seq, &4), 2);
    remove(&mut seq, &4);

    let result: SearchResult = binary_search(&seq, &3);
    assert!(result.found, "Search should work with prelude imports");
}

/// Test that the _by forms and comparator exports are available.
///
/// Verifies Comparator, natural_order, and the explicit-comparator
/// operations.
#[test]
fn test_prelude_by_forms() {
    fn check<T, C: Comparator<T>>(_cmp: C) {}
    check(natural_order::<u8>);

    let mut seq = vec![2u8, 4, 8];
    insert_by(&mut seq, 6, |a, b| a.cmp(b));
    assert!(includes_by(&seq, &6, |a, b| a.cmp(b)));
    assert_eq!(index_of_by(&seq, &8, |a, b| a.cmp(b)), 3);
    remove_by(&mut seq, &2, |a, b| a.cmp(b));

    let result = binary_search_by(&seq, &4, |a: &u8, b: &u8| a.cmp(b));
    assert_eq!(result, SearchResult {
        found: true,
        index: 0,
    });
    assert_eq!(natural_order(&1u8, &2u8), Ordering::Less);
}
