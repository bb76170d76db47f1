//! Property-based tests for the operation contracts.
//!
//! These tests verify the universally-quantified properties of the public
//! API with randomly generated sorted sequences:
//! - Present items are found at a matching index
//! - Absent items report the sentinel and a false membership flag
//! - includes and index_of always agree
//! - insert preserves sortedness and remove undoes insert
//! - Removing an absent item changes nothing
//!
//! ## Test Organization
//!
//! 1. **Lookup Properties** - index_of/includes over arbitrary input
//! 2. **Mutation Properties** - insert/remove invariants

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use ordseq::prelude::*;

/// Whether a slice is sorted in ascending order.
fn is_sorted(seq: &[i64]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

// ============================================================================
// Lookup Properties
// ============================================================================

/// For every sorted sequence and present item, index_of reports an index
/// holding an equivalent element.
#[quickcheck]
fn prop_index_of_present(mut seq: Vec<i64>, item: i64) -> bool {
    seq.push(item);
    seq.sort_unstable();

    let index = index_of(&seq, &item);
    index >= 0 && seq[index as usize] == item
}

/// For every sorted sequence and absent item, index_of reports -1 and
/// includes reports false.
#[quickcheck]
fn prop_absent_item(mut seq: Vec<i64>, item: i64) -> TestResult {
    if seq.contains(&item) {
        return TestResult::discard();
    }
    seq.sort_unstable();

    TestResult::from_bool(index_of(&seq, &item) == -1 && !includes(&seq, &item))
}

/// includes always equals (index_of != -1).
#[quickcheck]
fn prop_includes_matches_index_of(mut seq: Vec<i64>, item: i64) -> bool {
    seq.sort_unstable();
    includes(&seq, &item) == (index_of(&seq, &item) != -1)
}

// ============================================================================
// Mutation Properties
// ============================================================================

/// insert always preserves sortedness.
#[quickcheck]
fn prop_insert_preserves_order(mut seq: Vec<i64>, item: i64) -> bool {
    seq.sort_unstable();
    insert(&mut seq, item);
    is_sorted(&seq)
}

/// Inserting an item and then removing one instance of it restores the
/// original sequence (sorted sequences with equal multisets are equal).
#[quickcheck]
fn prop_insert_then_remove_roundtrip(mut seq: Vec<i64>, item: i64) -> bool {
    seq.sort_unstable();
    let before = seq.clone();

    insert(&mut seq, item);
    remove(&mut seq, &item);

    seq == before
}

/// Removing an absent item leaves the sequence deep-equal to its input.
#[quickcheck]
fn prop_remove_absent_unchanged(mut seq: Vec<i64>, item: i64) -> TestResult {
    if seq.contains(&item) {
        return TestResult::discard();
    }
    seq.sort_unstable();
    let before = seq.clone();

    remove(&mut seq, &item);

    TestResult::from_bool(seq == before)
}

/// remove shrinks the sequence by exactly one when the item is present.
#[quickcheck]
fn prop_remove_present_shrinks_by_one(mut seq: Vec<i64>, item: i64) -> bool {
    seq.push(item);
    seq.sort_unstable();
    let len = seq.len();

    remove(&mut seq, &item);

    seq.len() == len - 1 && is_sorted(&seq)
}
