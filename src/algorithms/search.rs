//! Iterative binary search over a sorted slice.
//!
//! ## Purpose
//!
//! This module implements the single nontrivial algorithm in the crate: an
//! iterative, comparator-driven binary search that reports either the
//! position of a matching element or the insertion point for an absent one.
//!
//! ## Design notes
//!
//! * **Iterative**: No recursion, so extra space is O(1) regardless of
//!   sequence length.
//! * **Overflow-safe midpoint**: The midpoint is computed as
//!   `low + ((high - low) >> 1)`, never `(low + high) / 2`. The naive sum
//!   can exceed the representable range for very large index pairs; the
//!   difference form cannot. This is a required part of the contract, not
//!   an incidental optimization.
//! * **Early exit on equivalence**: The first midpoint the comparator
//!   reports as equal is returned immediately. With duplicate elements this
//!   may be any matching index.
//!
//! ## Invariants
//!
//! * The item, if present, always lies within `[low, high)`.
//! * On a miss, the returned index is exactly the count of elements
//!   strictly preceding the item under the comparator.
//!
//! ## Non-goals
//!
//! * This module does not mutate the sequence.
//! * This module does not check that the slice is sorted.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::comparator::Comparator;
use crate::primitives::result::SearchResult;

// ============================================================================
// Search
// ============================================================================

/// Binary search for `item` in a slice sorted under `compare`.
///
/// 1. Starts with the half-open index range `[0, len)`.
/// 2. Compares the midpoint element against `item` via
///    `compare(&seq[mid], item)`:
///    - `Less`: the midpoint precedes the item, search strictly above it.
///    - `Greater`: the midpoint follows the item, search strictly below it.
///    - `Equal`: return `(found: true, index: mid)` immediately.
/// 3. When the range empties, returns `(found: false, index: low)`; `low`
///    is exactly the insertion point that keeps the slice sorted.
///
/// O(log n) comparisons, O(1) extra space. Total over empty slices and
/// items ordered before or after every element.
#[inline]
pub fn binary_search_by<T, C>(seq: &[T], item: &T, mut compare: C) -> SearchResult
where
    C: Comparator<T>,
{
    let mut low = 0;
    let mut high = seq.len();

    while low < high {
        // Written as a difference so the midpoint cannot overflow.
        let mid = low + ((high - low) >> 1);

        match compare(&seq[mid], item) {
            // The midpoint was too low; search the upper half.
            Ordering::Less => low = mid + 1,
            // The midpoint was too high; search the lower half.
            Ordering::Greater => high = mid,
            // Found an exact match.
            Ordering::Equal => {
                return SearchResult {
                    found: true,
                    index: mid,
                }
            }
        }
    }

    // Not found; low is where the item would be inserted.
    SearchResult {
        found: false,
        index: low,
    }
}
