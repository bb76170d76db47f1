//! High-level API for ordered-sequence operations.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: searching a
//! sorted sequence, testing membership, and inserting or removing elements
//! while preserving order. Every operation delegates to the binary-search
//! primitive in the algorithms layer.
//!
//! ## Design notes
//!
//! * **Paired forms**: Each operation exists as a `_by` form taking an
//!   explicit [`Comparator`], and a plain form using [`natural_order`] that
//!   is only available for primitive numeric element types.
//! * **In-place mutation**: `insert`/`remove` mutate the caller's `Vec` and
//!   return the same `&mut` reference, so chained calls observe identical
//!   storage rather than a copy.
//! * **Total**: No operation returns an error or panics on well-formed
//!   (sorted) input. "Not found" is an in-band outcome: `-1` from
//!   `index_of`, `false` from `includes`, and a no-op from `remove`.
//!
//! ## Key concepts
//!
//! * **Precondition**: The sequence must already be sorted under the
//!   supplied comparator. This is not checked; violating it degrades
//!   correctness silently, never safety.
//! * **Duplicates**: `insert` always inserts, even when an equivalent
//!   element exists. The search may land on any duplicate, so `remove`
//!   removes an arbitrary matching element.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Num;

// Internal dependencies
use crate::algorithms::search;

// Publicly re-exported types
pub use crate::primitives::comparator::{natural_order, Comparator};
pub use crate::primitives::result::SearchResult;

// ============================================================================
// Search Operations
// ============================================================================

/// Binary search for `item` in a slice sorted under `compare`.
///
/// Returns a [`SearchResult`]: the position of a matching element when
/// found, or the insertion point when absent. O(log n).
#[inline]
pub fn binary_search_by<T, C>(seq: &[T], item: &T, compare: C) -> SearchResult
where
    C: Comparator<T>,
{
    search::binary_search_by(seq, item, compare)
}

/// Binary search in a numerically ascending slice. See [`binary_search_by`].
#[inline]
pub fn binary_search<T: Num + PartialOrd>(seq: &[T], item: &T) -> SearchResult {
    search::binary_search_by(seq, item, natural_order)
}

/// Index of an element equivalent to `item` under `compare`, or `-1`.
///
/// The sentinel `-1` lies outside every valid index range and signals "not
/// present". When duplicates exist, the reported index may belong to any of
/// them. O(log n).
#[inline]
pub fn index_of_by<T, C>(seq: &[T], item: &T, compare: C) -> isize
where
    C: Comparator<T>,
{
    let result = search::binary_search_by(seq, item, compare);
    if result.found {
        // In-bounds Vec indices always fit isize.
        result.index as isize
    } else {
        -1
    }
}

/// Index of `item` in a numerically ascending slice, or `-1`. See
/// [`index_of_by`].
#[inline]
pub fn index_of<T: Num + PartialOrd>(seq: &[T], item: &T) -> isize {
    index_of_by(seq, item, natural_order)
}

/// Whether the slice contains an element equivalent to `item` under
/// `compare`. O(log n).
#[inline]
pub fn includes_by<T, C>(seq: &[T], item: &T, compare: C) -> bool
where
    C: Comparator<T>,
{
    search::binary_search_by(seq, item, compare).found
}

/// Whether a numerically ascending slice contains `item`. See
/// [`includes_by`].
#[inline]
pub fn includes<T: Num + PartialOrd>(seq: &[T], item: &T) -> bool {
    includes_by(seq, item, natural_order)
}

// ============================================================================
// Mutation Operations
// ============================================================================

/// Insert `item` into a `Vec` sorted under `compare`, preserving order.
///
/// The insertion point comes from the binary search; the `found` flag is
/// ignored, so an equivalent element already being present does not prevent
/// insertion — duplicates are permitted and kept in sorted position.
///
/// Returns the same `&mut` reference it was given, for chaining. Elements
/// at or after the insertion point shift up by one, so externally held
/// indices into this `Vec` are invalidated.
#[inline]
pub fn insert_by<'a, T, C>(seq: &'a mut Vec<T>, item: T, compare: C) -> &'a mut Vec<T>
where
    C: Comparator<T>,
{
    let index = search::binary_search_by(seq, &item, compare).index;
    seq.insert(index, item);
    seq
}

/// Insert `item` into a numerically ascending `Vec`. See [`insert_by`].
#[inline]
pub fn insert<T: Num + PartialOrd>(seq: &mut Vec<T>, item: T) -> &mut Vec<T> {
    insert_by(seq, item, natural_order)
}

/// Remove one element equivalent to `item` from a `Vec` sorted under
/// `compare`.
///
/// When no equivalent element exists the `Vec` is returned unmodified; an
/// absent item is a no-op, not an error. When duplicates exist, the element
/// removed is whichever one the search landed on — not necessarily the
/// first or last duplicate.
///
/// Returns the same `&mut` reference it was given, for chaining. On
/// removal, elements after the removed index shift down by one.
#[inline]
pub fn remove_by<'a, T, C>(seq: &'a mut Vec<T>, item: &T, compare: C) -> &'a mut Vec<T>
where
    C: Comparator<T>,
{
    let result = search::binary_search_by(seq, item, compare);

    if result.found {
        seq.remove(result.index);
    }

    seq
}

/// Remove one element equal to `item` from a numerically ascending `Vec`.
/// See [`remove_by`].
#[inline]
pub fn remove<'a, T: Num + PartialOrd>(seq: &'a mut Vec<T>, item: &T) -> &'a mut Vec<T> {
    remove_by(seq, item, natural_order)
}
