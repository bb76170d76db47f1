//! Comparator contract for ordered-sequence operations.
//!
//! ## Purpose
//!
//! This module defines the three-way comparison contract that every search
//! and mutation operation is parameterized by, together with the default
//! ascending comparator used when the element type is a primitive number.
//!
//! ## Design notes
//!
//! * **Three-way**: Comparators return [`Ordering`] rather than a bare
//!   integer, so the three outcomes are exhaustively matchable.
//! * **Borrowed arguments**: Comparators receive `&T` so elements are never
//!   moved or cloned during a search.
//! * **Restricted default**: [`natural_order`] is only available where
//!   `T: Num + PartialOrd`, so non-numeric element types must supply an
//!   explicit comparator instead of relying on implicit coercion.
//!
//! ## Invariants
//!
//! * A comparator must be consistent with the sequence's existing order;
//!   the operations silently produce wrong (never unsafe) results otherwise.
//! * `natural_order` treats incomparable values (NaN) as equal.
//!
//! ## Non-goals
//!
//! * This module does not verify comparator consistency.
//! * This module does not define the search algorithm itself.

// External dependencies
use core::cmp::Ordering;
use num_traits::Num;

// ============================================================================
// Comparator Contract
// ============================================================================

/// Three-way comparison function over borrowed elements.
///
/// Returns [`Ordering::Less`] when the first argument logically precedes the
/// second, [`Ordering::Equal`] when the two are equivalent, and
/// [`Ordering::Greater`] when the first follows the second.
///
/// Implemented automatically for every closure and function of the matching
/// shape, so this trait never needs to be implemented by hand:
///
/// ```rust
/// use ordseq::prelude::Comparator;
///
/// fn takes_comparator<T, C: Comparator<T>>(_cmp: C) {}
///
/// takes_comparator(|a: &u32, b: &u32| a.cmp(b));
/// ```
pub trait Comparator<T>: FnMut(&T, &T) -> Ordering {}

impl<T, F> Comparator<T> for F where F: FnMut(&T, &T) -> Ordering {}

// ============================================================================
// Default Comparator
// ============================================================================

/// Default ascending comparator for primitive numeric element types.
///
/// Incomparable pairs (NaN on either side) are treated as equal, matching
/// the crate-wide rule that a sequence containing NaN is simply an
/// order-inconsistent input with unspecified (but safe) results.
#[inline]
pub fn natural_order<T: Num + PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
