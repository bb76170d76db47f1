//! Binary-search outcome type.
//!
//! ## Purpose
//!
//! This module defines [`SearchResult`], the pair returned by the search
//! primitive: whether a matching element was found, and either its position
//! or the position at which the item would be inserted.
//!
//! ## Key concepts
//!
//! ### Insertion point
//!
//! When `found` is `false`, `index` is the smallest index at which the item
//! could be inserted while preserving sort order, equal to the count of
//! elements strictly preceding it under the comparator. An item ordered
//! after every element therefore reports `index == len`, one past the end.
//!
//! ## Invariants
//!
//! * `index <= len` always; `index < len` whenever `found` is `true`.
//! * When duplicates of the item exist, `index` may point at any one of
//!   them; no leftmost/rightmost guarantee is made.

// ============================================================================
// Data Structures
// ============================================================================

/// Outcome of a binary search over a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Whether an element equivalent to the item was found.
    pub found: bool,

    /// Position of a matching element, or the insertion point when absent.
    pub index: usize,
}
