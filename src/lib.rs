//! # ordseq — Ordered-Sequence Operations for Rust
//!
//! Locate, test, insert, and remove elements in a sequence that is kept
//! sorted under a caller-supplied comparison rule, with a single iterative
//! binary search doing all of the work.
//!
//! ## What does it do?
//!
//! Many programs keep a `Vec<T>` sorted and need four things from it: find
//! an element, ask whether it is present, insert a new element without
//! breaking the order, and delete a matching element. This crate provides
//! exactly those operations, all delegating to one O(log n) binary-search
//! primitive, so the sequence stays sorted without ever being re-sorted.
//!
//! ## Quick Start
//!
//! ### Numeric sequences
//!
//! Primitive numeric element types get a default ascending comparator, so
//! no comparison function needs to be supplied:
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let mut primes = vec![2, 3, 5, 7, 11, 13];
//!
//! assert_eq!(index_of(&primes, &7), 3);
//! assert_eq!(index_of(&primes, &6), -1);
//! assert!(includes(&primes, &11));
//!
//! insert(&mut primes, 17);
//! remove(&mut primes, &2);
//! assert_eq!(primes, [3, 5, 7, 11, 13, 17]);
//! ```
//!
//! ### Custom comparators
//!
//! Any element type works with the `_by` operations, which take an explicit
//! three-way comparator (`Ordering::Less` when the first argument precedes
//! the second):
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let mut words = vec!["ant", "bee", "cat"];
//!
//! insert_by(&mut words, "bat", |a, b| a.cmp(b));
//! assert_eq!(words, ["ant", "bat", "bee", "cat"]);
//!
//! let result = binary_search_by(&words, &"bee", |a, b| a.cmp(b));
//! assert!(result.found);
//! assert_eq!(result.index, 2);
//! ```
//!
//! ### Insertion points
//!
//! When an item is absent, [`prelude::binary_search`] reports where it would
//! go, which is how `insert` keeps the sequence sorted:
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let evens = vec![2, 4, 6, 8];
//! let result = binary_search(&evens, &5);
//!
//! assert!(!result.found);
//! assert_eq!(result.index, 2); // between 4 and 6
//! ```
//!
//! ## Contract
//!
//! Every operation assumes the sequence is already sorted under the supplied
//! comparator. That precondition is not checked: violating it yields
//! logically wrong (but always memory-safe) results. When duplicates of the
//! searched item exist, the search may land on any one of them; `remove`
//! therefore removes an arbitrary matching element, not necessarily the
//! first or last duplicate.
//!
//! All operations are total. Empty sequences, absent elements, and items
//! ordered before or after everything present are ordinary, well-defined
//! cases — nothing panics and nothing returns an error.
//!
//! ## Complexity
//!
//! | Operation       | Comparisons | Extra space |
//! |-----------------|-------------|-------------|
//! | `binary_search` | O(log n)    | O(1)        |
//! | `index_of`      | O(log n)    | O(1)        |
//! | `includes`      | O(log n)    | O(1)        |
//! | `insert`        | O(log n)    | O(1), O(n) element moves |
//! | `remove`        | O(log n)    | O(1), O(n) element moves |
//!
//! ## no_std Support
//!
//! The crate is `no_std`-compatible (it needs only `alloc` for `Vec`):
//!
//! ```toml
//! [dependencies]
//! ordseq = { version = "0.1", default-features = false }
//! ```
//!
//! ## Non-goals
//!
//! * No thread-safe or concurrent access; callers serialize externally.
//! * No self-balancing tree structure; the backing store is a plain `Vec`.
//! * No detection or repair of unsorted input.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - comparator contract and search result type.
mod primitives;

// Layer 2: Algorithms - the binary-search primitive.
mod algorithms;

// Layer 3: API - the public operation surface.
mod api;

// Standard ordseq prelude.
pub mod prelude {
    pub use crate::api::{
        binary_search, binary_search_by, includes, includes_by, index_of, index_of_by, insert,
        insert_by, natural_order, remove, remove_by, Comparator, SearchResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal layers for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
