//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the comparator contract and the search result type
//! used throughout the crate. It has zero internal dependencies within the
//! crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Three-way comparator contract and the default numeric comparator.
pub mod comparator;

/// Binary-search outcome type.
pub mod result;
