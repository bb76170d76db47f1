//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the binary-search primitive that every public
//! operation delegates to. It depends only on Layer 1.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Iterative binary search over a sorted slice.
pub mod search;
