//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure number-theoretic building blocks of the
//! search:
//! - The fixed small-prime table for fast-path verdicts and trial division
//! - Deterministic Miller-Rabin witness selection
//! - The primality oracle itself
//!
//! These are reusable mathematical functions with no search-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Deterministic primality oracle.
pub mod primality;

/// Fixed small-prime table and trial division.
pub mod table;

/// Miller-Rabin witness selection.
pub mod witnesses;
