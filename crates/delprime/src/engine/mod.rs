//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the search by coordinating between primitives
//! (arbitrary-base integers), math (the primality oracle), and algorithms
//! (digit-extension rules). It provides the depth-first walk, configuration
//! validation, and output types.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for deletable-prime searches.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for search operations.
pub mod output;
