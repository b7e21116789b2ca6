//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: Unified adapter for running a search to completion
//! - **Streaming**: Lazy, leaf-at-a-time iteration over the forest
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified batch adapter for deletable-prime searches.
pub mod batch;

/// Streaming adapter yielding leaves lazily.
pub mod streaming;
