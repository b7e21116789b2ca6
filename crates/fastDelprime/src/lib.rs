//! # fastDelprime — Parallel Deletable-Prime Search
//!
//! Multi-core deletable (truncatable) prime enumeration, built on the
//! `delprime` crate. Each single-digit root grows an independent subtree,
//! so the forest decomposes perfectly across CPU cores: `fastDelprime`
//! expands every root on its own rayon worker and merges the outcomes in
//! root order, returning exactly the sequential result, faster.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastDelprime::prelude::*;
//!
//! // Build the search with parallel execution (default)
//! let search = Delprime::new()
//!     .base(10)
//!     .side(Left)
//!     .adapter(Batch)    // Parallel by default
//!     .build()?;
//!
//! let result = search.run()?;
//!
//! assert_eq!(
//!     result.largest().unwrap().to_string(),
//!     "357686312646216567629137"
//! );
//! # Result::<(), DelprimeError>::Ok(())
//! ```
//!
//! ### Opting Out of Parallelism
//!
//! ```rust
//! use fastDelprime::prelude::*;
//!
//! let search = Delprime::new()
//!     .base(10)
//!     .adapter(Batch)
//!     .parallel(false)   // Sequential forest pass
//!     .build()?;
//!
//! let result = search.run()?;
//! assert_eq!(result.len(), 27);
//! # Result::<(), DelprimeError>::Ok(())
//! ```
//!
//! ## Determinism
//!
//! The parallel pass merges per-root outcomes in root order, so the leaf
//! sequence, statistics, and exhaustion flag are identical to a sequential
//! run. The one caveat is the observer hook: with parallel execution it
//! fires from worker threads, so leaves of *different* roots interleave
//! nondeterministically (within one root the order is preserved).
//!
//! ## Streaming
//!
//! The streaming adapter is inherently sequential and is re-exported from
//! the base crate unchanged; select it with `.adapter(Streaming)` as usual.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel forest pass.
mod engine;

// Layer 6: Adapters - parallel execution adapters.
mod adapters;

// High-level fluent API for parallel deletable-prime searches.
mod api;

// Standard fastDelprime prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Streaming},
        DelprimeBuilder as Delprime,
        DelprimeError, LeafStream, RadixInt, SearchResult, SearchStats, Side,
        Side::Left,
        Side::Right,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
