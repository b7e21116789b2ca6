//! # delprime — Deletable Primes in Arbitrary Bases
//!
//! A fast, deterministic, and allocation-conscious enumerator of deletable
//! (truncatable) primes for **Rust**, in any digit radix from 2 upward.
//!
//! ## What is a deletable prime?
//!
//! Start from a single-digit prime and repeatedly glue a nonzero digit onto
//! one end of the number. A number is *deletable* (on that end) when every
//! prefix of this construction is itself prime: deleting the last-added
//! digit, and the one before it, and so on, always leaves a prime. The
//! numbers that cannot be extended any further are the *maximal* deletable
//! primes. In base 10, appending on the right, the largest one is
//! 73 939 133; prepending on the left, it is
//! 357 686 312 646 216 567 629 137 (OEIS A024770 and A024785).
//!
//! Primality along the way is decided exactly by a deterministic
//! Miller–Rabin oracle on arbitrary-precision integers, so search depth is
//! limited only by how long you let it run, never by word width.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use delprime::prelude::*;
//!
//! // Build the search
//! let search = Delprime::new()
//!     .base(10)          // Decimal digits
//!     .side(Right)       // Append digits on the right
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Run the whole forest to exhaustion
//! let result = search.run()?;
//!
//! println!("{}", result);
//! # Result::<(), DelprimeError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Base:       10
//!   Side:       right
//!   Roots:      4
//!   Leaves:     27
//!   Exhausted:  yes
//!   ...
//!   Largest:    73939133
//! ```
//!
//! ### Streaming
//!
//! For lazy consumption, or to stop early, use the streaming adapter. It
//! yields each maximal prime as the depth-first walk reaches it:
//!
//! ```rust
//! use delprime::prelude::*;
//!
//! let stream = Delprime::new()
//!     .base(10)
//!     .side(Right)
//!     .adapter(Streaming)
//!     .build()?
//!     .run()?;
//!
//! for leaf in stream {
//!     let leaf = leaf?;
//!     if leaf.len() >= 6 {
//!         println!("{leaf}");
//!     }
//! }
//! # Result::<(), DelprimeError>::Ok(())
//! ```
//!
//! ### Bounded Searches
//!
//! Exhaustion of the forest is an empirical fact in base 10 but unproven in
//! general. `.max_digits(n)` bounds every search: nodes at the bound are
//! neither expanded nor reported, and the result is marked unexhausted.
//!
//! ```rust
//! use delprime::prelude::*;
//!
//! let result = Delprime::new()
//!     .base(10)
//!     .side(Left)
//!     .max_digits(10)    // Stop before the 24-digit champion
//!     .adapter(Batch)
//!     .build()?
//!     .run()?;
//!
//! assert!(!result.exhausted);
//! # Result::<(), DelprimeError>::Ok(())
//! ```
//!
//! ## `no_std` Support
//!
//! The crate is `no_std`-compatible (with `alloc`); disable the default
//! `std` feature for embedded targets. Big-integer arithmetic comes from
//! `num-bigint`, which is itself `no_std`-capable.
//!
//! ## References
//!
//! - OEIS A024770 (right-truncatable primes), A024785 (left-truncatable primes)
//! - Sorenson, J. & Webster, J. (2015). "Strong pseudoprimes to twelve prime
//!   bases" — deterministic witness sets below 3.3 × 10²⁴
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - the primality oracle.
mod math;

// Layer 3: Algorithms - digit-extension rules.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for deletable-prime searches.
mod api;

// Standard delprime prelude.
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
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
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
