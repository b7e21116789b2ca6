//! Digit-extension rules for the deletable-prime tree.
//!
//! This layer implements the core extension step: which digits may extend a
//! frontier number, on which end they land, and how a candidate child is
//! derived. It contains the "business logic" of the tree but is orchestrated
//! by the engine layer.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::Range;

// Internal dependencies
use crate::primitives::digits::RadixInt;
use crate::primitives::errors::DelprimeError;

// ============================================================================
// Extension Side
// ============================================================================

/// Which end of the digit sequence extensions land on.
///
/// `Right` appends digits (right-truncatable primes); `Left` prepends them
/// (left-truncatable primes). Deleting digits from the extension end of a
/// leaf walks its ancestor chain back to a single-digit prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Append digits at the least significant end.
    #[default]
    Right,

    /// Prepend digits at the most significant end.
    Left,
}

impl Side {
    /// Get the name of the side.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Left => "left",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Candidate Digits
// ============================================================================

/// Digits eligible to extend a frontier number: `1..base`.
///
/// Zero is excluded: a leading zero does not change the magnitude and a
/// trailing zero always yields a multiple of the base, so neither produces
/// an informative extension.
#[inline]
pub fn candidate_digits(base: u32) -> Range<u32> {
    1..base
}

// ============================================================================
// Extension
// ============================================================================

/// Derive the candidate child of `parent` extended by `digit` on `side`.
pub fn extend(parent: &RadixInt, digit: u32, side: Side) -> Result<RadixInt, DelprimeError> {
    match side {
        Side::Right => parent.append(digit),
        Side::Left => parent.prepend(digit),
    }
}
