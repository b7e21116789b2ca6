//! Error types for deletable-prime search operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while constructing
//! arbitrary-base integers or configuring a search, including digit/base
//! validation and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending digit
//!   and its position).
//! * **Deferred**: Errors may be caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments; only `core` items are used.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Value validation**: A digit must always be strictly less than its base.
//! 2. **Configuration validation**: Base and depth-bound constraints.
//! 3. **Builder hygiene**: Parameters may be configured at most once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies; a digit/base
//!   violation indicates a defect in the digit-generation logic and is fatal.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for deletable-prime search operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelprimeError {
    /// A positional radix needs at least two distinct digit values.
    InvalidBase(u32),

    /// An arbitrary-base integer needs at least one digit.
    EmptyDigits,

    /// A digit was greater than or equal to the stated base.
    DigitOutOfRange {
        /// The offending digit value.
        digit: u32,
        /// Zero-based position of the digit, counted from the most
        /// significant end (the order digits are supplied).
        position: usize,
        /// The base the digit was checked against.
        base: u32,
    },

    /// The digit-count bound must allow at least the single-digit roots.
    InvalidMaxDigits(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DelprimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBase(base) => {
                write!(f, "Invalid base: {base} (must be at least 2)")
            }
            Self::EmptyDigits => write!(f, "Digit sequence is empty"),
            Self::DigitOutOfRange {
                digit,
                position,
                base,
            } => {
                write!(
                    f,
                    "Digit {digit} at position {position} is greater than or equal to base {base}"
                )
            }
            Self::InvalidMaxDigits(max) => {
                write!(f, "Invalid max_digits: {max} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DelprimeError {}
