//! Input validation for search configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for search configuration
//! parameters: the digit radix, the optional digit-count bound, and builder
//! hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cheap**: All checks are O(1); digit-sequence validation lives on
//!   `RadixInt` construction itself.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not validate digit sequences (handled by `RadixInt`).
//! * This module does not perform the search itself.

// Internal dependencies
use crate::primitives::errors::DelprimeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for search configuration.
///
/// Provides static methods returning `Result<(), DelprimeError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the digit radix.
    pub fn validate_base(base: u32) -> Result<(), DelprimeError> {
        if base < 2 {
            return Err(DelprimeError::InvalidBase(base));
        }
        Ok(())
    }

    /// Validate the optional digit-count bound.
    ///
    /// A bound of zero would prune even the single-digit roots.
    pub fn validate_max_digits(max_digits: usize) -> Result<(), DelprimeError> {
        if max_digits == 0 {
            return Err(DelprimeError::InvalidMaxDigits(max_digits));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DelprimeError> {
        if let Some(parameter) = duplicate_param {
            return Err(DelprimeError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
