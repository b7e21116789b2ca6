//! Arbitrary-base integers with digit-level append and prepend.
//!
//! ## Purpose
//!
//! This module provides [`RadixInt`], an immutable integer paired with its
//! digit sequence in a chosen base. The search extends numbers one digit at a
//! time, so the digit sequence must be first-class: appending or prepending a
//! digit derives a new value without re-parsing a textual representation.
//!
//! ## Design notes
//!
//! * **Immutable**: `append`/`prepend` return new values; a parent node is
//!   never mutated by deriving its children.
//! * **Validated**: Construction rejects any digit `>= base`; such a digit
//!   indicates a defect in the digit-generation logic and is surfaced
//!   immediately.
//! * **Unbounded**: The numeric value is a [`BigUint`]; deletable-prime
//!   searches routinely exceed 64-bit range.
//! * **Value-ordered**: Equality, ordering, and hashing follow the numeric
//!   value, independent of the base or digit representation.
//!
//! ## Key concepts
//!
//! * **Digit order**: Digits are stored most-significant-first, the order in
//!   which a number is written.
//! * **Derivation**: `append` computes `value * base + d`; `prepend` computes
//!   `d * base^len + value`.
//!
//! ## Invariants
//!
//! * `base >= 2` and every stored digit satisfies `digit < base`.
//! * The digit sequence is never empty.
//! * The cached value always equals the positional interpretation of the
//!   digit sequence.
//!
//! ## Non-goals
//!
//! * This module does not implement general bignum arithmetic; `num-bigint`
//!   supplies that.
//! * This module does not test primality (see `math::primality`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use num_bigint::BigUint;
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::DelprimeError;

// ============================================================================
// Digit Alphabet
// ============================================================================

/// Printable digit alphabet: `0-9`, then `a-z`, then `A-Z`.
///
/// Bases up to 62 render one character per digit; larger bases fall back to
/// a symbolic representation (see [`RadixInt`]'s `Display`).
pub const DIGIT_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ============================================================================
// RadixInt
// ============================================================================

/// An immutable integer paired with its digit sequence in an arbitrary base.
#[derive(Debug, Clone)]
pub struct RadixInt {
    /// The radix; always at least 2.
    base: u32,

    /// Digit sequence, most significant first; every digit is `< base`.
    digits: Vec<u32>,

    /// Cached positional value of the digit sequence.
    value: BigUint,
}

impl RadixInt {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Construct a value from a base and a most-significant-first digit
    /// sequence.
    ///
    /// Returns [`DelprimeError::DigitOutOfRange`] if any digit is `>= base`;
    /// the reported position counts from the most significant digit.
    pub fn new(base: u32, digits: &[u32]) -> Result<Self, DelprimeError> {
        if base < 2 {
            return Err(DelprimeError::InvalidBase(base));
        }
        if digits.is_empty() {
            return Err(DelprimeError::EmptyDigits);
        }

        let mut value = BigUint::zero();
        for (position, &digit) in digits.iter().enumerate() {
            if digit >= base {
                return Err(DelprimeError::DigitOutOfRange {
                    digit,
                    position,
                    base,
                });
            }
            value = value * base + digit;
        }

        Ok(Self {
            base,
            digits: digits.to_vec(),
            value,
        })
    }

    /// Construct a single-digit value.
    pub fn from_digit(base: u32, digit: u32) -> Result<Self, DelprimeError> {
        Self::new(base, &[digit])
    }

    // ========================================================================
    // Derivation
    // ========================================================================

    /// Derive a new value with `digit` added at the least significant end.
    ///
    /// The receiver is unchanged.
    pub fn append(&self, digit: u32) -> Result<Self, DelprimeError> {
        if digit >= self.base {
            return Err(DelprimeError::DigitOutOfRange {
                digit,
                position: self.digits.len(),
                base: self.base,
            });
        }

        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.extend_from_slice(&self.digits);
        digits.push(digit);

        Ok(Self {
            base: self.base,
            digits,
            value: &self.value * self.base + digit,
        })
    }

    /// Derive a new value with `digit` added at the most significant end.
    ///
    /// The receiver is unchanged.
    pub fn prepend(&self, digit: u32) -> Result<Self, DelprimeError> {
        if digit >= self.base {
            return Err(DelprimeError::DigitOutOfRange {
                digit,
                position: 0,
                base: self.base,
            });
        }

        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.push(digit);
        digits.extend_from_slice(&self.digits);

        // place = base^len, built by repeated multiplication; digit counts
        // stay small enough that this is never a hot path.
        let mut place = BigUint::from(1u32);
        for _ in 0..self.digits.len() {
            place *= self.base;
        }

        Ok(Self {
            base: self.base,
            digits,
            value: place * digit + &self.value,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The radix of the digit sequence.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The digit sequence, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    /// The numeric value.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the value is a single digit (a potential search root).
    #[inline]
    pub fn is_single_digit(&self) -> bool {
        self.digits.len() == 1
    }

    /// Render the digit sequence using the 62-character alphabet.
    ///
    /// Only meaningful for `base <= 62`; callers beyond that use the
    /// symbolic `Display` form.
    fn alphabet_string(&self) -> String {
        self.digits
            .iter()
            .map(|&d| DIGIT_ALPHABET[d as usize] as char)
            .collect()
    }
}

// ============================================================================
// Value-Based Comparison
// ============================================================================

impl PartialEq for RadixInt {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for RadixInt {}

impl PartialOrd for RadixInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RadixInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for RadixInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RadixInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.base == 10 {
            return write!(f, "{}", self.value);
        }
        if self.base as usize <= DIGIT_ALPHABET.len() {
            return write!(f, "{}", self.alphabet_string());
        }
        // No printable alphabet beyond 62 characters; fall back to a
        // symbolic form.
        write!(f, "radix({}, {:?})", self.base, self.digits)
    }
}
