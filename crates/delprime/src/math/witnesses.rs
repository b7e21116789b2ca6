//! Deterministic Miller-Rabin witness selection.
//!
//! ## Purpose
//!
//! This module chooses the set of Miller-Rabin bases whose collective verdict
//! is unconditionally correct for a candidate of a given magnitude. Below a
//! published bound a fixed 13-witness set suffices; above it the set scales
//! with the candidate's bit length.
//!
//! ## Design notes
//!
//! * **Fixed set**: `{2..41}` (the first 13 primes) is deterministic for all
//!   candidates below 3,317,044,064,679,887,385,961,981
//!   (Sorenson & Webster, arXiv:1509.00864).
//! * **Scaled set**: Above the bound, every integer in
//!   `[2, 3 * (bit_length + 1)^2]` is used, a conservative superset that is
//!   sufficient unconditionally.
//! * **Stateless**: Selection is recomputed per call; no caching.
//!
//! ## Invariants
//!
//! * Witness sets are non-empty and yielded in ascending order.
//! * Selection depends only on the candidate's magnitude.
//!
//! ## Non-goals
//!
//! * This module does not run the Miller-Rabin rounds themselves
//!   (see `math::primality`).

// External dependencies
use num_bigint::BigUint;

// ============================================================================
// Constants
// ============================================================================

/// Largest magnitude for which [`FIXED_WITNESSES`] is a proven-complete
/// deterministic witness set.
pub const FIXED_WITNESS_BOUND: u128 = 3_317_044_064_679_887_385_961_981;

/// Minimal deterministic witness set below [`FIXED_WITNESS_BOUND`].
pub const FIXED_WITNESSES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

// ============================================================================
// Witness Set
// ============================================================================

/// The witness set selected for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessSet {
    /// The fixed 13-witness set, valid below [`FIXED_WITNESS_BOUND`].
    Fixed,

    /// Every integer in `[2, max]`, valid for arbitrarily large candidates.
    Scaled {
        /// Inclusive upper witness, `3 * (bit_length + 1)^2`.
        max: u64,
    },
}

impl WitnessSet {
    /// Select the witness set for candidate `n`.
    pub fn select(n: &BigUint) -> Self {
        if *n < BigUint::from(FIXED_WITNESS_BOUND) {
            WitnessSet::Fixed
        } else {
            let bits = n.bits();
            WitnessSet::Scaled {
                max: 3 * (bits + 1) * (bits + 1),
            }
        }
    }

    /// Number of witnesses in the set.
    pub fn len(&self) -> usize {
        match self {
            WitnessSet::Fixed => FIXED_WITNESSES.len(),
            WitnessSet::Scaled { max } => (*max as usize).saturating_sub(1),
        }
    }

    /// Whether the set is empty; never true for a well-formed selection.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the witnesses in ascending order.
    pub fn iter(&self) -> WitnessIter {
        WitnessIter {
            kind: *self,
            index: 0,
        }
    }
}

// ============================================================================
// Witness Iterator
// ============================================================================

/// Iterator over the witnesses of a [`WitnessSet`].
#[derive(Debug, Clone)]
pub struct WitnessIter {
    kind: WitnessSet,
    index: u64,
}

impl Iterator for WitnessIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self.kind {
            WitnessSet::Fixed => {
                let witness = FIXED_WITNESSES.get(self.index as usize).copied()?;
                self.index += 1;
                Some(u64::from(witness))
            }
            WitnessSet::Scaled { max } => {
                let witness = 2 + self.index;
                if witness > max {
                    return None;
                }
                self.index += 1;
                Some(witness)
            }
        }
    }
}
