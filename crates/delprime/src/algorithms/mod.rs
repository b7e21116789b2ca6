//! Layer 3: Algorithms
//!
//! This layer implements the digit-extension rules of the deletable-prime
//! tree: extension sides, eligible digits, and child derivation. It is
//! orchestrated by the engine layer.

// Digit-extension rules and the extension side policy.
pub mod extension;
