//! Parallel execution adapters.
//!
//! This layer wraps the `delprime` adapters with parallel implementations.
//! Only the batch adapter gains a parallel variant; the streaming adapter
//! is inherently sequential and is re-exported from the base crate.

/// Batch adapter with parallel per-root processing.
pub mod batch;
