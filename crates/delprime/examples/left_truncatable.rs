//! Left-deletable (left-truncatable) primes.
//!
//! This example demonstrates:
//! - Prepend-side search, where values grow by a full digit place per step
//! - The streaming adapter with early termination
//! - Bounded searches for bases where exhaustion is unproven
//!
//! Expected output is included as comments.

#[cfg(feature = "std")]
use delprime::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), DelprimeError> {
    println!("{}", "=".repeat(80));
    println!("Left-Deletable Primes - Streaming and Bounded Searches");
    println!("{}", "=".repeat(80));
    println!();

    example_1_base_ten_champion()?;
    example_2_streaming_early_stop()?;
    example_3_bounded_search()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: The Base-Ten Champion
/// The largest left-truncatable prime has 24 digits.
fn example_1_base_ten_champion() -> Result<(), DelprimeError> {
    println!("Example 1: Base-Ten Champion");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let result = Delprime::new()
        .base(10)
        .side(Left)
        .adapter(Batch)
        .build()?
        .run()?;

    if let Some(largest) = result.largest() {
        println!("Largest of {} leaves: {} ({} digits)", result.len(), largest, largest.len());
    }
    println!("Elapsed: {:.2?}", start.elapsed());
    println!();

    // Largest of 1442 leaves: 357686312646216567629137 (24 digits)

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Streaming With Early Termination
/// Stop as soon as a leaf with at least 15 digits appears; the rest of
/// the forest is never walked.
fn example_2_streaming_early_stop() -> Result<(), DelprimeError> {
    println!("Example 2: Streaming Early Stop");
    println!("{}", "-".repeat(80));

    let stream = Delprime::new()
        .base(10)
        .side(Left)
        .adapter(Streaming)
        .build()?
        .run()?;

    for leaf in stream {
        let leaf = leaf?;
        if leaf.len() >= 15 {
            println!("First 15-digit leaf: {leaf}");
            break;
        }
    }
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Bounded Search
/// Base 24 left-truncatable primes run long; a digit bound keeps the
/// search provably terminating. Capped nodes are neither expanded nor
/// reported, and the result is flagged unexhausted.
fn example_3_bounded_search() -> Result<(), DelprimeError> {
    println!("Example 3: Bounded Search (base 24, 6-digit cap)");
    println!("{}", "-".repeat(80));

    let result = Delprime::new()
        .base(24)
        .side(Left)
        .max_digits(6)
        .adapter(Batch)
        .build()?
        .run()?;

    println!(
        "Leaves within bound: {}, exhausted: {}",
        result.len(),
        result.exhausted
    );
    println!();

    // Leaves within bound: <count>, exhausted: false

    Ok(())
}
