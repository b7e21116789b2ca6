//! Right-deletable (right-truncatable) primes in several bases.
//!
//! This example demonstrates:
//! - Running a batch search to exhaustion
//! - Reporting each maximal prime as it is found via an observer
//! - Comparing forest sizes across bases
//!
//! Expected output is included as comments.

#[cfg(feature = "std")]
use delprime::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), DelprimeError> {
    println!("{}", "=".repeat(80));
    println!("Right-Deletable Primes - Batch Search Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_base_ten()?;
    example_2_observer()?;
    example_3_base_sweep()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Base Ten
/// The classic search: 27 maximal primes, largest 73939133.
fn example_1_base_ten() -> Result<(), DelprimeError> {
    println!("Example 1: Base Ten");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let result = Delprime::new()
        .base(10)
        .side(Right)
        .adapter(Batch)
        .build()?
        .run()?;

    println!("{}", result);
    println!("Elapsed: {:.2?}", start.elapsed());
    println!();

    // Summary:
    //   Base:       10
    //   Side:       right
    //   Roots:      4
    //   Leaves:     27
    //   Exhausted:  yes
    //   ...
    //   Largest:    73939133

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Observer
/// Reports each maximal prime the moment the walk reaches it.
fn example_2_observer() -> Result<(), DelprimeError> {
    println!("Example 2: Observer Hook (base 3)");
    println!("{}", "-".repeat(80));

    fn report(leaf: &RadixInt) {
        println!("  found {leaf}");
    }

    let result = Delprime::new()
        .base(3)
        .side(Right)
        .observer(report)
        .adapter(Batch)
        .build()?
        .run()?;

    println!("Total: {} leaves, largest {}", result.len(), result.largest().map(|l| l.to_string()).unwrap_or_default());
    println!();

    // found 2122
    // Total: 1 leaves, largest 2122   (value 71 in decimal)

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Base Sweep
/// Forest shapes vary wildly with the radix; base 2 has no roots at all
/// (neither 0 nor 1 is prime).
fn example_3_base_sweep() -> Result<(), DelprimeError> {
    println!("Example 3: Base Sweep");
    println!("{}", "-".repeat(80));
    println!("{:>5} {:>7} {:>8} {:>12}", "base", "roots", "leaves", "max digits");

    for base in 2..=12 {
        let result = Delprime::new()
            .base(base)
            .side(Right)
            .adapter(Batch)
            .build()?
            .run()?;

        println!(
            "{:>5} {:>7} {:>8} {:>12}",
            base,
            result.roots.len(),
            result.len(),
            result.stats.max_digits
        );
    }
    println!();

    Ok(())
}
