//! Parallel deletable-prime search across CPU cores.
//!
//! This example demonstrates:
//! - The parallel batch adapter (default in fastDelprime)
//! - Timing a parallel run against a sequential one
//! - Identical results from both passes
//!
//! Expected output is included as comments.

use std::time::Instant;

use fastDelprime::prelude::*;

fn main() -> Result<(), DelprimeError> {
    println!("{}", "=".repeat(80));
    println!("Parallel Deletable-Prime Search");
    println!("{}", "=".repeat(80));
    println!();

    // The left-side base-10 forest is big enough for parallelism to pay:
    // 4260 nodes across four roots.
    let parallel_start = Instant::now();
    let parallel = Delprime::new()
        .base(10)
        .side(Left)
        .adapter(Batch)
        .build()?
        .run()?;
    let parallel_elapsed = parallel_start.elapsed();

    let sequential_start = Instant::now();
    let sequential = Delprime::new()
        .base(10)
        .side(Left)
        .adapter(Batch)
        .parallel(false)
        .build()?
        .run()?;
    let sequential_elapsed = sequential_start.elapsed();

    assert_eq!(parallel.leaves, sequential.leaves);
    assert_eq!(parallel.stats, sequential.stats);

    println!("Leaves:     {}", parallel.len());
    if let Some(largest) = parallel.largest() {
        println!("Largest:    {largest}");
    }
    println!("Parallel:   {parallel_elapsed:.2?}");
    println!("Sequential: {sequential_elapsed:.2?}");

    // Leaves:     1442
    // Largest:    357686312646216567629137
    // Parallel:   <elapsed>
    // Sequential: <elapsed>

    Ok(())
}
