//! Pattern 1: Counter Factories and Encapsulated State
//! Example: The Closure Rendition
//!
//! Run with: cargo run --bin p1_closure_counter

use closure_state_patterns::closure_counter;

/// Drives any counting closure a fixed number of times.
fn run(mut count: impl FnMut() -> u64, times: usize) -> u64 {
    let mut last = 0;
    for _ in 0..times {
        last = count();
    }
    last
}

fn main() {
    println!("=== A Count Captured by a Closure ===\n");

    // Usage: the closure owns a count captured from the factory's scope.
    // There is no struct to look inside; the state has no name out here.
    let mut tick = closure_counter();
    println!("tick() -> {}", tick());
    println!("tick() -> {}", tick());

    let mut tock = closure_counter();
    println!("tock() -> {} (its own count, not tick's)", tock());
    println!("tick() -> {}", tick());

    // Calling the closure mutates its captured count, so the binding must
    // be `mut`. This won't compile:
    // let frozen = closure_counter();
    // frozen(); // Error: cannot borrow `frozen` as mutable

    println!("\n=== Closures as Arguments ===");
    // FnMut in argument position accepts the factory's product directly.
    let reached = run(closure_counter(), 5);
    println!("run(closure_counter(), 5) -> {}", reached);
    assert_eq!(reached, 5);

    println!("\n=== Key Points ===");
    println!("1. move closures own their captures; the count lives inside");
    println!("2. Each closure_counter() call captures a brand-new count");
    println!("3. FnMut is the closure trait for call-after-call mutation");
    println!("4. No accessor exists: the count is gone when the closure is");
}
