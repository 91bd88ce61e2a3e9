//! Pattern 1: Counter Factories and Encapsulated State
//! Example: An Opaque Counter Handle
//!
//! Run with: cargo run --bin p1_counter_factory

use closure_state_patterns::{create_counter, Counter};

fn main() {
    println!("=== An Opaque Counter Handle ===\n");

    // Usage: every factory call hands out a handle with its own private count.
    let mut c1 = create_counter();
    assert_eq!(c1.next(), 1);
    assert_eq!(c1.next(), 2);

    let mut c2 = create_counter();
    assert_eq!(c2.next(), 1); // c2 starts at 1: nothing is shared with c1
    assert_eq!(c1.next(), 3); // c1 kept its own sequence

    println!("c1 counted 1, 2, 3 while c2 answered 1 in between");

    println!("\n=== Ticket Numbers ===");
    let mut ticket = Counter::new();
    for customer in ["Eric", "Ethan", "Léa"] {
        println!("  {} takes ticket #{}", customer, ticket.next());
    }

    // This won't compile - the count is private:
    // ticket.count += 10; // Error: field `count` of struct `Counter` is private

    println!("\n=== Key Points ===");
    println!("1. create_counter() returns a fresh handle on every call");
    println!("2. The count is private; next() is the only way to touch it");
    println!("3. next() mutates and reads in one step: 1, 2, 3, ...");
    println!("4. Two handles never share state, so they cannot alias");
}
