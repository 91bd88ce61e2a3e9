//! Pattern 5: Defaults and Variadic-Style Arguments
//! Example: Defaulted Arguments Without Overloads
//!
//! Run with: cargo run --bin p5_default_args

/// Adds `increment` to `base`, falling back to 10 when the caller passes
/// `None`.
fn add(base: i64, increment: Option<i64>) -> i64 {
    base + increment.unwrap_or(10)
}

#[derive(Debug)]
struct RetryPolicy {
    attempts: u32,
    backoff_ms: u64,
    jitter: bool,
}

// The baseline lives in one place instead of at every call site.
impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            attempts: 3,
            backoff_ms: 250,
            jitter: true,
        }
    }
}

fn main() {
    println!("=== Option as a Defaulted Parameter ===\n");
    println!("add(5, None)    = {}", add(5, None)); // the default kicks in
    println!("add(5, Some(1)) = {}", add(5, Some(1)));
    assert_eq!(add(5, None), 15);

    println!("\n=== Struct Defaults with Update Syntax ===");
    let baseline = RetryPolicy::default();
    println!("baseline: {:?}", baseline);

    // Override one field, keep the rest of the defaults.
    let patient = RetryPolicy {
        attempts: 6,
        ..Default::default()
    };
    println!("patient:  {:?}", patient);
    assert_eq!(patient.backoff_ms, baseline.backoff_ms);

    println!("\n=== Key Points ===");
    println!("1. Option<T> + unwrap_or is the explicit defaulted parameter");
    println!("2. The call site shows that a default is in play: add(5, None)");
    println!("3. Default centralizes a type's baseline values");
    println!("4. Struct update syntax overrides only what differs");
}
