//! Pattern 4: Async Lookup with Simulated Latency
//! Example: Bounding the Wait with a Budget
//!
//! Run with: cargo run --bin p4_fetch_timeout

use std::time::Duration;

use closure_state_patterns::fetch::{fetch_user_with_timeout, FETCH_LATENCY};

#[tokio::main]
async fn main() {
    println!("=== A Budget the Lookup Can Meet ===\n");
    let generous = FETCH_LATENCY * 4;
    match fetch_user_with_timeout(3, generous).await {
        Ok(user) => println!("  within {:?}: {} answered", generous, user.name),
        Err(e) => println!("  {}", e),
    }

    println!("\n=== A Budget It Cannot Meet ===");
    let tight = Duration::from_millis(10);
    match fetch_user_with_timeout(3, tight).await {
        Ok(user) => println!("  unexpectedly fast: {:?}", user),
        // The elapsed budget arrives as an ordinary error value.
        Err(e) => println!("  {}", e),
    }
}
