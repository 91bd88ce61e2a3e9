//! Pattern 4: Async Lookup with Simulated Latency
//! Example: Awaiting a Directory Answer
//!
//! Run with: cargo run --bin p4_async_fetch

use closure_state_patterns::fetch::{fetch_user, fetch_user_response, parse_user};

/// Awaits the lookup and renders either outcome.
async fn display_user(id: u64) {
    match fetch_user(id).await {
        Ok(user) => println!("  #{} is {}", user.id, user.name),
        Err(e) => println!("  lookup failed: {}", e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== Awaiting the Lookup ===\n");
    // The answer arrives after the simulated latency; await suspends this
    // task, the thread stays free.
    display_user(1).await;

    println!("\n=== The Stages, Separately ===");
    let body = fetch_user_response(2).await?;
    println!("  raw body: {}", body);
    let user = parse_user(&body)?;
    println!("  parsed:   {:?}", user);

    println!("\n=== An Id the Directory Does Not Know ===");
    display_user(404).await;

    println!("\n=== Key Points ===");
    println!("1. async fn + .await reads like the synchronous version");
    println!("2. ? propagates errors across await points unchanged");
    println!("3. The caller sees a typed record; the JSON body is just a stage");

    Ok(())
}
