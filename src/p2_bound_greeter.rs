//! Pattern 2: Bound Capabilities
//! Example: A Greeter That Owns Its Context
//!
//! Run with: cargo run --bin p2_bound_greeter

use std::thread;

use closure_state_patterns::{greet, User};

fn main() {
    println!("=== The Pure Greeting Function ===\n");
    println!("{}", greet("Eric"));

    println!("\n=== Greeting Through the Owner ===");
    let user = User::new("Ethan");
    println!("{}", user.greeting());

    // A bare method reference is not bound to anyone: it is a plain function
    // that still needs a receiver at every call.
    let unbound = User::greeting;
    println!("{} (via User::greeting, receiver passed by hand)", unbound(&user));

    println!("\n=== A Bound Greeter ===");
    // greeter() copies the owner into the callable at construction time.
    let greeter = user.greeter();
    drop(user); // the owner is gone...
    println!("{} (the owner was dropped)", greeter());

    // Bound capabilities travel: the closure owns everything it needs.
    let from_thread = thread::spawn(move || greeter()).join().unwrap();
    println!("{} (from another thread)", from_thread);

    println!("\n=== Key Points ===");
    println!("1. User::greeting as a value takes &User explicitly, every time");
    println!("2. greeter() binds the owner into the closure, permanently");
    println!("3. A bound greeter outlives its owner and ignores the call site");
    println!("4. Owning captures make the capability Send: it can change threads");
}
