//! # Closures & Encapsulated State
//!
//! This crate contains examples for closures, private per-instance state, and
//! capabilities bound to their owner.
//!
//! ## Patterns Covered
//!
//! 1. **Counter Factories and Encapsulated State**
//!    - An opaque handle with one mutate-and-read operation
//!    - The closure rendition of the same factory
//!    - Sharing a counter by serializing access externally
//!
//! 2. **Bound Capabilities**
//!    - Method references need a receiver at every call
//!    - A greeter that owns its context and survives its owner
//!
//! 3. **Structured Records and Field Access**
//!    - Nested records, explicit field access, destructuring with `..`
//!
//! 4. **Async Lookup with Simulated Latency**
//!    - Awaiting a delayed directory answer
//!    - Bounding the wait with a time budget
//!
//! 5. **Defaults and Variadic-Style Arguments**
//!    - `Option` parameters and `Default` structs
//!    - Slice parameters in place of argument lists
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Counter Factories and Encapsulated State
//! cargo run --bin p1_counter_factory
//! cargo run --bin p1_closure_counter
//! cargo run --bin p1_shared_counter
//!
//! # Pattern 2: Bound Capabilities
//! cargo run --bin p2_bound_greeter
//!
//! # Pattern 3: Structured Records and Field Access
//! cargo run --bin p3_record_fields
//!
//! # Pattern 4: Async Lookup with Simulated Latency
//! cargo run --bin p4_async_fetch
//! cargo run --bin p4_fetch_timeout
//!
//! # Pattern 5: Defaults and Variadic-Style Arguments
//! cargo run --bin p5_default_args
//! cargo run --bin p5_rest_args
//! ```

pub mod counter;
pub mod fetch;
pub mod greeting;

pub use counter::{closure_counter, create_counter, Counter};
pub use fetch::{fetch_user, fetch_user_with_timeout, FetchError, UserRecord};
pub use greeting::{greet, User};
