//! Pattern 3: Structured Records and Field Access
//! Example: Nested Records Instead of Loose Maps
//!
//! Run with: cargo run --bin p3_record_fields

#[derive(Debug, Clone)]
struct Address {
    city: String,
    postal_code: String,
}

#[derive(Debug, Clone)]
struct Profile {
    name: String,
    age: u8,
    address: Address,
}

fn main() {
    println!("=== Explicit Field Access ===\n");

    let profile = Profile {
        name: "Eric".to_string(),
        age: 25,
        address: Address {
            city: "Paris".to_string(),
            postal_code: "22000".to_string(),
        },
    };

    // Every extraction is a typed path the compiler checks.
    println!("name:        {}", profile.name);
    println!("city:        {}", profile.address.city);
    println!("postal code: {}", profile.address.postal_code);

    // This won't compile - there is no such field to mistype:
    // println!("{}", profile.adress.city); // Error: no field `adress` on `Profile`

    println!("\n=== Destructuring a Record ===");
    // Bind several fields at once; `..` skips the rest.
    let Profile {
        name,
        address: Address { city, .. },
        ..
    } = profile.clone();
    println!("{} lives in {}", name, city);

    println!("\n=== Field Access Through a Reference ===");
    // Access through &T auto-derefs: no (*by_ref).name needed.
    let by_ref = &profile;
    println!("{} is {} (no explicit dereference)", by_ref.name, by_ref.age);
}
