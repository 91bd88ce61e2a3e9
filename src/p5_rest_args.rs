//! Pattern 5: Defaults and Variadic-Style Arguments
//! Example: Slices in Place of Argument Lists
//!
//! Run with: cargo run --bin p5_rest_args

/// Takes any number of values: an array, a Vec, or a slice of one.
fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

fn main() {
    println!("=== A Slice Parameter Takes Any Count ===\n");
    println!("sum(&[1, 2, 3]) = {}", sum(&[1, 2, 3]));
    println!("sum(&[7])       = {}", sum(&[7]));
    println!("sum(&[])        = {}", sum(&[]));

    let numbers = vec![1, 2, 3];
    println!("sum(&numbers)   = {}", sum(&numbers));

    println!("\n=== Extending a List ===");
    // A copy with extra elements; the existing list is untouched.
    let extended = [numbers.as_slice(), &[4, 5]].concat();
    println!("numbers:  {:?}", numbers);
    println!("extended: {:?}", extended);
    assert_eq!(extended, vec![1, 2, 3, 4, 5]);

    // In place, when growing the original is the point.
    let mut growing = numbers.clone();
    growing.extend([4, 5]);
    println!("growing:  {:?}", growing);
    println!("\nEvery caller passes one slice; the length is the caller's choice.");
}
