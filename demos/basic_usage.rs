//! Basic usage example for the trilateral crate.
//!
//! Run with: `cargo run --example basic_usage`

use trilateral::{ErrorKind, Triangle, TriangleKind, classify};

fn main() {
    println!("=== Trilateral Library Demo ===\n");

    // Classify some triangles
    let triangles = [(3.0, 3.0, 3.0), (3.0, 3.0, 2.0), (3.0, 4.0, 5.0)];
    for (a, b, c) in triangles {
        let kind = classify(a, b, c).unwrap();
        println!("({a}, {b}, {c}) -> {kind}");
    }
    println!();

    // Rejections carry an error kind and a message
    println!("=== Rejections ===\n");
    let rejected = [
        (0.0, 3.0, 3.0),
        (f64::NAN, 3.0, 3.0),
        (f64::MAX, f64::MAX, 1.0),
        (1.0, 1.0, 2.0),
    ];
    for (a, b, c) in rejected {
        let error = classify(a, b, c).unwrap_err();
        let kind = match error.kind() {
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::InvalidArgument => "invalid argument",
        };
        println!("({a}, {b}, {c}) -> [{kind}] {error}");
        if let Some(side) = error.side() {
            println!("  failing side: {side}");
        }
    }
    println!();

    // Demonstrate the validated Triangle wrapper
    println!("=== Using the Triangle Wrapper ===\n");
    let triangle = Triangle::new(5.0, 5.0, 8.0).unwrap();
    println!("Validated triangle with sides {:?}:", triangle.sides());
    println!("  Classification: {}", triangle.kind());
    println!("  Is isosceles: {}", triangle.is_isosceles());
    println!();

    // Demonstrate ordering
    println!("=== Kind Ordering ===\n");
    let mut kinds = vec![
        TriangleKind::Equilateral,
        TriangleKind::Scalene,
        TriangleKind::Isosceles,
    ];
    println!("Before sorting: {kinds:?}");
    kinds.sort();
    println!("After sorting:  {kinds:?}");
    println!("(Scalene < Isosceles < Equilateral, by symmetry)");
    println!();

    // Demonstrate conversions
    println!("=== Conversions ===\n");
    let kind = TriangleKind::Equilateral;
    let s: &str = kind.into();
    let n: u8 = kind.into();
    println!("TriangleKind::Equilateral -> &str: \"{s}\"");
    println!("TriangleKind::Equilateral -> u8 (equal pairs): {n}");
    println!();

    let parsed: TriangleKind = "scalene".parse().unwrap();
    println!("\"scalene\".parse() -> {parsed:?}");

    let from_u8 = TriangleKind::try_from(1u8).unwrap();
    println!("TriangleKind::try_from(1u8) -> {from_u8:?}");
}
