//! Pattern 1: Builder Pattern with a Director
//! Example: Fixed and Custom Construction Recipes
//!
//! Run with: cargo run --example p1_house_builder

use creational_patterns::builder::{Director, DirectorError, HouseBuilder, StandardHouseBuilder};

fn main() -> Result<(), DirectorError> {
    println!("=== Minimal Viable House ===");
    // The director runs the essential steps; the builder supplies materials.
    let mut director = Director::with_builder(Box::new(StandardHouseBuilder::new()));
    director.build_minimal_viable_house()?;
    println!("{:#?}", director.house()?);

    println!("\n=== Full-Featured House ===");
    // Same builder, richer recipe. Taking the house above reset the builder.
    director.build_full_featured_house()?;
    println!("{:#?}", director.house()?);

    println!("\n=== Custom House ===");
    // The caller picks the steps; the director only checks a builder is bound.
    director.build_custom_house(|builder| {
        builder.build_foundation();
        builder.build_roof();
    })?;
    println!("{:#?}", director.house()?);

    println!("\n=== Destructive Read ===");
    // house() delegates to finalize(), so reading again comes back empty.
    println!("Second read in a row: {:#?}", director.house()?);

    println!("\n=== Unbound Director ===");
    let mut unbound = Director::new();
    match unbound.build_full_featured_house() {
        Err(err) => println!("Error as expected: {}", err),
        Ok(()) => println!("Unexpected success"),
    }

    println!("\n=== Key Points ===");
    println!("1. The builder owns one in-progress house at a time");
    println!("2. finalize() hands the house over and starts a fresh one");
    println!("3. The director holds the builder as a trait object, so any");
    println!("   implementation can be substituted");
    println!("4. Recipes fail up front when no builder is bound");

    Ok(())
}
