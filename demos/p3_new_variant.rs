//! Pattern 3: Adding a variant by hand
//! Example: A scooter builder from outside the crate
//!
//! Run with: cargo run --example p3_new_variant

use colored::Colorize;
use creational_builder::{AbBuilder, Builder, Director, Product};

// A new variant only needs its own product and the three trait methods.
// No registration anywhere: the caller picks it with a constructor call.
#[derive(Debug, Default)]
struct ScooterBuilder {
    product: Product,
}

impl ScooterBuilder {
    fn new() -> Self {
        Self::default()
    }
}

impl Builder for ScooterBuilder {
    fn build_part_a(&mut self) {
        self.product.add("frame");
    }

    fn build_part_b(&mut self) {
        self.product.add("wheels");
    }

    fn product(&self) -> &Product {
        &self.product
    }
}

fn main() {
    // Usage: the director is unchanged; it only knows the trait.
    let director = Director::new();

    println!("{}", "=== Scooter Shop ===".bold());
    let mut scooter = ScooterBuilder::new();
    director.construct(&mut scooter);
    scooter.product().show();

    println!("\n{}", "=== Next to a Built-in Variant ===".bold());
    let mut ab = AbBuilder::new();
    director.construct(&mut ab);
    ab.product().show();

    assert_eq!(scooter.product().parts(), ["frame", "wheels"]);
    println!("\n{}", "Scooter assembled with the stock director.".green());
}
