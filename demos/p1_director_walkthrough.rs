//! Pattern 1: Director drives a builder
//! Example: Two orderings, same products
//!
//! Run with: cargo run --example p1_director_walkthrough

use colored::Colorize;
use creational_builder::{AbBuilder, Builder, Director, XyBuilder};

fn main() {
    let director = Director::new();

    // Usage: the director owns the sequence, each builder owns its product.
    println!("{}", "=== Construct, then show, one at a time ===".bold());
    let mut b1 = AbBuilder::new();
    director.construct(&mut b1);
    b1.product().show();

    let mut b2 = XyBuilder::new();
    director.construct(&mut b2);
    b2.product().show();

    println!("\n{}", "=== Construct both, then show both ===".bold());
    let mut b3 = AbBuilder::new();
    let mut b4 = XyBuilder::new();
    director.construct(&mut b3);
    director.construct(&mut b4);
    b3.product().show();
    b4.product().show();

    println!("\n{}", "=== Key Points ===".bold());
    println!("- The director never touches a product, only builder steps");
    println!("- Each builder starts with its own empty product");
    println!("- Order of construct() calls across builders does not matter");
}
