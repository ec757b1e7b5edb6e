//! Pattern 2: Static vs dynamic dispatch
//! Example: One director, any builder
//!
//! Run with: cargo run --example p2_dispatch

use colored::Colorize;
use creational_builder::{AbBuilder, Builder, Director, XyBuilder};

// Static dispatch - monomorphized per builder type
fn assemble<B: Builder>(director: &Director, mut builder: B) -> B {
    director.construct(&mut builder);
    builder
}

// Dynamic dispatch - one function, vtable call per step
fn assemble_dyn(director: &Director, builder: &mut dyn Builder) {
    director.construct(builder);
}

fn main() {
    let director = Director::new();

    println!("{}", "=== Static Dispatch ===".bold());
    let ab = assemble(&director, AbBuilder::new());
    ab.product().show();

    println!("\n{}", "=== Dynamic Dispatch ===".bold());
    let mut xy = XyBuilder::new();
    assemble_dyn(&director, &mut xy);
    xy.product().show();

    println!("\n{}", "=== Heterogeneous Collection ===".bold());
    let mut builders: Vec<Box<dyn Builder>> = vec![
        Box::new(AbBuilder::new()),
        Box::new(XyBuilder::new()),
        Box::new(AbBuilder::new()),
    ];
    for builder in builders.iter_mut() {
        director.construct(builder.as_mut());
    }
    for (i, builder) in builders.iter().enumerate() {
        println!("Builder {}: {} parts", i, builder.product().len());
        builder.product().show();
    }

    // Nothing stops a caller from skipping the director.
    println!("\n{}", "=== Steps Without a Director ===".bold());
    let mut loose = XyBuilder::new();
    loose.build_part_b();
    loose.build_part_a();
    loose.build_part_a();
    loose.product().show();
    println!("{}", "Out-of-order steps are legal; they just change the parts.".yellow());
}
