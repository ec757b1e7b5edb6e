//! # Builder Pattern (Creational)
//!
//! A director runs a fixed two-step construction sequence against any type
//! implementing [`Builder`]. Each concrete builder owns a [`Product`] and
//! appends its own part labels to it.
//!
//! ## Participants
//!
//! 1. **Product** - ordered, append-only list of part labels
//! 2. **Builder** - trait with two construction steps and a retrieve
//! 3. **Concrete builders** - [`AbBuilder`] and [`XyBuilder`]
//! 4. **Director** - calls step one, then step two
//!
//! ## Running
//!
//! ```bash
//! # The canonical run: four products, two orderings
//! cargo run --bin builder_demo
//!
//! # Walkthroughs
//! cargo run --example p1_director_walkthrough
//! cargo run --example p2_dispatch
//! cargo run --example p3_new_variant
//! ```
//!
//! ## Quick look
//!
//! ```
//! use creational_builder::{AbBuilder, Builder, Director};
//!
//! let mut builder = AbBuilder::new();
//! Director.construct(&mut builder);
//! assert_eq!(builder.product().parts(), ["part_a", "part_b"]);
//! ```

pub mod builder;
pub mod director;
pub mod error;
pub mod product;
pub mod showcase;
pub mod telemetry;

pub use builder::{AbBuilder, Builder, XyBuilder};
pub use director::Director;
pub use error::DemoError;
pub use product::Product;
pub use showcase::run_showcase;
