use crate::product::Product;

/// Construction steps shared by every concrete builder.
///
/// Steps can be called in any order and any number of times; each call
/// appends one part. [`Director`](crate::Director) is what fixes the order.
pub trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);

    /// The product assembled so far. The builder keeps ownership.
    fn product(&self) -> &Product;
}

/// Builds products made of `part_a` and `part_b`.
#[derive(Debug, Default)]
pub struct AbBuilder {
    product: Product,
}

impl AbBuilder {
    pub const PART_ONE: &'static str = "part_a";
    pub const PART_TWO: &'static str = "part_b";

    pub fn new() -> Self {
        Self {
            product: Product::new(),
        }
    }
}

impl Builder for AbBuilder {
    fn build_part_a(&mut self) {
        self.product.add(Self::PART_ONE);
    }

    fn build_part_b(&mut self) {
        self.product.add(Self::PART_TWO);
    }

    fn product(&self) -> &Product {
        &self.product
    }
}

/// Builds products made of `part_x` and `part_y`.
// Step names are slots, not labels: step A of this builder adds `part_x`.
#[derive(Debug, Default)]
pub struct XyBuilder {
    product: Product,
}

impl XyBuilder {
    pub const PART_ONE: &'static str = "part_x";
    pub const PART_TWO: &'static str = "part_y";

    pub fn new() -> Self {
        Self {
            product: Product::new(),
        }
    }
}

impl Builder for XyBuilder {
    fn build_part_a(&mut self) {
        self.product.add(Self::PART_ONE);
    }

    fn build_part_b(&mut self) {
        self.product.add(Self::PART_TWO);
    }

    fn product(&self) -> &Product {
        &self.product
    }
}
