use tracing::{debug, trace};

use crate::builder::Builder;

/// Runs the construction sequence. Holds no state, so one director can
/// drive any number of builders.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Director
    }

    /// Calls `build_part_a` then `build_part_b`, once each.
    ///
    /// Works with concrete builders and with `&mut dyn Builder`.
    pub fn construct<B: Builder + ?Sized>(&self, builder: &mut B) {
        debug!("building part one");
        builder.build_part_a();
        debug!("building part two");
        builder.build_part_b();
        trace!(parts = builder.product().len(), "construction finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{AbBuilder, XyBuilder};

    #[test]
    fn test_scenario_ab_listing() {
        let mut builder = AbBuilder::new();
        Director::new().construct(&mut builder);
        assert_eq!(
            builder.product().to_string(),
            "\nProduct Parts -------\npart_a\npart_b\n"
        );
    }

    #[test]
    fn test_scenario_xy_listing() {
        let mut builder = XyBuilder::new();
        Director::new().construct(&mut builder);
        assert_eq!(
            builder.product().to_string(),
            "\nProduct Parts -------\npart_x\npart_y\n"
        );
    }

    #[test]
    fn test_construct_matches_manual_steps() {
        let mut directed = XyBuilder::new();
        Director.construct(&mut directed);

        let mut manual = XyBuilder::new();
        manual.build_part_a();
        manual.build_part_b();

        assert_eq!(directed.product(), manual.product());
    }

    #[test]
    fn test_construct_through_trait_object() {
        let mut builder = AbBuilder::new();
        let dynamic: &mut dyn Builder = &mut builder;
        Director.construct(dynamic);
        assert_eq!(builder.product().parts(), ["part_a", "part_b"]);
    }

    #[test]
    fn test_same_variant_builders_are_independent() {
        let director = Director::new();
        let mut first = AbBuilder::new();
        let mut second = AbBuilder::new();
        director.construct(&mut first);
        director.construct(&mut second);

        assert_eq!(first.product(), second.product());
        assert!(!std::ptr::eq(
            first.product().parts().as_ptr(),
            second.product().parts().as_ptr()
        ));

        // Extra steps on one builder leave the other untouched.
        first.build_part_a();
        assert_eq!(first.product().len(), 3);
        assert_eq!(second.product().parts(), ["part_a", "part_b"]);
    }

    #[test]
    fn test_director_is_reusable() {
        let director = Director::new();
        let mut ab = AbBuilder::new();
        let mut xy = XyBuilder::new();
        director.construct(&mut ab);
        director.construct(&mut xy);
        director.construct(&mut ab);
        assert_eq!(ab.product().parts(), ["part_a", "part_b", "part_a", "part_b"]);
        assert_eq!(xy.product().parts(), ["part_x", "part_y"]);
    }
}
