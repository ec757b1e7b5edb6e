use std::io::Write;

use tracing::info;

use crate::builder::{AbBuilder, Builder, XyBuilder};
use crate::director::Director;
use crate::error::DemoError;

/// Builds four products and writes their listings to `out`.
///
/// The first two are constructed and shown one at a time; the last two are
/// both constructed before either is shown. Output is identical either way.
pub fn run_showcase(out: &mut impl Write) -> Result<(), DemoError> {
    let director = Director::new();

    let mut b1 = AbBuilder::new();
    let mut b2 = XyBuilder::new();
    let mut b3 = AbBuilder::new();
    let mut b4 = XyBuilder::new();

    info!("construct and show, one builder at a time");
    director.construct(&mut b1);
    b1.product().write_to(out)?;

    director.construct(&mut b2);
    b2.product().write_to(out)?;

    info!("construct both, then show both");
    director.construct(&mut b3);
    director.construct(&mut b4);
    b3.product().write_to(out)?;
    b4.product().write_to(out)?;

    out.flush()?;
    Ok(())
}
