use std::io;

use creational_builder::{run_showcase, telemetry, DemoError};

fn main() -> Result<(), DemoError> {
    telemetry::init_tracing()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_showcase(&mut out)
}
