use std::io;

use thiserror::Error;

/// Failures from the demo's surroundings. Building itself never fails.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write product listing: {0}")]
    Output(#[from] io::Error),

    #[error("failed to install tracing subscriber: {0}")]
    Telemetry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_display() {
        let err = DemoError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let display = err.to_string();
        assert!(display.contains("product listing"));
        assert!(display.contains("pipe closed"));
        assert!(matches!(err, DemoError::Output(_)));
    }

    #[test]
    fn test_telemetry_error_display() {
        let err = DemoError::Telemetry("already set".to_string());
        assert_eq!(
            err.to_string(),
            "failed to install tracing subscriber: already set"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<DemoError>();
        assert_sync::<DemoError>();
    }
}
