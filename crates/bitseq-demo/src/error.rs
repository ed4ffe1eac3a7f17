//! Demo error types.

use bitseq_core::SequenceError;
use thiserror::Error;

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing the result line failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Generation rejected the configured size.
    #[error("generation error: {0}")]
    Sequence(#[from] SequenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_error_display() {
        let err = DemoError::from(SequenceError::InvalidArgument { requested: -3 });
        assert_eq!(
            err.to_string(),
            "generation error: invalid argument: sequence size must be in 0..=usize::MAX, got -3"
        );
    }

    #[test]
    fn io_error_display() {
        let err = DemoError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "output error: broken pipe");
    }
}
