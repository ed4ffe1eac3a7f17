//! Sequence error types.

use thiserror::Error;

/// Errors from sequence generation, parsing, and assessment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Requested sequence size is negative, or larger than `usize` can hold
    /// on this platform.
    #[error("invalid argument: sequence size must be in 0..=usize::MAX, got {requested}")]
    InvalidArgument {
        /// The size the caller asked for.
        requested: i64,
    },

    /// Text contains a character outside {'0', '1'}.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// Zero-based character index of the offending digit.
        position: usize,
        /// The character that was found.
        found: char,
    },

    /// Sequence is too short for a statistical test.
    #[error("{test} test needs at least {required} bits, got {actual}")]
    TooShort {
        /// Name of the test that rejected the input.
        test: &'static str,
        /// Minimum length the test accepts.
        required: usize,
        /// Length of the sequence supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = SequenceError::InvalidArgument { requested: -1 };
        assert_eq!(err.to_string(), "invalid argument: sequence size must be in 0..=usize::MAX, got -1");
    }

    #[test]
    fn invalid_digit_display() {
        let err = SequenceError::InvalidDigit { position: 3, found: '2' };
        assert_eq!(err.to_string(), "invalid digit '2' at position 3");
    }

    #[test]
    fn too_short_display() {
        let err = SequenceError::TooShort { test: "runs", required: 1, actual: 0 };
        assert_eq!(err.to_string(), "runs test needs at least 1 bits, got 0");
    }
}
