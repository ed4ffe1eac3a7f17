//! Binary digit sequences.
//!
//! A [`Sequence`] is text made only of '0' and '1'. Every constructor checks
//! that alphabet, so holders of a `Sequence` never re-validate it.

use std::{fmt, str::FromStr};

use crate::error::SequenceError;

/// An ordered run of binary digits, stored as text.
///
/// # Invariants
///
/// - Every character is '0' or '1'
/// - `len()` equals the number of digits (one byte per digit)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// The empty sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Builds a sequence from bits, `true` becoming '1'.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self(bits.into_iter().map(|bit| if bit { '1' } else { '0' }).collect())
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digits as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the sequence, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterates the digits as bits, in order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// Number of '1' digits.
    pub fn count_ones(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'1').count()
    }

    /// Number of '0' digits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for Sequence {
    type Error = SequenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate(&s)?;
        Ok(Self(s))
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

fn validate(s: &str) -> Result<(), SequenceError> {
    match s.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
        Some((position, found)) => Err(SequenceError::InvalidDigit { position, found }),
        None => Ok(()),
    }
}
