//! Random binary sequence generator.
//!
//! The generator owns its entropy source and turns random bytes into digits,
//! eight independent bits per byte, least significant bit first.
//!
//! # Invariants
//!
//! - `generate(n)` returns exactly `n` digits for every `n >= 0`
//! - Every digit is '0' or '1'
//! - Negative sizes are rejected, never mapped to an empty result

use crate::{env::Entropy, error::SequenceError, sequence::Sequence};

/// Generates uniform random binary sequences from an injected source.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<E: Entropy> {
    entropy: E,
}

impl<E: Entropy> SequenceGenerator<E> {
    /// Create a generator drawing from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// The entropy source this generator draws from.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Generate a sequence of `size` digits.
    ///
    /// # Errors
    ///
    /// `SequenceError::InvalidArgument` if `size` is negative or does not fit
    /// in `usize` on this platform.
    pub fn generate(&self, size: i64) -> Result<Sequence, SequenceError> {
        if size < 0 {
            tracing::warn!(size, "rejected negative sequence size");
            return Err(SequenceError::InvalidArgument { requested: size });
        }
        let Ok(len) = usize::try_from(size) else {
            tracing::warn!(size, max = usize::MAX, "sequence size exceeds platform limit");
            return Err(SequenceError::InvalidArgument { requested: size });
        };

        Ok(self.generate_len(len))
    }

    /// Generate a sequence of exactly `len` digits.
    pub fn generate_len(&self, len: usize) -> Sequence {
        let mut bytes = vec![0u8; len.div_ceil(8)];
        self.entropy.random_bytes(&mut bytes);

        let sequence = Sequence::from_bits(
            bytes.iter().flat_map(|&byte| (0..8).map(move |shift| (byte >> shift) & 1 == 1)).take(len),
        );

        tracing::debug!(len, ones = sequence.count_ones(), "generated binary sequence");
        sequence
    }
}

/// One-shot generation from a borrowed source.
///
/// # Errors
///
/// `SequenceError::InvalidArgument` if `size` is negative or does not fit
/// in `usize`.
pub fn generate<E: Entropy>(entropy: &E, size: i64) -> Result<Sequence, SequenceError> {
    SequenceGenerator::new(entropy.clone()).generate(size)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    /// Replays a fixed byte pattern and counts bytes handed out.
    #[derive(Clone)]
    struct PatternEnv {
        pattern: Vec<u8>,
        drawn: Arc<AtomicUsize>,
    }

    impl PatternEnv {
        fn new(pattern: &[u8]) -> Self {
            Self { pattern: pattern.to_vec(), drawn: Arc::new(AtomicUsize::new(0)) }
        }

        fn drawn(&self) -> usize {
            self.drawn.load(Ordering::SeqCst)
        }
    }

    impl Entropy for PatternEnv {
        fn random_bytes(&self, buffer: &mut [u8]) {
            for (i, byte) in buffer.iter_mut().enumerate() {
                *byte = self.pattern[i % self.pattern.len()];
            }
            self.drawn.fetch_add(buffer.len(), Ordering::SeqCst);
        }
    }

    #[test]
    fn digits_come_from_low_bits_first() {
        let generator = SequenceGenerator::new(PatternEnv::new(&[0b0000_0101, 0xFF]));
        let seq = generator.generate(10).unwrap();
        assert_eq!(seq.as_str(), "1010000011");
    }

    #[test]
    fn draws_one_byte_per_eight_digits() {
        let env = PatternEnv::new(&[0x00]);
        let generator = SequenceGenerator::new(env.clone());

        generator.generate(17).unwrap();
        assert_eq!(env.drawn(), 3);
    }

    #[test]
    fn zero_size_is_empty() {
        let generator = SequenceGenerator::new(PatternEnv::new(&[0xFF]));
        let seq = generator.generate(0).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn negative_size_is_invalid_argument() {
        let env = PatternEnv::new(&[0xFF]);
        let generator = SequenceGenerator::new(env.clone());

        let result = generator.generate(-1);
        assert_eq!(result, Err(SequenceError::InvalidArgument { requested: -1 }));
        assert_eq!(env.drawn(), 0, "rejected call must not consume entropy");
    }

    #[test]
    fn most_negative_size_is_invalid_argument() {
        let result = generate(&PatternEnv::new(&[0x00]), i64::MIN);
        assert!(matches!(result, Err(SequenceError::InvalidArgument { requested: i64::MIN })));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn size_beyond_usize_is_invalid_argument() {
        let env = PatternEnv::new(&[0x00]);
        let size = i64::from(u32::MAX) + 1;

        let err = generate(&env, size).unwrap_err();
        assert_eq!(err, SequenceError::InvalidArgument { requested: size });
        assert!(err.to_string().contains("usize::MAX"));
        assert_eq!(env.drawn(), 0);
    }

    #[test]
    fn all_ones_source_gives_all_ones() {
        let seq = generate(&PatternEnv::new(&[0xFF]), 128).unwrap();
        assert_eq!(seq.len(), 128);
        assert_eq!(seq.count_ones(), 128);
    }

    #[test]
    fn generate_len_matches_generate() {
        let generator = SequenceGenerator::new(PatternEnv::new(&[0x5A, 0xC3]));
        assert_eq!(generator.generate_len(20), generator.generate(20).unwrap());
    }
}
