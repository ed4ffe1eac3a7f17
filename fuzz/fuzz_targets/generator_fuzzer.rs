//! Fuzz target for [`SequenceGenerator`]
//!
//! The fuzzer supplies both the requested size and the entropy bytes, so it
//! explores the mapping from bytes to digits directly.
//!
//! # Invariants
//!
//! - Negative sizes fail with `InvalidArgument` and draw no entropy
//! - Non-negative sizes yield exactly that many '0'/'1' digits
//! - Digit `i` equals bit `i % 8` of byte `i / 8`
//! - NEVER panic

#![no_main]

use std::sync::{Arc, Mutex};

use arbitrary::Arbitrary;
use bitseq_core::{Entropy, SequenceError, SequenceGenerator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    size: i16,
    bytes: Vec<u8>,
}

/// Hands out the fuzzer's bytes, then zeros, recording what was drawn.
#[derive(Clone)]
struct FuzzEntropy {
    bytes: Arc<Vec<u8>>,
    drawn: Arc<Mutex<Vec<u8>>>,
}

impl Entropy for FuzzEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) {
        let mut drawn = self.drawn.lock().unwrap();
        for byte in buffer.iter_mut() {
            *byte = self.bytes.get(drawn.len()).copied().unwrap_or(0);
            drawn.push(*byte);
        }
    }
}

fuzz_target!(|input: Input| {
    let entropy =
        FuzzEntropy { bytes: Arc::new(input.bytes), drawn: Arc::new(Mutex::new(Vec::new())) };
    let generator = SequenceGenerator::new(entropy.clone());

    match generator.generate(i64::from(input.size)) {
        Ok(seq) => {
            assert!(input.size >= 0);
            assert_eq!(seq.len(), input.size as usize);

            let drawn = entropy.drawn.lock().unwrap();
            for (i, bit) in seq.bits().enumerate() {
                assert_eq!(bit, (drawn[i / 8] >> (i % 8)) & 1 == 1);
            }
        },
        Err(SequenceError::InvalidArgument { requested }) => {
            assert!(input.size < 0);
            assert_eq!(requested, i64::from(input.size));
            assert!(entropy.drawn.lock().unwrap().is_empty());
        },
        Err(other) => panic!("unexpected generation error: {other}"),
    }
});
