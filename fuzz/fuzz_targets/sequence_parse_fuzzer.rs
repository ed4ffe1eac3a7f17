//! Fuzz target for [`Sequence`] parsing and assessment
//!
//! # Strategy
//!
//! - Arbitrary UTF-8: any text, including multi-byte characters
//! - Parsed sequences are fed to every randomness test
//!
//! # Invariants
//!
//! - Parsing succeeds iff every character is '0' or '1'
//! - A rejected parse reports a position inside the input
//! - P-values are finite and within [0, 1]
//! - NEVER panic

#![no_main]

use bitseq_core::{Sequence, SequenceError, assess};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let all_binary = text.chars().all(|c| c == '0' || c == '1');

    match text.parse::<Sequence>() {
        Ok(seq) => {
            assert!(all_binary);
            assert_eq!(seq.len(), text.len());

            for (name, p) in assess(&seq).p_values() {
                assert!(p.is_finite(), "{name} produced {p}");
                assert!((0.0..=1.0).contains(&p), "{name} produced {p}");
            }
        },
        Err(SequenceError::InvalidDigit { position, found }) => {
            assert!(!all_binary);
            assert_eq!(text.chars().nth(position), Some(found));
        },
        Err(other) => panic!("unexpected parse error: {other}"),
    }
});
