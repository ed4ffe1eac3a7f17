//! Deterministic test harness for bitseq.
//!
//! Reproducible implementations of the `Entropy` trait:
//!
//! - [`SeededEntropy`]: a seeded ChaCha8 stream. Given the same seed, the
//!   generator produces the same sequence, so a failing property test can be
//!   replayed from its logged seed.
//! - [`ScriptedEntropy`]: replays exact bytes, for tests that pin digits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod scripted_env;
mod seeded_env;

pub use scripted_env::ScriptedEntropy;
pub use seeded_env::SeededEntropy;
