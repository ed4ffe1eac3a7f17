//! Core logic for random binary sequence generation.
//!
//! This crate is pure: it never touches the OS for randomness. Callers inject
//! an [`Entropy`] source, which keeps generation reproducible under test.
//!
//! ## Architecture
//!
//! ```text
//! bitseq-core
//!   ├─ Entropy            (injected randomness source)
//!   ├─ SequenceGenerator  (bytes -> '0'/'1' digits)
//!   ├─ Sequence           (validated binary text)
//!   └─ nist               (SP 800-22 frequency, runs, longest-run tests)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod env;
mod error;
mod generator;
pub mod nist;
mod sequence;
pub mod special;

pub use env::Entropy;
pub use error::SequenceError;
pub use generator::{SequenceGenerator, generate};
pub use nist::{Assessment, assess};
pub use sequence::Sequence;
