//! Entropy abstraction for deterministic testing.
//!
//! The `Entropy` trait decouples sequence generation from the source of
//! randomness. This enables:
//!
//! - Deterministic tests: a seeded or scripted source reproduces the exact
//!   same sequence on every run.
//!
//! - Production runtime: an OS-backed source is plugged in without any change
//!   to the generator.
//!
//! # Invariants
//!
//! - Determinism: Given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: Implementations must not rely on process-wide mutable state
//!   that callers cannot scope

/// Abstract provider of uniformly distributed random bytes.
///
/// Sources are not required to be cryptographically secure. Every bit of
/// every byte must be independent and uniform over {0, 1}, since the
/// generator consumes bytes bit by bit.
///
/// Implementations shared between threads MUST serialize access internally;
/// the trait only hands out `&self`.
pub trait Entropy: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Determinism in tests: Given the same seed, this produces the same
    ///   sequence of bytes
    /// - Uniformity: each bit is independently 0 or 1 with probability 1/2
    fn random_bytes(&self, buffer: &mut [u8]);
}
