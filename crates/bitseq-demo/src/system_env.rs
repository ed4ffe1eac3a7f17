//! Production entropy source.
//!
//! This module provides `SystemEntropy`, the `Entropy` implementation used by
//! the demo binaries.

use bitseq_core::Entropy;
use rand::RngCore;

/// Entropy drawn from the operating system.
///
/// This implementation:
/// - Uses `getrandom` for OS-level randomness
/// - Falls back to `rand::thread_rng()` if the OS source fails, since the
///   generator does not require cryptographic strength
#[derive(Clone, Debug, Default)]
pub struct SystemEntropy;

impl SystemEntropy {
    /// Create a new system entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Entropy for SystemEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) {
        if let Err(e) = getrandom::fill(buffer) {
            tracing::warn!("getrandom failed, using thread RNG: {}", e);
            rand::thread_rng().fill_bytes(buffer);
        }
    }
}
