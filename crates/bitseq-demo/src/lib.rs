//! Demonstration program for bitseq.
//!
//! Generates one sequence from OS entropy and prints a single line,
//! `<label>: <sequence>`, to stdout. Logs go to stderr so stdout carries only
//! the result.
//!
//! ## Architecture
//!
//! ```text
//! bitseq-demo
//!   ├─ SystemEntropy   (getrandom, thread RNG fallback)
//!   ├─ DemoConfig      (size + label presets)
//!   └─ run_demo        (generate, print, assess)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod system_env;

use std::io::Write;

use bitseq_core::{Entropy, Sequence, assess, generate, nist::DEFAULT_SIGNIFICANCE};
pub use error::DemoError;
pub use system_env::SystemEntropy;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Label printed by the English preset.
pub const ENGLISH_LABEL: &str = "Random binary sequence";

/// Label printed by the Russian preset.
pub const RUSSIAN_LABEL: &str = "Случайная последовательность бинарных чисел";

/// What the demo generates and how it labels the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of digits to generate
    pub size: i64,
    /// Text printed before the sequence
    pub label: String,
}

impl DemoConfig {
    /// 128 digits, English label.
    pub fn english() -> Self {
        Self { size: 128, label: ENGLISH_LABEL.to_string() }
    }

    /// 10 digits, Russian label.
    pub fn russian() -> Self {
        Self { size: 10, label: RUSSIAN_LABEL.to_string() }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::english()
    }
}

/// Generate a sequence and write `<label>: <sequence>` as one line to `out`.
///
/// Returns the sequence so callers can inspect what was printed.
///
/// # Errors
///
/// - `DemoError::Sequence` if `config.size` is negative
/// - `DemoError::Io` if writing to `out` fails
pub fn run_demo<E, W>(config: &DemoConfig, entropy: &E, mut out: W) -> Result<Sequence, DemoError>
where
    E: Entropy,
    W: Write,
{
    let sequence = generate(entropy, config.size)?;

    writeln!(out, "{}: {}", config.label, sequence)?;
    out.flush()?;

    let assessment = assess(&sequence);
    if !assessment.is_empty() && !assessment.passes(DEFAULT_SIGNIFICANCE) {
        tracing::warn!(?assessment, "sequence failed randomness assessment");
    }

    Ok(sequence)
}

/// Install the stderr log subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Does nothing if a subscriber is
/// already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Entry point shared by the demo binaries.
///
/// # Errors
///
/// Propagates any `run_demo` failure.
pub fn main_with(config: &DemoConfig) -> Result<(), DemoError> {
    init_tracing();

    tracing::info!(size = config.size, "bitseq demo starting");

    let stdout = std::io::stdout();
    let sequence = run_demo(config, &SystemEntropy::new(), stdout.lock())?;

    tracing::info!(len = sequence.len(), ones = sequence.count_ones(), "sequence printed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_demo_variants() {
        assert_eq!(DemoConfig::english().size, 128);
        assert_eq!(DemoConfig::russian().size, 10);
        assert_eq!(DemoConfig::default(), DemoConfig::english());
    }

    #[test]
    fn run_demo_writes_one_line() {
        let mut out = Vec::new();
        let config = DemoConfig { size: 16, label: "bits".to_string() };

        let seq = run_demo(&config, &SystemEntropy::new(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("bits: {seq}\n"));
    }
}
