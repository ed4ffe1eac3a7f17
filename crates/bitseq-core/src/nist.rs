//! Statistical randomness tests from NIST SP 800-22.
//!
//! Each test maps a [`Sequence`] to a P-value in `[0, 1]`. Small P-values
//! are evidence against randomness; a sequence passes at significance
//! `alpha` when `p >= alpha`.
//!
//! These tests assess an individual sequence. They do not strengthen the
//! generator's contract, which only promises independent uniform bits.

use crate::{
    error::SequenceError,
    sequence::Sequence,
    special::{erfc, igamc},
};

/// Conventional significance level.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.01;

/// Recommended minimum length for the frequency and runs tests.
pub const RECOMMENDED_MIN_LEN: usize = 100;

/// Minimum length accepted by the longest-run test.
pub const LONGEST_RUN_MIN_LEN: usize = 128;

/// Frequency (monobit) test.
///
/// Checks that ones and zeros are about equally common.
///
/// # Errors
///
/// `SequenceError::TooShort` for an empty sequence.
pub fn frequency_test(seq: &Sequence) -> Result<f64, SequenceError> {
    let n = require_len(seq, "frequency", 1)?;

    let ones = seq.count_ones() as f64;
    let sum = 2.0 * ones - n;
    let s_obs = sum.abs() / n.sqrt();

    Ok(erfc(s_obs / std::f64::consts::SQRT_2))
}

/// Runs test.
///
/// Checks that runs of identical bits switch about as often as expected.
/// The frequency prerequisite `|π - 1/2| < 2/√n` must hold, otherwise the
/// P-value is `0.0`.
///
/// # Errors
///
/// `SequenceError::TooShort` for an empty sequence.
pub fn runs_test(seq: &Sequence) -> Result<f64, SequenceError> {
    let n = require_len(seq, "runs", 1)?;

    let ones = seq.count_ones();
    if ones == 0 || ones == seq.len() {
        return Ok(0.0);
    }

    let pi = ones as f64 / n;
    let tau = 2.0 / n.sqrt();
    if (pi - 0.5).abs() >= tau {
        return Ok(0.0);
    }

    let digits = seq.as_str().as_bytes();
    let switches = digits.windows(2).filter(|pair| pair[0] != pair[1]).count();
    let v_obs = (switches + 1) as f64;

    let spread = pi * (1.0 - pi);
    let numerator = (v_obs - 2.0 * n * spread).abs();
    let denominator = 2.0 * (2.0 * n).sqrt() * spread;

    Ok(erfc(numerator / denominator))
}

/// Block parameters for the longest-run test.
struct RunTable {
    block_len: usize,
    /// Longest-run length mapped to the first class.
    min_class: usize,
    probabilities: &'static [f64],
}

const RUN_TABLE_8: RunTable =
    RunTable { block_len: 8, min_class: 1, probabilities: &[0.2148, 0.3672, 0.2305, 0.1875] };

const RUN_TABLE_128: RunTable = RunTable {
    block_len: 128,
    min_class: 4,
    probabilities: &[0.1174, 0.2430, 0.2493, 0.1752, 0.1027, 0.1124],
};

const RUN_TABLE_10K: RunTable = RunTable {
    block_len: 10_000,
    min_class: 10,
    probabilities: &[0.0882, 0.2092, 0.2483, 0.1933, 0.1208, 0.0675, 0.0727],
};

fn run_table(len: usize) -> &'static RunTable {
    if len < 6_272 {
        &RUN_TABLE_8
    } else if len < 750_000 {
        &RUN_TABLE_128
    } else {
        &RUN_TABLE_10K
    }
}

/// Longest run of ones in a block test.
///
/// Splits the sequence into `N = n / M` blocks, classifies each block by its
/// longest run of ones, and compares class counts to the expected
/// distribution with a chi-squared statistic. Trailing bits beyond `N * M`
/// are ignored.
///
/// # Errors
///
/// `SequenceError::TooShort` below [`LONGEST_RUN_MIN_LEN`] bits.
pub fn longest_run_of_ones_test(seq: &Sequence) -> Result<f64, SequenceError> {
    require_len(seq, "longest run of ones", LONGEST_RUN_MIN_LEN)?;

    let table = run_table(seq.len());
    let classes = table.probabilities.len();
    let max_class = table.min_class + classes - 1;

    let mut counts = vec![0usize; classes];
    let digits = seq.as_str().as_bytes();
    let blocks = digits.chunks_exact(table.block_len);
    let block_count = blocks.len() as f64;

    for block in blocks {
        let longest = longest_run(block);
        let class = longest.clamp(table.min_class, max_class) - table.min_class;
        counts[class] += 1;
    }

    let chi_squared: f64 = counts
        .iter()
        .zip(table.probabilities)
        .map(|(&observed, &p)| {
            let expected = block_count * p;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum();

    let degrees = (classes - 1) as f64;
    Ok(igamc(degrees / 2.0, chi_squared / 2.0))
}

fn longest_run(block: &[u8]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &digit in block {
        if digit == b'1' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn require_len(seq: &Sequence, test: &'static str, required: usize) -> Result<f64, SequenceError> {
    if seq.len() < required {
        return Err(SequenceError::TooShort { test, required, actual: seq.len() });
    }
    Ok(seq.len() as f64)
}

/// P-values from every test the sequence was long enough for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Assessment {
    /// Frequency (monobit) test P-value.
    pub frequency: Option<f64>,
    /// Runs test P-value.
    pub runs: Option<f64>,
    /// Longest run of ones P-value.
    pub longest_run: Option<f64>,
}

impl Assessment {
    /// P-values of the tests that ran, with their names.
    pub fn p_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [("frequency", self.frequency), ("runs", self.runs), ("longest_run", self.longest_run)]
            .into_iter()
            .filter_map(|(name, p)| p.map(|p| (name, p)))
    }

    /// Returns true if no test ran.
    pub fn is_empty(&self) -> bool {
        self.p_values().next().is_none()
    }

    /// Returns true if every test that ran has `p >= alpha`.
    ///
    /// Vacuously true when no test ran.
    pub fn passes(&self, alpha: f64) -> bool {
        self.p_values().all(|(_, p)| p >= alpha)
    }
}

/// Run every test whose recommended minimum length is met.
pub fn assess(seq: &Sequence) -> Assessment {
    let long_enough = seq.len() >= RECOMMENDED_MIN_LEN;

    let assessment = Assessment {
        frequency: long_enough.then(|| frequency_test(seq).ok()).flatten(),
        runs: long_enough.then(|| runs_test(seq).ok()).flatten(),
        longest_run: longest_run_of_ones_test(seq).ok(),
    };

    tracing::debug!(len = seq.len(), ?assessment, "assessed sequence");
    assessment
}
