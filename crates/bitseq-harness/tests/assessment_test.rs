//! Randomness assessment of generated sequences.
//!
//! Uses a strict significance level so that fixed seeds do not flake: a
//! uniform generator fails any single test with probability `alpha`.

use bitseq_core::{SequenceGenerator, assess, nist};
use bitseq_harness::{ScriptedEntropy, SeededEntropy};

const STRICT_ALPHA: f64 = 1e-4;

#[test]
fn seeded_sequences_pass_assessment() {
    for seed in 0..5 {
        let seq = SequenceGenerator::new(SeededEntropy::with_seed(seed)).generate_len(10_000);
        let assessment = assess(&seq);

        assert_eq!(assessment.p_values().count(), 3);
        assert!(
            assessment.passes(STRICT_ALPHA),
            "seed {seed} failed assessment: {assessment:?}"
        );
    }
}

#[test]
fn longest_run_uses_largest_block_table() {
    // 750 000 bits and above select 10 000-bit blocks
    let seq = SequenceGenerator::new(SeededEntropy::with_seed(42)).generate_len(1_000_000);

    let p = nist::longest_run_of_ones_test(&seq).unwrap();
    assert!((STRICT_ALPHA..=1.0).contains(&p), "p = {p}");
}

#[test]
fn longest_run_largest_table_flags_capped_runs() {
    // 0x7F per byte caps every run at seven ones, so all blocks land in the
    // lowest class
    let seq = SequenceGenerator::new(ScriptedEntropy::new([0x7F])).generate_len(800_000);

    let p = nist::longest_run_of_ones_test(&seq).unwrap();
    assert!(p < nist::DEFAULT_SIGNIFICANCE, "p = {p}");
}

#[test]
fn biased_source_fails_frequency() {
    // 0x07 = three ones per byte
    let seq = SequenceGenerator::new(ScriptedEntropy::new([0x07])).generate_len(1_024);

    let p = nist::frequency_test(&seq).unwrap();
    assert!(p < nist::DEFAULT_SIGNIFICANCE, "p = {p}");
}

#[test]
fn alternating_source_fails_runs() {
    // 0x55 = 0101_0101, digits alternate forever
    let seq = SequenceGenerator::new(ScriptedEntropy::new([0x55])).generate_len(1_024);

    let frequency = nist::frequency_test(&seq).unwrap();
    let runs = nist::runs_test(&seq).unwrap();

    assert!(frequency > 0.99, "balanced digits should pass frequency, p = {frequency}");
    assert!(runs < nist::DEFAULT_SIGNIFICANCE, "p = {runs}");
}

#[test]
fn assessment_of_demo_sized_sequence_is_empty() {
    let seq = SequenceGenerator::new(SeededEntropy::with_seed(1)).generate_len(10);
    assert!(assess(&seq).is_empty());
}
