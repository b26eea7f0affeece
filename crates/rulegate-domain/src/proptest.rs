//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Threshold monotonicity of the failing set
//! - Inertness of results without flagged artifacts
//! - Aggregator idempotence
//! - Determinism of reporter row ordering

use crate::buckets::partition;
use crate::engine::{evaluate, violation_rows};
use crate::gate::failing_set;
use crate::policy::EffectiveConfig;
use crate::test_support::{evaluation, generic_artifact, result};
use proptest::prelude::*;
use rulegate_types::{EvaluationResult, PolicyEvaluation, Severity, Verdict};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Fail),
    ]
}

/// Strategy for a whole evaluation. Ids are assigned by index so they stay
/// unique within the run; artifact names come from a small pool so label
/// collisions across results actually occur.
fn arb_evaluation() -> impl Strategy<Value = PolicyEvaluation> {
    prop::collection::vec((arb_severity(), "[a-z]{1,12}", 0usize..4), 0..16).prop_map(|entries| {
        let results = entries
            .into_iter()
            .enumerate()
            .map(|(i, (severity, description, artifact_count))| {
                let flagged = (0..artifact_count)
                    .map(|j| generic_artifact(&format!("artifact-{}", (i + j) % 5)))
                    .collect();
                result(&format!("R{i:03}"), severity, &description, flagged)
            })
            .collect();
        evaluation(results)
    })
}

fn ids(results: &[EvaluationResult]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

// ============================================================================
// Property tests: threshold gate
// ============================================================================

proptest! {
    /// For thresholds t1 <= t2, the failing set at t1 contains the failing
    /// set at t2.
    #[test]
    fn failing_set_is_monotone_in_threshold(
        eval in arb_evaluation(),
        t1 in arb_severity(),
        t2 in arb_severity(),
    ) {
        let (lower, higher) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let buckets = partition(&eval);

        let at_lower = failing_set(&buckets, lower);
        let at_higher = failing_set(&buckets, higher);

        for r in &at_higher {
            prop_assert!(
                at_lower.iter().any(|x| x.id == r.id),
                "result {} failing at {:?} is missing from the {:?} failing set",
                r.id,
                higher,
                lower
            );
        }
    }

    /// The failing set contains exactly the artifact-flagging results at or
    /// above the threshold.
    #[test]
    fn failing_set_matches_rank_filter(eval in arb_evaluation(), threshold in arb_severity()) {
        let buckets = partition(&eval);
        let failing = failing_set(&buckets, threshold);

        let expected: Vec<&EvaluationResult> = eval
            .results
            .iter()
            .filter(|r| r.has_flagged_artifacts() && r.severity.at_least(threshold))
            .collect();

        prop_assert_eq!(failing.len(), expected.len());
        for r in expected {
            prop_assert!(failing.iter().any(|x| x.id == r.id));
        }
    }

    /// The verdict is Fail exactly when something meets the threshold.
    #[test]
    fn verdict_matches_failing_set(eval in arb_evaluation(), threshold in arb_severity()) {
        let outcome = evaluate(&eval, &EffectiveConfig { fail_on: threshold });
        prop_assert_eq!(
            outcome.verdict == Verdict::Fail,
            !outcome.failing.is_empty()
        );
    }
}

// ============================================================================
// Property tests: inertness and idempotence
// ============================================================================

proptest! {
    /// Results without flagged artifacts never reach a bucket, the failing
    /// set, or a reporter row.
    #[test]
    fn empty_artifact_results_are_inert(eval in arb_evaluation(), threshold in arb_severity()) {
        let inert: Vec<String> = eval
            .results
            .iter()
            .filter(|r| !r.has_flagged_artifacts())
            .map(|r| r.id.clone())
            .collect();

        let buckets = partition(&eval);
        for severity in [Severity::Info, Severity::Warn, Severity::Fail] {
            for r in buckets.bucket(severity) {
                prop_assert!(!inert.contains(&r.id));
            }
        }

        let outcome = evaluate(&eval, &EffectiveConfig { fail_on: threshold });
        for r in &outcome.failing {
            prop_assert!(!inert.contains(&r.id));
        }

        for row in violation_rows(&eval) {
            prop_assert!(!inert.contains(&row.rule_id));
        }
    }

    /// Calling the aggregator twice on the same evaluation yields identical
    /// buckets.
    #[test]
    fn aggregator_is_idempotent(eval in arb_evaluation()) {
        let first = partition(&eval);
        let second = partition(&eval);

        for severity in [Severity::Info, Severity::Warn, Severity::Fail] {
            prop_assert_eq!(
                ids(first.bucket(severity)),
                ids(second.bucket(severity))
            );
        }
    }

    /// Every artifact-flagging result lands in exactly one bucket.
    #[test]
    fn buckets_partition_the_flagging_results(eval in arb_evaluation()) {
        let buckets = partition(&eval);
        let total = buckets.info.len() + buckets.warn.len() + buckets.fail.len();
        let flagging = eval
            .results
            .iter()
            .filter(|r| r.has_flagged_artifacts())
            .count();
        prop_assert_eq!(total, flagging);
    }
}

// ============================================================================
// Property tests: determinism under input reordering
// ============================================================================

proptest! {
    /// Shuffling the input results changes neither the reporter row sequence
    /// nor the failing set.
    #[test]
    fn row_order_ignores_input_order(
        eval in arb_evaluation(),
        seed in any::<u64>(),
        threshold in arb_severity(),
    ) {
        use rand::SeedableRng;
        use rand::seq::SliceRandom;

        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut shuffled = eval.clone();
        shuffled.results.shuffle(&mut rng);

        prop_assert_eq!(violation_rows(&eval), violation_rows(&shuffled));

        let cfg = EffectiveConfig { fail_on: threshold };
        let baseline = evaluate(&eval, &cfg);
        let reordered = evaluate(&shuffled, &cfg);
        prop_assert_eq!(baseline.verdict, reordered.verdict);
        prop_assert_eq!(ids(&baseline.failing), ids(&reordered.failing));
    }

    /// Row order is results ascending by id, artifacts in supplied order.
    #[test]
    fn rows_ascend_by_rule_id(eval in arb_evaluation()) {
        let rows = violation_rows(&eval);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].rule_id <= pair[1].rule_id);
        }
    }
}
