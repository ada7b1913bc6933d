use cardiorisk_core::types::CategoryThresholds;
use cardiorisk_core::RiskCategory;
use cardiorisk_inference::definitions;
use cardiorisk_inference::{InferenceEngine, Rule, RuleBase};
use proptest::prelude::*;

fn engine() -> InferenceEngine {
    let base: RuleBase = [
        Rule::of(&[("Age", "Old"), ("HbA1c", "High")], "HighRisk"),
        Rule::of(&[("Age", "Young"), ("LDL", "VeryHealthy")], "Healthy"),
        Rule::of(&[("BloodPressure", "High"), ("HDL", "Low")], "MediumRisk"),
        Rule::of(&[("HeartRate", "Healthy"), ("ChestPain", "NoPain")], "LowRisk"),
    ]
    .into_iter()
    .collect();
    InferenceEngine::with_defaults(&base).expect("engine builds")
}

fn patient() -> impl Strategy<Value = Vec<(&'static str, f64)>> {
    (
        0.0f64..120.0,
        60.0f64..220.0,
        3.0f64..15.0,
        40.0f64..260.0,
        10.0f64..110.0,
        40.0f64..190.0,
        0.0f64..3.9,
    )
        .prop_map(|(age, bp, a1c, ldl, hdl, hr, cp)| {
            vec![
                ("Age", age),
                ("BloodPressure", bp),
                ("HbA1c", a1c),
                ("LDL", ldl),
                ("HDL", hdl),
                ("HeartRate", hr),
                ("ChestPain", cp),
            ]
        })
}

fn category_rank(c: RiskCategory) -> usize {
    c.index()
}

proptest! {
    #[test]
    fn membership_degrees_in_unit_interval(x in -50.0f64..300.0) {
        for var in definitions::clinical_inputs().unwrap() {
            for (_, degree) in var.fuzzify(x).iter() {
                prop_assert!((0.0..=1.0).contains(&degree));
            }
        }
    }

    #[test]
    fn score_within_bounds(inputs in patient()) {
        let result = engine().infer(inputs);
        prop_assert!(result.score.is_finite());
        prop_assert!((0.0..=10.0).contains(&result.score), "score {}", result.score);
    }

    #[test]
    fn fallback_iff_no_activation(inputs in patient()) {
        let engine = engine();
        let result = engine.infer(inputs.iter().copied());
        prop_assert_eq!(result.is_fallback(), result.activations.is_empty());
        let fired = engine.evaluate_rules(&engine.fuzzify_inputs(inputs.iter().copied()));
        prop_assert_eq!(result.activations, fired);
    }

    #[test]
    fn activations_are_positive_and_bounded(inputs in patient()) {
        for activation in engine().infer(inputs).activations {
            prop_assert!(activation.degree > 0.0 && activation.degree <= 1.0);
        }
    }

    #[test]
    fn repeated_inference_is_bit_identical(inputs in patient()) {
        let engine = engine();
        let a = engine.infer(inputs.iter().copied());
        let b = engine.infer(inputs.iter().copied());
        prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn category_is_monotonic_in_score(a in 0.0f64..10.0, b in 0.0f64..10.0) {
        let thresholds = CategoryThresholds::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(category_rank(thresholds.classify(lo)) <= category_rank(thresholds.classify(hi)));
    }

    #[test]
    fn aggregate_never_exceeds_strongest_activation(inputs in patient()) {
        let engine = engine();
        let result = engine.infer(inputs);
        let strongest = result.activations.iter().map(|a| a.degree).fold(0.0, f64::max);
        let aggregated = engine.aggregate(&result.activations);
        prop_assert!(aggregated.iter().all(|&mu| mu <= strongest + 1e-12));
    }
}
