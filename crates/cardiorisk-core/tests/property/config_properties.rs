use cardiorisk_core::config::{CardioConfig, CategoryConfig, EngineConfig};
use cardiorisk_core::types::CategoryThresholds;
use cardiorisk_core::RiskCategory;
use proptest::prelude::*;

proptest! {
    #[test]
    fn classify_is_monotonic(a in -5.0f64..15.0, b in -5.0f64..15.0) {
        let t = CategoryThresholds::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(t.classify(lo) <= t.classify(hi));
    }

    #[test]
    fn increasing_thresholds_validate(h in 0.0f64..4.0, gap1 in 0.01f64..3.0, gap2 in 0.01f64..3.0) {
        let config = CardioConfig {
            categories: CategoryConfig {
                healthy_below: Some(h),
                low_risk_below: Some(h + gap1),
                medium_risk_below: Some(h + gap1 + gap2),
            },
            ..Default::default()
        };
        prop_assert!(CardioConfig::validate(&config).is_ok());

        let t = config.categories.effective_thresholds();
        prop_assert_eq!(t.classify(h), RiskCategory::LowRisk);
        prop_assert_eq!(t.classify(h + gap1 + gap2), RiskCategory::HighRisk);
    }

    #[test]
    fn neutral_score_outside_range_rejected(score in prop_oneof![-100.0f64..-0.001, 10.001f64..100.0]) {
        let config = CardioConfig {
            engine: EngineConfig { neutral_score: Some(score), strict_rules: None },
            ..Default::default()
        };
        prop_assert!(CardioConfig::validate(&config).is_err());
    }

    #[test]
    fn toml_round_trip_preserves_engine_section(score in 0.0f64..10.0, strict in any::<bool>()) {
        let config = CardioConfig {
            engine: EngineConfig { neutral_score: Some(score), strict_rules: Some(strict) },
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        let back = CardioConfig::from_toml(&text).unwrap();
        prop_assert_eq!(back.engine.effective_strict_rules(), strict);
        prop_assert!((back.engine.effective_neutral_score() - score).abs() < 1e-12);
    }
}
