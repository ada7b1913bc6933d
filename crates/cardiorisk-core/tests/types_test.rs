use cardiorisk_core::RiskCategory;

#[test]
fn test_category_serializes_as_label() {
    for category in RiskCategory::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.as_str()));
        let back: RiskCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }
}

#[test]
fn test_categories_ordered_by_risk() {
    assert!(RiskCategory::Healthy < RiskCategory::LowRisk);
    assert!(RiskCategory::LowRisk < RiskCategory::MediumRisk);
    assert!(RiskCategory::MediumRisk < RiskCategory::HighRisk);
}

#[test]
fn test_unknown_label_error_message() {
    let err = "Critical".parse::<RiskCategory>().unwrap_err();
    assert_eq!(err.to_string(), "unknown risk category: Critical");
    let as_error: &dyn std::error::Error = &err;
    assert!(as_error.source().is_none());
    assert_eq!(RiskCategory::from_label("healthy"), None);
}
