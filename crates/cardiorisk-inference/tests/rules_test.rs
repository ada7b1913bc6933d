use std::io::Write;

use cardiorisk_core::errors::RuleError;
use cardiorisk_inference::definitions;
use cardiorisk_inference::rules::{compile, Condition};
use cardiorisk_inference::{RawRecord, Rule, RuleBase, TermCorrections, VariableRegistry};

const RULES_CSV: &str = "\
Antecedent,Consequent
\"Age=Old AND HbA1c=HIgh\",HIgh
Age=Young AND LDL=VeryHealthy,Healthy
Age=Mid AND LDL=High,too,many
,LowRisk

BloodPressure=Normal AND HDL=Low,MediumRisk
";

fn registry() -> VariableRegistry {
    VariableRegistry::new(definitions::clinical_inputs().unwrap()).unwrap()
}

#[test]
fn test_loads_rule_file_with_corrections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RULES_CSV.as_bytes()).unwrap();

    let base = RuleBase::from_path(file.path(), &TermCorrections::default()).unwrap();
    assert_eq!(base.len(), 3);

    let first = &base.rules()[0];
    assert_eq!(
        first.antecedent(),
        &[Condition::new("Age", "Old"), Condition::new("HbA1c", "High")]
    );
    assert_eq!(first.consequent(), "High");

    let third = &base.rules()[2];
    assert_eq!(third.antecedent()[0], Condition::new("BloodPressure", "Medium"));
    assert_eq!(third.consequent(), "MediumRisk");
}

#[test]
fn test_missing_rule_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuleBase::from_path(&dir.path().join("absent.csv"), &TermCorrections::none())
        .unwrap_err();
    assert!(matches!(err, RuleError::Io { .. }));
}

#[test]
fn test_records_without_valid_clauses_are_skipped() {
    let records = vec![
        RawRecord::new("Age=Old", "HighRisk"),
        RawRecord::new("no equals sign here", "HighRisk"),
        RawRecord::new("Age=Old", ""),
        RawRecord::new("Age Old AND HDL Low", "LowRisk"),
    ];
    let base = RuleBase::from_records(records, &TermCorrections::none());
    assert_eq!(base.len(), 1);
}

#[test]
fn test_rule_display() {
    let rule = Rule::of(&[("Age", "Old"), ("HDL", "Low")], "HighRisk");
    assert_eq!(rule.to_string(), "IF Age=Old AND HDL=Low THEN HighRisk");
}

#[test]
fn test_lenient_compile_keeps_unknown_antecedents_and_drops_unknown_consequents() {
    let base: RuleBase = [
        Rule::of(&[("Age", "Old")], "HighRisk"),
        Rule::of(&[("Cholesterol", "High")], "HighRisk"),
        Rule::of(&[("Age", "Ancient")], "HighRisk"),
        Rule::of(&[("Age", "Old")], "Doomed"),
    ]
    .into_iter()
    .collect();

    let output = definitions::risk_output().unwrap();
    let (compiled, diagnostics) = compile(&base, &registry(), &output, false).unwrap();

    assert_eq!(compiled.len(), 3);
    assert!(!compiled[0].never_fires());
    assert!(compiled[1].never_fires());
    assert!(compiled[2].never_fires());

    assert_eq!(diagnostics.loaded, 4);
    assert_eq!(diagnostics.compiled, 3);
    assert_eq!(
        diagnostics.never_firing.iter().map(|i| i.index).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(diagnostics.dropped.len(), 1);
    assert_eq!(diagnostics.dropped[0].index, 3);
}

#[test]
fn test_strict_compile_rejects_unknown_references() {
    let output = definitions::risk_output().unwrap();
    let registry = registry();

    let unknown_var: RuleBase = [Rule::of(&[("Cholesterol", "High")], "HighRisk")]
        .into_iter()
        .collect();
    assert!(matches!(
        compile(&unknown_var, &registry, &output, true),
        Err(RuleError::UnknownVariable { index: 0, .. })
    ));

    let unknown_term: RuleBase = [Rule::of(&[("Age", "Ancient")], "HighRisk")]
        .into_iter()
        .collect();
    assert!(matches!(
        compile(&unknown_term, &registry, &output, true),
        Err(RuleError::UnknownTerm { .. })
    ));

    let unknown_consequent: RuleBase =
        [Rule::of(&[("Age", "Old")], "Doomed")].into_iter().collect();
    assert!(matches!(
        compile(&unknown_consequent, &registry, &output, true),
        Err(RuleError::UnknownConsequent { .. })
    ));
}
