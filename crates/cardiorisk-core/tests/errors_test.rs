use cardiorisk_core::errors::*;

#[test]
fn error_codes_are_stable() {
    let model = ModelError::DuplicateTerm {
        variable: "Age".to_string(),
        term: "Old".to_string(),
    };
    assert_eq!(model.error_code(), "MODEL_ERROR");
    assert_eq!(model.coded_string(), "[MODEL_ERROR] duplicate term Old in variable Age");

    let io = RuleError::Io {
        path: "rules.csv".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(io.error_code(), "RULE_IO_ERROR");

    let unknown = RuleError::UnknownVariable {
        index: 3,
        variable: "Weight".to_string(),
    };
    assert_eq!(unknown.error_code(), "RULE_ERROR");
}

#[test]
fn engine_error_delegates_codes() {
    let err: EngineError = ConfigError::ValidationFailed {
        field: "categories".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().starts_with("Configuration error:"));

    let eval: EvalError = err.into();
    assert_eq!(eval.error_code(), "CONFIG_ERROR");
}
