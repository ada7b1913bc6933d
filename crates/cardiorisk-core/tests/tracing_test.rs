use cardiorisk_core::tracing::setup::default_directive;
use cardiorisk_core::tracing::{init_tracing, spans::names};

#[test]
fn init_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialized twice");
}

#[test]
fn default_directive_is_a_valid_filter() {
    assert!(tracing_subscriber::EnvFilter::try_new(default_directive()).is_ok());
}

#[test]
fn span_macros_use_named_spans() {
    let span = cardiorisk_core::build_span!(3);
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::BUILD);
    }
    let span = cardiorisk_core::evaluate_span!("tests.csv");
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::EVALUATE);
    }
    assert_eq!(names::INFER, "cardiorisk.infer");
}
