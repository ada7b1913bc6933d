//! Inference engine: fuzzify → evaluate → aggregate → defuzzify (or fall
//! back) → categorize.

pub mod aggregate;
pub mod categorical;
pub mod defuzzify;
pub mod evaluate;
pub mod fallback;
pub mod types;

use std::borrow::Borrow;

use cardiorisk_core::config::CardioConfig;
use cardiorisk_core::errors::EngineError;
use cardiorisk_core::types::CategoryThresholds;
use cardiorisk_core::RiskCategory;
use tracing::debug;

pub use categorical::CategoricalCenters;
pub use defuzzify::{DefuzzBreakdown, Estimate};
pub use fallback::FallbackScorer;
pub use types::{FuzzifiedInput, InferencePath, InferenceResult, Memberships, RuleActivation};

use crate::definitions;
use crate::rules::{self, CompiledRule, RuleBase, RuleDiagnostics};
use crate::variable::{FuzzyVariable, VariableRegistry};

/// Mamdani inference over a fixed set of input variables, one output
/// variable, and a compiled rule base. Immutable once built, so a single
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    inputs: VariableRegistry,
    output: FuzzyVariable,
    rules: Vec<CompiledRule>,
    diagnostics: RuleDiagnostics,
    fallback: FallbackScorer,
    centers: CategoricalCenters,
    thresholds: CategoryThresholds,
    neutral_score: f64,
}

impl InferenceEngine {
    /// Engine over the seven clinical inputs and the `Risk` output.
    pub fn new(rule_base: &RuleBase, config: &CardioConfig) -> Result<Self, EngineError> {
        Self::with_variables(
            definitions::clinical_inputs()?,
            definitions::risk_output()?,
            rule_base,
            config,
        )
    }

    /// Clinical engine with default configuration.
    pub fn with_defaults(rule_base: &RuleBase) -> Result<Self, EngineError> {
        Self::new(rule_base, &CardioConfig::default())
    }

    /// Engine over caller-supplied variables.
    pub fn with_variables(
        inputs: Vec<FuzzyVariable>,
        output: FuzzyVariable,
        rule_base: &RuleBase,
        config: &CardioConfig,
    ) -> Result<Self, EngineError> {
        let _span = cardiorisk_core::build_span!(rule_base.len()).entered();
        CardioConfig::validate(config)?;

        let inputs = VariableRegistry::new(inputs)?;
        let strict = config.engine.effective_strict_rules();
        let (rules, diagnostics) = rules::compile(rule_base, &inputs, &output, strict)?;

        tracing::info!(
            variables = inputs.len(),
            loaded = diagnostics.loaded,
            compiled = diagnostics.compiled,
            never_firing = diagnostics.never_firing.len(),
            dropped = diagnostics.dropped.len(),
            "inference engine ready"
        );

        Ok(Self {
            inputs,
            output,
            rules,
            diagnostics,
            fallback: FallbackScorer::new(&config.scoring.effective_weights()),
            centers: CategoricalCenters::new(&config.scoring.effective_centers()),
            thresholds: config.categories.effective_thresholds(),
            neutral_score: config.engine.effective_neutral_score(),
        })
    }

    pub fn inputs(&self) -> &VariableRegistry {
        &self.inputs
    }

    pub fn output(&self) -> &FuzzyVariable {
        &self.output
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Number of rules taking part in evaluation.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn diagnostics(&self) -> &RuleDiagnostics {
        &self.diagnostics
    }

    pub fn fallback(&self) -> &FallbackScorer {
        &self.fallback
    }

    pub fn centers(&self) -> &CategoricalCenters {
        &self.centers
    }

    pub fn thresholds(&self) -> &CategoryThresholds {
        &self.thresholds
    }

    pub fn neutral_score(&self) -> f64 {
        self.neutral_score
    }

    /// Fuzzify every recognized, finite input. Unknown names are ignored;
    /// a repeated name keeps its last value.
    pub fn fuzzify_inputs<I, K, V>(&self, inputs: I) -> FuzzifiedInput
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Borrow<f64>,
    {
        let mut fuzzified = FuzzifiedInput::with_slots(self.inputs.len());
        for (name, value) in inputs {
            let (name, value) = (name.as_ref(), *value.borrow());
            let Some(id) = self.inputs.resolve(name) else {
                tracing::trace!(variable = name, "ignoring unknown input");
                continue;
            };
            if !value.is_finite() {
                tracing::trace!(variable = name, value, "ignoring non-finite input");
                continue;
            }
            let variable = self.inputs.get(id);
            fuzzified.insert(id, variable.name(), variable.fuzzify(value));
        }
        fuzzified
    }

    /// Activations of every firing rule.
    pub fn evaluate_rules(&self, fuzzified: &FuzzifiedInput) -> Vec<RuleActivation> {
        evaluate::evaluate(&self.rules, fuzzified)
    }

    /// Output distribution over the `Risk` universe.
    pub fn aggregate(&self, activations: &[RuleActivation]) -> Vec<f64> {
        aggregate::aggregate(&self.output, activations)
    }

    /// Hybrid score of an output distribution.
    pub fn defuzzify(&self, aggregated: &[f64]) -> f64 {
        self.defuzzify_breakdown(aggregated).score
    }

    pub fn defuzzify_breakdown(&self, aggregated: &[f64]) -> DefuzzBreakdown {
        defuzzify::hybrid(self.output.universe(), aggregated, self.neutral_score)
    }

    pub fn categorize(&self, score: f64) -> RiskCategory {
        self.thresholds.classify(score)
    }

    /// Score and categorize numeric inputs.
    pub fn infer<I, K, V>(&self, inputs: I) -> InferenceResult
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Borrow<f64>,
    {
        let fuzzified = self.fuzzify_inputs(inputs);
        let _span = cardiorisk_core::infer_span!(fuzzified.len()).entered();

        let activations = self.evaluate_rules(&fuzzified);
        let (score, path) = if activations.is_empty() {
            (self.fallback.score(&fuzzified), InferencePath::Fallback)
        } else {
            let aggregated = self.aggregate(&activations);
            (self.defuzzify(&aggregated), InferencePath::Rules)
        };
        let category = self.categorize(score);

        debug!(
            ?path,
            score,
            %category,
            fired = activations.len(),
            "inference complete"
        );

        InferenceResult {
            score,
            category,
            fuzzified,
            activations,
            path,
        }
    }

    /// Score linguistic inputs by projecting each `(variable, term)` onto its
    /// center value first.
    pub fn infer_categorical<I, K, T>(&self, inputs: I) -> InferenceResult
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: AsRef<str>,
    {
        let numeric = self.centers.project(inputs);
        self.infer(numeric)
    }
}
