//! # cardiorisk-inference
//!
//! Mamdani fuzzy inference for clinical risk scoring.
//!
//! Measurements are fuzzified against triangular terms and combined by a
//! min/max rule base. The output distribution is scored by averaging centroid,
//! bisector and mean-of-maximum. When no rule fires a weighted dominant-term
//! heuristic supplies the score instead.

pub mod definitions;
pub mod engine;
pub mod membership;
pub mod rules;
pub mod variable;

pub use engine::{
    FuzzifiedInput, InferenceEngine, InferencePath, InferenceResult, Memberships, RuleActivation,
};
pub use membership::{TriangularMf, Universe};
pub use rules::{RawRecord, Rule, RuleBase, TermCorrections};
pub use variable::{FuzzyVariable, TermId, VariableId, VariableRegistry};
