//! `VAR=VALUE` patient inputs from the command line.

use cardiorisk_core::errors::error_code::{self, CardioErrorCode};
use cardiorisk_inference::{InferenceEngine, InferenceResult, TermCorrections};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid input {raw:?}: expected VAR=VALUE")]
    Malformed { raw: String },

    #[error("inputs mix {numeric} numeric values with {linguistic} linguistic terms")]
    Mixed { numeric: usize, linguistic: usize },
}

impl CardioErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}

/// One patient, either fully numeric or fully linguistic.
#[derive(Debug, Clone, PartialEq)]
pub enum PatientInputs {
    Numeric(Vec<(String, f64)>),
    /// Terms have already been through the correction table.
    Linguistic(Vec<(String, String)>),
}

impl PatientInputs {
    /// Classify raw `VAR=VALUE` strings. Every value must parse as a number,
    /// or none may. An empty list is numeric.
    pub fn parse<I, S>(raw: I, corrections: &TermCorrections) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs = raw
            .into_iter()
            .map(|r| parse_pair(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let numbers: Vec<Option<f64>> = pairs.iter().map(|(_, v)| v.parse().ok()).collect();
        let numeric = numbers.iter().filter(|n| n.is_some()).count();

        if numeric == pairs.len() {
            Ok(Self::Numeric(
                pairs
                    .into_iter()
                    .zip(numbers)
                    .filter_map(|((var, _), n)| Some((var, n?)))
                    .collect(),
            ))
        } else if numeric == 0 {
            Ok(Self::Linguistic(
                pairs
                    .into_iter()
                    .map(|(var, term)| {
                        let term = corrections.correct(&term).to_string();
                        (var, term)
                    })
                    .collect(),
            ))
        } else {
            Err(InputError::Mixed {
                numeric,
                linguistic: pairs.len() - numeric,
            })
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Linguistic(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Route to `infer` or `infer_categorical`.
    pub fn infer(&self, engine: &InferenceEngine) -> InferenceResult {
        match self {
            Self::Numeric(values) => engine.infer(values.iter().map(|(v, x)| (v.as_str(), *x))),
            Self::Linguistic(terms) => {
                engine.infer_categorical(terms.iter().map(|(v, t)| (v.as_str(), t.as_str())))
            }
        }
    }
}

/// Split one `VAR=VALUE`; both sides trimmed and non-empty.
pub fn parse_pair(raw: &str) -> Result<(String, String), InputError> {
    match raw.split_once('=') {
        Some((var, value)) if !var.trim().is_empty() && !value.trim().is_empty() => {
            Ok((var.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(InputError::Malformed {
            raw: raw.to_string(),
        }),
    }
}
