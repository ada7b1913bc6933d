//! Fuzzy input/output variables and the registry the engine resolves
//! rule references against.

use cardiorisk_core::errors::ModelError;
use cardiorisk_core::types::FxHashMap;

use crate::engine::Memberships;
use crate::membership::{TriangularMf, Universe};

/// Index of a variable inside a [`VariableRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(pub usize);

/// Index of a term inside its [`FuzzyVariable`] (definition order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermId(pub usize);

/// A linguistic term with its curve pre-sampled over the variable's universe.
#[derive(Debug, Clone)]
pub struct Term {
    name: String,
    mf: TriangularMf,
    curve: Vec<f64>,
}

impl Term {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mf(&self) -> &TriangularMf {
        &self.mf
    }

    /// Membership values at each universe sample.
    pub fn curve(&self) -> &[f64] {
        &self.curve
    }
}

/// One fuzzy dimension: a universe plus uniquely named triangular terms.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct FuzzyVariable {
    name: String,
    universe: Universe,
    terms: Vec<Term>,
    term_index: FxHashMap<String, TermId>,
}

impl FuzzyVariable {
    /// Build a variable. Fails on bad parameters, duplicate term names,
    /// or an empty term list.
    pub fn new<I, S>(name: impl Into<String>, universe: Universe, terms: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (S, [f64; 3])>,
        S: Into<String>,
    {
        let name = name.into();
        let mut built = Vec::new();
        let mut term_index = FxHashMap::default();

        for (term_name, params) in terms {
            let term_name = term_name.into();
            if term_index.contains_key(&term_name) {
                return Err(ModelError::DuplicateTerm {
                    variable: name,
                    term: term_name,
                });
            }
            let mf = TriangularMf::new(&name, &term_name, params)?;
            let curve = mf.sample(&universe);
            term_index.insert(term_name.clone(), TermId(built.len()));
            built.push(Term {
                name: term_name,
                mf,
                curve,
            });
        }

        if built.is_empty() {
            return Err(ModelError::EmptyVariable { variable: name });
        }

        Ok(Self {
            name,
            universe,
            terms: built,
            term_index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.name.as_str())
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.term_index.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> &Term {
        &self.terms[id.0]
    }

    /// Sampled curve for a term by name.
    pub fn membership(&self, term: &str) -> Option<&[f64]> {
        self.term_id(term).map(|id| self.terms[id.0].curve())
    }

    /// Degree of `value` in every term, in definition order.
    pub fn fuzzify(&self, value: f64) -> Memberships {
        Memberships::from_entries(
            self.terms
                .iter()
                .map(|t| (t.name.clone(), self.universe.interpolate(&t.curve, value)))
                .collect(),
        )
    }
}

/// Ordered set of input variables with name lookup.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    variables: Vec<FuzzyVariable>,
    index: FxHashMap<String, VariableId>,
}

impl VariableRegistry {
    pub fn new(variables: Vec<FuzzyVariable>) -> Result<Self, ModelError> {
        let mut index = FxHashMap::default();
        for (i, v) in variables.iter().enumerate() {
            if index.insert(v.name().to_string(), VariableId(i)).is_some() {
                return Err(ModelError::DuplicateVariable {
                    variable: v.name().to_string(),
                });
            }
        }
        Ok(Self { variables, index })
    }

    pub fn resolve(&self, name: &str) -> Option<VariableId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: VariableId) -> &FuzzyVariable {
        &self.variables[id.0]
    }

    pub fn by_name(&self, name: &str) -> Option<&FuzzyVariable> {
        self.resolve(name).map(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &FuzzyVariable)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(i, v)| (VariableId(i), v))
    }
}
