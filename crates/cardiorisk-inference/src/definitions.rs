//! Clinical variable definitions: universes and triangular terms for the
//! seven inputs and the `Risk` output.

use cardiorisk_core::constants;
use cardiorisk_core::errors::ModelError;

use crate::membership::Universe;
use crate::variable::FuzzyVariable;

/// Static description of a variable, built into a [`FuzzyVariable`] at start-up.
#[derive(Debug, Clone, Copy)]
pub struct VariableSpec {
    pub name: &'static str,
    /// Human label and unit, shown next to fuzzification results.
    pub label: &'static str,
    pub unit: &'static str,
    /// Universe start, inclusive end, and step.
    pub universe: (f64, f64, f64),
    pub terms: &'static [(&'static str, [f64; 3])],
}

impl VariableSpec {
    /// `label (unit)`, or the bare label for unitless variables.
    pub fn display_name(&self) -> String {
        if self.unit.is_empty() {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }

    pub fn build(&self) -> Result<FuzzyVariable, ModelError> {
        let (start, end, step) = self.universe;
        let universe = Universe::new(self.name, start, end, step)?;
        FuzzyVariable::new(self.name, universe, self.terms.iter().copied())
    }
}

pub const AGE: VariableSpec = VariableSpec {
    name: "Age",
    label: "Age",
    unit: "years",
    universe: (20.0, 100.0, 1.0),
    terms: &[
        ("Young", [20.0, 32.0, 45.0]),
        ("Mid", [40.0, 52.0, 65.0]),
        ("Old", [60.0, 72.0, 85.0]),
        ("VeryOld", [80.0, 95.0, 100.0]),
    ],
};

pub const BLOOD_PRESSURE: VariableSpec = VariableSpec {
    name: "BloodPressure",
    label: "Systolic blood pressure",
    unit: "mmHg",
    universe: (80.0, 200.0, 1.0),
    terms: &[
        ("Medium", [80.0, 100.0, 120.0]),
        ("High", [110.0, 135.0, 160.0]),
        ("VeryHigh", [150.0, 175.0, 200.0]),
    ],
};

pub const HBA1C: VariableSpec = VariableSpec {
    name: "HbA1c",
    label: "HbA1c",
    unit: "%",
    universe: (4.0, 14.0, 0.1),
    terms: &[
        ("VeryHealthy", [4.0, 5.0, 6.5]),
        ("Healthy", [6.0, 7.5, 9.0]),
        ("High", [8.0, 11.0, 14.0]),
    ],
};

pub const LDL: VariableSpec = VariableSpec {
    name: "LDL",
    label: "LDL cholesterol",
    unit: "mg/dL",
    universe: (50.0, 250.0, 1.0),
    terms: &[
        ("VeryHealthy", [50.0, 65.0, 80.0]),
        ("Healthy", [70.0, 90.0, 110.0]),
        ("High", [100.0, 125.0, 150.0]),
        ("VeryHigh", [140.0, 165.0, 190.0]),
        ("XHigh", [180.0, 215.0, 250.0]),
    ],
};

pub const HDL: VariableSpec = VariableSpec {
    name: "HDL",
    label: "HDL cholesterol",
    unit: "mg/dL",
    universe: (20.0, 100.0, 1.0),
    terms: &[("Low", [20.0, 30.0, 45.0]), ("Healthy", [40.0, 65.0, 100.0])],
};

pub const HEART_RATE: VariableSpec = VariableSpec {
    name: "HeartRate",
    label: "Heart rate",
    unit: "bpm",
    universe: (50.0, 180.0, 1.0),
    terms: &[
        ("VeryHealthy", [50.0, 60.0, 75.0]),
        ("Healthy", [65.0, 82.0, 100.0]),
        ("High", [90.0, 135.0, 180.0]),
    ],
};

/// Chest pain type is categorical at the boundary (0..=3) but fuzzified
/// like any other input.
pub const CHEST_PAIN: VariableSpec = VariableSpec {
    name: "ChestPain",
    label: "Chest pain type",
    unit: "",
    universe: (0.0, 3.9, 0.1),
    terms: &[
        ("NoPain", [0.0, 0.0, 0.5]),
        ("NonAnginal", [0.5, 1.0, 1.5]),
        ("Atypical", [1.5, 2.0, 2.5]),
        ("Typical", [2.5, 3.0, 3.5]),
    ],
};

pub const RISK: VariableSpec = VariableSpec {
    name: constants::OUTPUT_VARIABLE,
    label: "Risk score",
    unit: "",
    universe: (0.0, 10.0, 0.01),
    terms: &[
        ("Healthy", [0.0, 1.5, 3.0]),
        ("LowRisk", [2.0, 4.0, 6.0]),
        ("MediumRisk", [4.0, 6.0, 8.0]),
        ("HighRisk", [6.0, 8.5, 10.0]),
    ],
};

/// Input specs in presentation order.
pub const CLINICAL_INPUTS: [VariableSpec; 7] =
    [AGE, BLOOD_PRESSURE, HBA1C, LDL, HDL, HEART_RATE, CHEST_PAIN];

/// Clinical input spec by variable name.
pub fn input_spec(name: &str) -> Option<VariableSpec> {
    CLINICAL_INPUTS.into_iter().find(|spec| spec.name == name)
}

/// Build the seven clinical input variables.
pub fn clinical_inputs() -> Result<Vec<FuzzyVariable>, ModelError> {
    CLINICAL_INPUTS.iter().map(VariableSpec::build).collect()
}

/// Build the `Risk` output variable.
pub fn risk_output() -> Result<FuzzyVariable, ModelError> {
    RISK.build()
}
