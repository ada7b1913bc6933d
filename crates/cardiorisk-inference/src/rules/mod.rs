//! Rule base: record parsing, label correction, delimited-file reading,
//! and compilation against the variable registry.

pub mod compiled;
pub mod corrections;
pub mod parser;
pub mod reader;
pub mod rule_base;

pub use compiled::{compile, Clause, CompiledRule, RuleDiagnostics, RuleIssue};
pub use corrections::TermCorrections;
pub use parser::{parse_antecedent, parse_record};
pub use reader::{parse_delimited, read_delimited, RawRecord};
pub use rule_base::{Condition, Rule, RuleBase};
