// src/bin/cardiorisk.rs
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cardiorisk_core::config::CardioConfig;
use cardiorisk_core::errors::{ConfigError, EngineError, EvalError, RuleError};
use cardiorisk_core::CardioErrorCode;
use cardiorisk_core::tracing::init_tracing;
use cardiorisk_eval::input::{InputError, PatientInputs};
use cardiorisk_eval::report::{banner, render_inference};
use cardiorisk_inference::{InferenceEngine, InferenceResult, RuleBase, TermCorrections};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardiorisk", version, about = "Fuzzy cardiovascular risk scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every row of a labelled test file and print accuracy metrics
    Evaluate {
        /// Rule file (antecedent,consequent)
        #[arg(long)]
        rules: PathBuf,

        /// Test file (antecedent,expected label)
        #[arg(long)]
        test: PathBuf,

        /// Explicit config file; defaults to ./cardiorisk.toml when present
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single patient
    Infer {
        /// Rule file (antecedent,consequent)
        #[arg(long)]
        rules: PathBuf,

        /// Input as Var=value, e.g. Age=72 or Age=Old. Repeatable.
        #[arg(long = "input", value_name = "VAR=VALUE")]
        inputs: Vec<String>,

        /// Explicit config file; defaults to ./cardiorisk.toml when present
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(explicit: Option<&Path>) -> Result<CardioConfig> {
    let config = match explicit {
        Some(path) => CardioConfig::from_file(path)?,
        None => CardioConfig::load(&std::env::current_dir()?, None)?,
    };
    Ok(config)
}

fn build_engine(rules: &Path, config: &CardioConfig) -> Result<(InferenceEngine, TermCorrections)> {
    let corrections = TermCorrections::from_config(&config.vocabulary);
    let base = RuleBase::from_path(rules, &corrections)
        .with_context(|| format!("loading rules from {}", rules.display()))?;
    let engine = InferenceEngine::new(&base, config)?;
    Ok((engine, corrections))
}

fn print_result(result: &InferenceResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_inference(result));
    }
    Ok(())
}

fn evaluate(rules: &Path, test: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let (engine, corrections) = build_engine(rules, &config)?;
    let report = cardiorisk_eval::evaluate_file(&engine, test, &corrections)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", banner("Mamdani FIS with hybrid defuzzification"));
        println!();
        println!("{report}");
    }
    Ok(())
}

fn infer(rules: &Path, inputs: &[String], config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let (engine, corrections) = build_engine(rules, &config)?;

    let inputs = PatientInputs::parse(inputs, &corrections)?;
    let result = inputs.infer(&engine);
    print_result(&result, json)
}

/// Coded message for library errors, full context chain otherwise.
fn describe(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<EvalError>() {
        e.coded_string()
    } else if let Some(e) = err.downcast_ref::<EngineError>() {
        e.coded_string()
    } else if let Some(e) = err.downcast_ref::<RuleError>() {
        format!("{err}: {}", e.coded_string())
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.coded_string()
    } else if let Some(e) = err.downcast_ref::<InputError>() {
        e.coded_string()
    } else {
        format!("{err:#}")
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Evaluate {
            rules,
            test,
            config,
            json,
        } => evaluate(&rules, &test, config.as_deref(), json),
        Command::Infer {
            rules,
            inputs,
            config,
            json,
        } => infer(&rules, &inputs, config.as_deref(), json),
    }
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}
