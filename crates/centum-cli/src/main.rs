//! centum, a percentage arithmetic calculator.
//!
//! One-shot evaluation:
//!
//! ```text
//! $ centum "55 + 55%"
//! 55 + 55% = 85.25
//! $ centum --json "15 in 30"
//! {"ok":true,"expression":"15 in 30","value":"50%","result":50.0}
//! ```
//!
//! With no expression, starts the interactive REPL.

mod repl;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;

use centum_format::{format_expression, format_value};
use centum_types::ParseError;

/// Percentage arithmetic calculator.
#[derive(Parser)]
#[command(name = "centum", version, about)]
struct Cli {
    /// Expression to evaluate, e.g. "55 + 55%" or "50% of 100".
    /// Quoting is optional; trailing arguments are joined with spaces.
    /// Leave empty to start the interactive REPL.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Emit the outcome as a JSON object on stdout.
    #[arg(long)]
    json: bool,
}

/// JSON envelope for a successful parse.
#[derive(Serialize)]
struct Outcome {
    ok: bool,
    expression: String,
    value: String,
    /// The rounded numeric result; absent when evaluation trapped
    /// (`value` then carries the error message).
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
}

/// JSON envelope for a parse failure.
#[derive(Serialize)]
struct Failure<'e> {
    ok: bool,
    error: &'e ParseError,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.expression.is_empty() {
        return repl::run();
    }

    run_once(&cli.expression.join(" "), cli.json)
}

/// Parse, evaluate, and print one expression.
fn run_once(input: &str, json: bool) -> ExitCode {
    match centum_parser::parse(input) {
        Ok(expr) => {
            let expression = format_expression(&expr);
            let value = format_value(&expr);
            if json {
                let outcome = Outcome {
                    ok: true,
                    expression,
                    value,
                    result: centum_eval::evaluate(&expr).ok(),
                };
                println!("{}", to_json(&outcome));
            } else {
                println!("{expression} = {value}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if json {
                println!("{}", to_json(&Failure { ok: false, error: &err }));
            } else {
                eprintln!("{}: {err}", "error".red().bold());
            }
            ExitCode::FAILURE
        }
    }
}

/// Serialize an envelope, falling back to a minimal error object.
fn to_json<T: Serialize>(envelope: &T) -> String {
    serde_json::to_string(envelope)
        .unwrap_or_else(|e| format!(r#"{{"ok":false,"error":"serialization error: {e}"}}"#))
}
