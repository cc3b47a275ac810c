//! Interactive REPL for the centum calculator.

use std::path::PathBuf;
use std::process::ExitCode;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use centum_format::{format_expression, format_value};

const HISTORY_FILE: &str = ".centum_history";

/// Dot-commands available at the prompt.
const COMMANDS: &[(&str, &str)] = &[
    (".help", "Show this help message"),
    (".exit", "Exit the REPL (also .quit or Ctrl-D)"),
];

/// Run the interactive loop until the user exits.
pub fn run() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!(
                "{}: failed to initialize line editor: {e}",
                "error".red().bold()
            );
            return ExitCode::FAILURE;
        }
    };

    let history = history_path();
    if let Some(path) = &history {
        // missing history file on first run is fine
        let _ = editor.load_history(path);
    }

    println!(
        "{} v{} percentage calculator",
        "centum".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "type an expression like {} or {}, {} for help",
        "55 + 55%".cyan(),
        "15 in 30".cyan(),
        ".help".cyan()
    );

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ".exit" | ".quit" => break,
                    ".help" => print_help(),
                    _ if line.starts_with('.') => {
                        eprintln!("{}: unknown command '{line}'", "error".red().bold());
                    }
                    expression => eval_line(expression),
                }
            }
            // ^C drops the current line, ^D leaves
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red().bold());
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }
    ExitCode::SUCCESS
}

/// Parse and print one line from the prompt.
fn eval_line(input: &str) {
    match centum_parser::parse(input) {
        Ok(expr) => {
            println!(
                "{} = {}",
                format_expression(&expr).dimmed(),
                format_value(&expr).bold()
            );
        }
        Err(err) => eprintln!("{}: {err}", "parse error".red().bold()),
    }
}

fn print_help() {
    println!("{}", "COMMANDS:".bold());
    for (cmd, what) in COMMANDS {
        println!("    {:12} {what}", cmd.cyan());
    }
    println!();
    println!("{}", "OPERATORS:".bold());
    println!("    {:12} add/subtract a percentage of the left value", "+ -".cyan());
    println!("    {:12} multiply/divide by a percentage of the left value", "* x /".cyan());
    println!("    {:12} left percent of right, e.g. 50% of 100", "of".cyan());
    println!("    {:12} left as a percentage of right, e.g. 15 in 30", "in".cyan());
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE))
}
