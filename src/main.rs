use std::{error::Error, fs, path::PathBuf};

use clap::{Parser, Subcommand};
use mathkit::{
    base::{TargetBase, convert},
    complex::{self, ComplexOperation},
    error::MathError,
    history::History,
    logic::{LogicOperation, evaluate_bits, evaluate_bools, truth_table},
    set,
};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// mathkit is a small numeric toolkit: complex arithmetic, set algebra,
/// logic, base conversion and number properties.
#[derive(Parser, Debug)]
#[command(name = "mathkit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a complex-number operation and shows how the result was reached.
    Complex {
        /// One of `+ - * / ^ sqrt abs conj polar rect sin cos tan exp log`.
        operation: String,
        /// First operand, e.g. `2+3j`, `2,3`, or `5<0.927` for `rect`.
        first:     String,
        /// Second operand for binary operations.
        second:    Option<String>,
        /// Prints only the result.
        #[arg(short, long)]
        quiet:     bool,
    },
    /// Applies a set operation to two element lists.
    Set {
        /// One of `union intersection difference symmetric_difference
        /// cartesian_product is_subset is_superset is_disjoint`.
        operation: String,
        /// Elements of A, separated by commas or spaces.
        a:         String,
        /// Elements of B, separated by commas or spaces.
        b:         String,
    },
    /// Evaluates a logic operation on bit strings or booleans.
    Logic {
        /// One of `and or xor nand nor xnor not_a implies`.
        operation: String,
        /// Operand A.
        a:         String,
        /// Operand B, not needed for `not_a`.
        b:         Option<String>,
        /// Reads the operands as booleans instead of bit strings.
        #[arg(short, long)]
        boolean:   bool,
        /// Also prints the truth table of the operation.
        #[arg(short, long)]
        table:     bool,
    },
    /// Converts an integer literal between bases.
    Convert {
        /// The literal to convert, e.g. `FF` or `-101`.
        input:   String,
        /// The base the literal is written in.
        #[arg(short, long)]
        from:    u32,
        /// Converts to base 2.
        #[arg(long)]
        binary:  bool,
        /// Converts to base 8.
        #[arg(long)]
        octal:   bool,
        /// Converts to base 10.
        #[arg(long)]
        decimal: bool,
        /// Converts to base 16.
        #[arg(long)]
        hex:     bool,
        /// Converts to any base from 2 to 36.
        #[arg(long)]
        custom:  Option<u32>,
    },
    /// Classifies numbers, fractions or complex numbers.
    Analyze {
        /// Numbers to analyze, e.g. `97`, `3/4` or `2+3j`.
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Writes the analysis history to this file.
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
}

/// Reads a boolean operand.
fn parse_bool(text: &str) -> Result<bool, MathError> {
    match text.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(MathError::Format { input:   text.to_string(),
                                     details: "expected true/false, 1/0 or yes/no".to_string(), }),
    }
}

fn run_complex(operation: &str, first: &str, second: Option<&str>, quiet: bool) -> Result<(), Box<dyn Error>> {
    let operation: ComplexOperation = operation.parse()?;
    let solution = complex::solve(operation, first, second)?;

    if quiet {
        println!("{}", solution.value);
        return Ok(());
    }

    println!("{}", solution.label());
    println!("{}", solution.equation);
    println!();
    println!("Steps:");
    for step in &solution.trace {
        println!("  {step}");
    }
    if let Some(forms) = solution.forms() {
        println!();
        for (label, value) in forms.rows() {
            println!("{label}: {value}");
        }
    }
    Ok(())
}

fn run_set(operation: &str, a: &str, b: &str) -> Result<(), Box<dyn Error>> {
    let solution = set::solve(operation, a, b)?;
    println!("{}", solution.label());
    println!("{}", solution.expression());
    println!("Result: {}", solution.value);
    Ok(())
}

fn run_logic(operation: &str, a: &str, b: Option<&str>, boolean: bool, table: bool) -> Result<(), Box<dyn Error>> {
    let operation: LogicOperation = operation.parse()?;
    if operation.uses_b() && b.is_none() {
        return Err(MathError::MissingOperand { name: "operand B".to_string() }.into());
    }

    if boolean {
        let a = parse_bool(a)?;
        let b = b.map(parse_bool).transpose()?.unwrap_or(false);
        let solution = evaluate_bools(operation, a, b);
        println!("{}", solution.expression());
    } else {
        let solution = evaluate_bits(operation, a, b.unwrap_or_default())?;
        println!("{}", solution.expression());
    }

    if table {
        println!();
        println!("A | B | Result");
        for row in truth_table(operation) {
            let b = row.b.map_or(" ", |b| if b { "1" } else { "0" });
            println!("{} | {b} | {}", u8::from(row.a), u8::from(row.result));
        }
    }
    Ok(())
}

#[allow(clippy::fn_params_excessive_bools)]
fn run_convert(input: &str,
               from: u32,
               binary: bool,
               octal: bool,
               decimal: bool,
               hex: bool,
               custom: Option<u32>)
               -> Result<(), Box<dyn Error>> {
    let mut targets: Vec<TargetBase> = [(binary, TargetBase::Binary),
                                        (octal, TargetBase::Octal),
                                        (decimal, TargetBase::Decimal),
                                        (hex, TargetBase::Hexadecimal)].into_iter()
                                                                       .filter_map(|(on, target)| on.then_some(target))
                                                                       .collect();
    targets.extend(custom.map(TargetBase::Custom));
    if targets.is_empty() {
        targets = vec![TargetBase::Binary, TargetBase::Octal, TargetBase::Decimal, TargetBase::Hexadecimal];
    }

    let conversion = convert(input, from, &targets)?;
    for (label, digits) in &conversion.results {
        println!("{label}: {digits}");
    }
    Ok(())
}

fn run_analyze(inputs: &[String], export: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let mut history = History::new();
    let mut failures = 0;
    for (input, outcome) in history.analyze_all(inputs.iter().map(String::as_str)) {
        match outcome {
            Ok(properties) => {
                println!("Results for: {}", properties.number);
                for (label, verdict) in properties.rows() {
                    println!("  {label}: {}", if verdict { "Yes" } else { "No" });
                }
            },
            Err(e) => {
                eprintln!("Could not analyze '{input}': {e}");
                failures += 1;
            },
        }
    }

    if let Some(path) = export {
        let mut contents = history.export_lines().join("\n");
        contents.push('\n');
        fs::write(path, contents).map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;
        println!("Analysis history exported successfully to {}", path.display());
    }

    if failures > 0 {
        return Err(format!("{failures} of {} inputs could not be analyzed", inputs.len()).into());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Complex { operation,
                           first,
                           second,
                           quiet, } => run_complex(&operation, &first, second.as_deref(), quiet),
        Command::Set { operation, a, b } => run_set(&operation, &a, &b),
        Command::Logic { operation,
                         a,
                         b,
                         boolean,
                         table, } => run_logic(&operation, &a, b.as_deref(), boolean, table),
        Command::Convert { input,
                           from,
                           binary,
                           octal,
                           decimal,
                           hex,
                           custom, } => run_convert(&input, from, binary, octal, decimal, hex, custom),
        Command::Analyze { inputs, export } => run_analyze(&inputs, export.as_ref()),
    }
}

/// Builds the log filter from `RUST_LOG`-style directives, logging warnings
/// and errors when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder().with_default_directive(LevelFilter::WARN.into())
                        .parse_lossy(directives)
}

fn main() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt().with_env_filter(log_filter(&directives)).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_follows_directives() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("trace").max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(log_filter("mathkit=debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn booleans_accept_common_spellings() {
        assert!(parse_bool(" Yes ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
