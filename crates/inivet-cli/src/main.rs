use anyhow::{Context, Result};
use inivet_engine::{ConfigModel, ParseVerdict, Severity, io};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <config-file>", args[0]);
        process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let verdict = io::validate_file(&path)
        .with_context(|| format!("could not open file '{}'", path.display()))?;

    println!("Validating {}...", path.display());
    println!();
    report(&verdict);

    if !verdict.passed() {
        process::exit(1);
    }
    Ok(())
}

fn report(verdict: &ParseVerdict) {
    for diagnostic in &verdict.diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("{diagnostic}"),
            Severity::Info | Severity::Warning => println!("{diagnostic}"),
        }
    }

    println!();
    if verdict.passed() {
        println!("Validation Passed");
    } else {
        println!("Validation Failed");
    }
    println!("Total lines: {}", verdict.total_lines);

    if verdict.error_count > 0 {
        println!("Errors found: {}", verdict.error_count);
    } else {
        print_model(&verdict.model);
    }
}

/// Pretty-print the parsed structure after a clean pass.
fn print_model(model: &ConfigModel) {
    if model.is_empty() {
        return;
    }
    println!();
    println!("Parsed configuration:");
    for section in model.sections() {
        println!("[{}]", section.name());
        for entry in section.entries() {
            println!("  {} = {}", entry.key, entry.value);
        }
    }
}
