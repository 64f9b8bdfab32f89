use std::io::{self, BufRead, Write};

use anyhow::{Context, Error, Result};
use nazvoslovi::{CompoundKind, NomenError, Report};
use serde_json::json;

const PROMPT: &str = "napiš sloučeninu: ";

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "chyba: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "  příčina: {cause}");
        source = cause.source();
    }
}

pub fn print_kinds() {
    let tags: Vec<_> = CompoundKind::ALL.iter().map(|k| k.type_tag()).collect();
    println!("známé sloučeniny: {}", tags.join(", "));
}

/// Asks for one line on stdin.
pub fn prompt() -> Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("nelze přečíst vstup")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prints the pretty report; returns whether the input was recognized.
pub fn print_report(report: Result<Option<Report>, NomenError>, entry: &str) -> bool {
    match report {
        Ok(Some(report)) => {
            println!("\n{report}");
            true
        }
        Ok(None) => {
            println!("sloučenina \"{entry}\" nebyla rozpoznána");
            false
        }
        Err(e) => {
            println!("{e}");
            false
        }
    }
}

/// Prints the JSON form: the report, `null` or `{"error": ...}`.
pub fn print_json(report: Result<Option<Report>, NomenError>) -> Result<bool> {
    let (value, recognized) = match report {
        Ok(Some(report)) => (serde_json::to_value(report)?, true),
        Ok(None) => (serde_json::Value::Null, false),
        Err(e) => (json!({ "error": e.to_string() }), false),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(recognized)
}
