use super::print_json;
use esmkit_core::compare_versions;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Serialize)]
struct CompareResult<'a> {
    a: &'a str,
    b: &'a str,
    ordering: &'static str,
    less_than: bool,
}

/// Run the compare command.
///
/// Invalid versions are reported as an error instead of aborting the process.
pub fn run(a: &str, b: &str, json: bool) -> Result<()> {
    let ordering = compare_versions(a, b).into_diagnostic()?;
    let (symbol, name) = match ordering {
        Ordering::Less => ("<", "less"),
        Ordering::Equal => ("=", "equal"),
        Ordering::Greater => (">", "greater"),
    };

    if json {
        return print_json(&CompareResult {
            a,
            b,
            ordering: name,
            less_than: ordering == Ordering::Less,
        });
    }

    println!("{a} {symbol} {b}");
    Ok(())
}
