pub mod classify;
pub mod compare;
pub mod pattern;
pub mod scan;
pub mod strip;
pub mod token;
pub mod version;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
