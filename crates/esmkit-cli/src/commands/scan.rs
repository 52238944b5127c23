use super::print_json;
use esmkit_core::module::has_module_ext;
use esmkit_core::{glob_filter, scan_files};
use esmkit_util::seq::{ends_with_any, filter};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;

/// Which files the scan command keeps.
#[derive(Debug, Default)]
pub struct ScanFilter {
    exts: Vec<String>,
    glob: Option<String>,
    modules: bool,
}

impl ScanFilter {
    #[must_use]
    pub fn from_args(exts: Vec<String>, glob: Option<String>, modules: bool) -> Self {
        Self {
            exts,
            glob,
            modules,
        }
    }

    fn accepts(&self, path: &str, suffixes: &[&str]) -> bool {
        if self.modules {
            return has_module_ext(path);
        }
        suffixes.is_empty() || ends_with_any(path, suffixes)
    }
}

#[derive(Serialize)]
struct ScanReport<'a> {
    root: String,
    count: usize,
    files: &'a [String],
}

/// Run the scan command.
///
/// Output is sorted so repeated runs print the same listing.
pub fn run(root: &Path, prefix: &str, scan_filter: ScanFilter, json: bool) -> Result<()> {
    let suffixes: Vec<&str> = scan_filter.exts.iter().map(String::as_str).collect();
    let mut files = scan_files(root, prefix, |p| scan_filter.accepts(p, &suffixes))
        .into_diagnostic()?;

    if let Some(pattern) = &scan_filter.glob {
        let matches = glob_filter(pattern).into_diagnostic()?;
        files = filter(&files, |f| matches(f.as_str()));
    }
    files.sort();
    tracing::debug!(count = files.len(), "scan finished");

    if json {
        return print_json(&ScanReport {
            root: root.display().to_string(),
            count: files.len(),
            files: &files,
        });
    }

    for file in &files {
        println!("{file}");
    }
    Ok(())
}
