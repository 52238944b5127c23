use super::print_json;
use esmkit_core::{
    is_full_version, match_full_version_path, match_path_with_version, split_versioned_path,
    VersionedPath, VersionedPathMatch,
};
use miette::Result;
use serde::Serialize;

#[derive(Serialize)]
struct PatternReport<'a> {
    input: &'a str,
    full_version: bool,
    pinned: Option<VersionedPathMatch<'a>>,
    range: Option<&'a str>,
    package: Option<VersionedPath<'a>>,
}

/// Run the match command.
pub fn run(input: &str, json: bool) -> Result<()> {
    let report = PatternReport {
        input,
        full_version: is_full_version(input),
        pinned: match_full_version_path(input),
        range: match_path_with_version(input),
        package: split_versioned_path(input),
    };
    tracing::debug!(
        pinned = report.pinned.is_some(),
        range = report.range.is_some(),
        "matched version patterns"
    );

    if json {
        return print_json(&report);
    }

    println!("full version: {}", yes_no(report.full_version));
    match &report.pinned {
        Some(m) => {
            let separator = if m.separator.is_empty() { "end" } else { m.separator };
            let kind = if m.is_commit_hash() { "commit" } else { "semver" };
            println!(
                "pinned:       {} ({kind}, boundary '{}', separator {separator})",
                m.version, m.boundary
            );
        }
        None => println!("pinned:       no"),
    }
    println!("range:        {}", report.range.unwrap_or("no"));
    if let Some(p) = &report.package {
        println!("package:      {}", p.name);
        if !p.subpath.is_empty() {
            println!("subpath:      {}", p.subpath);
        }
    }
    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
