use super::print_json;
use esmkit_core::{classify, remove_http_prefix, SpecifierKind};
use miette::Result;
use serde::Serialize;

/// One classified specifier for JSON output.
#[derive(Serialize)]
struct Classified<'a> {
    specifier: &'a str,
    kind: SpecifierKind,
    /// Host and path of a remote specifier, without the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
}

/// Run the classify command.
pub fn run(specifiers: &[String], json: bool) -> Result<()> {
    let results: Vec<Classified<'_>> = specifiers
        .iter()
        .map(|s| {
            let kind = classify(s);
            let location = match kind {
                SpecifierKind::Remote => remove_http_prefix(s).ok(),
                SpecifierKind::Local | SpecifierKind::Bare => None,
            };
            Classified {
                specifier: s,
                kind,
                location,
            }
        })
        .collect();

    if json {
        return print_json(&results);
    }

    for r in &results {
        match r.location {
            Some(location) => println!("{}\t{}\t{location}", r.kind, r.specifier),
            None => println!("{}\t{}", r.kind, r.specifier),
        }
    }
    Ok(())
}
