use super::print_json;
use esmkit_core::{strip_loc_suffix, strip_module_ext};
use miette::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Stripped<'a> {
    input: &'a str,
    output: &'a str,
}

/// Run the strip-ext command.
pub fn run(name: &str, loc: bool, json: bool) -> Result<()> {
    let base = if loc { strip_loc_suffix(name) } else { name };
    let output = strip_module_ext(base);

    if json {
        return print_json(&Stripped {
            input: name,
            output,
        });
    }

    println!("{output}");
    Ok(())
}
