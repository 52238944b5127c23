use super::print_json;
use esmkit_core::{decode_token_string, encode_token};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

#[derive(Serialize)]
struct TokenResult<'a> {
    text: &'a str,
    token: &'a str,
}

/// Run the encode command.
pub fn encode(text: &str, json: bool) -> Result<()> {
    let token = encode_token(text);
    if json {
        return print_json(&TokenResult {
            text,
            token: &token,
        });
    }
    println!("{token}");
    Ok(())
}

/// Run the decode command.
pub fn decode(token: &str, json: bool) -> Result<()> {
    let text = decode_token_string(token).into_diagnostic()?;
    if json {
        return print_json(&TokenResult { text: &text, token });
    }
    println!("{text}");
    Ok(())
}
