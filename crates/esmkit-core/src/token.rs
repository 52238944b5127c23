//! Opaque tokens embedded in URL path segments.

use crate::error::Error;
use esmkit_util::codec::{atob_url, btoa_url};

/// Encode a payload as an unpadded url-safe token.
#[must_use]
pub fn encode_token(data: impl AsRef<[u8]>) -> String {
    btoa_url(data)
}

/// Decode a token produced by [`encode_token`].
///
/// # Errors
/// Returns [`Error::Decode`] if the token is not url-safe base64.
pub fn decode_token(token: &str) -> Result<Vec<u8>, Error> {
    atob_url(token).map_err(|source| Error::Decode {
        input: token.to_string(),
        source,
    })
}

/// Decode a token whose payload is UTF-8 text.
///
/// # Errors
/// Returns [`Error::Decode`] for malformed tokens and [`Error::InvalidUtf8`]
/// if the payload is not text.
pub fn decode_token_string(token: &str) -> Result<String, Error> {
    let bytes = decode_token(token)?;
    String::from_utf8(bytes).map_err(|source| Error::InvalidUtf8 {
        input: token.to_string(),
        source,
    })
}
