//! URL-safe base64 without padding.
//!
//! Tokens produced here can be embedded in a URL path segment as-is: the
//! alphabet uses `-` and `_` and trailing `=` is dropped. Decoding restores
//! the padding before decoding. The decoder ignores non-zero trailing bits in
//! the last symbol, so any token written in the alphabet with a valid length
//! decodes.

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::{alphabet, DecodeError, Engine as _};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encode bytes as unpadded URL-safe base64.
#[must_use]
pub fn btoa_url(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode an unpadded (or padded) URL-safe base64 token.
///
/// # Errors
/// Returns an error if the token contains characters outside the URL-safe
/// alphabet or has an impossible length.
pub fn atob_url(token: &str) -> Result<Vec<u8>, DecodeError> {
    let rem = token.len() % 4;
    if rem == 0 {
        return URL_SAFE_LENIENT.decode(token);
    }

    let mut padded = String::with_capacity(token.len() + 4 - rem);
    padded.push_str(token);
    padded.extend(std::iter::repeat('=').take(4 - rem));
    URL_SAFE_LENIENT.decode(padded)
}
