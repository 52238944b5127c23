use std::path::PathBuf;
use thiserror::Error;

/// Core error type for esmkit operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to scan {root}: {source}")]
    Scan {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a http/https url: {input}")]
    NotHttpUrl { input: String },

    #[error("Invalid url-safe base64 token '{input}': {source}")]
    Decode {
        input: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Decoded token '{input}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        input: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid semantic version '{input}': {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
