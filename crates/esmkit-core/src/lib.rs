#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Specifier resolution and path normalization for an ES module server.
//!
//! Everything here is synchronous and stateless. Compiled patterns are
//! process-wide statics initialised on first use.

pub mod compare;
pub mod config;
pub mod error;
pub mod module;
pub mod pattern;
pub mod scan;
pub mod specifier;
pub mod token;
pub mod version;

pub use compare::{compare_versions, parse_version, semver_less_than};
pub use config::Config;
pub use error::Error;
pub use module::{strip_loc_suffix, strip_module_ext, ES_EXTS};
pub use pattern::{
    is_full_version, match_full_version_path, match_path_with_version, split_versioned_path,
    VersionedPath, VersionedPathMatch,
};
pub use scan::{glob_filter, scan_files, scan_modules};
pub use specifier::{
    classify, is_http_specifier, is_local_specifier, remove_http_prefix, SpecifierKind,
};
pub use token::{decode_token, decode_token_string, encode_token};
pub use version::VERSION;
