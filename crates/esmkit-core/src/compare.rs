//! Semantic version ordering for resolved (exact) versions.
//!
//! Inputs must already be exact versions such as `18.2.0` or `v1.0.0-rc.1`.
//! Ranges and partial versions are rejected rather than coerced.

use crate::error::Error;
use semver::Version;
use std::cmp::Ordering;
use tracing::debug;

/// Parse an exact version, accepting a single leading `v`.
///
/// # Errors
/// Returns [`Error::InvalidVersion`] if the input is not `MAJOR.MINOR.PATCH`
/// with optional pre-release and build metadata.
pub fn parse_version(input: &str) -> Result<Version, Error> {
    let trimmed = input.strip_prefix('v').unwrap_or(input);
    Version::parse(trimmed).map_err(|source| {
        debug!(input, %source, "rejected version");
        Error::InvalidVersion {
            input: input.to_string(),
            source,
        }
    })
}

/// Compare two exact versions by semver precedence.
///
/// Build metadata is ignored, so `1.0.0+a` and `1.0.0+b` compare equal.
///
/// # Errors
/// Returns [`Error::InvalidVersion`] if either side fails to parse.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, Error> {
    let a = parse_version(a)?;
    let b = parse_version(b)?;
    Ok(a.cmp_precedence(&b))
}

/// Returns true if `a` has lower precedence than `b`.
///
/// # Panics
/// Panics if either input is not an exact version. Callers are expected to
/// have validated both sides (see [`crate::pattern::is_full_version`]);
/// use [`compare_versions`] where that is not guaranteed.
#[must_use]
pub fn semver_less_than(a: &str, b: &str) -> bool {
    match compare_versions(a, b) {
        Ok(ordering) => ordering == Ordering::Less,
        Err(e) => panic!("semver_less_than: {e}"),
    }
}
