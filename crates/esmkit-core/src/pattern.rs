//! Version-aware path patterns.
//!
//! Three shapes are recognised, each with its own grammar:
//! - a full version string on its own (`1.2.3-beta.1+build`)
//! - a pinned versioned path segment (`react@18.2.0/`, `lib@abcdef0123`)
//! - a range-capable path segment (`react@^18.2.0`, `lib@~2.x&dev`)
//!
//! The pinned and range forms are unanchored searches; the full version form
//! must match the whole input.

use regex_lite::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static FULL_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+[\w.+-]*$").unwrap());

static FULL_VERSION_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w)@(v?\d+\.\d+\.\d+[\w.+-]*|[0-9a-f]{10})(/|$)").unwrap()
});

static PATH_WITH_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w@([~^]?v?[\d*xX][*~^\w.+-]*)(/|$|&)").unwrap());

/// A pinned version found inside a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionedPathMatch<'a> {
    /// Word character immediately before `@`.
    pub boundary: char,
    /// Semver-like token (optionally `v`-prefixed) or a 10-char commit hash.
    pub version: &'a str,
    /// `/`, or empty at end of input.
    pub separator: &'a str,
    /// Byte offset of the `@`.
    pub at: usize,
    /// Byte offset just past the separator.
    pub end: usize,
}

impl VersionedPathMatch<'_> {
    /// Returns true if the version token is a truncated commit hash.
    #[must_use]
    pub fn is_commit_hash(&self) -> bool {
        self.version.len() == 10 && !self.version.contains('.')
    }
}

/// A versioned package path split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionedPath<'a> {
    /// Package name, including `@scope/` when present.
    pub name: &'a str,
    pub version: &'a str,
    /// Everything after the separator; empty when the version ends the path.
    pub subpath: &'a str,
}

/// Returns true if `s` is exactly `MAJOR.MINOR.PATCH` plus an optional suffix.
#[must_use]
pub fn is_full_version(s: &str) -> bool {
    FULL_VERSION.is_match(s)
}

/// Find the first pinned `name@version` segment in `path`.
#[must_use]
pub fn match_full_version_path(path: &str) -> Option<VersionedPathMatch<'_>> {
    let caps = FULL_VERSION_PATH.captures(path)?;
    let boundary = caps.get(1)?;
    let version = caps.get(2)?;
    let separator = caps.get(3)?;

    Some(VersionedPathMatch {
        boundary: boundary.as_str().chars().next()?,
        version: version.as_str(),
        separator: separator.as_str(),
        at: boundary.end(),
        end: separator.end(),
    })
}

/// Find the first `name@range` segment in `path` and return the range token.
///
/// Accepts pinned semver tokens as well as ranges such as `^1.2.0`, `~2.x`
/// and `*`. The token must start with a digit, `x` or `*` (after an optional
/// `~`/`^` and `v`), so tags like `latest` are not ranges. The segment may
/// also be terminated by `&`, as in a query string.
#[must_use]
pub fn match_path_with_version(path: &str) -> Option<&str> {
    PATH_WITH_VERSION
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split a pinned package path into name, version and subpath.
///
/// ```
/// use esmkit_core::pattern::split_versioned_path;
///
/// let p = split_versioned_path("/v135/@types/react@18.2.0/index.d.ts").unwrap();
/// assert_eq!(p.name, "@types/react");
/// assert_eq!(p.version, "18.2.0");
/// assert_eq!(p.subpath, "index.d.ts");
/// ```
#[must_use]
pub fn split_versioned_path(path: &str) -> Option<VersionedPath<'_>> {
    let m = match_full_version_path(path)?;
    let head = &path[..m.at];

    let mut segments = head.rsplitn(3, '/');
    let last = segments.next()?;
    let name_len = match segments.next() {
        Some(scope) if scope.starts_with('@') && scope.len() > 1 => {
            scope.len() + 1 + last.len()
        }
        _ => last.len(),
    };

    Some(VersionedPath {
        name: &path[m.at - name_len..m.at],
        version: m.version,
        subpath: &path[m.end..],
    })
}
