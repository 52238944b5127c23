//! Specifier classification.
//!
//! A specifier is whatever appears in an import statement or request path:
//! - `https://esm.sh/react` (remote)
//! - `./App.tsx`, `/src/main.ts`, `file:///tmp/x.js`, `..` (local)
//! - `react@18.2.0/jsx-runtime` (bare)

use crate::error::Error;
use serde::Serialize;

/// Classification of an import specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierKind {
    /// `http://` or `https://` URL.
    Remote,
    /// Filesystem path or `file://` URL.
    Local,
    /// Package-style reference resolved through a registry.
    Bare,
}

impl SpecifierKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Bare => "bare",
        }
    }
}

impl std::fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the specifier is a remote URL.
#[must_use]
pub fn is_http_specifier(specifier: &str) -> bool {
    specifier.starts_with("https://") || specifier.starts_with("http://")
}

/// Returns true if the specifier is a local path.
#[must_use]
pub fn is_local_specifier(specifier: &str) -> bool {
    specifier.starts_with("file://")
        || specifier.starts_with('/')
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == ".."
}

/// Classify a specifier. Anything that is neither remote nor local is bare.
#[must_use]
pub fn classify(specifier: &str) -> SpecifierKind {
    if is_http_specifier(specifier) {
        SpecifierKind::Remote
    } else if is_local_specifier(specifier) {
        SpecifierKind::Local
    } else {
        SpecifierKind::Bare
    }
}

/// Strip the `http://` or `https://` scheme from a URL.
///
/// # Errors
/// Returns [`Error::NotHttpUrl`] if the input has neither prefix.
pub fn remove_http_prefix(s: &str) -> Result<&str, Error> {
    s.strip_prefix("http://")
        .or_else(|| s.strip_prefix("https://"))
        .ok_or_else(|| Error::NotHttpUrl {
            input: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote() {
        for s in ["http://x", "https://esm.sh/react@18.2.0", "https://"] {
            assert!(is_http_specifier(s), "{s}");
            assert!(!is_local_specifier(s), "{s}");
            assert_eq!(classify(s), SpecifierKind::Remote);
        }
    }

    #[test]
    fn test_remote_is_case_sensitive() {
        assert!(!is_http_specifier("HTTPS://esm.sh"));
        assert_eq!(classify("HTTPS://esm.sh"), SpecifierKind::Bare);
    }

    #[test]
    fn test_local() {
        for s in [".", "..", "/x", "./x", "../x", "file://x"] {
            assert!(is_local_specifier(s), "{s}");
            assert_eq!(classify(s), SpecifierKind::Local);
        }
    }

    #[test]
    fn test_dot_prefixed_names_are_bare() {
        assert!(!is_local_specifier(".hidden"));
        assert!(!is_local_specifier("..."));
        assert_eq!(classify(".hidden"), SpecifierKind::Bare);
    }

    #[test]
    fn test_bare() {
        for s in ["react", "react@18.2.0/jsx-runtime", "@types/node", "ftp://x"] {
            assert_eq!(classify(s), SpecifierKind::Bare, "{s}");
        }
    }

    #[test]
    fn test_empty_is_neither() {
        assert!(!is_http_specifier(""));
        assert!(!is_local_specifier(""));
        assert_eq!(classify(""), SpecifierKind::Bare);
    }

    #[test]
    fn test_remove_http_prefix() {
        assert_eq!(
            remove_http_prefix("https://example.com/x").unwrap(),
            "example.com/x"
        );
        assert_eq!(remove_http_prefix("http://a.b").unwrap(), "a.b");
    }

    #[test]
    fn test_remove_http_prefix_rejects_other_schemes() {
        let err = remove_http_prefix("ftp://x").unwrap_err();
        assert!(matches!(err, Error::NotHttpUrl { ref input } if input == "ftp://x"));
        assert!(err.to_string().contains("ftp://x"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SpecifierKind::Bare.to_string(), "bare");
        assert_eq!(
            serde_json::to_string(&SpecifierKind::Remote).unwrap(),
            "\"remote\""
        );
    }
}
