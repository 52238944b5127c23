//! Source tree scanning for module indexing.

use crate::error::Error;
use crate::module::has_module_ext;
use esmkit_util::fs::find_files;
use glob::Pattern;
use std::path::Path;
use tracing::debug;

/// Collect files under `root` accepted by `predicate`.
///
/// See [`esmkit_util::fs::find_files`] for traversal rules. Output order is
/// directory-read order.
///
/// # Errors
/// Returns [`Error::Scan`] on the first filesystem error.
pub fn scan_files<F>(root: &Path, prefix: &str, predicate: F) -> Result<Vec<String>, Error>
where
    F: FnMut(&str) -> bool,
{
    let files = find_files(root, prefix, predicate).map_err(|source| Error::Scan {
        root: root.to_path_buf(),
        source,
    })?;
    debug!(root = %root.display(), count = files.len(), "scanned source tree");
    Ok(files)
}

/// Collect every module file (`.js`, `.ts`, `.tsx`, ...) under `root`.
///
/// # Errors
/// Returns [`Error::Scan`] on the first filesystem error.
pub fn scan_modules(root: &Path) -> Result<Vec<String>, Error> {
    scan_files(root, "", has_module_ext)
}

/// Build a predicate from a glob pattern.
///
/// A path is accepted when the pattern text contains it verbatim (so a
/// comma-separated list of exact paths works) or when the glob matches it.
///
/// # Errors
/// Returns [`Error::InvalidGlob`] if the pattern does not compile.
pub fn glob_filter(pattern: &str) -> Result<impl Fn(&str) -> bool, Error> {
    let glob = Pattern::new(pattern).map_err(|source| Error::InvalidGlob {
        pattern: pattern.to_string(),
        source,
    })?;
    let literal = pattern.to_string();
    Ok(move |path: &str| literal.contains(path) || glob.matches(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {}").unwrap();
    }

    #[test]
    fn test_scan_modules() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "src/main.tsx");
        touch(dir.path(), "src/util.mjs");
        touch(dir.path(), "src/style.css");
        touch(dir.path(), "node_modules/react/index.js");

        let mut files = scan_modules(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec!["src/main.tsx", "src/util.mjs"]);
    }

    #[test]
    fn test_scan_files_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = scan_files(&missing, "", |_| true).unwrap_err();
        assert!(matches!(err, Error::Scan { ref root, .. } if *root == missing));
    }

    #[test]
    fn test_glob_filter() {
        let filter = glob_filter("src/**/*.ts").unwrap();
        assert!(filter("src/a.ts"));
        assert!(filter("src/nested/b.ts"));
        assert!(!filter("lib/a.ts"));
        assert!(!filter("src/a.tsx"));
    }

    #[test]
    fn test_glob_filter_literal_list() {
        let filter = glob_filter("src/a.ts,src/b.ts").unwrap();
        assert!(filter("src/a.ts"));
        assert!(filter("src/b.ts"));
        assert!(!filter("src/c.ts"));
    }

    #[test]
    fn test_glob_filter_invalid() {
        assert!(matches!(
            glob_filter("src/***"),
            Err(Error::InvalidGlob { .. })
        ));
    }

    #[test]
    fn test_scan_with_glob() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/a.ts");
        touch(dir.path(), "src/b.js");
        touch(dir.path(), "test/a.ts");

        let files = scan_files(dir.path(), "", glob_filter("src/*.ts").unwrap()).unwrap();
        assert_eq!(files, vec!["src/a.ts"]);
    }
}
