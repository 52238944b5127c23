//! Module file names and identifiers in generated code.

use esmkit_util::seq::{ends_with_any, includes};
use regex_lite::Regex;
use std::sync::LazyLock;

/// Module extensions, in the order they are tried when stripping.
pub const ES_EXTS: &[&str] = &[".mjs", ".js", ".jsx", ".mts", ".ts", ".tsx", ".cjs"];

static LOC_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\.js):\d+:\d+$").unwrap());
static JS_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_$][\w$]*$").unwrap());
static GLOBAL_IDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__[a-zA-Z]+\$").unwrap());
static VAR_EQUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var ([a-zA-Z]+)\s*=\s*([a-zA-Z]+)$").unwrap());

/// Remove the first matching module extension from `name`.
///
/// Extensions are tried in [`ES_EXTS`] order; unknown extensions are kept.
#[must_use]
pub fn strip_module_ext(name: &str) -> &str {
    ES_EXTS
        .iter()
        .find_map(|ext| name.strip_suffix(*ext))
        .unwrap_or(name)
}

/// Returns true if `path` ends with one of the module extensions.
#[must_use]
pub fn has_module_ext(path: &str) -> bool {
    ends_with_any(path, ES_EXTS)
}

/// Returns true if `ext` (with leading dot) is a module extension.
#[must_use]
pub fn is_module_ext(ext: &str) -> bool {
    includes(ES_EXTS, &ext)
}

/// Drop a trailing `:LINE:COLUMN` from a `.js` path taken from a stack trace.
#[must_use]
pub fn strip_loc_suffix(path: &str) -> &str {
    match LOC_PATH.captures(path).and_then(|caps| caps.get(1)) {
        Some(js) => &path[..js.end()],
        None => path,
    }
}

/// Returns true if `s` is a plain JavaScript identifier.
#[must_use]
pub fn is_js_ident(s: &str) -> bool {
    JS_IDENT.is_match(s)
}

/// Returns true if `code` mentions a generated `__name$` identifier.
#[must_use]
pub fn contains_global_ident(code: &str) -> bool {
    GLOBAL_IDENT.is_match(code)
}

/// Match a trailing `var NAME = OTHER` statement and return both names.
#[must_use]
pub fn match_var_equal(code: &str) -> Option<(&str, &str)> {
    let caps = VAR_EQUAL.captures(code)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
