//! Integration tests for `esmkit --json` output.

use std::fs;
use std::process::{Command, Output};

fn esmkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_esmkit"))
        .args(args)
        .output()
        .expect("Failed to run esmkit")
}

fn json_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_version_prints_name() {
    let output = esmkit(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("esmkit "));
}

#[test]
fn test_classify_json() {
    let output = esmkit(&["--json", "classify", "https://esm.sh/react", "./App.tsx", "react"]);
    assert!(output.status.success());

    let json = json_stdout(&output);
    let items = json.as_array().expect("array of results");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["kind"], "remote");
    assert_eq!(items[0]["location"], "esm.sh/react");
    assert_eq!(items[1]["kind"], "local");
    assert_eq!(items[2]["kind"], "bare");
    assert!(items[2].get("location").is_none());
}

#[test]
fn test_match_json() {
    let output = esmkit(&["--json", "match", "react@18.2.0/jsx-runtime"]);
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["full_version"], false);
    assert_eq!(json["pinned"]["boundary"], "t");
    assert_eq!(json["pinned"]["version"], "18.2.0");
    assert_eq!(json["pinned"]["separator"], "/");
    assert_eq!(json["range"], "18.2.0");
    assert_eq!(json["package"]["name"], "react");
    assert_eq!(json["package"]["subpath"], "jsx-runtime");
}

#[test]
fn test_match_range_only() {
    let output = esmkit(&["--json", "match", "lib@^1.2.0"]);
    let json = json_stdout(&output);
    assert!(json["pinned"].is_null());
    assert_eq!(json["range"], "^1.2.0");
}

#[test]
fn test_compare_json() {
    let output = esmkit(&["--json", "compare", "1.2.3", "1.10.0"]);
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["ordering"], "less");
    assert_eq!(json["less_than"], true);
}

#[test]
fn test_compare_invalid_fails() {
    let output = esmkit(&["compare", "^1.2.0", "1.2.0"]);
    assert!(!output.status.success());
}

#[test]
fn test_encode_decode() {
    let output = esmkit(&["encode", "a?b>c"]);
    assert!(output.status.success());
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert!(!token.contains(['+', '/', '=']));

    let output = esmkit(&["decode", &token]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "a?b>c");
}

#[test]
fn test_decode_invalid_fails() {
    let output = esmkit(&["decode", "not base64!"]);
    assert!(!output.status.success());
}

#[test]
fn test_strip_ext() {
    let output = esmkit(&["strip-ext", "--loc", "/react.js:10:2"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/react");
}

#[test]
fn test_scan_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/nested")).unwrap();
    fs::create_dir_all(dir.path().join("node_modules/dep")).unwrap();
    fs::write(dir.path().join("src/a.ts"), "").unwrap();
    fs::write(dir.path().join("src/nested/b.ts"), "").unwrap();
    fs::write(dir.path().join("src/c.css"), "").unwrap();
    fs::write(dir.path().join("node_modules/dep/index.js"), "").unwrap();

    let root = dir.path().to_str().unwrap();
    let output = esmkit(&["--json", "scan", root, "--ext", ".ts"]);
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(
        json["files"],
        serde_json::json!(["src/a.ts", "src/nested/b.ts"])
    );
}

#[test]
fn test_scan_glob_relative_to_cwd() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("web/src")).unwrap();
    fs::write(dir.path().join("web/src/app.tsx"), "").unwrap();
    fs::write(dir.path().join("web/index.html"), "").unwrap();

    let cwd = dir.path().to_str().unwrap();
    let output = esmkit(&["--cwd", cwd, "scan", "web", "--glob", "src/*"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "src/app.tsx");
}

#[test]
fn test_scan_missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let output = esmkit(&["scan", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_verbose_json_logs_stay_off_stdout() {
    let output = esmkit(&["-vv", "--json", "compare", "1.0.0", "1.0.1"]);
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["ordering"], "less");
}
