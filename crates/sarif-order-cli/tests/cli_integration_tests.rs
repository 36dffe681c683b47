//! CLI integration tests
//!
//! Run the built binary against logs written to a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const LOG_A: &str = r#"{"version":"2.1.0","runs":[{"tool":{"driver":{"name":"ESLint"}},
"results":[
  {"ruleId":"b","message":{"text":"m"},"properties":{"x":1,"y":2}},
  {"ruleId":"a","message":{"text":"m"}}
]}]}"#;

/// LOG_A with results reordered and property keys reversed
const LOG_A_REORDERED: &str = r#"{"runs":[{"results":[
  {"message":{"text":"m"},"ruleId":"a"},
  {"properties":{"y":2,"x":1},"message":{"text":"m"},"ruleId":"b"}
],"tool":{"driver":{"name":"ESLint"}}}],"version":"2.1.0"}"#;

/// LOG_A with only object keys reordered
const LOG_A_KEYS_SHUFFLED: &str = r#"{"runs":[{"results":[
  {"properties":{"y":2,"x":1},"message":{"text":"m"},"ruleId":"b"},
  {"message":{"text":"m"},"ruleId":"a"}
],"tool":{"driver":{"name":"ESLint"}}}],"version":"2.1.0"}"#;

const LOG_LOWER: &str =
    r#"{"version":"2.1.0","runs":[{"tool":{"driver":{"name":"Eslint"}}}]}"#;
const LOG_UPPER: &str =
    r#"{"version":"2.1.0","runs":[{"tool":{"driver":{"name":"ESLint"}}}]}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_cli(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_sarif-order-cli");
    Command::new(cli_bin)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_compare_prints_ordering() {
    let temp_dir = TempDir::new().unwrap();
    let upper = write(temp_dir.path(), "upper.sarif", LOG_UPPER);
    let lower = write(temp_dir.path(), "lower.sarif", LOG_LOWER);

    let output = run_cli(&["compare", path_arg(&upper), path_arg(&lower)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "less");

    let output = run_cli(&["compare", path_arg(&lower), path_arg(&upper)]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "greater");

    let output = run_cli(&["compare", path_arg(&upper), path_arg(&upper)]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "equal");
}

#[test]
fn test_compare_check_fails_on_difference() {
    let temp_dir = TempDir::new().unwrap();
    let upper = write(temp_dir.path(), "upper.sarif", LOG_UPPER);
    let lower = write(temp_dir.path(), "lower.sarif", LOG_LOWER);

    let output = run_cli(&["compare", "--check", path_arg(&upper), path_arg(&lower)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "Stderr: {}", stderr);
    assert!(stderr.contains("runs[0] differs"), "Stderr: {}", stderr);
}

#[test]
fn test_compare_reports_undecodable_input() {
    let temp_dir = TempDir::new().unwrap();
    let broken = write(temp_dir.path(), "broken.sarif", "{ nope");
    let upper = write(temp_dir.path(), "upper.sarif", LOG_UPPER);

    let output = run_cli(&["compare", path_arg(&broken), path_arg(&upper)]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.sarif"), "Stderr: {}", stderr);
}

#[test]
fn test_canonicalize_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.sarif", LOG_A);
    let b = write(temp_dir.path(), "b.sarif", LOG_A_REORDERED);
    let out_a = temp_dir.path().join("a.canonical.sarif");
    let out_b = temp_dir.path().join("b.canonical.sarif");

    let output = run_cli(&["canonicalize", path_arg(&a), "--output", path_arg(&out_a)]);
    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let output = run_cli(&["canonicalize", path_arg(&b), "-o", path_arg(&out_b)]);
    assert!(output.status.success());

    let canonical_a = fs::read_to_string(&out_a).unwrap();
    assert_eq!(canonical_a, fs::read_to_string(&out_b).unwrap());

    let value: serde_json::Value = serde_json::from_str(&canonical_a).unwrap();
    assert_eq!(value["runs"][0]["results"][0]["ruleId"], "a");
    assert_eq!(value["runs"][0]["results"][1]["ruleId"], "b");
}

#[test]
fn test_canonicalize_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.sarif", LOG_A);

    let output = run_cli(&["canonicalize", path_arg(&a)]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], "2.1.0");
}

#[test]
fn test_digest_matches_for_reordered_logs() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.sarif", LOG_A);
    let b = write(temp_dir.path(), "b.sarif", LOG_A_REORDERED);
    let other = write(temp_dir.path(), "other.sarif", LOG_UPPER);

    let output = run_cli(&["digest", path_arg(&a), path_arg(&b), path_arg(&other)]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let digests: Vec<&str> = stdout
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(digests.len(), 3);
    assert_eq!(digests[0].len(), 64);
    assert!(digests[0].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(digests[0], digests[1]);
    assert_ne!(digests[0], digests[2]);
    assert!(stdout.lines().next().unwrap().ends_with("a.sarif"));
}

#[test]
fn test_digest_requires_input() {
    let output = run_cli(&["digest"]);
    assert!(!output.status.success());
}

fn setup_suite(temp_dir: &TempDir, actual_b: &str) -> (PathBuf, PathBuf, PathBuf) {
    let actual = temp_dir.path().join("actual");
    let expected = temp_dir.path().join("expected");
    let output = temp_dir.path().join("out");
    fs::create_dir_all(&actual).unwrap();
    fs::create_dir_all(&expected).unwrap();

    write(&actual, "a.sarif", LOG_A_KEYS_SHUFFLED);
    write(&expected, "a.sarif", LOG_A);
    write(&actual, "b.sarif", actual_b);
    write(&expected, "b.sarif", LOG_UPPER);

    (actual, expected, output)
}

#[test]
fn test_conform_passes_for_equivalent_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let (actual, expected, out) = setup_suite(&temp_dir, LOG_UPPER);

    let output = run_cli(&[
        "conform",
        "--suite",
        "Eslint",
        "--actual",
        path_arg(&actual),
        "--expected",
        path_arg(&expected),
        "--output",
        path_arg(&out),
    ]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Eslint: 2 cases, 0 mismatched"), "Stdout: {}", stdout);
    assert!(out.join("Eslint").join("ActualOutputs").join("a.sarif").exists());
    assert!(!out.join("DiffEslint.sh").exists());
}

#[test]
fn test_conform_fails_and_writes_scripts() {
    let temp_dir = TempDir::new().unwrap();
    let (actual, expected, out) = setup_suite(&temp_dir, LOG_LOWER);

    let output = run_cli(&[
        "conform",
        "--suite",
        "Eslint",
        "--actual",
        path_arg(&actual),
        "--expected",
        path_arg(&expected),
        "--output",
        path_arg(&out),
        "--json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["case_count"], 2);
    assert_eq!(report["mismatches"][0]["name"], "b.sarif");
    assert_eq!(report["mismatches"][0]["reason"]["kind"], "not_equivalent");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_SEMANTIC_MISMATCH"), "Stderr: {}", stderr);
    assert!(out.join("DiffEslint.sh").exists());
    assert!(out.join("RebaselineEslint.sh").exists());
}
