//! End-to-end tests for the `vf` binary.
//!
//! Each test writes its own records and config into a temp directory and
//! drives the built binary, checking stdout, stderr and the exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const VENDORS: &str = r#"[
    {
        "vendor_id": "V001",
        "vendor_name": "CyberShield Asia",
        "industry": "cybersecurity",
        "certifications": "ISO27001 SOC2",
        "keywords": "SIEM WAF",
        "country": "Malaysia",
        "city": "Kuala Lumpur"
    },
    {
        "vendor_id": "V002",
        "vendor_name": "InfoSecure Solutions",
        "industry": "cybersecurity",
        "certifications": ["ISO27001", "PCI-DSS"],
        "country": "Singapore"
    },
    {
        "vendor_id": "V003",
        "vendor_name": "FinanceGuard Ltd",
        "industry": "banking",
        "certifications": "ISO27001",
        "country": "Malaysia"
    },
    {
        "vendor_id": "V004",
        "vendor_name": "RetailSecure",
        "industry": "retail",
        "certifications": "PCI-DSS",
        "country": "Thailand"
    }
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("vendors.json"), VENDORS).expect("failed to write records");
        Self { dir }
    }

    fn records(&self) -> PathBuf {
        self.dir.path().join("vendors.json")
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.config(), contents).expect("failed to write config");
    }

    fn vf(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_vf"))
            .args(args)
            .env("VF_CONFIG", self.config())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run vf")
    }

    fn filter_json(&self, expression: &str, extra: &[&str]) -> Output {
        let records = self.records();
        let mut args = vec!["--json", "filter", expression, "--records", path_str(&records)];
        args.extend_from_slice(extra);
        self.vf(&args)
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn stderr_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stderr).unwrap_or_else(|e| {
        panic!(
            "stderr is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_prints_parsed_expression() {
    let ws = Workspace::new();
    let output = ws.vf(&["check", "cybersecurity OR ISO27001 AND banking"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(cybersecurity OR (iso27001 AND banking))"));
}

#[test]
fn check_rejects_leading_operator() {
    let ws = Workspace::new();
    let output = ws.vf(&["--json", "check", "AND cybersecurity"]);

    assert_eq!(output.status.code(), Some(1));
    let error = stderr_json(&output);
    assert_eq!(error["error"]["code"], "EXPRESSION_ERROR");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("cannot be first or last"));
}

#[test]
fn check_json_reports_warnings() {
    let ws = Workspace::new();
    let output = ws.vf(&["--json", "check", "SOC2 AND NOT SOC2"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["criteria"], serde_json::json!(["soc2", "soc2"]));
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

// ============================================================================
// filter
// ============================================================================

#[test]
fn filter_grouped_expression() {
    let ws = Workspace::new();
    let output = ws.filter_json("(cybersecurity OR compliance) AND Malaysia", &[]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["matching_indices"], serde_json::json!([0]));
    assert_eq!(value["records"][0]["record"]["vendor_id"], "V001");
}

#[test]
fn filter_table_output() {
    let ws = Workspace::new();
    let records = ws.records();
    let output = ws.vf(&["filter", "NOT retail AND PCI-DSS", "--records", path_str(&records)]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("InfoSecure Solutions"));
    assert!(!stdout.contains("RetailSecure"));
    assert!(stdout.contains("1 of 4 records matched."));
}

#[test]
fn filter_warnings_go_to_stderr() {
    let ws = Workspace::new();
    let records = ws.records();
    let output = ws.vf(&["filter", "cybersecurity AND banking", "--records", path_str(&records)]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: Conflicting criteria"));
}

#[test]
fn filter_strict_fails_on_warnings() {
    let ws = Workspace::new();
    let output = ws.filter_json("cybersecurity AND banking", &["--strict"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr_json(&output)["error"]["code"], "FILTER_REJECTED");
}

#[test]
fn filter_auto_passes_plain_queries() {
    let ws = Workspace::new();
    let output = ws.filter_json("cybersecurity vendors", &["--auto"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["matching_indices"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(value["filtered"], false);
}

#[test]
fn filter_fuzzy_flag() {
    let ws = Workspace::new();

    let exact = stdout_json(&ws.filter_json("cybersecurty", &[]));
    assert_eq!(exact["matching_indices"], serde_json::json!([]));

    let fuzzy = stdout_json(&ws.filter_json("cybersecurty", &["--fuzzy"]));
    assert_eq!(fuzzy["matching_indices"], serde_json::json!([0, 1]));
}

#[test]
fn filter_missing_records_file() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("absent.json");
    let output = ws.vf(&["--json", "filter", "a", "--records", path_str(&missing)]);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["code"], "IO_ERROR");
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_exclusions_replace_builtin_table() {
    let ws = Workspace::new();
    ws.write_config(
        r#"
version = 1

[taxonomy]
exclusions = [["malaysia", "singapore"]]
"#,
    );

    let value = stdout_json(&ws.filter_json("Malaysia AND Singapore", &[]));
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);

    let value = stdout_json(&ws.filter_json("cybersecurity AND banking", &[]));
    assert_eq!(value["warnings"], serde_json::json!([]));
}

#[test]
fn config_fuzzy_enabled_in_file() {
    let ws = Workspace::new();
    ws.write_config("[matching]\nfuzzy = true\n");

    let value = stdout_json(&ws.filter_json("bankng", &[]));
    assert_eq!(value["matching_indices"], serde_json::json!([2]));
}

#[test]
fn config_init_then_path() {
    let ws = Workspace::new();

    let output = ws.vf(&["config", "init"]);
    assert!(output.status.success());
    assert!(ws.config().exists());

    let output = ws.vf(&["config", "path"]);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        path_str(&ws.config())
    );
}

#[test]
fn config_invalid_file_exits_with_config_code() {
    let ws = Workspace::new();
    ws.write_config("[matching\n");

    let output = ws.vf(&["--json", "check", "a"]);
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(stderr_json(&output)["error"]["code"], "CONFIG_ERROR");
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_bash() {
    let ws = Workspace::new();
    let output = ws.vf(&["completions", "bash"]);

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}
