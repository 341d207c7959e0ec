//! CLI wrapper tests: exit codes, config handling and the JSON report.

use std::fs;
use std::process::Command;

use nestspec::matchers::equals;
use nestspec::{Runner, cli, exit_codes};

fn failing_runner() -> Runner<'static> {
    let mut runner = Runner::new();
    runner.add_spec("Good", |c| {
        c.expect(1, equals(1));
    });
    runner.add_spec("Bad", |c| {
        c.expect(1, equals(2));
    });
    runner
}

fn missing_config(temp: &tempfile::TempDir) -> String {
    temp.path().join("none.toml").display().to_string()
}

#[test]
fn failures_map_to_failed_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = missing_config(&temp);
    let mut out = Vec::new();
    let code = cli::run(
        &failing_runner(),
        ["nestspec", "--format", "simple", "--config", config.as_str()],
        &mut out,
    );

    assert_eq!(code, exit_codes::FAILED);
    let output = String::from_utf8(out).expect("utf8");
    assert!(output.ends_with("\n2 specs, 1 failures, 0 ignored\n"));
}

#[test]
fn filter_selects_passing_roots() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = missing_config(&temp);
    let mut out = Vec::new();
    let code = cli::run(
        &failing_runner(),
        ["nestspec", "--filter", "Good", "--config", config.as_str()],
        &mut out,
    );

    assert_eq!(code, exit_codes::OK);
    let output = String::from_utf8(out).expect("utf8");
    assert!(!output.contains("Bad"));
}

#[test]
fn invalid_config_maps_to_invalid_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("nestspec.toml");
    fs::write(&config, "format = \"fancy\"\n").expect("write config");

    let mut out = Vec::new();
    let code = cli::run(
        &failing_runner(),
        ["nestspec", "--config", config.to_str().expect("utf8 path")],
        &mut out,
    );

    assert_eq!(code, exit_codes::INVALID);
    assert!(out.is_empty());
}

#[test]
fn unknown_flag_maps_to_invalid_exit_code() {
    let mut out = Vec::new();
    let code = cli::run(&failing_runner(), ["nestspec", "--nope"], &mut out);
    assert_eq!(code, exit_codes::INVALID);
}

#[test]
fn json_report_is_written_from_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    let report = temp.path().join("report.json");
    let config = temp.path().join("nestspec.toml");
    fs::write(
        &config,
        format!("format = \"simple\"\njson_report = {:?}\n", report.display().to_string()),
    )
    .expect("write config");

    let mut out = Vec::new();
    let code = cli::run(
        &failing_runner(),
        ["nestspec", "--config", config.to_str().expect("utf8 path")],
        &mut out,
    );

    assert_eq!(code, exit_codes::FAILED);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report")).expect("parse");
    assert_eq!(json["total"], 2);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["passes_run"], 2);
}

#[test]
fn demo_binary_passes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_nestspec-demo"))
        .current_dir(temp.path())
        .args(["--format", "simple"])
        .output()
        .expect("run demo");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("  - When an item is pushed\n"));
    assert!(stdout.contains("    - reports its capacity [IGNORED]\n"));
    assert!(stdout.ends_with("\n11 specs, 0 failures, 1 ignored\n"));
}
