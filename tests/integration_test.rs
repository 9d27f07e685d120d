/// Integration tests for the rigcheck CLI over an isolated data directory
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build a rigcheck command pinned to an isolated data directory
fn rigcheck(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rigcheck").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Test catalog listing
#[test]
fn test_tests_listing() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagnostic Test Catalog"))
        .stdout(predicate::str::contains("dead-pixel"))
        .stdout(predicate::str::contains("Dead Pixel Test"))
        .stdout(predicate::str::contains("reaction-time"));
}

/// Test recording a verdict persists to the results file
#[test]
fn test_mark_records_verdict() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("dead-pixel")
        .arg("pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"))
        .stdout(predicate::str::contains("Dead Pixel Test"));

    // Verify the results file exists and holds the verdict
    let results_file = data_dir.path().join("results.json");
    assert!(results_file.exists(), "Results file should be created");

    let content = fs::read_to_string(&results_file).unwrap();
    assert!(content.contains("dead-pixel"));
    assert!(content.contains("\"pass\""));
}

/// Test unknown ids are rejected without a name
#[test]
fn test_mark_unknown_id_fails() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("hdr-clipping")
        .arg("pass")
        .assert()
        .failure()
        .stderr(predicate::str::contains("hdr-clipping"))
        .stderr(predicate::str::contains("--name"));
}

/// Test unknown ids are accepted with an explicit name
#[test]
fn test_mark_unknown_id_with_name() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("hdr-clipping")
        .arg("pass")
        .arg("--name")
        .arg("HDR Clipping")
        .assert()
        .success()
        .stdout(predicate::str::contains("HDR Clipping"));
}

/// Test the full grade-then-regrade scoring flow
#[test]
fn test_scoring_end_to_end() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("dead-pixel")
        .arg("pass")
        .assert()
        .success();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("uniformity")
        .arg("fail")
        .assert()
        .success();

    rigcheck(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 50/100"))
        .stdout(predicate::str::contains("2 graded"));

    // Regrading replaces the old verdict rather than stacking a new one
    rigcheck(&data_dir)
        .arg("mark")
        .arg("dead-pixel")
        .arg("fail")
        .assert()
        .success();

    rigcheck(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/100"))
        .stdout(predicate::str::contains("2 graded"));
}

/// Test replaced verdicts move to the end of the ledger
#[test]
fn test_regrade_moves_to_end() {
    let data_dir = TempDir::new().unwrap();

    for (id, status) in [("keyboard", "pass"), ("gamma", "pass"), ("keyboard", "fail")] {
        rigcheck(&data_dir)
            .arg("mark")
            .arg(id)
            .arg(status)
            .assert()
            .success();
    }

    let report_path = data_dir.path().join("report.json");
    rigcheck(&data_dir)
        .arg("report")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["test_id"], "gamma");
    assert_eq!(results[1]["test_id"], "keyboard");
    assert_eq!(results[1]["status"], "fail");
}

/// Test report generation (JSON)
#[test]
fn test_report_generation_json() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("dead-pixel")
        .arg("pass")
        .assert()
        .success();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("uniformity")
        .arg("fail")
        .assert()
        .success();

    let report_path = data_dir.path().join("report.json");
    rigcheck(&data_dir)
        .arg("report")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    // Verify JSON is valid and carries the summary
    let content = fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value =
        serde_json::from_str(&content).expect("Report should be valid JSON");

    assert_eq!(report["summary"]["score"], 50);
    assert_eq!(report["summary"]["total"], 2);
}

/// Test report generation (markdown)
#[test]
fn test_report_generation_markdown() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("webcam")
        .arg("skipped")
        .arg("--notes")
        .arg("no camera attached")
        .assert()
        .success();

    let report_path = data_dir.path().join("report.md");
    rigcheck(&data_dir)
        .arg("report")
        .arg("--format")
        .arg("markdown")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written"));

    // Verify report file exists and has content
    assert!(report_path.exists(), "Report file should be created");
    let content = fs::read_to_string(&report_path).unwrap();
    assert!(content.contains("# Hardware Diagnostic Report"));
    assert!(content.contains("## Summary"));
    assert!(content.contains("no camera attached"));
}

/// Test text report renders to stdout by default
#[test]
fn test_report_text_stdout() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("RIG DIAGNOSTICS REPORT"))
        .stdout(predicate::str::contains("SCORE: 0/100"));
}

/// Test notes surface in the status listing
#[test]
fn test_notes_roundtrip() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("uniformity")
        .arg("fail")
        .arg("--notes")
        .arg("backlight bleed lower-left")
        .assert()
        .success();

    rigcheck(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("note: backlight bleed lower-left"));
}

/// Test clearing the ledger is idempotent
#[test]
fn test_clear_idempotent() {
    let data_dir = TempDir::new().unwrap();

    rigcheck(&data_dir)
        .arg("mark")
        .arg("speaker")
        .arg("pass")
        .assert()
        .success();

    rigcheck(&data_dir)
        .arg("clear")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger cleared"));

    rigcheck(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No verdicts recorded yet"));

    // A second clear succeeds against the already-empty ledger
    rigcheck(&data_dir)
        .arg("clear")
        .arg("--yes")
        .assert()
        .success();

    let content = fs::read_to_string(data_dir.path().join("results.json")).unwrap();
    assert_eq!(content, "[]");
}

/// Test corrupt results are discarded instead of crashing
#[test]
fn test_corrupt_storage_recovers() {
    let data_dir = TempDir::new().unwrap();
    fs::write(data_dir.path().join("results.json"), "{not valid json").unwrap();

    rigcheck(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No verdicts recorded yet"));

    // Recording over the corrupt slot heals it
    rigcheck(&data_dir)
        .arg("mark")
        .arg("gamma")
        .arg("pass")
        .assert()
        .success();

    let content = fs::read_to_string(data_dir.path().join("results.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}
