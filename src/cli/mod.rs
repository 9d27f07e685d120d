//! CLI command logic - extracted for testability
//!
//! This module contains pure functions and testable logic extracted from main.rs.
//! Display functions remain in main.rs while business logic lives here.

use crate::catalog;
use crate::config::RigcheckConfig;
use crate::ledger::{FileStorage, ResultLedger, TestResult, TestStatus};
use crate::report::LedgerReport;
use std::path::PathBuf;

// ============================================================================
// Storage Resolution
// ============================================================================

/// Pick the results data directory: flag beats config beats platform default
pub fn resolve_data_dir(flag: Option<PathBuf>, config: &RigcheckConfig) -> Option<PathBuf> {
    flag.or_else(|| config.storage.data_dir.clone())
}

/// Open the ledger over file storage at the resolved location
pub fn open_ledger(data_dir: Option<PathBuf>, config: &RigcheckConfig) -> ResultLedger {
    let storage = match resolve_data_dir(data_dir, config) {
        Some(dir) => FileStorage::with_dir(dir),
        None => FileStorage::new(),
    };
    ResultLedger::initialize(Box::new(storage))
}

// ============================================================================
// Verdict Recording
// ============================================================================

/// Build the result a `mark` invocation records
///
/// Known catalog ids take their catalog label. Unknown ids are legal but
/// need an explicit `--name`, since the ledger denormalizes the label.
pub fn build_verdict(
    test_id: &str,
    status: TestStatus,
    name: Option<String>,
    notes: Option<String>,
) -> anyhow::Result<TestResult> {
    let test_name = match (name, catalog::find_test(test_id)) {
        (Some(name), _) => name,
        (None, Some(test)) => test.name.to_string(),
        (None, None) => anyhow::bail!(
            "Unknown test id '{}'. Run 'rigcheck tests' to list the catalog, \
             or pass --name to record a test outside it.",
            test_id
        ),
    };

    let mut result = TestResult::new(test_id, test_name, status);
    if let Some(notes) = notes {
        result = result.with_notes(notes);
    }
    Ok(result)
}

// ============================================================================
// Badge Line
// ============================================================================

/// One-line summary for the header badge surfaces
pub fn badge_line(ledger: &ResultLedger) -> String {
    if ledger.is_empty() {
        return "No tests graded yet".to_string();
    }

    let summary = LedgerReport::from_ledger(ledger).summary;
    format!(
        "{} graded | {} pass | {} fail | {} skipped | score {}/100",
        summary.total, summary.passed, summary.failed, summary.skipped, summary.score
    )
}

// ============================================================================
// Verdict Lookup
// ============================================================================

/// Find the recorded verdict for a test id
///
/// The ledger exposes only the full snapshot; listings join against it
/// by scanning, which is fine at catalog cardinality.
pub fn verdict_for<'a>(results: &'a [TestResult], test_id: &str) -> Option<&'a TestResult> {
    results.iter().find(|r| r.test_id == test_id)
}

// ============================================================================
// Clear Confirmation
// ============================================================================

/// Whether typed input confirms a destructive action
pub fn confirmation_accepted(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input == "y" || input == "yes"
}

// ============================================================================
// Tests
// ============================================================================
