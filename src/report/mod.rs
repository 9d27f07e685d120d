//! Verdict report generation
//!
//! Snapshots the ledger into a serializable report and renders it in
//! multiple formats: Text (ASCII dashboard), JSON, Markdown.

mod dashboard;

pub use dashboard::render_dashboard;

use crate::catalog;
use crate::ledger::{ResultLedger, TestResult, TestStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Report output format
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Summary statistics for a ledger snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Verdicts recorded
    pub total: usize,
    /// Passing verdicts
    pub passed: usize,
    /// Failing verdicts
    pub failed: usize,
    /// Skipped verdicts
    pub skipped: usize,
    /// Aggregate score, 0 to 100
    pub score: u8,
    /// Catalog tests with a recorded verdict
    pub catalog_graded: usize,
    /// Catalog size
    pub catalog_total: usize,
}

impl LedgerSummary {
    /// Passing share of recorded verdicts as a percentage
    pub fn pass_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Failing share of recorded verdicts as a percentage
    pub fn fail_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.failed as f64 / self.total as f64) * 100.0
        }
    }

    /// Skipped share of recorded verdicts as a percentage
    pub fn skip_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.skipped as f64 / self.total as f64) * 100.0
        }
    }
}

/// Pass/fail breakdown built from a ledger snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerReport {
    /// Recorded verdicts in ledger order
    pub results: Vec<TestResult>,
    /// Summary statistics
    pub summary: LedgerSummary,
    /// Report generation time
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl LedgerReport {
    /// Snapshot a ledger into a report
    pub fn from_ledger(ledger: &ResultLedger) -> Self {
        let results = ledger.all_results().to_vec();

        let passed = results
            .iter()
            .filter(|r| r.status == TestStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == TestStatus::Fail)
            .count();
        let skipped = results
            .iter()
            .filter(|r| r.status == TestStatus::Skipped)
            .count();
        let catalog_graded = catalog::all_tests()
            .iter()
            .filter(|t| results.iter().any(|r| r.test_id == t.id))
            .count();

        let summary = LedgerSummary {
            total: results.len(),
            passed,
            failed,
            skipped,
            score: ledger.report_score(),
            catalog_graded,
            catalog_total: catalog::all_tests().len(),
        };

        Self {
            results,
            summary,
            generated_at: chrono::Utc::now(),
        }
    }

    /// Format report based on format type
    pub fn format(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.format_text(),
            ReportFormat::Json => self.format_json(),
            ReportFormat::Markdown => self.format_markdown(),
        }
    }

    /// Format as text dashboard
    pub fn format_text(&self) -> String {
        render_dashboard(self)
    }

    /// Format as JSON
    pub fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as Markdown
    pub fn format_markdown(&self) -> String {
        let mut out = String::new();

        writeln!(out, "# Hardware Diagnostic Report\n").unwrap();
        writeln!(
            out,
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .unwrap();

        writeln!(out, "## Summary\n").unwrap();
        writeln!(out, "| Metric | Value |").unwrap();
        writeln!(out, "|--------|-------|").unwrap();
        writeln!(out, "| Score | {}/100 |", self.summary.score).unwrap();
        writeln!(
            out,
            "| Verdicts | {} ({} pass / {} fail / {} skipped) |",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.skipped
        )
        .unwrap();
        writeln!(
            out,
            "| Catalog coverage | {}/{} |",
            self.summary.catalog_graded, self.summary.catalog_total
        )
        .unwrap();
        writeln!(out).unwrap();

        writeln!(out, "## Verdicts\n").unwrap();

        if self.results.is_empty() {
            writeln!(out, "No verdicts recorded.").unwrap();
            return out;
        }

        writeln!(out, "| Test | Status | Recorded | Notes |").unwrap();
        writeln!(out, "|------|--------|----------|-------|").unwrap();
        for result in &self.results {
            writeln!(
                out,
                "| {} | {} {} | {} | {} |",
                result.test_name,
                result.status.icon(),
                result.status.label(),
                format_recorded(result.timestamp),
                result.notes.as_deref().unwrap_or("")
            )
            .unwrap();
        }

        out
    }
}

/// Render an epoch-ms stamp as a UTC wall-clock string
pub(crate) fn format_recorded(timestamp_ms: u64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
