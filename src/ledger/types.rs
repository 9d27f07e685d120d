//! Core types for the verdict ledger
//!
//! This module contains the fundamental data types shared by the ledger,
//! the report surfaces, and the CLI: the per-test verdict record and the
//! status enum it carries.

use serde::{Deserialize, Serialize};

// ============================================================================
// Test Status
// ============================================================================

/// User-asserted outcome for a single diagnostic test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Hardware behaved as expected
    Pass,
    /// A defect was observed
    Fail,
    /// Test was run but the user declined to grade it
    Skipped,
}

impl TestStatus {
    /// Get display icon for status
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
            Self::Skipped => "⏭️",
        }
    }

    /// Get ASCII symbol for terminals without emoji support
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
            Self::Skipped => "○",
        }
    }

    /// Lowercase label matching the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skipped => "skipped",
        }
    }

    /// Whether this verdict counts toward the pass ratio
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Test Result
// ============================================================================

/// One recorded verdict for one diagnostic test
///
/// The ledger holds at most one of these per `test_id`; recording a new
/// verdict for the same id replaces the old entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Stable identifier of the test (e.g. "dead-pixel", "uniformity")
    pub test_id: String,
    /// Human-readable label, denormalized so display needs no lookup table
    pub test_name: String,
    /// User's verdict
    pub status: TestStatus,
    /// Free-form annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Unix timestamp when the verdict was recorded (milliseconds)
    pub timestamp: u64,
}

impl TestResult {
    /// Create a result stamped with the current time
    pub fn new(
        test_id: impl Into<String>,
        test_name: impl Into<String>,
        status: TestStatus,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            test_name: test_name.into(),
            status,
            notes: None,
            timestamp: current_timestamp_ms(),
        }
    }

    /// Attach an annotation
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Get current timestamp in milliseconds
pub(crate) fn current_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
