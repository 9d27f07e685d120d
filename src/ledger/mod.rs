//! Verdict ledger for diagnostic test results
//!
//! Single source of truth for which diagnostics the user has graded and
//! how. The ledger owns the in-memory result list, stamps each verdict at
//! write time, and pushes the serialized list to an injected storage
//! adapter after every mutation. Memory is authoritative: a failed
//! persistence write is logged and the session continues with its state
//! intact.

pub mod storage;
pub mod types;

pub use storage::{FileStorage, MemoryStorage, ResultStorage, StorageError};
pub use types::{TestResult, TestStatus};

use tracing::{debug, warn};

/// The set of recorded verdicts, at most one per `test_id`
///
/// Constructed once at process start from a storage adapter and handed to
/// every consumer that records or displays verdicts.
#[derive(Debug)]
pub struct ResultLedger {
    /// Verdicts in insertion order; a replacement moves to the end
    results: Vec<TestResult>,
    /// Durable slot receiving the serialized list after each mutation
    storage: Box<dyn ResultStorage>,
}

impl ResultLedger {
    /// Load the ledger from a storage adapter
    ///
    /// Absent, unreadable, or corrupt state degrades to an empty ledger
    /// with a logged warning. Startup never fails on bad state.
    pub fn initialize(storage: Box<dyn ResultStorage>) -> Self {
        let results = match storage.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<TestResult>>(&payload) {
                Ok(results) => {
                    debug!("Loaded {} recorded verdicts", results.len());
                    results
                }
                Err(e) => {
                    warn!("Corrupt results payload, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No recorded verdicts yet");
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read results storage, starting empty: {e}");
                Vec::new()
            }
        };

        Self { results, storage }
    }

    /// Create a ledger backed by an in-memory slot
    pub fn in_memory() -> Self {
        Self::initialize(Box::new(MemoryStorage::new()))
    }

    /// Current snapshot in ledger order
    pub fn all_results(&self) -> &[TestResult] {
        &self.results
    }

    /// Number of recorded verdicts
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing has been graded yet
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Record a verdict, replacing any prior entry with the same `test_id`
    ///
    /// The prior entry is filtered out and the new one appended, so a
    /// re-graded test moves to the end of the list. The entry is re-stamped
    /// at write time regardless of when the caller built it.
    pub fn add_result(&mut self, mut result: TestResult) {
        result.timestamp = types::current_timestamp_ms();

        self.results.retain(|r| r.test_id != result.test_id);
        self.results.push(result);

        self.persist();
    }

    /// Remove every recorded verdict
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.persist();
    }

    /// Aggregate score as a rounded percentage of passing verdicts
    ///
    /// An empty ledger scores 0. Skipped entries count toward the total,
    /// never toward passes.
    pub fn report_score(&self) -> u8 {
        if self.results.is_empty() {
            return 0;
        }

        let passed = self.results.iter().filter(|r| r.status.is_pass()).count();
        ((passed as f64 / self.results.len() as f64) * 100.0).round() as u8
    }

    /// Serialize the full list into the slot, best effort
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!("Failed to persist results, in-memory state stands: {e}");
        }
    }

    fn try_persist(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.results)?;
        self.storage.write(&payload)?;
        Ok(())
    }
}

impl Default for ResultLedger {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
