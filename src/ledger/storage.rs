//! Durable storage for the verdict ledger
//!
//! The ledger serializes its full result list into one fixed-name slot.
//! Adapters transport that payload opaquely: [`FileStorage`] keeps it in
//! `results.json` under the data directory with atomic writes, while
//! [`MemoryStorage`] keeps it in process memory for tests and ephemeral
//! runs. Parsing and the corrupt-payload policy stay in the ledger, so
//! swapping adapters never changes recovery behavior.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Data directory relative to the user data dir
const DATA_SUBDIR: &str = "rigcheck";

/// Results slot filename
const RESULTS_FILE: &str = "results.json";

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A durable slot holding the serialized result list
///
/// Implementations never interpret the payload; they only store and
/// return it. `read` distinguishes "slot was never written" (`Ok(None)`)
/// from a transport failure (`Err`).
pub trait ResultStorage: Send + Sync + std::fmt::Debug {
    /// Read the current payload, `None` if the slot was never written
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents with `payload`
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

// ============================================================================
// File Storage
// ============================================================================

/// File-backed slot at `<data_dir>/rigcheck/results.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the results file
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the default data directory
    ///
    /// Uses `dirs::data_dir()` for the platform-specific location.
    pub fn new() -> Self {
        Self {
            dir: Self::default_data_dir(),
        }
    }

    /// Create storage rooted at a custom directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get default data directory
    fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from(".data"))
            .join(DATA_SUBDIR)
    }

    /// Get the storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the path of the results slot
    pub fn results_path(&self) -> PathBuf {
        self.dir.join(RESULTS_FILE)
    }

    /// Phase 1: Write payload to the `.tmp` sibling (prepare)
    fn prepare_write(&self, data: &[u8]) -> Result<(), io::Error> {
        let tmp_path = self.dir.join(format!("{}.tmp", RESULTS_FILE));

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        Ok(())
    }

    /// Phase 2: Rename `.tmp` over the real file (commit)
    fn commit_rename(&self) -> Result<(), io::Error> {
        let tmp_path = self.dir.join(format!("{}.tmp", RESULTS_FILE));
        let final_path = self.dir.join(RESULTS_FILE);

        fs::rename(&tmp_path, &final_path)?;

        Ok(())
    }
}

impl ResultStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let path = self.results_path();

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        // Crash between prepare and commit leaves the old slot intact;
        // the orphan .tmp is overwritten by the next prepare.
        self.prepare_write(payload.as_bytes())?;
        self.commit_rename()?;

        Ok(())
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Memory Storage
// ============================================================================

/// In-memory slot for tests and ephemeral runs
///
/// Cloning shares the underlying slot, so a test can hand a clone to the
/// ledger and inspect the original after mutations.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// Current slot contents
    pub fn snapshot(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResultStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.lock().clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        *self.lock() = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
