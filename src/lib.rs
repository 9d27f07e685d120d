#![allow(dead_code)]

// Library exports for the rigcheck diagnostics ledger
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ledger;
pub mod report;

// Re-export key types for convenience
pub use catalog::{DiagnosticTest, TestCategory};
pub use config::RigcheckConfig;
pub use ledger::{
    FileStorage, MemoryStorage, ResultLedger, ResultStorage, StorageError, TestResult, TestStatus,
};
pub use report::{LedgerReport, LedgerSummary, ReportFormat};
