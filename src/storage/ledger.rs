//! Ledger repository for JSON storage
//!
//! Manages loading and saving the budget and expense list to the ledger file.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::LedgerState;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository holding the ledger state in memory
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<LedgerState>,
}

impl LedgerRepository {
    /// Create a new ledger repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(LedgerState::default()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// A missing, unreadable or corrupt file leaves the default state
    /// (budget 0, no expenses). Individual unreadable expense records are
    /// skipped.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let state: LedgerState = read_json_or_default(&self.path);

        tracing::debug!(
            path = %self.path.display(),
            expenses = state.expenses.len(),
            "loaded ledger"
        );

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = state;

        Ok(())
    }

    /// Save the ledger to disk, overwriting the file
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get a copy of the current state
    pub fn snapshot(&self) -> Result<LedgerState, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Apply a change to the state and return its result
    pub fn update<R>(&self, f: impl FnOnce(&mut LedgerState) -> R) -> Result<R, ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(f(&mut data))
    }
}
