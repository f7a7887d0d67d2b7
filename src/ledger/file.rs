//! File-backed ledger backend
//!
//! Persists the whole key space as one JSON snapshot, rewritten after
//! every mutation. This backs the CLI so that one-shot invocations see
//! each other's writes. The snapshot is loaded once at open; concurrent
//! writers are out of scope for this backend, as for the core.

use crate::core::traits::KeyValueLedger;
use crate::types::LedgerError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file-backed key-value ledger
///
/// Keys map to raw byte values. The file is created on first mutation;
/// opening a missing file yields an empty ledger.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    entries: HashMap<String, Vec<u8>>,
}

impl FileLedger {
    /// Open a ledger at `path`, loading the snapshot if one exists
    ///
    /// # Errors
    ///
    /// Returns a backend error if the file exists but cannot be read or
    /// does not parse as a snapshot.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let entries = if path.exists() {
            let bytes = fs::read(path)?;
            serde_json::from_slice(&bytes).map_err(|e| {
                LedgerError::backend(format!(
                    "malformed ledger file '{}': {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            HashMap::new()
        };

        Ok(FileLedger {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Rewrite the snapshot with the current key space
    fn flush(&self) -> Result<(), LedgerError> {
        let bytes = serde_json::to_vec(&self.entries)
            .map_err(|e| LedgerError::backend(e.to_string()))?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueLedger for FileLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.entries.insert(key.to_string(), value.to_vec());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<(), LedgerError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.entries.contains_key(key))
    }
}
