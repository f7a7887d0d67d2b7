//! In-memory ledger backend
//!
//! HashMap-backed implementation of the key-value ledger contract. Used
//! by unit tests and ephemeral CLI runs; nothing survives the process.

use crate::core::traits::KeyValueLedger;
use crate::types::LedgerError;
use std::collections::HashMap;

/// In-memory key-value ledger
///
/// Every operation is infallible in practice; the `Result` shape exists
/// to satisfy the collaborator contract shared with real backends.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger
    pub fn new() -> Self {
        MemoryLedger {
            entries: HashMap::new(),
        }
    }

    /// Number of live keys, indices and sentinels included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no keys at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueLedger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), LedgerError> {
        // Removing an absent key is a success; deletion is idempotent
        self.entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.entries.contains_key(key))
    }
}
