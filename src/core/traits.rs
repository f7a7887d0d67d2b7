//! Core trait for the external key-value ledger collaborator
//!
//! The record store does not persist anything itself; it runs against a
//! hosting ledger that provides per-key reads and writes. This trait is
//! that contract, and it is the seam that lets the in-memory and
//! file-backed backends be used interchangeably.

use crate::types::LedgerError;

/// Contract required from the hosting key-value ledger
///
/// Each individual call is assumed atomic and linearizable by the core;
/// atomicity across the multiple calls that make up one logical operation
/// (a record write plus an index read-modify-write) is **not** assumed,
/// and the core never retries or compensates on its own.
pub trait KeyValueLedger {
    /// Read the value stored under `key`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bytes))` - The key is live and holds `bytes`
    /// * `Ok(None)` - The key is absent (distinct from a backend failure)
    /// * `Err(LedgerError)` - The backend itself failed
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write `value` under `key`, replacing any previous value
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Remove `key` and its value
    ///
    /// Deleting an absent key succeeds; deletion is idempotent.
    fn delete(&mut self, key: &str) -> Result<(), LedgerError>;

    /// Check whether `key` is live
    ///
    /// First-class existence query, so callers never have to decode a
    /// value just to learn whether the key is in use.
    fn exists(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.get(key)?.is_some())
    }
}
