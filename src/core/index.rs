//! Secondary key index, one ordered sequence per indexed record kind
//!
//! The ledger itself cannot enumerate keys, so the store maintains a
//! redundant ordered sequence of live record ids per kind, persisted as
//! a JSON string array under a reserved key. The sequence is read back
//! in full before every mutation and rewritten in full afterwards; there
//! is no incremental persistence. That is O(n) per mutation, acceptable
//! only at the small record volumes this store targets.
//!
//! Only the store mutates indices. Duplicate prevention is the store's
//! job (it checks record existence before creating), not enforced here.

use crate::core::codec;
use crate::core::traits::KeyValueLedger;
use crate::types::LedgerError;
use std::fmt;

/// Record kinds that maintain a persisted key index
///
/// Remittance and lending records only exist nested inside smart-pay
/// bundles, so only payments and smart-pay records are indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexedKind {
    Payment,
    SmartPay,
}

impl IndexedKind {
    /// All indexed kinds, in a fixed order
    pub const ALL: [IndexedKind; 2] = [IndexedKind::Payment, IndexedKind::SmartPay];

    /// Reserved ledger key the index sequence is persisted under
    ///
    /// These keys live in the `_`-prefixed reserved space that validated
    /// creates can never claim.
    pub fn index_key(&self) -> &'static str {
        match self {
            IndexedKind::Payment => "_paymentindex",
            IndexedKind::SmartPay => "_smartpayindex",
        }
    }
}

impl fmt::Display for IndexedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexedKind::Payment => write!(f, "payment"),
            IndexedKind::SmartPay => write!(f, "smart-pay"),
        }
    }
}

/// One key index sequence, fully materialized
///
/// Loaded from the ledger before each mutation and stored back after.
/// The in-memory sequence is plain data; nothing here caches across
/// operations.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyIndex {
    kind: IndexedKind,
    keys: Vec<String>,
}

impl KeyIndex {
    /// An empty index for `kind`, used at reset and first use
    pub fn empty(kind: IndexedKind) -> Self {
        KeyIndex {
            kind,
            keys: Vec::new(),
        }
    }

    /// Load the full index sequence for `kind` from the ledger
    ///
    /// An absent index key loads as the empty sequence (the state after
    /// reset and before first use).
    ///
    /// # Errors
    ///
    /// * [`LedgerError::IndexCorruption`] if stored bytes are malformed
    /// * [`LedgerError::Backend`] if the ledger read fails
    pub fn load<L: KeyValueLedger>(ledger: &L, kind: IndexedKind) -> Result<Self, LedgerError> {
        let keys = match ledger.get(kind.index_key())? {
            Some(bytes) => codec::decode_index(kind.index_key(), &bytes)?,
            None => Vec::new(),
        };
        Ok(KeyIndex { kind, keys })
    }

    /// Persist the full sequence under the kind's reserved key
    pub fn store<L: KeyValueLedger>(&self, ledger: &mut L) -> Result<(), LedgerError> {
        let bytes = codec::encode_index(&self.keys)?;
        ledger.put(self.kind.index_key(), &bytes)
    }

    /// Append `id` to the end of the sequence
    ///
    /// The caller has already checked that `id` is not live; duplicates
    /// must never be appended.
    pub fn append(&mut self, id: &str) {
        self.keys.push(id.to_string());
    }

    /// Remove the first element equal to `id`, preserving the relative
    /// order of all other elements
    ///
    /// Removing an absent id is a silent no-op, matching deletion of an
    /// absent key from the ledger.
    ///
    /// # Returns
    ///
    /// `true` if an element was removed, `false` if the sequence is
    /// unchanged (so callers can skip the rewrite).
    pub fn remove(&mut self, id: &str) -> bool {
        match self.keys.iter().position(|key| key == id) {
            Some(i) => {
                self.keys.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace the sequence with empty
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Whether `id` is present in the sequence
    pub fn contains(&self, id: &str) -> bool {
        self.keys.iter().any(|key| key == id)
    }

    /// The ordered key sequence
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of ids in the sequence
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;

    fn index_with(kind: IndexedKind, ids: &[&str]) -> KeyIndex {
        let mut index = KeyIndex::empty(kind);
        for id in ids {
            index.append(id);
        }
        index
    }

    #[test]
    fn test_append_preserves_order() {
        let index = index_with(IndexedKind::Payment, &["tx1", "tx2", "tx3"]);
        assert_eq!(index.keys(), ["tx1", "tx2", "tx3"]);
    }

    #[test]
    fn test_remove_first_match_preserves_order() {
        let mut index = index_with(IndexedKind::Payment, &["tx1", "tx2", "tx3"]);

        assert!(index.remove("tx2"));
        assert_eq!(index.keys(), ["tx1", "tx3"]);
    }

    #[test]
    fn test_remove_absent_id_is_silent_noop() {
        let mut index = index_with(IndexedKind::Payment, &["tx1", "tx2"]);

        assert!(!index.remove("tx9"));
        assert_eq!(index.keys(), ["tx1", "tx2"]);
    }

    #[test]
    fn test_remove_only_first_of_equal_ids() {
        // The store never appends duplicates, but removal is still
        // defined as first-match only
        let mut index = index_with(IndexedKind::Payment, &["tx1", "tx1"]);

        assert!(index.remove("tx1"));
        assert_eq!(index.keys(), ["tx1"]);
    }

    #[test]
    fn test_clear() {
        let mut index = index_with(IndexedKind::SmartPay, &["sp1", "sp2"]);
        index.clear();
        assert!(index.is_empty());
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let ledger = MemoryLedger::new();
        let index = KeyIndex::load(&ledger, IndexedKind::Payment).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let mut ledger = MemoryLedger::new();
        let index = index_with(IndexedKind::Payment, &["tx1", "tx2"]);

        index.store(&mut ledger).unwrap();
        let loaded = KeyIndex::load(&ledger, IndexedKind::Payment).unwrap();
        assert_eq!(loaded, index);
    }

    #[test]
    fn test_store_writes_under_reserved_key() {
        let mut ledger = MemoryLedger::new();
        index_with(IndexedKind::SmartPay, &["sp1"])
            .store(&mut ledger)
            .unwrap();

        let bytes = ledger.get("_smartpayindex").unwrap().unwrap();
        assert_eq!(bytes, b"[\"sp1\"]");
    }

    #[test]
    fn test_indices_are_per_kind() {
        let mut ledger = MemoryLedger::new();
        index_with(IndexedKind::Payment, &["tx1"])
            .store(&mut ledger)
            .unwrap();
        index_with(IndexedKind::SmartPay, &["sp1"])
            .store(&mut ledger)
            .unwrap();

        let payments = KeyIndex::load(&ledger, IndexedKind::Payment).unwrap();
        let smart_pays = KeyIndex::load(&ledger, IndexedKind::SmartPay).unwrap();
        assert_eq!(payments.keys(), ["tx1"]);
        assert_eq!(smart_pays.keys(), ["sp1"]);
    }

    #[test]
    fn test_load_malformed_bytes_is_corruption() {
        let mut ledger = MemoryLedger::new();
        ledger.put("_paymentindex", b"not json").unwrap();

        let err = KeyIndex::load(&ledger, IndexedKind::Payment).unwrap_err();
        assert!(matches!(err, LedgerError::IndexCorruption { .. }));
    }

    #[test]
    fn test_empty_index_persists_as_valid_encoding() {
        // Reset relies on the empty sequence being recoverable
        let mut ledger = MemoryLedger::new();
        KeyIndex::empty(IndexedKind::Payment)
            .store(&mut ledger)
            .unwrap();

        let loaded = KeyIndex::load(&ledger, IndexedKind::Payment).unwrap();
        assert_eq!(loaded.len(), 0);
    }
}
