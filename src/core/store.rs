//! Record store orchestration
//!
//! This module provides the RecordStore that coordinates the schema
//! validator, the record codec, and the key indices against the external
//! ledger collaborator. It is the only component that mutates indices.
//!
//! # Write Ordering
//!
//! A create is three ledger calls: the record put, then the index
//! read-modify-write. The calls are not transactional; if the record put
//! succeeds and the index write fails, the record is reachable by direct
//! read but absent from enumeration. The store neither compensates nor
//! retries; the error is propagated and the caller decides.

use crate::core::codec;
use crate::core::index::{IndexedKind, KeyIndex};
use crate::core::schema;
use crate::core::traits::KeyValueLedger;
use crate::types::LedgerError;

/// Reserved ledger key holding the genesis counter written at reset
pub const GENESIS_KEY: &str = "_genesis";

/// Prefix of the reserved key space; record ids can never start with it
pub const RESERVED_PREFIX: &str = "_";

/// Marker prepended to values stored via the tagged raw write
pub const TAGGED_WRITE_MARKER: &str = "tagged:";

/// Record store over an external key-value ledger
///
/// Owns the ledger handle for the duration of an invocation sequence and
/// exclusively owns all index mutation. Records of every kind share one
/// key namespace; the existence pre-check runs against the raw key, so a
/// payment and a smart-pay record can never silently overwrite each
/// other.
pub struct RecordStore<L: KeyValueLedger> {
    ledger: L,
}

impl<L: KeyValueLedger> RecordStore<L> {
    /// Create a store over `ledger`
    pub fn new(ledger: L) -> Self {
        RecordStore { ledger }
    }

    /// Borrow the underlying ledger
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Consume the store and return the ledger
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Create a payment record from its 5 positional arguments
    ///
    /// Validates, rejects reserved and already-live ids, persists the
    /// encoded record under its id, then appends the id to the payment
    /// index and persists the index.
    ///
    /// # Errors
    ///
    /// * `ArgumentCount` / `EmptyField` / `InvalidAmount` - validation
    ///   failed; nothing was written
    /// * `ReservedKey` / `AlreadyExists` - id rejected before any write
    /// * `Backend` - a ledger call failed; a failure after the record put
    ///   leaves an orphan record outside the index
    pub fn create_payment(&mut self, args: &[String]) -> Result<(), LedgerError> {
        let record = schema::payment_from_args(args)?;
        self.ensure_creatable(&record.payment_id)?;

        let bytes = codec::encode(&record)?;
        self.ledger.put(&record.payment_id, &bytes)?;

        self.index_append(IndexedKind::Payment, &record.payment_id)
    }

    /// Create a smart-pay record from its 20 positional arguments
    ///
    /// The existence check is keyed on the composite id only; the nested
    /// sub-record ids are stored inside the bundle but never separately
    /// checked or indexed.
    ///
    /// # Errors
    ///
    /// Same as [`RecordStore::create_payment`], against the smart-pay
    /// schema and index.
    pub fn create_smart_pay(&mut self, args: &[String]) -> Result<(), LedgerError> {
        let record = schema::smart_pay_from_args(args)?;
        self.ensure_creatable(&record.smart_pay_id)?;

        let bytes = codec::encode(&record)?;
        self.ledger.put(&record.smart_pay_id, &bytes)?;

        self.index_append(IndexedKind::SmartPay, &record.smart_pay_id)
    }

    /// Read the raw bytes stored under `key`
    ///
    /// # Errors
    ///
    /// * `NotFound` - the key is absent
    /// * `Backend` - the ledger read itself failed
    pub fn read_raw(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        self.ledger
            .get(key)?
            .ok_or_else(|| LedgerError::not_found(key))
    }

    /// Write raw bytes under `key`, bypassing validation and indices
    ///
    /// Debug affordance: the key is not checked against the reserved
    /// space and no index is touched.
    pub fn write_raw(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.ledger.put(key, value)
    }

    /// Write raw bytes under `key` with the fixed marker prepended
    ///
    /// Same passthrough as [`RecordStore::write_raw`], with the stored
    /// value prefixed by [`TAGGED_WRITE_MARKER`] so tagged writes are
    /// recognizable on read-back.
    pub fn write_tagged(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        let mut tagged = TAGGED_WRITE_MARKER.as_bytes().to_vec();
        tagged.extend_from_slice(value);
        self.ledger.put(key, &tagged)
    }

    /// Delete `key` and drop it from every index that lists it
    ///
    /// Deleting an absent key succeeds (idempotent), and removing an id
    /// that no index lists leaves the indices untouched. Each index is
    /// rewritten only when it actually changed.
    pub fn delete(&mut self, key: &str) -> Result<(), LedgerError> {
        self.ledger.delete(key)?;

        for kind in IndexedKind::ALL {
            let mut index = KeyIndex::load(&self.ledger, kind)?;
            if index.remove(key) {
                index.store(&mut self.ledger)?;
            }
        }
        Ok(())
    }

    /// Reset the ledger to its genesis state
    ///
    /// Writes `counter` (as decimal text) under the genesis sentinel and
    /// resets both indices to empty sequences. The only operation that
    /// runs before any records exist; expected to be called once at
    /// ledger genesis.
    pub fn reset(&mut self, counter: i64) -> Result<(), LedgerError> {
        self.ledger
            .put(GENESIS_KEY, counter.to_string().as_bytes())?;

        for kind in IndexedKind::ALL {
            KeyIndex::empty(kind).store(&mut self.ledger)?;
        }
        Ok(())
    }

    /// The live ids of `kind`, in creation order
    pub fn index_keys(&self, kind: IndexedKind) -> Result<Vec<String>, LedgerError> {
        Ok(KeyIndex::load(&self.ledger, kind)?.keys().to_vec())
    }

    /// Reject reserved ids and ids already live in the ledger
    ///
    /// Runs before any write. The check is on the raw key, shared across
    /// record kinds.
    fn ensure_creatable(&self, id: &str) -> Result<(), LedgerError> {
        if id.starts_with(RESERVED_PREFIX) {
            return Err(LedgerError::reserved_key(id));
        }
        if self.ledger.exists(id)? {
            return Err(LedgerError::already_exists(id));
        }
        Ok(())
    }

    fn index_append(&mut self, kind: IndexedKind, id: &str) -> Result<(), LedgerError> {
        let mut index = KeyIndex::load(&self.ledger, kind)?;
        index.append(id);
        index.store(&mut self.ledger)
    }
}
