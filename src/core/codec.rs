//! Record codec: stable, self-describing byte encoding for records
//!
//! Records are persisted as field-tagged JSON produced by the serde
//! derives on the record types. The encoding is stable and round-trips:
//! `decode(encode(r)) == r` for every valid record value, including the
//! nested smart-pay composite. Escaping of embedded delimiters, quotes,
//! and non-ASCII text is the serializer's job, so field values never
//! corrupt the encoding.
//!
//! Index sequences use the same codec, persisted as a JSON string array.
//!
//! Decoding malformed bytes yields a typed [`LedgerError::DecodeFailure`]
//! (or [`LedgerError::IndexCorruption`] for index keys) and never panics.
//! All functions are pure (no I/O) for easy testing.

use crate::types::LedgerError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a record to its persisted byte form
///
/// # Errors
///
/// Returns [`LedgerError::EncodeFailure`] if serialization fails; for
/// the record types in this crate that cannot happen in practice.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(record).map_err(|e| LedgerError::encode_failure(e.to_string()))
}

/// Decode a record from its persisted byte form
///
/// `key` is the ledger key the bytes came from, carried into the error
/// for context.
///
/// # Errors
///
/// Returns [`LedgerError::DecodeFailure`] if the bytes are empty,
/// malformed, or do not match the record shape.
pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, LedgerError> {
    serde_json::from_slice(bytes).map_err(|e| LedgerError::decode_failure(key, e.to_string()))
}

/// Encode an index sequence as a JSON string array
pub fn encode_index(keys: &[String]) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(keys).map_err(|e| LedgerError::encode_failure(e.to_string()))
}

/// Decode an index sequence from its persisted byte form
///
/// # Errors
///
/// Returns [`LedgerError::IndexCorruption`] if the bytes are not a valid
/// string array. Absence of the index key is the caller's concern; this
/// function only ever sees bytes that were actually stored.
pub fn decode_index(key: &str, bytes: &[u8]) -> Result<Vec<String>, LedgerError> {
    serde_json::from_slice(bytes).map_err(|e| LedgerError::index_corruption(key, e.to_string()))
}
