//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Record kinds and their field structures
//! - `error`: Error types for the record ledger

pub mod error;
pub mod record;

pub use error::LedgerError;
pub use record::{
    LendingTransaction, PaymentTransaction, RecordId, RecordKind, RemittanceTransaction,
    SmartPayTransaction,
};
