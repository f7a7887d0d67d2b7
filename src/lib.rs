//! SmartPay Record Ledger Library
//! # Overview
//!
//! This library provides a minimal transactional record store layered on an
//! externally-provided key-value ledger: validated creation of financial
//! records, a stable byte codec, and a secondary key index per record kind.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (record kinds, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::schema`] - Positional argument validation and typed extraction
//!   - [`core::codec`] - Stable, field-tagged record encoding
//!   - [`core::index`] - Secondary key indices persisted in the ledger
//!   - [`core::store`] - Orchestration against the external ledger
//!   - [`core::router`] - Command-name dispatch
//! - [`ledger`] - Key-value backends (in-memory, JSON file)
//! - [`io`] - Batch command script input
//!
//! # Record Kinds
//!
//! The store accepts four record kinds:
//!
//! - **Payment**: a simple payment between a drawer and a payee
//! - **Remittance**: a cross-currency transfer (nested-only)
//! - **Lending**: a loan with a rate and return date (nested-only)
//! - **SmartPay**: the composite bundle nesting one of each
//!
//! # Lifecycle
//!
//! Records are created once and never mutated in place; the only state
//! transitions per id are `Absent -> Created` via a validated create and
//! `Created -> Absent` via delete. The index for each kind lists exactly
//! the live ids created through the validated path, in creation order.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod ledger;
pub mod types;

pub use core::{dispatch, Command, IndexedKind, KeyIndex, KeyValueLedger, RecordStore};
pub use io::{BatchReader, CommandLine};
pub use ledger::{FileLedger, MemoryLedger};
pub use types::{
    LedgerError, LendingTransaction, PaymentTransaction, RecordId, RecordKind,
    RemittanceTransaction, SmartPayTransaction,
};
