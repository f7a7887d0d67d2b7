//! Core business logic module
//!
//! This module contains the core record-store components:
//! - `traits` - The external key-value ledger contract
//! - `schema` - Positional argument validation and typed extraction
//! - `codec` - Stable byte encoding for records and index sequences
//! - `index` - Secondary key indices, one per indexed record kind
//! - `store` - Orchestration of validator, codec, and indices
//! - `router` - Command-name dispatch onto store operations

pub mod codec;
pub mod index;
pub mod router;
pub mod schema;
pub mod store;
pub mod traits;

pub use index::{IndexedKind, KeyIndex};
pub use router::{dispatch, Command};
pub use store::{RecordStore, GENESIS_KEY, TAGGED_WRITE_MARKER};
pub use traits::KeyValueLedger;
