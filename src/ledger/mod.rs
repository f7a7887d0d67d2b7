//! Ledger backends
//!
//! Concrete implementations of the external key-value ledger contract:
//! - `memory` - HashMap-backed, for tests and ephemeral runs
//! - `file` - JSON snapshot on disk, backs the CLI

pub mod file;
pub mod memory;

pub use file::FileLedger;
pub use memory::MemoryLedger;
