//! I/O module
//!
//! Handles batch command script input.
//!
//! # Components
//!
//! - `batch_reader` - Streaming CSV reader yielding one invocation per row

pub mod batch_reader;

pub use batch_reader::{BatchReader, CommandLine};
