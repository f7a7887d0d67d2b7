//! Error types for the SmartPay record ledger
//!
//! This module defines all error types that can occur while validating,
//! encoding, storing, and routing records. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Argument Errors**: wrong arity, empty fields, unparseable numbers
//! - **Store Errors**: duplicate ids, missing keys, backend failures
//! - **Codec Errors**: malformed record or index bytes
//! - **Routing Errors**: unknown commands, wrong raw-operation arity
//!
//! No error is retried or compensated anywhere in the core: argument and
//! codec errors surface before any write, and backend failures abort the
//! operation where they occur.

use crate::types::RecordKind;
use thiserror::Error;

/// Main error type for the record ledger
///
/// This enum represents all possible errors that can occur during record
/// validation, persistence, and command routing. Each variant includes
/// relevant context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Wrong number of positional arguments for a record kind
    ///
    /// Surfaced by the schema validator before any field is inspected;
    /// no write has occurred.
    #[error("Incorrect number of arguments for {kind} record: expected {expected}, got {actual}")]
    ArgumentCount {
        /// The record kind being validated
        kind: RecordKind,
        /// Expected argument count for the kind
        expected: usize,
        /// Number of arguments actually supplied
        actual: usize,
    },

    /// A string-typed field was empty
    ///
    /// Positions are 1-based and absolute within the supplied argument
    /// list, so a smart-pay field reports its position in the flat
    /// 20-argument list.
    #[error("Argument {position} ({field}) for {kind} record must be a non-empty string")]
    EmptyField {
        /// The record kind being validated
        kind: RecordKind,
        /// 1-based position of the offending argument
        position: usize,
        /// Name of the field at that position
        field: &'static str,
    },

    /// A numeric field did not parse as a decimal number
    #[error("Argument {position} ({field}) for {kind} record must be a decimal number, got '{value}'")]
    InvalidAmount {
        /// The record kind being validated
        kind: RecordKind,
        /// 1-based position of the offending argument
        position: usize,
        /// Name of the field at that position
        field: &'static str,
        /// The value that failed to parse
        value: String,
    },

    /// The genesis counter argument to `init` was not an integer
    #[error("Genesis counter must be an integer, got '{value}'")]
    InvalidCounter {
        /// The value that failed to parse
        value: String,
    },

    /// A raw command was invoked with the wrong number of arguments
    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    CommandUsage {
        /// The command name as routed
        command: String,
        /// Expected argument count
        expected: usize,
        /// Number of arguments actually supplied
        actual: usize,
    },

    /// The command name did not match any known invocation
    #[error("Unknown command '{command}'")]
    UnknownCommand {
        /// The unrecognized command name
        command: String,
    },

    /// A validated create supplied an id in the reserved key space
    ///
    /// Keys starting with `_` are reserved for the index sequences and
    /// the genesis sentinel and can never name a record.
    #[error("Record id '{id}' uses the reserved '_' key prefix")]
    ReservedKey {
        /// The rejected record id
        id: String,
    },

    /// A validated create found its id already live in the ledger
    ///
    /// Surfaced before any write; the existing record and its index entry
    /// are left untouched.
    #[error("Record '{id}' already exists")]
    AlreadyExists {
        /// The id that is already in use
        id: String,
    },

    /// A read referenced a key with no value in the ledger
    #[error("Key '{key}' not found")]
    NotFound {
        /// The missing key
        key: String,
    },

    /// The underlying ledger backend failed
    ///
    /// Propagated verbatim upward with no automatic retry; distinct from
    /// [`LedgerError::NotFound`], which only means the key is absent.
    #[error("Ledger backend error: {message}")]
    Backend {
        /// Description of the backend failure
        message: String,
    },

    /// Stored record bytes failed to decode
    #[error("Failed to decode record under key '{key}': {message}")]
    DecodeFailure {
        /// The key whose value was malformed
        key: String,
        /// Description of the decode failure
        message: String,
    },

    /// A record failed to encode
    #[error("Failed to encode record: {message}")]
    EncodeFailure {
        /// Description of the encode failure
        message: String,
    },

    /// Stored index bytes failed to decode as a key sequence
    ///
    /// Raised instead of silently treating the index as empty, which
    /// would mask loss of every entry it held.
    #[error("Malformed index under key '{key}': {message}")]
    IndexCorruption {
        /// The reserved key whose value was malformed
        key: String,
        /// Description of the decode failure
        message: String,
    },

    /// A batch input row could not be parsed
    ///
    /// This is a recoverable error - the malformed row is skipped and
    /// batch processing continues with the next row.
    #[error("Batch parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    BatchParse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Backend {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::BatchParse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an ArgumentCount error
    pub fn argument_count(kind: RecordKind, expected: usize, actual: usize) -> Self {
        LedgerError::ArgumentCount {
            kind,
            expected,
            actual,
        }
    }

    /// Create an EmptyField error
    pub fn empty_field(kind: RecordKind, position: usize, field: &'static str) -> Self {
        LedgerError::EmptyField {
            kind,
            position,
            field,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(
        kind: RecordKind,
        position: usize,
        field: &'static str,
        value: &str,
    ) -> Self {
        LedgerError::InvalidAmount {
            kind,
            position,
            field,
            value: value.to_string(),
        }
    }

    /// Create an InvalidCounter error
    pub fn invalid_counter(value: &str) -> Self {
        LedgerError::InvalidCounter {
            value: value.to_string(),
        }
    }

    /// Create a CommandUsage error
    pub fn command_usage(command: &str, expected: usize, actual: usize) -> Self {
        LedgerError::CommandUsage {
            command: command.to_string(),
            expected,
            actual,
        }
    }

    /// Create an UnknownCommand error
    pub fn unknown_command(command: &str) -> Self {
        LedgerError::UnknownCommand {
            command: command.to_string(),
        }
    }

    /// Create a ReservedKey error
    pub fn reserved_key(id: &str) -> Self {
        LedgerError::ReservedKey { id: id.to_string() }
    }

    /// Create an AlreadyExists error
    pub fn already_exists(id: &str) -> Self {
        LedgerError::AlreadyExists { id: id.to_string() }
    }

    /// Create a NotFound error
    pub fn not_found(key: &str) -> Self {
        LedgerError::NotFound {
            key: key.to_string(),
        }
    }

    /// Create a Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        LedgerError::Backend {
            message: message.into(),
        }
    }

    /// Create a DecodeFailure error
    pub fn decode_failure(key: &str, message: impl Into<String>) -> Self {
        LedgerError::DecodeFailure {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Create an EncodeFailure error
    pub fn encode_failure(message: impl Into<String>) -> Self {
        LedgerError::EncodeFailure {
            message: message.into(),
        }
    }

    /// Create an IndexCorruption error
    pub fn index_corruption(key: &str, message: impl Into<String>) -> Self {
        LedgerError::IndexCorruption {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::argument_count(
        LedgerError::ArgumentCount { kind: RecordKind::Payment, expected: 5, actual: 3 },
        "Incorrect number of arguments for payment record: expected 5, got 3"
    )]
    #[case::empty_field(
        LedgerError::EmptyField { kind: RecordKind::Payment, position: 5, field: "currency" },
        "Argument 5 (currency) for payment record must be a non-empty string"
    )]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { kind: RecordKind::SmartPay, position: 11, field: "amount", value: "abc".to_string() },
        "Argument 11 (amount) for smart-pay record must be a decimal number, got 'abc'"
    )]
    #[case::invalid_counter(
        LedgerError::InvalidCounter { value: "x".to_string() },
        "Genesis counter must be an integer, got 'x'"
    )]
    #[case::command_usage(
        LedgerError::CommandUsage { command: "read".to_string(), expected: 1, actual: 0 },
        "Command 'read' expects 1 argument(s), got 0"
    )]
    #[case::unknown_command(
        LedgerError::UnknownCommand { command: "frobnicate".to_string() },
        "Unknown command 'frobnicate'"
    )]
    #[case::reserved_key(
        LedgerError::ReservedKey { id: "_paymentindex".to_string() },
        "Record id '_paymentindex' uses the reserved '_' key prefix"
    )]
    #[case::already_exists(
        LedgerError::AlreadyExists { id: "tx1".to_string() },
        "Record 'tx1' already exists"
    )]
    #[case::not_found(
        LedgerError::NotFound { key: "tx9".to_string() },
        "Key 'tx9' not found"
    )]
    #[case::backend(
        LedgerError::Backend { message: "disk full".to_string() },
        "Ledger backend error: disk full"
    )]
    #[case::index_corruption(
        LedgerError::IndexCorruption { key: "_paymentindex".to_string(), message: "expected array".to_string() },
        "Malformed index under key '_paymentindex': expected array"
    )]
    #[case::batch_parse_with_line(
        LedgerError::BatchParse { line: Some(42), message: "ragged row".to_string() },
        "Batch parse error at line 42: ragged row"
    )]
    #[case::batch_parse_without_line(
        LedgerError::BatchParse { line: None, message: "ragged row".to_string() },
        "Batch parse error: ragged row"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::argument_count(
        LedgerError::argument_count(RecordKind::Lending, 7, 6),
        LedgerError::ArgumentCount { kind: RecordKind::Lending, expected: 7, actual: 6 }
    )]
    #[case::empty_field(
        LedgerError::empty_field(RecordKind::Payment, 2, "drawer id"),
        LedgerError::EmptyField { kind: RecordKind::Payment, position: 2, field: "drawer id" }
    )]
    #[case::already_exists(
        LedgerError::already_exists("tx1"),
        LedgerError::AlreadyExists { id: "tx1".to_string() }
    )]
    #[case::not_found(
        LedgerError::not_found("tx9"),
        LedgerError::NotFound { key: "tx9".to_string() }
    )]
    #[case::unknown_command(
        LedgerError::unknown_command("frobnicate"),
        LedgerError::UnknownCommand { command: "frobnicate".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Backend { .. }));
        assert_eq!(error.to_string(), "Ledger backend error: Permission denied");
    }
}
