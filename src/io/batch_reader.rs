//! Streaming CSV reader for batch command scripts
//!
//! A batch script is a headerless CSV file with one invocation per row:
//! the command name first, then its positional arguments. Rows have
//! variable length because arities differ per command, so the reader is
//! configured flexible.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row parsing errors are yielded as Err variants in the
//!   iterator, with line numbers for debugging; callers skip them and
//!   continue with the next row
//!
//! The reader streams rows one at a time and never loads the whole
//! script into memory.

use crate::types::LedgerError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// One parsed batch invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLine {
    /// 1-based line the invocation was read from
    pub line: u64,

    /// The command name, as written
    pub command: String,

    /// The positional arguments following the command name
    pub args: Vec<String>,
}

/// Streaming batch script reader
///
/// Implements `Iterator`, yielding `Result<CommandLine, LedgerError>`
/// per row.
#[derive(Debug)]
pub struct BatchReader {
    reader: csv::Reader<File>,
}

impl BatchReader {
    /// Open a batch script at `path`
    ///
    /// The CSV reader is configured to:
    /// - Treat every row as data (no header row)
    /// - Trim whitespace from all fields
    /// - Allow variable field counts per row
    /// - Skip `#`-prefixed comment lines
    ///
    /// # Errors
    ///
    /// Returns a backend error if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| {
            LedgerError::backend(format!("failed to open batch file '{}': {}", path.display(), e))
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(file);

        Ok(Self { reader })
    }

    fn convert(record: StringRecord) -> Result<CommandLine, LedgerError> {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        let mut fields = record.iter();
        let command = match fields.next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(LedgerError::BatchParse {
                    line: Some(line),
                    message: "row has no command name".to_string(),
                })
            }
        };
        let args = fields.map(|field| field.to_string()).collect();

        Ok(CommandLine {
            line,
            command,
            args,
        })
    }
}

impl Iterator for BatchReader {
    type Item = Result<CommandLine, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Self::convert(record)),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
