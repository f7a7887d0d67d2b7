//! SmartPay Record Ledger CLI
//!
//! Command-line interface for applying record-ledger commands against a
//! file-backed key-value ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- init 100
//! cargo run -- create-payment tx1 alice bob 35.50 usd
//! cargo run -- read tx1
//! cargo run -- delete tx1
//! cargo run -- --batch script.csv
//! cargo run -- --ledger state.json read tx1
//! ```
//!
//! Single-command mode dispatches one invocation and prints the `read`
//! result to stdout. Batch mode streams invocations from a CSV script;
//! malformed or failing rows are reported to stderr and skipped, and
//! processing continues with the next row.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad arguments, unknown command, ledger failure, etc.)

use smartpay_ledger::core::dispatch;
use smartpay_ledger::io::BatchReader;
use smartpay_ledger::{FileLedger, LedgerError, RecordStore};
use std::path::Path;
use std::process;

fn main() {
    let args = smartpay_ledger::cli::parse_args();

    let ledger = match FileLedger::open(&args.ledger_file) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let mut store = RecordStore::new(ledger);

    let result = match (&args.command, &args.batch_file) {
        (Some(command), None) => run_single(&mut store, command, &args.args),
        (None, Some(batch_file)) => run_batch(&mut store, batch_file),
        // clap enforces exactly one of the two
        _ => unreachable!("clap requires a command or --batch"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Dispatch one invocation; print the reply bytes of a `read`
fn run_single(
    store: &mut RecordStore<FileLedger>,
    command: &str,
    args: &[String],
) -> Result<(), LedgerError> {
    if let Some(bytes) = dispatch(store, command, args)? {
        println!("{}", String::from_utf8_lossy(&bytes));
    }
    Ok(())
}

/// Stream a batch script, skipping recoverable per-row failures
///
/// Only opening the script is fatal; every row error is reported to
/// stderr and the next row is processed.
fn run_batch(store: &mut RecordStore<FileLedger>, path: &Path) -> Result<(), LedgerError> {
    for row in BatchReader::new(path)? {
        let line = match row {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match dispatch(store, &line.command, &line.args) {
            Ok(Some(bytes)) => println!("{}", String::from_utf8_lossy(&bytes)),
            Ok(None) => {}
            Err(e) => eprintln!("Error: line {}: {}", line.line, e),
        }
    }
    Ok(())
}
