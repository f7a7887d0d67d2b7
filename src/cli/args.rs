use clap::Parser;
use std::path::PathBuf;

/// Apply record-ledger commands against a file-backed key-value ledger
#[derive(Parser, Debug)]
#[command(name = "smartpay-ledger")]
#[command(about = "Transactional record store over a key-value ledger", long_about = None)]
pub struct CliArgs {
    /// Command to dispatch (init, read, write, write-tagged, delete,
    /// create-payment, create-smart-pay)
    #[arg(
        value_name = "COMMAND",
        required_unless_present = "batch_file",
        conflicts_with = "batch_file"
    )]
    pub command: Option<String>,

    /// Positional arguments for the command
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Path of the ledger snapshot file
    #[arg(
        long = "ledger",
        value_name = "FILE",
        default_value = "ledger.json",
        help = "Path of the JSON ledger snapshot to read and write"
    )]
    pub ledger_file: PathBuf,

    /// Batch script of commands to apply, one CSV row per invocation
    #[arg(
        long = "batch",
        value_name = "FILE",
        help = "CSV script: command name first, then its arguments"
    )]
    pub batch_file: Option<PathBuf>,
}
