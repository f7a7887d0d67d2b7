//! Invocation router
//!
//! Maps an incoming command name plus a flat ordered argument list to a
//! record store operation. Command names match case-insensitively; the
//! argument lists are plain strings with no structured request format.
//!
//! Raw-operation arity is checked here; record-argument validation is
//! the schema validator's job and happens inside the store.

use crate::core::schema;
use crate::core::store::RecordStore;
use crate::core::traits::KeyValueLedger;
use crate::types::LedgerError;

/// Commands exposed by the invocation surface
///
/// | Command            | Arguments            | Effect                       |
/// |--------------------|----------------------|------------------------------|
/// | `init`             | counter              | genesis reset                |
/// | `read`             | key                  | raw read, returns bytes      |
/// | `write`            | key, value           | raw put                      |
/// | `write-tagged`     | key, value           | raw put with marker prefix   |
/// | `delete`           | key                  | idempotent delete + unindex  |
/// | `create-payment`   | 5 payment fields     | validated create             |
/// | `create-smart-pay` | 20 smart-pay fields  | validated composite create   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init,
    Read,
    Write,
    WriteTagged,
    Delete,
    CreatePayment,
    CreateSmartPay,
}

impl Command {
    /// Parse a command name, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCommand`] for any unrecognized name.
    pub fn parse(name: &str) -> Result<Self, LedgerError> {
        match name.to_lowercase().as_str() {
            "init" => Ok(Command::Init),
            "read" => Ok(Command::Read),
            "write" => Ok(Command::Write),
            "write-tagged" => Ok(Command::WriteTagged),
            "delete" => Ok(Command::Delete),
            "create-payment" => Ok(Command::CreatePayment),
            "create-smart-pay" => Ok(Command::CreateSmartPay),
            _ => Err(LedgerError::unknown_command(name)),
        }
    }

    /// Canonical name, as routed and as printed in errors
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Read => "read",
            Command::Write => "write",
            Command::WriteTagged => "write-tagged",
            Command::Delete => "delete",
            Command::CreatePayment => "create-payment",
            Command::CreateSmartPay => "create-smart-pay",
        }
    }
}

/// Dispatch one invocation against the store
///
/// `read` returns the stored bytes; every other command returns `None`
/// on success.
///
/// # Errors
///
/// Returns the validation, routing, or store error of the dispatched
/// operation unchanged.
pub fn dispatch<L: KeyValueLedger>(
    store: &mut RecordStore<L>,
    command: &str,
    args: &[String],
) -> Result<Option<Vec<u8>>, LedgerError> {
    match Command::parse(command)? {
        Command::Init => {
            let counter = schema::genesis_counter_from_args(args)?;
            store.reset(counter)?;
            Ok(None)
        }
        Command::Read => {
            let key = single_arg(Command::Read, args)?;
            store.read_raw(key).map(Some)
        }
        Command::Write => {
            let (key, value) = pair_args(Command::Write, args)?;
            store.write_raw(key, value.as_bytes())?;
            Ok(None)
        }
        Command::WriteTagged => {
            let (key, value) = pair_args(Command::WriteTagged, args)?;
            store.write_tagged(key, value.as_bytes())?;
            Ok(None)
        }
        Command::Delete => {
            let key = single_arg(Command::Delete, args)?;
            store.delete(key)?;
            Ok(None)
        }
        Command::CreatePayment => {
            store.create_payment(args)?;
            Ok(None)
        }
        Command::CreateSmartPay => {
            store.create_smart_pay(args)?;
            Ok(None)
        }
    }
}

fn single_arg(command: Command, args: &[String]) -> Result<&str, LedgerError> {
    match args {
        [key] => Ok(key),
        _ => Err(LedgerError::command_usage(command.name(), 1, args.len())),
    }
}

fn pair_args(command: Command, args: &[String]) -> Result<(&str, &str), LedgerError> {
    match args {
        [key, value] => Ok((key, value)),
        _ => Err(LedgerError::command_usage(command.name(), 2, args.len())),
    }
}
