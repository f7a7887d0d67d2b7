//! Schema validation and typed extraction for record arguments
//!
//! Every record arrives as a flat, ordered list of raw strings. This
//! module checks the list against the expected arity for the record kind,
//! verifies that string fields are non-empty, parses numeric fields as
//! decimals, and normalizes identifiers and currency codes to lowercase.
//! Amounts and dates pass through unmodified.
//!
//! All functions are pure (no I/O) for easy testing. Errors carry the
//! record kind and the 1-based absolute position of the offending
//! argument, so a bad remittance amount inside a smart-pay list reports
//! its position in the full 20-argument list, not within the sub-record.
//!
//! # Arities
//!
//! | Kind       | Arguments |
//! |------------|-----------|
//! | payment    | 5         |
//! | remittance | 7         |
//! | lending    | 7         |
//! | smart-pay  | 20 (5 + 7 + 7 + trailing composite id) |

use crate::types::{
    LedgerError, LendingTransaction, PaymentTransaction, RecordKind, RemittanceTransaction,
    SmartPayTransaction,
};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Positional field reader over a validated-length argument list
///
/// `base` offsets every access so that sub-records of a smart-pay list
/// report absolute positions. Length is checked once by the entry points
/// before any reader is constructed.
struct FieldReader<'a> {
    kind: RecordKind,
    args: &'a [String],
    base: usize,
}

impl<'a> FieldReader<'a> {
    fn new(kind: RecordKind, args: &'a [String], base: usize) -> Self {
        FieldReader { kind, args, base }
    }

    /// 1-based absolute position of the field at `offset`
    fn position(&self, offset: usize) -> usize {
        self.base + offset + 1
    }

    fn raw(&self, offset: usize, field: &'static str) -> Result<&'a str, LedgerError> {
        let value = self.args[self.base + offset].trim();
        if value.is_empty() {
            return Err(LedgerError::empty_field(
                self.kind,
                self.position(offset),
                field,
            ));
        }
        Ok(value)
    }

    /// Non-empty identifier or currency code, normalized to lowercase
    fn identifier(&self, offset: usize, field: &'static str) -> Result<String, LedgerError> {
        Ok(self.raw(offset, field)?.to_lowercase())
    }

    /// Non-empty opaque string, passed through unmodified (dates)
    fn opaque(&self, offset: usize, field: &'static str) -> Result<String, LedgerError> {
        Ok(self.raw(offset, field)?.to_string())
    }

    /// Non-empty decimal amount or rate
    fn amount(&self, offset: usize, field: &'static str) -> Result<Decimal, LedgerError> {
        let value = self.raw(offset, field)?;
        Decimal::from_str(value).map_err(|_| {
            LedgerError::invalid_amount(self.kind, self.position(offset), field, value)
        })
    }
}

fn check_arity(kind: RecordKind, args: &[String]) -> Result<(), LedgerError> {
    if args.len() != kind.arity() {
        return Err(LedgerError::argument_count(kind, kind.arity(), args.len()));
    }
    Ok(())
}

/// Build a payment record from its 5 positional arguments
///
/// Field order: payment id, drawer id, payee id, amount, currency.
///
/// # Errors
///
/// Returns an error if the argument count is wrong, any field is empty,
/// or the amount does not parse as a decimal number.
pub fn payment_from_args(args: &[String]) -> Result<PaymentTransaction, LedgerError> {
    check_arity(RecordKind::Payment, args)?;
    parse_payment(FieldReader::new(RecordKind::Payment, args, 0))
}

/// Build a smart-pay record from its 20 positional arguments
///
/// Field order: the 5 payment fields, then the 7 remittance fields, then
/// the 7 lending fields, then the trailing composite id. No partial
/// composites exist; every nested record must validate in full.
///
/// # Errors
///
/// Returns an error identifying the absolute 1-based position of the
/// first argument that fails validation.
pub fn smart_pay_from_args(args: &[String]) -> Result<SmartPayTransaction, LedgerError> {
    check_arity(RecordKind::SmartPay, args)?;

    let payment = parse_payment(FieldReader::new(RecordKind::SmartPay, args, 0))?;
    let remittance = parse_remittance(FieldReader::new(RecordKind::SmartPay, args, 5))?;
    let lending = parse_lending(FieldReader::new(RecordKind::SmartPay, args, 12))?;
    let smart_pay_id =
        FieldReader::new(RecordKind::SmartPay, args, 19).identifier(0, "smart-pay id")?;

    Ok(SmartPayTransaction {
        smart_pay_id,
        payment,
        remittance,
        lending,
    })
}

/// Parse the genesis counter argument supplied to `init`
///
/// # Errors
///
/// Returns an error if there is not exactly one argument or the value
/// is not an integer.
pub fn genesis_counter_from_args(args: &[String]) -> Result<i64, LedgerError> {
    if args.len() != 1 {
        return Err(LedgerError::command_usage("init", 1, args.len()));
    }
    args[0]
        .trim()
        .parse::<i64>()
        .map_err(|_| LedgerError::invalid_counter(&args[0]))
}

fn parse_payment(f: FieldReader<'_>) -> Result<PaymentTransaction, LedgerError> {
    Ok(PaymentTransaction {
        payment_id: f.identifier(0, "payment id")?,
        drawer_id: f.identifier(1, "drawer id")?,
        payee_id: f.identifier(2, "payee id")?,
        amount: f.amount(3, "amount")?,
        currency: f.identifier(4, "currency")?,
    })
}

fn parse_remittance(f: FieldReader<'_>) -> Result<RemittanceTransaction, LedgerError> {
    Ok(RemittanceTransaction {
        remittance_id: f.identifier(0, "remittance id")?,
        source_id: f.identifier(1, "source id")?,
        source_currency: f.identifier(2, "source currency")?,
        destination_id: f.identifier(3, "destination id")?,
        destination_currency: f.identifier(4, "destination currency")?,
        amount: f.amount(5, "amount")?,
        exchange_rate: f.amount(6, "exchange rate")?,
    })
}

fn parse_lending(f: FieldReader<'_>) -> Result<LendingTransaction, LedgerError> {
    Ok(LendingTransaction {
        lending_id: f.identifier(0, "lending id")?,
        lender_id: f.identifier(1, "lender id")?,
        borrower_id: f.identifier(2, "borrower id")?,
        loan_amount: f.amount(3, "loan amount")?,
        currency: f.identifier(4, "currency")?,
        loan_rate: f.amount(5, "loan rate")?,
        return_date: f.opaque(6, "return date")?,
    })
}
