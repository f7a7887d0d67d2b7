//! Record types for the SmartPay record ledger
//!
//! This module defines the four record kinds the ledger stores: simple
//! payments, currency remittances, loans, and the composite smart-pay
//! bundle that nests one of each.
//!
//! All records are serde-derived with camelCase field tags; the codec
//! module relies on these derives for its stable, self-describing encoding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier
///
/// Record ids double as ledger keys; they share a single key namespace
/// across all record kinds.
pub type RecordId = String;

/// Record kinds known to the ledger
///
/// Payment and SmartPay records are persisted standalone and indexed.
/// Remittance and Lending records only occur nested inside a smart-pay
/// bundle and are never written under their own key by any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A simple payment between a drawer and a payee
    Payment,

    /// A cross-currency remittance
    Remittance,

    /// A loan with a rate and return date
    Lending,

    /// The composite bundle nesting one payment, one remittance, and one loan
    SmartPay,
}

impl RecordKind {
    /// Number of positional arguments a record of this kind is built from
    ///
    /// The smart-pay arity is the three nested records back to back plus
    /// one trailing composite id.
    pub fn arity(&self) -> usize {
        match self {
            RecordKind::Payment => 5,
            RecordKind::Remittance => 7,
            RecordKind::Lending => 7,
            RecordKind::SmartPay => 5 + 7 + 7 + 1,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Payment => "payment",
            RecordKind::Remittance => "remittance",
            RecordKind::Lending => "lending",
            RecordKind::SmartPay => "smart-pay",
        };
        write!(f, "{}", name)
    }
}

/// A simple payment record
///
/// Created by a single validated write and never mutated in place;
/// the only way to change its fields is delete-then-recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    /// Unique record id, also the ledger key (lowercased)
    pub payment_id: RecordId,

    /// Party the payment is drawn from (lowercased)
    pub drawer_id: String,

    /// Party the payment is made to (lowercased)
    pub payee_id: String,

    /// Payment amount
    pub amount: Decimal,

    /// Currency code (lowercased)
    pub currency: String,
}

/// A cross-currency remittance record
///
/// Only exists nested inside a [`SmartPayTransaction`]; no exposed
/// operation persists one standalone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemittanceTransaction {
    /// Unique record id (lowercased)
    pub remittance_id: RecordId,

    /// Sending party (lowercased)
    pub source_id: String,

    /// Currency the amount is sent in (lowercased)
    pub source_currency: String,

    /// Receiving party (lowercased)
    pub destination_id: String,

    /// Currency the amount is received in (lowercased)
    pub destination_currency: String,

    /// Remitted amount, denominated in the source currency
    pub amount: Decimal,

    /// Conversion rate applied between the two currencies
    pub exchange_rate: Decimal,
}

/// A loan record
///
/// Only exists nested inside a [`SmartPayTransaction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingTransaction {
    /// Unique record id (lowercased)
    pub lending_id: RecordId,

    /// Lending party (lowercased)
    pub lender_id: String,

    /// Borrowing party (lowercased)
    pub borrower_id: String,

    /// Principal amount of the loan
    pub loan_amount: Decimal,

    /// Currency code (lowercased)
    pub currency: String,

    /// Interest rate applied to the loan
    pub loan_rate: Decimal,

    /// Date the loan is due back, stored as supplied (format is opaque)
    pub return_date: String,
}

/// The composite smart-pay record
///
/// An atomic bundle of one payment, one remittance, and one loan, built
/// in full from a single flat argument list. The nested records are
/// embedded by value, so this record is the single source of truth for
/// all four ids even though only the composite id is keyed and indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartPayTransaction {
    /// Unique record id, also the ledger key (lowercased)
    pub smart_pay_id: RecordId,

    /// The nested payment
    pub payment: PaymentTransaction,

    /// The nested remittance
    pub remittance: RemittanceTransaction,

    /// The nested loan
    pub lending: LendingTransaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_per_kind() {
        assert_eq!(RecordKind::Payment.arity(), 5);
        assert_eq!(RecordKind::Remittance.arity(), 7);
        assert_eq!(RecordKind::Lending.arity(), 7);
        assert_eq!(RecordKind::SmartPay.arity(), 20);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RecordKind::Payment.to_string(), "payment");
        assert_eq!(RecordKind::Remittance.to_string(), "remittance");
        assert_eq!(RecordKind::Lending.to_string(), "lending");
        assert_eq!(RecordKind::SmartPay.to_string(), "smart-pay");
    }
}
