//! Transaction record and credit/debit classification.

use crate::amount::Amount;
use chrono::NaiveDate;

/// A single recognized statement transaction.
///
/// Records are created by the line grammar during parsing, are immutable,
/// and are consumed in document order by the OFX builder. Position within
/// the batch is not stored here; the builder derives it by enumeration when
/// generating identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Posting date as recognized from the statement line.
    pub date: NaiveDate,

    /// Sanitized description text (no control bytes, reserved characters escaped).
    pub description: String,

    /// Signed amount; the sign determines the transaction type.
    pub amount: Amount,
}

impl Transaction {
    /// Returns the date in the 8-digit YYYYMMDD form OFX uses.
    pub fn posted_date(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// Classifies this transaction by the sign of its amount.
    pub fn trn_type(&self) -> TrnType {
        if self.amount.is_negative() {
            TrnType::Debit
        } else {
            TrnType::Credit
        }
    }
}

/// OFX transaction type.
///
/// Non-negative amounts are credits; negative amounts are debits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrnType {
    /// Funds into the account (amount >= 0).
    Credit,

    /// Funds out of the account (amount < 0).
    Debit,
}

impl TrnType {
    /// The TRNTYPE field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrnType::Credit => "CREDIT",
            TrnType::Debit => "DEBIT",
        }
    }
}
