//! Stable per-transaction identifier derivation.
//!
//! OFX consumers deduplicate imported transactions by FITID, so the
//! identifier must be stable across repeated conversions of the same
//! statement and distinct for every record in it.

use crate::transaction::Transaction;
use sha1::{Digest, Sha1};

/// Number of hex characters kept from the digest.
const FITID_LEN: usize = 16;

/// Derives the FITID for a transaction at position `index` in the batch.
///
/// The digest input is the concatenation of the normalized date, the
/// sanitized description, the 2-decimal amount rendering, and the zero-based
/// batch index. Including the index means duplicate statement lines (same
/// date, description, and amount) still receive distinct identifiers.
pub fn generate(tx: &Transaction, index: usize) -> String {
    let mut hasher = Sha1::new();
    hasher.update(tx.posted_date().as_bytes());
    hasher.update(tx.description.as_bytes());
    hasher.update(tx.amount.to_string().as_bytes());
    hasher.update(index.to_string().as_bytes());

    let hex = format!("{:x}", hasher.finalize());
    hex[..FITID_LEN].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn sample_tx() -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "Pagamento Fornecedor".to_string(),
            amount: Amount::from_str("1500.00").unwrap(),
        }
    }

    #[test]
    fn test_length_and_charset() {
        let id = generate(&sample_tx(), 0);
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, id.to_uppercase());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(&sample_tx(), 3), generate(&sample_tx(), 3));
    }

    #[test]
    fn test_index_distinguishes_duplicates() {
        assert_ne!(generate(&sample_tx(), 0), generate(&sample_tx(), 1));
    }

    #[test]
    fn test_fields_participate() {
        let base = generate(&sample_tx(), 0);

        let mut other_date = sample_tx();
        other_date.date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_ne!(generate(&other_date, 0), base);

        let mut other_desc = sample_tx();
        other_desc.description = "Pagamento Cliente".to_string();
        assert_ne!(generate(&other_desc, 0), base);

        let mut other_amount = sample_tx();
        other_amount.amount = Amount::from_str("1500.01").unwrap();
        assert_ne!(generate(&other_amount, 0), base);
    }
}
