//! Line grammars for recognizing transactions in extracted statement text.
//!
//! Each supported statement layout gets one `LineGrammar` implementation.
//! The converter trial-matches every line against the injected grammar and
//! silently discards lines that do not form a valid transaction.

use crate::amount::Amount;
use crate::sanitize::sanitize;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Recognizes a transaction within one line of extracted text.
///
/// Implementations return `None` for lines that do not match their layout
/// or that match but fail date/amount normalization. Failures are never
/// errors at this level; the converter counts them and moves on.
pub trait LineGrammar {
    /// Attempts to recognize a transaction in `line`.
    fn recognize(&self, line: &str) -> Option<Transaction>;
}

/// Grammar for the `DD/MM/YYYY <description> <amount>` statement layout.
///
/// The amount must be the last token on the line: optional sign, 1-3 digits,
/// optional `.`-separated thousands groups, then `,` and exactly two decimal
/// digits (e.g. `-1.234,56`). Only single-line transactions are recognized;
/// descriptions wrapped across lines are not reconstructed.
#[derive(Debug, Default)]
pub struct DayMonthYearGrammar;

fn line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}/\d{2}/\d{4})\s+(.+?)\s+([-+]?\d{1,3}(?:\.\d{3})*,\d{2})\s*$")
            .expect("statement line regex")
    })
}

impl LineGrammar for DayMonthYearGrammar {
    fn recognize(&self, line: &str) -> Option<Transaction> {
        let caps = line_pattern().captures(line.trim())?;

        let raw_date = &caps[1];
        let raw_description = &caps[2];
        let raw_amount = &caps[3];

        let date = match NaiveDate::parse_from_str(raw_date, "%d/%m/%Y") {
            Ok(d) => d,
            Err(_) => {
                debug!("Discarding line with invalid calendar date {:?}", raw_date);
                return None;
            }
        };

        let amount = match Amount::from_localized(raw_amount) {
            Ok(a) => a,
            Err(_) => {
                debug!("Discarding line with unparseable amount {:?}", raw_amount);
                return None;
            }
        };

        Some(Transaction {
            date,
            description: sanitize(raw_description.trim()),
            amount,
        })
    }
}
