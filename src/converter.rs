//! Core statement conversion engine.
//!
//! Feeds extracted page text through a line grammar, accumulating
//! recognized transactions in document order (page order, then line order).
//! Lines that fail recognition are skipped, counted, and logged; they are
//! never an error at this level.

use crate::config::ConvertConfig;
use crate::grammar::{DayMonthYearGrammar, LineGrammar};
use crate::ofx;
use crate::transaction::Transaction;
use log::{debug, warn};

/// The statement conversion engine.
///
/// Pages are processed to completion before the document is assembled; no
/// partial output is ever produced. Each converter instance handles one
/// batch and holds no state across runs.
pub struct StatementConverter {
    /// Injected settings (account identity, currency, limits).
    config: ConvertConfig,

    /// Grammar used to recognize transactions, one per statement layout.
    grammar: Box<dyn LineGrammar>,

    /// Recognized transactions in document order.
    transactions: Vec<Transaction>,

    /// Non-empty lines that did not yield a transaction.
    skipped_lines: usize,
}

impl StatementConverter {
    /// Creates a converter using the default `DD/MM/YYYY` grammar.
    pub fn new(config: ConvertConfig) -> Self {
        Self::with_grammar(config, Box::new(DayMonthYearGrammar))
    }

    /// Creates a converter with an explicit line grammar.
    pub fn with_grammar(config: ConvertConfig, grammar: Box<dyn LineGrammar>) -> Self {
        StatementConverter {
            config,
            grammar,
            transactions: Vec::new(),
            skipped_lines: 0,
        }
    }

    /// Processes the text of a single page, line by line.
    ///
    /// Returns the number of transactions recognized on this page.
    pub fn process_page(&mut self, text: &str) -> usize {
        let mut recognized = 0;

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }

            match self.grammar.recognize(line) {
                Some(tx) => {
                    debug!(
                        "Recognized transaction: {} {} {}",
                        tx.posted_date(),
                        tx.amount,
                        tx.description
                    );
                    self.transactions.push(tx);
                    recognized += 1;
                }
                None => {
                    self.skipped_lines += 1;
                }
            }
        }

        recognized
    }

    /// Processes pages in order.
    ///
    /// A page with no recognized transactions is logged at warn level but
    /// contributes nothing; only a fully empty batch is treated as an error,
    /// and by the caller, not here.
    pub fn process_pages<'a, I>(&mut self, pages: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (page_idx, text) in pages.into_iter().enumerate() {
            let recognized = self.process_page(text);
            if recognized == 0 {
                warn!("Page {}: no transactions recognized", page_idx + 1);
            } else {
                debug!("Page {}: {} transaction(s)", page_idx + 1, recognized);
            }
        }

        if self.skipped_lines > 0 {
            debug!("{} non-matching line(s) skipped in total", self.skipped_lines);
        }
    }

    /// Recognized transactions in document order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of non-empty lines that did not yield a transaction.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Renders the OFX document for the accumulated batch.
    pub fn build_document(&self) -> String {
        ofx::build_document(&self.transactions, &self.config)
    }
}

impl Default for StatementConverter {
    fn default() -> Self {
        Self::new(ConvertConfig::default())
    }
}
