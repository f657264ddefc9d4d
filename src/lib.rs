//! # statement2ofx
//!
//! Converts bank-statement text (already extracted from PDF by an external
//! stage) into an OFX 1.02 document suitable for accounting-software import.
//!
//! ## Design Principles
//!
//! - **Line grammars**: transactions are recognized per line via the
//!   pluggable [`LineGrammar`] trait, one implementation per statement layout
//! - **Fixed-point arithmetic**: amounts use 2 decimal places via `rust_decimal`
//! - **Batch processing**: all pages are parsed before the document is
//!   assembled; no partial output
//! - **Stable identifiers**: each transaction gets a deterministic FITID so
//!   repeated imports deduplicate correctly
//!
//! ## Example
//!
//! ```
//! use statement2ofx::{ConvertConfig, StatementConverter};
//!
//! let mut converter = StatementConverter::new(ConvertConfig::default());
//! converter.process_pages(["01/03/2024 Pagamento Fornecedor 1.500,00"]);
//! let document = converter.build_document();
//! assert!(document.contains("<TRNAMT>1500.00</TRNAMT>"));
//! ```

pub mod amount;
pub mod config;
pub mod converter;
pub mod error;
pub mod fitid;
pub mod grammar;
pub mod ofx;
pub mod sanitize;
pub mod transaction;

pub use amount::Amount;
pub use config::ConvertConfig;
pub use converter::StatementConverter;
pub use error::{ConvertError, Result};
pub use grammar::{DayMonthYearGrammar, LineGrammar};
pub use transaction::{Transaction, TrnType};
