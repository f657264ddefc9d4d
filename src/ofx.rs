//! OFX 1.02 (SGML) document rendering.
//!
//! Assembles the complete interchange document from an ordered transaction
//! batch: fixed protocol header, sign-on response, one statement response
//! with a single account block, and the bounded transaction list.

use crate::config::ConvertConfig;
use crate::fitid;
use crate::transaction::Transaction;
use chrono::{DateTime, Utc};

/// Renders the OFX document for `transactions`, timestamped with the
/// current instant.
///
/// Transactions are emitted in input order. An empty batch still yields a
/// structurally valid document whose envelope dates default to the
/// generation date; whether an empty batch is acceptable at all is the
/// caller's decision.
pub fn build_document(transactions: &[Transaction], config: &ConvertConfig) -> String {
    render(transactions, config, Utc::now())
}

/// Renders the document with an explicit generation instant.
///
/// `DTSERVER` reports this instant, not any transaction time.
pub fn render(
    transactions: &[Transaction],
    config: &ConvertConfig,
    generated_at: DateTime<Utc>,
) -> String {
    let now = generated_at.format("%Y%m%d%H%M%S").to_string();

    let (dtstart, dtend) = match (
        transactions.iter().map(|t| t.date).min(),
        transactions.iter().map(|t| t.date).max(),
    ) {
        (Some(min), Some(max)) => (
            min.format("%Y%m%d").to_string(),
            max.format("%Y%m%d").to_string(),
        ),
        _ => (now[..8].to_string(), now[..8].to_string()),
    };

    let mut stmttrn_blocks = Vec::with_capacity(transactions.len());
    for (index, tx) in transactions.iter().enumerate() {
        stmttrn_blocks.push(format!(
            "<STMTTRN>\n\
             <TRNTYPE>{trntype}</TRNTYPE>\n\
             <DTPOSTED>{dtposted}</DTPOSTED>\n\
             <TRNAMT>{trnamt}</TRNAMT>\n\
             <FITID>{fitid}</FITID>\n\
             <MEMO>{memo}</MEMO>\n\
             </STMTTRN>",
            trntype = tx.trn_type().as_str(),
            dtposted = tx.posted_date(),
            trnamt = tx.amount,
            fitid = fitid::generate(tx, index),
            memo = tx.description,
        ));
    }
    let transactions_block = stmttrn_blocks.join("\n");

    format!(
        "OFXHEADER:100\n\
         DATA:OFXSGML\n\
         VERSION:102\n\
         SECURITY:NONE\n\
         ENCODING:USASCII\n\
         CHARSET:1252\n\
         COMPRESSION:NONE\n\
         OLDFILEUID:NONE\n\
         NEWFILEUID:NONE\n\
         \n\
         <OFX>\n\
         <SIGNONMSGSRSV1>\n\
         <SONRS>\n\
         <STATUS>\n\
         <CODE>0</CODE>\n\
         <SEVERITY>INFO</SEVERITY>\n\
         </STATUS>\n\
         <DTSERVER>{now}</DTSERVER>\n\
         <LANGUAGE>{language}</LANGUAGE>\n\
         </SONRS>\n\
         </SIGNONMSGSRSV1>\n\
         <BANKMSGSRSV1>\n\
         <STMTTRNRS>\n\
         <TRNUID>1</TRNUID>\n\
         <STATUS>\n\
         <CODE>0</CODE>\n\
         <SEVERITY>INFO</SEVERITY>\n\
         </STATUS>\n\
         <STMTRS>\n\
         <CURDEF>{currency}</CURDEF>\n\
         <BANKACCTFROM>\n\
         <BANKID>{bank_id}</BANKID>\n\
         <ACCTID>{account_id}</ACCTID>\n\
         <ACCTTYPE>CHECKING</ACCTTYPE>\n\
         </BANKACCTFROM>\n\
         <BANKTRANLIST>\n\
         <DTSTART>{dtstart}</DTSTART>\n\
         <DTEND>{dtend}</DTEND>\n\
         {transactions_block}\n\
         </BANKTRANLIST>\n\
         </STMTRS>\n\
         </STMTTRNRS>\n\
         </BANKMSGSRSV1>\n\
         </OFX>\n",
        now = now,
        language = config.language,
        currency = config.currency,
        bank_id = config.bank_id,
        account_id = config.account_id,
        dtstart = dtstart,
        dtend = dtend,
        transactions_block = transactions_block,
    )
}

/// Encodes the document as the single-byte stream its header declares.
///
/// Characters outside the ASCII range are substituted with `?`.
pub fn to_ascii_lossy(document: &str) -> Vec<u8> {
    document
        .chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}
