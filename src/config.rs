//! Conversion settings.
//!
//! Every value that was a constant in earlier iterations of this tool
//! (page ceiling, account identifier, currency) is injected through this
//! struct so callers can adjust it without touching the core.

/// Settings for a single conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Maximum number of pages accepted before the run is aborted.
    /// Guards against pathologically large inputs.
    pub max_pages: usize,

    /// Bank identifier emitted in the BANKACCTFROM block.
    pub bank_id: String,

    /// Account identifier emitted verbatim in the BANKACCTFROM block.
    /// No format validation is performed.
    pub account_id: String,

    /// Currency designation for the CURDEF field.
    pub currency: String,

    /// Language code for the sign-on response.
    pub language: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            max_pages: 200,
            bank_id: "0000".to_string(),
            account_id: "CONTA001".to_string(),
            currency: "BRL".to_string(),
            language: "POR".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ConvertConfig::default();
        assert_eq!(config.max_pages, 200);
        assert_eq!(config.bank_id, "0000");
        assert_eq!(config.account_id, "CONTA001");
        assert_eq!(config.currency, "BRL");
        assert_eq!(config.language, "POR");
    }
}
