//! Free-text sanitization for OFX output.

/// Sanitizes a description for embedding in an OFX document.
///
/// Two ordered passes: control characters (0x00-0x1F and 0x7F) are removed
/// first, then the SGML-reserved characters `&`, `<`, `>` are escaped. The
/// order guarantees the entity text introduced by the second pass is never
/// itself stripped.
pub fn sanitize(value: &str) -> String {
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, '\u{00}'..='\u{1f}' | '\u{7f}'))
        .collect();

    stripped
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_reserved_characters() {
        assert_eq!(sanitize("A & B < C"), "A &amp; B &lt; C");
        assert_eq!(sanitize("x > y"), "x &gt; y");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize("pay\u{07}ment"), "payment");
        assert_eq!(sanitize("tab\there"), "tabhere");
        assert_eq!(sanitize("del\u{7f}ete"), "delete");
    }

    #[test]
    fn test_strip_happens_before_escape() {
        // The '&' survives stripping and is then escaped; the escape's
        // own characters are never subject to the control filter.
        assert_eq!(sanitize("a\u{01}&b"), "a&amp;b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("Pagamento Fornecedor"), "Pagamento Fornecedor");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(sanitize("Transferência"), "Transferência");
    }
}
