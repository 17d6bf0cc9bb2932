// ABOUTME: Byte-to-text decoding for HTML input of unknown encoding.
// ABOUTME: Uses an explicit charset label when known, otherwise chardetng detection.

use tracing::debug;

/// Decode HTML bytes to a String.
///
/// `hint` may be a bare label (`"iso-8859-1"`) or a Content-Type value
/// (`"text/html; charset=iso-8859-1"`). Unknown labels fall back to detection.
pub fn decode_html(bytes: &[u8], hint: Option<&str>) -> String {
    if let Some(label) = hint.and_then(charset_label) {
        if let Some(encoding) = encoding_rs::Encoding::for_label(label.as_bytes()) {
            let (decoded, _, had_errors) = encoding.decode(bytes);
            debug!(encoding = encoding.name(), had_errors, "decoded with charset hint");
            return decoded.into_owned();
        }
        debug!(label = %label, "unknown charset label, falling back to detection");
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, had_errors) = encoding.decode(bytes);
    debug!(encoding = encoding.name(), had_errors, "decoded with detected charset");
    decoded.into_owned()
}

/// Pull the charset label out of a hint string.
fn charset_label(hint: &str) -> Option<String> {
    let lower = hint.trim().to_lowercase();
    if !lower.contains('=') && !lower.contains(';') {
        return (!lower.is_empty()).then_some(lower);
    }
    for part in lower.split(';') {
        if let Some(charset) = part.trim().strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_label() {
        assert_eq!(
            charset_label("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            charset_label("text/html; charset=\"ISO-8859-1\""),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(charset_label("Windows-1252"), Some("windows-1252".to_string()));
        assert_eq!(charset_label("text/html;"), None);
        assert_eq!(charset_label("  "), None);
    }

    #[test]
    fn test_decode_with_hint() {
        let decoded = decode_html(&[0x63, 0x61, 0x66, 0xe9], Some("iso-8859-1"));
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_decode_utf8_passthrough() {
        let decoded = decode_html("<p>héllo</p>".as_bytes(), Some("text/html; charset=utf-8"));
        assert_eq!(decoded, "<p>héllo</p>");
    }

    #[test]
    fn test_decode_detects_latin1_without_hint() {
        let decoded = decode_html(&[0x63, 0x61, 0x66, 0xe9], None);
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_unknown_label_falls_back_to_detection() {
        let decoded = decode_html(b"plain ascii", Some("not-a-charset"));
        assert_eq!(decoded, "plain ascii");
    }
}
