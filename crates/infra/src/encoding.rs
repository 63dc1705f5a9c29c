//! Filter text normalization.
//!
//! Search text reaching the listing layer may be UTF-8 bytes that an upstream
//! decoder read as ISO-8859-1 (each byte became one char in U+0000..=U+00FF).
//! [`normalize_filter_text`] undoes that: map every char back to its byte and
//! decode the bytes as UTF-8.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The text cannot be ISO-8859-1 decoded bytes; it was likely decoded
    /// correctly already.
    #[error("char {ch:?} at byte {index} is outside ISO-8859-1")]
    NotLatin1 { ch: char, index: usize },

    #[error("re-decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Re-interpret ISO-8859-1-decoded text as UTF-8.
///
/// Precondition: `text` holds only chars up to U+00FF. Pure ASCII is returned
/// unchanged.
pub fn normalize_filter_text(text: &str) -> Result<String, EncodingError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        let byte = u8::try_from(u32::from(ch)).map_err(|_| EncodingError::NotLatin1 { ch, index })?;
        bytes.push(byte);
    }
    Ok(String::from_utf8(bytes)?)
}

/// [`normalize_filter_text`], falling back to the original text on failure.
///
/// The failure is not an error for the caller: it is logged and the text is
/// used as given.
pub fn normalize_or_keep(text: &str) -> String {
    match normalize_filter_text(text) {
        Ok(normalized) => normalized,
        Err(err) => {
            tracing::warn!(error = %err, "filter text normalization failed; using text as given");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What a Latin-1 decoder makes of UTF-8 input.
    fn mis_decode(s: &str) -> String {
        s.as_bytes().iter().map(|&b| char::from(b)).collect()
    }

    #[test]
    fn ascii_is_unchanged() {
        assert_eq!(normalize_filter_text("Zhang").unwrap(), "Zhang");
        assert_eq!(normalize_filter_text("").unwrap(), "");
    }

    #[test]
    fn mis_decoded_utf8_is_repaired() {
        let garbled = mis_decode("张伟");
        assert_ne!(garbled, "张伟");
        assert_eq!(normalize_filter_text(&garbled).unwrap(), "张伟");

        assert_eq!(normalize_filter_text(&mis_decode("café")).unwrap(), "café");
    }

    #[test]
    fn already_correct_unicode_is_rejected() {
        let err = normalize_filter_text("张伟").unwrap_err();
        assert_eq!(err, EncodingError::NotLatin1 { ch: '张', index: 0 });
    }

    #[test]
    fn lone_latin1_byte_is_invalid_utf8() {
        // 'é' as a single char is byte 0xE9, an incomplete UTF-8 sequence.
        let err = normalize_filter_text("café").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidUtf8(_)));
    }

    #[test]
    fn fallback_keeps_original_text() {
        assert_eq!(normalize_or_keep("张伟"), "张伟");
        assert_eq!(normalize_or_keep("café"), "café");
        assert_eq!(normalize_or_keep(&mis_decode("李娜")), "李娜");
    }
}
