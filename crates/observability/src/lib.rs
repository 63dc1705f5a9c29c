//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// The output format comes from `LOG_FORMAT` (`json` by default, `pretty`
/// for local runs). An unparseable value falls back to the default and is
/// reported once the subscriber is installed. Safe to call multiple times;
/// subsequent calls are no-ops.
pub fn init() {
    let raw = std::env::var("LOG_FORMAT").ok();
    let (format, rejected) = resolve_log_format(raw.as_deref());
    tracing::init(format);

    if let Some(value) = rejected {
        ::tracing::warn!(
            key = "LOG_FORMAT",
            value = %value,
            default = ?format,
            "unparseable setting; using default"
        );
    }
}

/// Format selected by a raw `LOG_FORMAT` value, plus the value itself when it
/// was rejected.
pub fn resolve_log_format(raw: Option<&str>) -> (LogFormat, Option<String>) {
    match raw {
        None => (LogFormat::default(), None),
        Some(value) => match value.parse() {
            Ok(format) => (format, None),
            Err(_) => (LogFormat::default(), Some(value.to_string())),
        },
    }
}

/// Tracing configuration (filters, formatters).
pub mod tracing;

pub use self::tracing::LogFormat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_log_format_uses_default() {
        assert_eq!(resolve_log_format(None), (LogFormat::Json, None));
    }

    #[test]
    fn known_log_format_is_accepted() {
        assert_eq!(resolve_log_format(Some("pretty")), (LogFormat::Pretty, None));
    }

    #[test]
    fn unknown_log_format_falls_back_and_is_reported() {
        assert_eq!(
            resolve_log_format(Some("xml")),
            (LogFormat::Json, Some("xml".to_string()))
        );
    }
}
