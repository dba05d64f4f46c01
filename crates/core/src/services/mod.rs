pub mod portfolio_service;
pub mod quote_service;
pub mod ytd_service;

/// Truncate a diagnostic string for table display, respecting char
/// boundaries. Display columns are narrow; the full error is still
/// emitted on the log.
pub(crate) fn truncate_diagnostic(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
