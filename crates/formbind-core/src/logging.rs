//! Logging integration for formbind.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-field spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "formbind_forms=trace"). In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used.
///
/// Installing a subscriber twice is not an error; the second call is ignored.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a single form field.
///
/// Enter this span around event handling for a field so that every log
/// entry emitted while the control and widget react carries the field name.
///
/// # Examples
///
/// ```
/// use formbind_core::logging::field_span;
///
/// let span = field_span("name");
/// let _guard = span.enter();
/// tracing::debug!("handling edit");
/// ```
pub fn field_span(field: &str) -> tracing::Span {
    tracing::debug_span!("field", name = field)
}
