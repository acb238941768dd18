//! Human-readable messages for validation failures.
//!
//! One message is shown per control: the one for the failure that wins under
//! [`ErrorKind::PRECEDENCE`]. Templates use `{n}` for the rule's parameter.

use std::collections::HashMap;

use crate::errors::{ErrorKind, ValidationErrors, ValidationFailure};

/// Shown when there is nothing to report.
pub const FALLBACK_MESSAGE: &str = "No validator";

/// Returns the built-in template for a kind.
pub const fn default_template(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "Field is required",
        ErrorKind::MaxLength => "Should be max {n} symbols",
        ErrorKind::MinLength => "Should be min {n} symbols",
        ErrorKind::Max => "Value shouldn't be larger than {n}",
        ErrorKind::Min => "Value shouldn't be lower than {n}",
    }
}

/// Message templates, with optional per-kind overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplates {
    overrides: HashMap<ErrorKind, String>,
}

impl MessageTemplates {
    /// Creates templates that use the built-in wording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the template for one kind.
    #[must_use]
    pub fn with_override(mut self, kind: ErrorKind, template: impl Into<String>) -> Self {
        self.overrides.insert(kind, template.into());
        self
    }

    /// Builds templates from a settings map keyed by error code.
    ///
    /// Unknown codes are logged and skipped.
    pub fn from_settings(messages: &HashMap<String, String>) -> Self {
        let mut templates = Self::new();
        for (code, template) in messages {
            match ErrorKind::from_code(code) {
                Some(kind) => {
                    templates.overrides.insert(kind, template.clone());
                }
                None => tracing::warn!(code = %code, "ignoring message for unknown error kind"),
            }
        }
        templates
    }

    /// Returns the template in effect for a kind.
    pub fn template(&self, kind: ErrorKind) -> &str {
        self.overrides
            .get(&kind)
            .map_or_else(|| default_template(kind), String::as_str)
    }

    /// Renders the message for a single failure.
    pub fn render(&self, failure: &ValidationFailure) -> String {
        let template = self.template(failure.kind());
        match failure.parameter() {
            Some(n) => template.replace("{n}", &n),
            None => template.to_string(),
        }
    }

    /// Renders the message for the highest-precedence failure, or
    /// [`FALLBACK_MESSAGE`] when there is none.
    pub fn message_for(&self, errors: Option<&ValidationErrors>) -> String {
        errors
            .and_then(ValidationErrors::first)
            .map_or_else(|| FALLBACK_MESSAGE.to_string(), |f| self.render(f))
    }
}
