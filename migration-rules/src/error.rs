//! Rule error types
//!
//! A failing rule is reported as a [`crate::Verdict`], never as an error.
//! The variants here are precondition violations: the caller handed the
//! engine something inconsistent, and the run cannot be trusted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A property name listed by a class did not resolve through
    /// [`crate::ClassView::property`].
    #[error("class `{class}` lists property `{property}` but it cannot be resolved")]
    MissingProperty { class: String, property: String },

    /// No rule is registered under this name.
    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

impl RuleError {
    pub fn missing_property(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MissingProperty {
            class: class.into(),
            property: property.into(),
        }
    }
}

/// Result type for rule evaluation
pub type Result<T> = std::result::Result<T, RuleError>;
