// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Expected, business-meaningful failure with a stable code.
///
/// Carries an optional literal message and optional arguments for templated
/// message resolution. When both are absent the boundary resolves the message
/// from the message catalog using the code alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or(.code))]
pub struct DomainError {
    code: String,
    message: Option<String>,
    args: Vec<String>,
}

impl DomainError {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
            args: Vec::new(),
        }
    }

    pub fn with_message(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: Some(message.into()),
            args: Vec::new(),
        }
    }

    pub fn with_args(code: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
            args,
        }
    }

    /// Stable error code, suitable for client-side matching.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Literal message supplied at the failure site, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Arguments for templated-message resolution.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
