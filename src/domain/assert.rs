// src/domain/assert.rs
//! Guard helpers for validating arguments and lookups.
//!
//! Each guard checks a condition and fails with a [`DomainError`] carrying
//! the supplied code. Callers propagate the failure to the HTTP boundary
//! with `?`, where it is translated into a response envelope.

use crate::domain::errors::{DomainError, DomainResult};

/// Fail with `code` unless `condition` holds.
///
/// ```
/// use kekka_core::domain::assert::ensure;
///
/// assert!(ensure(1 > 0, "MUST_BE_POSITIVE").is_ok());
/// assert!(ensure(0 > 1, "MUST_BE_POSITIVE").is_err());
/// ```
pub fn ensure(condition: bool, code: impl Into<String>) -> DomainResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::new(code))
    }
}

/// Fail with `code` and a literal message unless `condition` holds.
pub fn ensure_with_message(
    condition: bool,
    code: impl Into<String>,
    message: impl Into<String>,
) -> DomainResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::with_message(code, message))
    }
}

/// Fail with `code` and template arguments unless `condition` holds.
pub fn ensure_with_args(
    condition: bool,
    code: impl Into<String>,
    args: Vec<String>,
) -> DomainResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::with_args(code, args))
    }
}

/// Unwrap `value` or fail with `code`.
///
/// The lookup-then-assert analog of [`ensure`]: `Some` passes the value
/// through, `None` raises the domain failure.
pub fn require_some<T>(value: Option<T>, code: impl Into<String>) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::new(code.into()))
}

/// Unwrap `value` or fail with `code` and a literal message.
pub fn require_some_with_message<T>(
    value: Option<T>,
    code: impl Into<String>,
    message: impl Into<String>,
) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::with_message(code.into(), message.into()))
}

/// Unwrap `value` or fail with `code` and template arguments.
pub fn require_some_with_args<T>(
    value: Option<T>,
    code: impl Into<String>,
    args: Vec<String>,
) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::with_args(code.into(), args))
}
