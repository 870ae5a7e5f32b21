// src/domain/codes.rs
//! Well-known response codes shared by envelope construction and boundary
//! translation. Values are published identifiers; clients match on them, so
//! they must never change once released.

/// Canonical code carried by every successful envelope.
pub const RESPONSE_CODE_SUCCESS: &str = "0000";

/// Generic code for unexpected (non-domain) failures.
pub const RESPONSE_CODE_SYSTEM_ERROR: &str = "9999";
