// src/presentation/http/envelope.rs
//! Response envelope shared by every handler.
//!
//! Carries the outcome of one operation: a success/fail status, a well-known
//! response code, an optional human message, an optional payload, and an open
//! header bag for out-of-band values. Built once via the constructors;
//! producers may chain [`Envelope::set_header`] before returning it.

use crate::domain::codes::RESPONSE_CODE_SUCCESS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Envelope<T> {
    status: Status,
    response_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<T>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    headers: HashMap<String, Value>,
}

impl<T> Envelope<T> {
    /// Successful outcome with no payload; always the canonical success code.
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            response_code: RESPONSE_CODE_SUCCESS.to_string(),
            response_message: None,
            payload: None,
            headers: HashMap::new(),
        }
    }

    /// Successful outcome carrying a payload.
    pub fn success_with(payload: T) -> Self {
        Self {
            payload: Some(payload),
            ..Self::success()
        }
    }

    /// Failed outcome with a caller-supplied code and message.
    ///
    /// No validation is performed on either value; callers are expected to
    /// use well-known codes.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            response_code: code.into(),
            response_message: Some(message.into()),
            payload: None,
            headers: HashMap::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn response_code(&self) -> &str {
        &self.response_code
    }

    pub fn response_message(&self) -> Option<&str> {
        self.response_message.as_deref()
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Store a header value, returning the envelope for chaining.
    /// Map semantics: the last write for a key wins.
    #[must_use]
    pub fn set_header(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn header(&self, key: &str) -> Option<&Value> {
        self.headers.get(key)
    }

    pub fn headers(&self) -> &HashMap<String, Value> {
        &self.headers
    }
}
