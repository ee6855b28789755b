//! API Errors
//!
//! Transport failures, server rejections and undecodable responses.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("server rejected request ({status})")]
    Rejected { status: u16, body: ErrorBody },
    /// Server answered 2xx but the body was not what we expected
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl ApiError {
    /// Server-provided `detail` message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { body, .. } => body.detail.as_deref(),
            _ => None,
        }
    }

    /// First server validation message for `field`, if any
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Rejected { body, .. } => body.first_field_error(field),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Error payload in the backend's shape: `{"detail": "..."}` and/or
/// `{"<field>": ["message", ...]}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    /// Parse leniently; anything that is not a JSON object yields an empty body.
    pub fn parse(raw: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let mut body = Self::default();
        for (key, value) in map {
            if key == "detail" {
                if let Value::String(s) = value {
                    body.detail = Some(s);
                }
                continue;
            }
            let messages: Vec<String> = match value {
                Value::String(s) => vec![s],
                Value::Array(values) => values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
                _ => continue,
            };
            if !messages.is_empty() {
                body.fields.insert(key, messages);
            }
        }
        body
    }

    pub fn first_field_error(&self, field: &str) -> Option<&str> {
        self.fields.get(field)?.first().map(String::as_str)
    }
}
