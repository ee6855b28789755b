//! REST API Bindings
//!
//! Async wrappers around the inventory backend, organized by domain.

mod error;
mod items;
mod transactions;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub use error::{ApiError, ApiResult, ErrorBody};

/// HTTP client bound to one backend base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Join an absolute API path onto the base URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a response into `T`, or into a `Rejected` error for non-2xx
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(rejection(status, &raw));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// For writes whose response body is not needed: only the status counts,
    /// so an empty 2xx body (e.g. 204) is still a success.
    async fn expect_success(response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let raw = response.text().await.unwrap_or_default();
        check_status(status, &raw)
    }
}

/// `Ok` for any 2xx whatever the body, otherwise the parsed rejection
fn check_status(status: StatusCode, raw_body: &str) -> ApiResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(rejection(status, raw_body))
    }
}

fn rejection(status: StatusCode, raw_body: &str) -> ApiError {
    ApiError::Rejected {
        status: status.as_u16(),
        body: ErrorBody::parse(raw_body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint("/api/items/"), "http://localhost:8000/api/items/");
    }

    #[test]
    fn test_empty_success_body_is_success() {
        assert!(check_status(StatusCode::NO_CONTENT, "").is_ok());
        assert!(check_status(StatusCode::CREATED, "").is_ok());
        assert!(check_status(StatusCode::CREATED, "not json").is_ok());
    }

    #[test]
    fn test_error_status_keeps_server_detail() {
        let err = check_status(StatusCode::BAD_REQUEST, r#"{"detail":"Only 2 left."}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
        assert_eq!(err.detail(), Some("Only 2 left."));

        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert_eq!(err.detail(), None);
    }
}
