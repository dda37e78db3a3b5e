//! HTTP transport seam.
//!
//! The client talks to the wire through the [`Transport`] trait so tests can
//! swap in a scripted fake. [`HttpTransport`] is the production
//! implementation backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use bday_core::{BdayError, BdayResult};
use reqwest::Method;
use url::Url;

/// One outgoing call, already resolved to a full URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<serde_json::Value>,
    /// Access token to attach as `Authorization: Bearer <token>`, if any.
    pub bearer: Option<String>,
}

/// Status and raw body of a completed call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Dispatches a single request and returns whatever came back.
/// Errors are transport-level only (connect/timeout); any HTTP status is a
/// successful dispatch.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> BdayResult<RawResponse>;
}

/// Production transport with a fixed per-request timeout.
pub struct HttpTransport {
    http: reqwest::Client,
    timeout_secs: u64,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> BdayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| BdayError::Network(err.to_string()))?;
        Ok(HttpTransport {
            http,
            timeout_secs: timeout.as_secs(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> BdayResult<RawResponse> {
        let mut builder = self.http.request(request.method, request.url);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            if err.is_timeout() {
                BdayError::Timeout(self.timeout_secs)
            } else {
                BdayError::Network(err.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| BdayError::Network(err.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_bounds() {
        let response = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(401).is_success());
        assert!(!response(500).is_success());
    }
}
