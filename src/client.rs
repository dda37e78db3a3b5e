//! Sessioned API client.
//!
//! Every request attaches the current access token from the [`TokenStore`].
//! On a 401 the client refreshes the session once and retries the request
//! once; a second 401, a failed refresh, or a missing refresh token clears
//! the stored credentials, notifies [`SessionEvents::on_forced_logout`], and
//! fails the request with [`BdayError::AuthExpired`].
//!
//! Concurrent requests that hit 401 at the same time each run their own
//! refresh; the store keeps whichever refresh completed last. Dropping a
//! request future cancels it before response handling, so an abandoned call
//! never touches the store or forces a logout.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use bday_core::{ApiErrorBody, BdayError, BdayResult, RefreshRequest, RefreshResponse};

use crate::config::ClientConfig;
use crate::store::{SessionEvents, TokenStore};
use crate::transport::{ApiRequest, HttpTransport, RawResponse, Transport};

/// Whether a dispatch is the original attempt or the one-shot retry that
/// follows a successful token refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    RetryAfterRefresh,
}

/// Async client for the bday backend.
pub struct SessionedClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) store: Arc<dyn TokenStore>,
    pub(crate) events: Option<Arc<dyn SessionEvents>>,
}

impl SessionedClient {
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> BdayResult<Self> {
        let transport = Arc::new(HttpTransport::new(config.timeout)?);
        Ok(SessionedClient {
            config,
            transport,
            store,
            events: None,
        })
    }

    /// Register a listener for forced logouts.
    pub fn with_session_events(mut self, events: Arc<dyn SessionEvents>) -> Self {
        self.events = Some(events);
        self
    }

    /// Replace the transport (used by tests and custom setups).
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// The token store this client reads and writes.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    fn endpoint(&self, path: &str) -> BdayResult<Url> {
        let full = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        Url::parse(&full)
            .map_err(|err| BdayError::Validation(format!("Invalid request URL '{full}': {err}")))
    }

    /// Run the attach/dispatch/refresh state machine for one logical request.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> BdayResult<RawResponse> {
        let url = self.endpoint(path)?;
        let mut attempt = Attempt::Initial;

        loop {
            let request = ApiRequest {
                method: method.clone(),
                url: url.clone(),
                body: body.clone(),
                bearer: self.store.access_token(),
            };
            let response = self.transport.execute(request).await?;

            if response.is_success() {
                return Ok(response);
            }

            if response.status != 401 {
                return Err(api_error(&response));
            }

            match attempt {
                Attempt::Initial => {
                    let Some(refresh_token) = self.store.refresh_token() else {
                        tracing::warn!(path, "401 with no refresh token available");
                        self.force_logout();
                        return Err(BdayError::AuthExpired);
                    };
                    match self.refresh_session(&refresh_token).await {
                        Ok(()) => {
                            attempt = Attempt::RetryAfterRefresh;
                        }
                        Err(err) => {
                            tracing::warn!(path, error = %err, "session refresh failed");
                            self.force_logout();
                            return Err(BdayError::AuthExpired);
                        }
                    }
                }
                Attempt::RetryAfterRefresh => {
                    tracing::warn!(path, "401 after refreshed retry");
                    self.force_logout();
                    return Err(BdayError::AuthExpired);
                }
            }
        }
    }

    /// Mint a new access token from the refresh token and store the result.
    /// Dispatched directly, outside the state machine: a refresh is never
    /// itself refreshed.
    async fn refresh_session(&self, refresh_token: &str) -> BdayResult<()> {
        tracing::debug!("access token rejected, refreshing session");

        let url = self.endpoint("/auth/refresh")?;
        let body = to_body(&RefreshRequest {
            refresh_token: refresh_token.to_string(),
        })?;
        let request = ApiRequest {
            method: Method::POST,
            url,
            body: Some(body),
            bearer: None,
        };

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(api_error(&response));
        }

        let refreshed: RefreshResponse = decode(&response, "/auth/refresh")?;
        // Keep the old refresh token unless the backend rotated it
        let refresh = refreshed
            .refresh_token
            .unwrap_or_else(|| refresh_token.to_string());
        self.store.set_tokens(&refreshed.token, &refresh);

        tracing::debug!("session refreshed");
        Ok(())
    }

    fn force_logout(&self) {
        tracing::warn!("session expired, clearing credentials");
        self.store.clear();
        if let Some(events) = &self.events {
            events.on_forced_logout();
        }
    }

    // Typed helpers used by the api modules

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BdayResult<T> {
        let response = self.dispatch(Method::GET, path, None).await?;
        decode(&response, path)
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> BdayResult<T> {
        let response = self.dispatch(Method::POST, path, Some(to_body(body)?)).await?;
        decode(&response, path)
    }

    pub(crate) async fn post_empty_json<T: DeserializeOwned>(&self, path: &str) -> BdayResult<T> {
        let response = self.dispatch(Method::POST, path, None).await?;
        decode(&response, path)
    }

    pub(crate) async fn post_unit(&self, path: &str) -> BdayResult<()> {
        self.dispatch(Method::POST, path, None).await?;
        Ok(())
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> BdayResult<T> {
        let response = self.dispatch(Method::PUT, path, Some(to_body(body)?)).await?;
        decode(&response, path)
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> BdayResult<()> {
        self.dispatch(Method::DELETE, path, None).await?;
        Ok(())
    }
}

fn to_body(body: &impl Serialize) -> BdayResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|err| BdayError::Validation(format!("Unserializable request body: {err}")))
}

fn decode<T: DeserializeOwned>(response: &RawResponse, path: &str) -> BdayResult<T> {
    serde_json::from_str(&response.body)
        .map_err(|err| BdayError::Parse(format!("Bad response body from {path}: {err}")))
}

/// Map a non-2xx response to an error, preferring the backend's own message.
fn api_error(response: &RawResponse) -> BdayError {
    match serde_json::from_str::<ApiErrorBody>(&response.body) {
        Ok(body) => BdayError::Api {
            status: response.status,
            message: body.message,
            errors: body.errors,
        },
        Err(_) => BdayError::Api {
            status: response.status,
            message: "An error occurred".to_string(),
            errors: None,
        },
    }
}
