//! Eduva client — envelope-aware HTTP access to the backend API.
//!
//! Every backend endpoint answers with the same envelope:
//!
//! ```json
//! { "statusCode": 1000, "message": null, "data": { "data": [...], "count": 42 } }
//! ```
//!
//! `statusCode` is a business code, independent of the HTTP status;
//! [`STATUS_SUCCESS`] is the only success value. [`ApiClient`] unwraps the
//! envelope and maps everything else to [`ApiError`]. Authentication is a
//! pluggable [`TokenSource`]; the portal's login handler fills a
//! [`SharedToken`] that every later call picks up.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The backend's business success code.
pub const STATUS_SUCCESS: i64 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success business code.
    #[error("backend error {code}: {message}")]
    Backend { code: i64, message: String },
    /// Transport-level failure before an envelope existed.
    #[error("http status {status}")]
    Http { status: u16 },
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    /// Success envelope without the payload the caller expected.
    #[error("response envelope carried no data")]
    MissingData,
}

// ----------------------------------------------------------------------
// Envelope
// ----------------------------------------------------------------------

/// The outer response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status_code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Payload shape of every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub count: i64,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope: non-success codes become
    /// [`ApiError::Backend`], a success without payload becomes
    /// [`ApiError::MissingData`].
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.status_code != STATUS_SUCCESS {
            return Err(ApiError::Backend {
                code: self.status_code,
                message: self.message.unwrap_or_default(),
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

// ----------------------------------------------------------------------
// Token sources
// ----------------------------------------------------------------------

/// Where the bearer token for a request comes from.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// No authentication header at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> Option<String> {
        None
    }
}

/// A fixed token, e.g. from the config file.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A writable token slot shared between the login flow and the client.
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    slot: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: &str) {
        *self.slot.write().unwrap() = Some(token.to_string());
    }

    pub fn clear(&self) {
        *self.slot.write().unwrap() = None;
    }

    pub fn is_set(&self) -> bool {
        self.slot.read().unwrap().is_some()
    }
}

#[async_trait]
impl TokenSource for SharedToken {
    async fn token(&self) -> Option<String> {
        self.slot.read().unwrap().clone()
    }
}

// ----------------------------------------------------------------------
// Client
// ----------------------------------------------------------------------

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: Arc::new(NoAuth),
        }
    }

    pub fn with_token_source(mut self, token: Arc<dyn TokenSource>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.get(self.endpoint(path));
        self.send(path, req).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.endpoint(path)).json(body);
        self.send(path, req).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let req = self.http.put(self.endpoint(path)).json(body);
        self.send(path, req).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.delete(self.endpoint(path));
        self.send(path, req).await
    }

    /// POST where only the envelope verdict matters.
    pub async fn post_ok<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let req = self.http.post(self.endpoint(path)).json(body);
        let env: Envelope<serde_json::Value> = self.exchange(path, req).await?;
        if env.status_code != STATUS_SUCCESS {
            return Err(ApiError::Backend {
                code: env.status_code,
                message: env.message.unwrap_or_default(),
            });
        }
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let env: Envelope<T> = self.exchange(path, req).await?;
        env.into_result()
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        path: &str,
        mut req: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        if let Some(token) = self.token.token().await {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        tracing::trace!(path, status = status.as_u16(), "api exchange");

        if !status.is_success() {
            // Backend errors usually still ship the envelope; fall back to
            // the bare HTTP status when the body is something else.
            if let Ok(env) = serde_json::from_slice::<Envelope<serde_json::Value>>(&bytes) {
                return Err(ApiError::Backend {
                    code: env.status_code,
                    message: env.message.unwrap_or_default(),
                });
            }
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
