//! Low-level HTTP session — `FinamHttp`.
//!
//! Owns the one transport session per client instance and classifies every
//! response uniformly: 200 decodes as success, non-200 with a JSON body
//! decodes into the error envelope and is returned as a value, anything else
//! is a fatal transport failure that tears the session down as a side effect.

use crate::error::HttpError;
use crate::network::API_KEY_HEADER;

use async_lock::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Externally observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unopened,
    Open,
    Closed,
}

enum SessionState {
    Unopened,
    Open(Client),
    Closed,
}

/// Low-level HTTP session bound to a fixed base URL and static auth headers.
///
/// Base URL and headers are established at construction and immutable
/// thereafter; only the session lifecycle is stateful.
pub struct FinamHttp {
    base_url: String,
    headers: HeaderMap,
    session: Arc<RwLock<SessionState>>,
}

impl FinamHttp {
    pub fn new(base_url: &str, token: &str) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(token)
            .map_err(|e| HttpError::Transport(format!("invalid API token header: {e}")))?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
            session: Arc::new(RwLock::new(SessionState::Unopened)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session state.
    pub async fn status(&self) -> SessionStatus {
        match *self.session.read().await {
            SessionState::Unopened => SessionStatus::Unopened,
            SessionState::Open(_) => SessionStatus::Open,
            SessionState::Closed => SessionStatus::Closed,
        }
    }

    /// Opens a new transport session. An already-open session is closed
    /// first, so repeated starts never leak connections.
    pub async fn start(&self) -> Result<(), HttpError> {
        let mut state = self.session.write().await;
        if matches!(*state, SessionState::Open(_)) {
            tracing::info!("closing previous session before reopening");
            *state = SessionState::Closed;
        }
        *state = SessionState::Open(self.build_client()?);
        tracing::info!("client session opened");
        Ok(())
    }

    /// Closes the current session. Requests after this fail fast until
    /// `start` is called again.
    pub async fn stop(&self) {
        let mut state = self.session.write().await;
        if matches!(*state, SessionState::Open(_)) {
            tracing::info!("client session closed");
        }
        *state = SessionState::Closed;
    }

    // ── Request execution ────────────────────────────────────────────────

    /// GET with query-channel serialization.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(Method::GET, path, Some(query), None::<&()>).await
    }

    /// DELETE with query-channel serialization.
    pub async fn delete<T, Q>(&self, path: &str, query: &Q) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(Method::DELETE, path, Some(query), None::<&()>).await
    }

    /// POST with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, None::<&()>, Some(body)).await
    }

    /// One-shot GET on a disposable transport client with the same base URL
    /// and headers. Used for token validation so a validity check never
    /// disturbs the shared session; returns whether the API answered 200.
    pub async fn probe(&self, path: &str) -> Result<bool, HttpError> {
        let client = self.build_client()?;
        let url = format!("{}{}", self.base_url, path);
        let resp = client
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Ok(resp.status() == StatusCode::OK)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn build_client(&self) -> Result<Client, HttpError> {
        Client::builder()
            .default_headers(self.headers.clone())
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| HttpError::Transport(format!("failed to build HTTP client: {e}")))
    }

    async fn execute<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let client = match &*self.session.read().await {
            SessionState::Open(client) => client.clone(),
            _ => return Err(HttpError::NoSession),
        };

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "executing request");

        let mut req = client.request(method, &url);
        if let Some(q) = query {
            req = req.query(q);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        match self.classify(req).await {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                // Shared-fate teardown: any transport-level failure closes
                // the session for all subsequent requests.
                tracing::warn!(error = %err, "transport failure, tearing down session");
                self.stop().await;
                Err(err)
            }
        }
    }

    async fn classify<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, HttpError> {
        let resp = req
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        let status = resp.status();

        if status == StatusCode::OK {
            return resp
                .json::<T>()
                .await
                .map_err(|e| HttpError::Transport(format!("malformed response body: {e}")));
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);

        if !is_json {
            let text = resp.text().await.unwrap_or_default();
            return Err(HttpError::Transport(format!(
                "HTTP {status} with non-JSON body: {text}"
            )));
        }

        // Domain failure: the envelope decodes with a populated error and is
        // handed back as a normal value.
        tracing::warn!(%status, "request returned an API error envelope");
        resp.json::<T>()
            .await
            .map_err(|e| HttpError::Transport(format!("malformed error body: {e}")))
    }
}
