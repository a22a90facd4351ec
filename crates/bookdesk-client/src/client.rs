//! `reqwest`-backed API client.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use bookdesk_core::config::ApiConfig;
use bookdesk_core::error::{AppError, ErrorKind};
use bookdesk_core::result::AppResult;
use bookdesk_core::types::QueryParams;

use crate::error;

/// Shared client for every backend call.
///
/// Cloning is cheap; clones share the connection pool and the bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Bearer token shared between clones.
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Url::parse(&config.base_url).map_err(|e| {
            AppError::configuration(format!("Invalid API base URL '{}': {e}", config.base_url))
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone().filter(|t| !t.is_empty()))),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token (or clear it with `None`).
    pub fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// The current bearer token.
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Build the absolute URL for the given path segments.
    ///
    /// Segments are percent-encoded individually, so backend ids can never
    /// alter the route.
    pub(crate) fn url(&self, segments: &[&str], query: Option<&QueryParams>) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::internal(format!("Invalid API base URL: {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::internal("API base URL cannot carry a path"))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        if let Some(params) = query.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(params.as_pairs());
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, segments, query, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Unexpected response from /{}: {e}", segments.join("/")),
                e,
            )
        })
    }

    /// Send a request whose response body is ignored.
    pub(crate) async fn send_empty<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, segments, None, body).await.map(|_| ())
    }

    async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> AppResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments, query)?;
        let path = format!("/{}", segments.join("/"));
        let mut builder = self.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(error::from_reqwest)?;
        let status = response.status();
        let text = response.text().await.map_err(error::from_reqwest)?;

        debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API request completed"
        );

        if !status.is_success() {
            let err = error::from_status(status, &text);
            warn!(method = %method, path = %path, status = status.as_u16(), error = %err, "API request failed");
            return Err(err);
        }

        Ok(text)
    }
}
