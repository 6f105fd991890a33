//! HTTP client for the catalog backend.
//! Every request carries the session's bearer token once logged in, and every
//! failure comes back as an [`ApiError`] with a single message and the status.

use crate::error::{ApiError, Result};
use crate::session::Session;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_session(base_url, Session::new())
    }

    pub fn with_session(base_url: &str, session: Session) -> Self {
        // No timeout, retry or backoff: a failed call surfaces immediately.
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        self.send(self.request(Method::GET, endpoint)).await
    }

    pub async fn get_with_query<Q, R>(&self, endpoint: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::GET, endpoint).query(query)).await
    }

    pub async fn post<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::POST, endpoint).json(body)).await
    }

    pub async fn patch<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::PATCH, endpoint).json(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        self.send(self.request(Method::DELETE, endpoint)).await
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        log::debug!("[HTTP] {} {}", method, url);

        let builder = self.client.request(method, &url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R> {
        let response = builder.send().await.map_err(|e| {
            let err = ApiError::transport(&e);
            log::error!("💥 [HTTP] request failed: {}", err);
            err
        })?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await.map_err(|e| ApiError::transport(&e))?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            log::error!("❌ [HTTP] {} -> {}: {}", url, status, err);
            return Err(err);
        }

        log::debug!("✅ [HTTP] {} -> {} ({} bytes)", url, status, body.len());

        // DELETE and friends may answer with an empty body.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::decode(e, status.as_u16()))
    }
}
