//! Preconfigured HTTP client shared by every page.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. A single
//! `gloo-timers` deadline covers the request and the body read; on expiry the
//! fetch is aborted through an `AbortController`.
//! Server-side (SSR): `send` returns [`ApiError::Unavailable`] since gateway
//! calls are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Building a request is a pure step (`prepare`) so the base URL and header
//! contract can be checked without a browser. Credentials are never injected
//! implicitly; callers pass the session token per call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::{ApiConfig, CONTENT_TYPE_JSON};

/// HTTP verbs used by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved request, ready to hand to the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl PreparedRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The single request-sending object, provided through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve `path` against the configured base and attach the fixed headers.
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> PreparedRequest {
        let mut headers = vec![("Content-Type", CONTENT_TYPE_JSON.to_owned())];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        PreparedRequest {
            method,
            url: self.config.endpoint(path),
            headers,
            body,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        self.send(self.prepare(Method::Get, path, None, token)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.send(self.prepare(Method::Post, path, Some(body), token)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.send(self.prepare(Method::Put, path, Some(body), token)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.send(self.prepare(Method::Delete, path, body, token)).await
    }

    /// Send a prepared request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Timeout`] when the configured timeout elapses first,
    /// [`ApiError::Status`] for non-2xx answers, and transport/decode errors
    /// otherwise. On the server this always returns [`ApiError::Unavailable`].
    pub async fn send<T: DeserializeOwned>(&self, request: PreparedRequest) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let controller = web_sys::AbortController::new()
                .map_err(|_| ApiError::Network("abort controller unavailable".to_owned()))?;
            let signal = controller.signal();

            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
                Method::Put => gloo_net::http::Request::put(&request.url),
                Method::Delete => gloo_net::http::Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            builder = builder.abort_signal(Some(&signal));
            let pending = match &request.body {
                Some(body) => builder.body(body.to_string()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            // One deadline covers both the headers and the body.
            let timeout_ms = self.config.timeout_ms();
            let mut deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
            let timed_out = || {
                controller.abort();
                log::warn!("{} {} timed out after {timeout_ms} ms", request.method.as_str(), request.url);
                ApiError::Timeout(timeout_ms)
            };

            let resp = before_deadline(Box::pin(pending.send()), deadline.as_mut())
                .await
                .ok_or_else(timed_out)?
                .map_err(|e| {
                    log::warn!("{} {} failed: {e}", request.method.as_str(), request.url);
                    ApiError::Network(e.to_string())
                })?;

            let status = resp.status();
            let text = before_deadline(Box::pin(resp.text()), deadline.as_mut())
                .await
                .ok_or_else(timed_out)?
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            if !resp.ok() {
                log::warn!("{} {} returned {status}", request.method.as_str(), request.url);
                return Err(status_error(status, &text));
            }
            decode_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// Output of `work`, or `None` when `deadline` fires first.
#[cfg(any(test, feature = "hydrate"))]
async fn before_deadline<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: std::future::Future + Unpin,
    D: std::future::Future<Output = ()> + Unpin,
{
    use futures::future::{Either, select};

    match select(work, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, detail: super::error::error_detail(body) }
}

/// Decode a response body; an empty body decodes as JSON `null`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
