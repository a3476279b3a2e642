//! Client configuration constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ordering gateway address, request timeout and content type are fixed at
//! build time. The only environment input is the optional `BASE_URL` path the
//! router is mounted under.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Address of the ordering gateway.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Prefix the gateway mounts every API router under.
pub const API_PREFIX: &str = "/api/v1";

/// Per-request timeout in milliseconds.
pub const API_TIMEOUT_MS: u64 = 1000;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Connection settings shared by every API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_owned(),
            api_prefix: API_PREFIX.to_owned(),
            timeout: Duration::from_millis(API_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    /// Absolute URL for an endpoint path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_owned();
        let prefix = self.api_prefix.trim_matches('/');
        if !prefix.is_empty() {
            url.push('/');
            url.push_str(prefix);
        }
        let path = path.trim_start_matches('/');
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }
        url
    }

    /// Timeout in whole milliseconds, saturating at `u32::MAX`.
    pub fn timeout_ms(&self) -> u32 {
        u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Path prefix the router is mounted under, taken from `BASE_URL` at build time.
pub fn router_base() -> &'static str {
    normalize_base(option_env!("BASE_URL").unwrap_or(""))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { "" } else { trimmed }
}
