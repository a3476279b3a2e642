//! Listen address resolution.
//!
//! The Leptos site address is the default; `HOST` and `PORT` override its
//! parts so the same build runs locally and in a container.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::ServerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Start from `site_addr` and apply `HOST`/`PORT` overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when an override does not parse.
    pub fn resolve(site_addr: SocketAddr) -> Result<Self, ServerError> {
        Self::resolve_with("HOST", "PORT", site_addr)
    }

    pub(crate) fn resolve_with(
        host_key: &'static str,
        port_key: &'static str,
        site_addr: SocketAddr,
    ) -> Result<Self, ServerError> {
        let ip = env_parse::<IpAddr>(host_key)?.unwrap_or(site_addr.ip());
        let port = env_parse::<u16>(port_key)?.unwrap_or(site_addr.port());
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

/// Parse `key` from the environment; unset or blank is `None`.
pub(crate) fn env_parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ServerError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ServerError::InvalidEnv { key, value: raw.clone() })
}
