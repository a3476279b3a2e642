//! Networking modules for talking to the ordering gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the single preconfigured client, `api` maps gateway endpoints
//! onto typed calls, `types` defines the wire schema and `error` the failure
//! cases pages render.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
