//! Client-side session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the identifiers and cached profile payloads pages share
//! across navigations. Nothing here is persisted; a reload starts empty.

pub mod session;
