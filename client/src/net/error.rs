//! Request failure taxonomy.
//!
//! The HTTP layer never recovers from these; the page that issued the call
//! decides how to present them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for showing next to the form that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Timeout(_) => "The server did not answer in time. Try again.".to_owned(),
            other => other.to_string(),
        }
    }

    /// Whether the gateway answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Extract a human-readable message from a gateway error body.
///
/// Handles `{"detail": "..."}`, `{"message": "..."}` and the validation shape
/// `{"detail": [{"msg": "..."}]}`.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let from_key = |key: &str| match value.get(key)? {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    };
    from_key("detail")
        .or_else(|| from_key("message"))
        .filter(|text| !text.trim().is_empty())
}
