use thiserror::Error;

/// Every client operation fails with exactly one of these. Failures are
/// scoped to their request; nothing here is retried or recovered locally.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, timeout). The
    /// display message is safe to show to an end user; the underlying cause
    /// stays on the source chain for diagnostics.
    #[error("network request failed")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("API request failed: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        /// Response body text, captured best-effort. Not guaranteed to be
        /// JSON or even present.
        body: Option<String>,
    },

    /// The backend answered 2xx but the body did not match the expected
    /// shape. Always fatal for the call; no partial value is ever returned.
    #[error("invalid API response format: {detail}")]
    Schema { detail: String },
}

impl ApiError {
    /// Status code for HTTP failures, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
