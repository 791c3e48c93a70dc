// ABOUTME: Platform API error types with SNAFU pattern.
// ABOUTME: Unifies transport, status, and decoding failures for programmatic handling.

use snafu::Snafu;

/// Unified error for calls to the container platform API.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("request to {url} failed: {source}"))]
    Transport { url: String, source: reqwest::Error },

    #[snafu(display("request to {url} timed out"))]
    Timeout { url: String },

    #[snafu(display("service not found: {service}"))]
    ServiceNotFound { service: String },

    #[snafu(display("platform rejected the request ({status}): {message}"))]
    Rejected { status: u16, message: String },

    #[snafu(display("platform error ({status}): {message}"))]
    Server { status: u16, message: String },

    #[snafu(display("could not decode response from {url}: {source}"))]
    Decode { url: String, source: reqwest::Error },

    #[snafu(display("platform response missing {field}"))]
    Contract { field: &'static str },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network-level failure reaching the platform.
    Transport,
    /// A call exceeded the per-request timeout.
    Timeout,
    /// The named service does not exist on the platform.
    ServiceNotFound,
    /// The platform refused the request as invalid.
    Rejected,
    /// The platform failed internally.
    Server,
    /// The response did not match the wire contract.
    Contract,
}

impl ApiError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Timeout { .. } => ApiErrorKind::Timeout,
            ApiError::ServiceNotFound { .. } => ApiErrorKind::ServiceNotFound,
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
            ApiError::Server { .. } => ApiErrorKind::Server,
            ApiError::Decode { .. } | ApiError::Contract { .. } => ApiErrorKind::Contract,
        }
    }
}
