//! API Error Types
//!
//! Every transport, status, and decoding failure from the HTTP layer
//! normalizes into [`ApiError`] before it reaches a component.

use thiserror::Error;

/// Failure raised by the API client layer.
///
/// `Validation` is the only structured kind: it carries the `errors` array of
/// a 422 response body. Everything else collapses to a generic message at the
/// UI (see [`crate::state::form::server_error_messages`]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status other than a usable 422.
    #[error("server returned status {0}")]
    Status(u16),

    /// HTTP 422 with a structured `errors` body.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The response body did not match the expected shape.
    #[error("malformed server response: {0}")]
    Deserialization(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
