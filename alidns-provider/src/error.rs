use thiserror::Error;

/// Errors surfaced by the Alidns client and service layers.
///
/// Remote API failures are carried verbatim in [`AlidnsError::Api`]: no
/// mapping, no retries; a remote failure is final for the invocation.
#[derive(Debug, Error)]
pub enum AlidnsError {
    /// An access key field was empty at client construction.
    #[error("{field} is required")]
    MissingCredential {
        /// Which credential field was missing.
        field: &'static str,
    },

    /// A network-level failure (connection refused, DNS resolution, ...).
    #[error("network error: {detail}")]
    Network { detail: String },

    /// The HTTP request timed out.
    #[error("request timeout: {detail}")]
    Timeout { detail: String },

    /// The provider returned a structured error body.
    #[error("Alidns API error {code}: {message}")]
    Api {
        /// Provider error code, e.g. `InvalidDomainName.NoExist`.
        code: String,
        /// Provider error message, unmodified.
        message: String,
        /// Request id from the error body, when present.
        request_id: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("failed to parse API response: {detail}")]
    Parse { detail: String },

    /// A request structure could not be serialized into query parameters.
    #[error("failed to serialize request: {detail}")]
    Serialization { detail: String },
}

/// Convenience alias for `Result<T, AlidnsError>`.
pub type Result<T> = std::result::Result<T, AlidnsError>;
