//! Lookup error types.

use thiserror::Error;

/// Errors that can occur when fetching definitions.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure: DNS, connect, TLS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The dictionary has no entry for the word.
    #[error("no definitions found for '{0}'")]
    NotFound(String),

    /// The response body was not the expected JSON shape.
    #[error("could not read dictionary response: {0}")]
    Decode(String),

    /// The dictionary answered with a non-success status other than 404/429.
    #[error("dictionary service error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
