//! Provider failure taxonomy.

use thiserror::Error;

/// Why an external directions provider could not produce a route.
///
/// None of these escape the planning API: the dispatcher reports the failure
/// to the configured observer and answers with the local heuristic instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API credential configured")]
    MissingCredential,

    /// Connection, TLS, timeout, or non-2xx response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered 200 but flagged the request as failed.
    #[error("provider returned status {0}")]
    Status(String),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
