//! Upstream failure classification.

use thiserror::Error;

/// Failures observed while talking to the prediction service.
///
/// The display strings for `Transport` and `Status` are relayed to API
/// callers verbatim inside the `{error}` response body.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The network exchange could not be established or completed
    /// (connection refused, DNS failure, timeout).
    #[error("An error occurred while requesting '{url}'.")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream was reachable but answered with a non-2xx status.
    #[error("Error response {status} while requesting '{url}'.")]
    Status { status: u16, url: String },

    /// The upstream answered 2xx but the body was not valid JSON.
    #[error("Invalid JSON in response while requesting '{url}'.")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed at startup.
    #[error("Failed to build upstream HTTP client")]
    Build(#[source] reqwest::Error),
}
