//! Error types for the probing engine.

use thiserror::Error;

/// Errors surfaced by a transport attempt.
///
/// These never escape the engine: the probe state machine normalizes each
/// variant into a [`statuswatch_types::ProbeOutcome`]. The split matters
/// because only a policy-blocked failure is eligible for the opaque
/// fallback attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The per-probe timeout fired before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The request failed at the network level before any status code was
    /// observable - the signature of a cross-origin or policy block.
    #[error("blocked before a response was observable: {0}")]
    PolicyBlocked(String),

    /// Any other request failure.
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() || (err.is_request() && err.status().is_none()) {
            TransportError::PolicyBlocked(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Errors constructing the engine itself.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
