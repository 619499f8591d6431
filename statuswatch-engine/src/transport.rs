//! HTTP transport abstraction for health probes.
//!
//! The probe state machine only needs two operations: a direct fetch that
//! observes the response status, and an opaque fetch that signals bare
//! reachability. Keeping them behind a trait lets tests script transport
//! behavior without a network.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{EngineError, TransportError};

/// User agent sent with every probe request.
pub const USER_AGENT: &str = "statuswatch";

/// Trait for issuing probe requests.
///
/// Implementations must suppress credentials and must not follow
/// redirects automatically: a 3xx is a classification input, not
/// something to chase.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET and return the response status code.
    ///
    /// Any received response is a success here, including 4xx/5xx; only
    /// failures to obtain a response at all become errors.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<u16, TransportError>;

    /// Issue a GET in reachability-only mode.
    ///
    /// The response status and body are deliberately not observable;
    /// completing without error means the endpoint answered something.
    async fn fetch_opaque(&self, url: &str, timeout: Duration) -> Result<(), TransportError>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the transport with redirects disabled.
    pub fn new() -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<u16, TransportError> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        Ok(response.status().as_u16())
    }

    async fn fetch_opaque(&self, url: &str, timeout: Duration) -> Result<(), TransportError> {
        // Status and body intentionally discarded
        self.client.get(url).timeout(timeout).send().await?;
        Ok(())
    }
}
