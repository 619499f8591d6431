//! Single-endpoint health probe.
//!
//! One probe is one deterministic pass through a small state machine:
//! direct request first; on a policy-blocked failure, one opaque retry
//! that trades status-code precision for a reachability signal. Many
//! services disallow cross-origin inspection of status codes, and the
//! fallback avoids reporting them as false negatives.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use statuswatch_types::{ProbeMethod, ProbeOutcome, StatusMapper};

use crate::error::TransportError;
use crate::transport::HttpTransport;

/// Probes a single endpoint and returns a classified outcome.
///
/// A probe never fails: every network error, timeout, or policy block is
/// normalized into a [`ProbeOutcome`] with code `0` and a method tag
/// distinguishing the cause.
#[derive(Clone)]
pub struct HealthProbe {
    transport: Arc<dyn HttpTransport>,
    mapper: Arc<StatusMapper>,
    timeout: Duration,
}

impl HealthProbe {
    /// Create a probe with the given transport, classifier, and timeout.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        mapper: Arc<StatusMapper>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            mapper,
            timeout,
        }
    }

    /// Check one endpoint.
    pub async fn check(&self, url: &str) -> ProbeOutcome {
        match self.transport.fetch(url, self.timeout).await {
            Ok(code) => {
                debug!(url, code, "health check responded");
                self.classified(code, ProbeMethod::Direct)
            }
            Err(TransportError::Timeout) => {
                warn!(url, timeout_ms = self.timeout.as_millis() as u64, "health check timed out");
                self.classified(0, ProbeMethod::Timeout)
            }
            Err(TransportError::PolicyBlocked(reason)) => {
                warn!(url, %reason, "direct check blocked, retrying in opaque mode");
                self.fallback(url).await
            }
            Err(TransportError::Network(reason)) => {
                warn!(url, %reason, "health check failed");
                self.classified(0, ProbeMethod::Error)
            }
        }
    }

    /// Opaque retry after a policy-blocked direct attempt.
    ///
    /// Completing without error means the endpoint answered something;
    /// classify as if it had returned 200.
    async fn fallback(&self, url: &str) -> ProbeOutcome {
        match self.transport.fetch_opaque(url, self.timeout).await {
            Ok(()) => self.classified(200, ProbeMethod::NoCorsFallback),
            Err(err) => {
                warn!(url, %err, "opaque fallback failed");
                self.classified(0, ProbeMethod::Error)
            }
        }
    }

    fn classified(&self, code: u16, method: ProbeMethod) -> ProbeOutcome {
        ProbeOutcome::new(code, self.mapper.map(code), method)
    }
}

impl std::fmt::Debug for HealthProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthProbe")
            .field("timeout", &self.timeout)
            .finish()
    }
}
