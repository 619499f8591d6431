//! Service endpoint description consumed by the probing engine.

use serde::{Deserialize, Serialize};

/// A configured service, as the engine sees it.
///
/// Only the health-check URL matters for probing; `url` is the
/// user-facing link carried through for the rendering layer. A service
/// without a health-check URL is never probed and is always reported with
/// the sentinel code `0` and the `no-url` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    /// User-facing link for the service, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Endpoint polled by the health checker, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_url: Option<String>,
}

impl ServiceEndpoint {
    /// An endpoint that will be probed at `health_check_url`.
    pub fn probed(health_check_url: impl Into<String>) -> Self {
        Self {
            url: None,
            health_check_url: Some(health_check_url.into()),
        }
    }

    /// An endpoint that is never probed.
    pub fn unprobed() -> Self {
        Self::default()
    }
}
