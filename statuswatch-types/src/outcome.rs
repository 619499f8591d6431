//! The classified result of a single health probe.

use serde::{Deserialize, Serialize};

/// How a probe's result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeMethod {
    /// The direct request produced a readable response.
    Direct,
    /// The direct request was blocked before a response was observable;
    /// the opaque fallback completed, so the endpoint is assumed reachable.
    NoCorsFallback,
    /// The request failed outright.
    Error,
    /// The request was aborted by the per-probe timeout.
    Timeout,
    /// The service has no health-check URL; no request was issued.
    NoUrl,
}

impl ProbeMethod {
    /// Short display tag matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMethod::Direct => "direct",
            ProbeMethod::NoCorsFallback => "no-cors-fallback",
            ProbeMethod::Error => "error",
            ProbeMethod::Timeout => "timeout",
            ProbeMethod::NoUrl => "no-url",
        }
    }
}

impl std::fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified probe result.
///
/// Every failure mode is normalized into an outcome with code `0` and a
/// method tag distinguishing the cause; probes never surface errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// The HTTP status code, or `0` when no response was obtained.
    pub status_code: u16,
    /// The semantic status label mapped from the code.
    pub status: String,
    /// How this result was obtained.
    pub method: ProbeMethod,
}

impl ProbeOutcome {
    /// Build an outcome.
    pub fn new(status_code: u16, status: impl Into<String>, method: ProbeMethod) -> Self {
        Self {
            status_code,
            status: status.into(),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_kebab_case() {
        let json = serde_json::to_string(&ProbeMethod::NoCorsFallback).unwrap();
        assert_eq!(json, "\"no-cors-fallback\"");

        let parsed: ProbeMethod = serde_json::from_str("\"no-url\"").unwrap();
        assert_eq!(parsed, ProbeMethod::NoUrl);
    }

    #[test]
    fn method_display_matches_serialized_form() {
        assert_eq!(ProbeMethod::Timeout.to_string(), "timeout");
        assert_eq!(ProbeMethod::Direct.to_string(), "direct");
    }
}
