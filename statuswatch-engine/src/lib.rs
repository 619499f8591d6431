//! # statuswatch-engine
//!
//! The health-probing engine behind a service status dashboard. It probes
//! each configured endpoint with a two-phase network strategy, classifies
//! the raw outcome through [`statuswatch_types::StatusMapper`], and
//! publishes order-preserved snapshots on a fixed cadence.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  HealthOrchestrator                      │
//! │   check_all ──▶ N parallel HealthProbe tasks ──▶ fan-in  │
//! │       │              (order preserved)            │      │
//! │       ▼                                           ▼      │
//! │  tokio interval                           HealthSnapshot │
//! │  (recurring poll)  ──────────────────▶  watch channel    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`transport`]**: the [`HttpTransport`] seam - a direct fetch that
//!   observes the status code, and an opaque fetch that only signals
//!   reachability. [`ReqwestTransport`] is the production implementation.
//! - **[`probe`]**: the per-endpoint state machine - direct request,
//!   opaque fallback on policy-blocked failures, timeout and error
//!   normalization. Failures are values, never errors.
//! - **[`orchestrator`]**: fan-out/fan-in across all services plus the
//!   cancellable recurring poll.
//!
//! ## Example
//!
//! ```rust,no_run
//! use statuswatch_engine::HealthOrchestrator;
//! use statuswatch_types::ServiceEndpoint;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), statuswatch_engine::EngineError> {
//!     let orchestrator = HealthOrchestrator::builder()
//!         .probe_timeout(Duration::from_secs(5))
//!         .poll_interval(Duration::from_secs(30))
//!         .build()?;
//!
//!     let services = vec![
//!         ServiceEndpoint::probed("https://example.com/health"),
//!         ServiceEndpoint::unprobed(),
//!     ];
//!
//!     // One-shot check
//!     let snapshot = orchestrator.check_all(&services).await;
//!     assert_eq!(snapshot.len(), 2);
//!
//!     // Recurring poll with a cancellation handle
//!     let (handle, mut rx) = orchestrator.start(services);
//!     rx.changed().await.ok();
//!     println!("{} services checked", rx.borrow().len());
//!     handle.stop();
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod orchestrator;
pub mod probe;
pub mod transport;

pub use error::{EngineError, TransportError};
pub use orchestrator::{HealthOrchestrator, OrchestratorBuilder, PollHandle};
pub use probe::HealthProbe;
pub use transport::{HttpTransport, ReqwestTransport};

/// Default per-probe timeout.
pub const DEFAULT_PROBE_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(5000);

/// Default recurring-poll interval.
pub const DEFAULT_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(30_000);
