//! Fan-out/fan-in orchestration and the recurring poll.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error};

use statuswatch_types::{
    HealthSnapshot, ProbeMethod, ProbeOutcome, ServiceEndpoint, StatusMapper,
};

use crate::error::EngineError;
use crate::probe::HealthProbe;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::{DEFAULT_POLL_INTERVAL, DEFAULT_PROBE_TIMEOUT};

/// Checks every configured service and publishes snapshots.
///
/// Probes within one cycle run fully concurrently (one in-flight request
/// per service, no cap), each independently cancellable by its own
/// timeout. The snapshot preserves input order regardless of completion
/// order, and probe failures are values in the snapshot, never errors.
///
/// # Example
///
/// ```rust,no_run
/// use statuswatch_engine::HealthOrchestrator;
/// use statuswatch_types::ServiceEndpoint;
///
/// # tokio_test::block_on(async {
/// let orchestrator = HealthOrchestrator::builder().build().unwrap();
/// let snapshot = orchestrator
///     .check_all(&[ServiceEndpoint::probed("https://example.com/health")])
///     .await;
/// assert_eq!(snapshot.len(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct HealthOrchestrator {
    transport: Arc<dyn HttpTransport>,
    mapper: Arc<StatusMapper>,
    probe_timeout: Duration,
    poll_interval: Duration,
}

impl HealthOrchestrator {
    /// Create a builder for configuring the orchestrator.
    pub fn builder() -> OrchestratorBuilder {
        OrchestratorBuilder::new()
    }

    /// Run one polling cycle across all services.
    ///
    /// Services without a health-check URL are never probed; their outcome
    /// is synthesized directly with the sentinel code `0` and the `no-url`
    /// method. Every probe is awaited (no short-circuit on failure).
    pub async fn check_all(&self, services: &[ServiceEndpoint]) -> HealthSnapshot {
        let mut pending = Vec::with_capacity(services.len());
        for service in services {
            match &service.health_check_url {
                Some(url) => {
                    let probe = self.probe();
                    let url = url.clone();
                    pending.push(Some(tokio::spawn(async move { probe.check(&url).await })));
                }
                None => pending.push(None),
            }
        }

        // Await in input order: the snapshot index stays aligned with the
        // service list no matter which probe finishes first.
        let mut outcomes = Vec::with_capacity(pending.len());
        for task in pending {
            let outcome = match task {
                Some(task) => task.await.unwrap_or_else(|err| {
                    error!(%err, "probe task aborted");
                    ProbeOutcome::new(0, self.mapper.map(0), ProbeMethod::Error)
                }),
                None => ProbeOutcome::new(0, self.mapper.map(0), ProbeMethod::NoUrl),
            };
            outcomes.push(outcome);
        }

        HealthSnapshot::new(outcomes)
    }

    /// Start the recurring poll.
    ///
    /// Runs `check_all` immediately, then again at the fixed interval,
    /// publishing each snapshot to the returned watch channel. Cycles are
    /// spawned rather than awaited inline, so a cycle slower than the
    /// interval never delays the cadence; overlapping cycles publish
    /// atomically with last-write-wins on the channel.
    ///
    /// The receiver starts on an empty snapshot; await `changed()` for the
    /// first real cycle. Drop the returned handle (or call
    /// [`PollHandle::stop`]) to cancel the loop.
    pub fn start(
        &self,
        services: Vec<ServiceEndpoint>,
    ) -> (PollHandle, watch::Receiver<HealthSnapshot>) {
        let (snapshot_tx, snapshot_rx) = watch::channel(HealthSnapshot::default());
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let orchestrator = self.clone();
        let snapshot_tx = Arc::new(snapshot_tx);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(orchestrator.poll_interval);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let orchestrator = orchestrator.clone();
                        let services = services.clone();
                        let tx = snapshot_tx.clone();
                        tokio::spawn(async move {
                            let snapshot = orchestrator.check_all(&services).await;
                            debug!(services = snapshot.len(), "polling cycle complete");
                            let _ = tx.send(snapshot);
                        });
                    }
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        (PollHandle { stop_tx }, snapshot_rx)
    }

    fn probe(&self) -> HealthProbe {
        HealthProbe::new(
            self.transport.clone(),
            self.mapper.clone(),
            self.probe_timeout,
        )
    }
}

impl std::fmt::Debug for HealthOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthOrchestrator")
            .field("probe_timeout", &self.probe_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Builder for configuring a [`HealthOrchestrator`].
#[derive(Default)]
pub struct OrchestratorBuilder {
    transport: Option<Arc<dyn HttpTransport>>,
    mapper: Option<StatusMapper>,
    probe_timeout: Option<Duration>,
    poll_interval: Option<Duration>,
}

impl OrchestratorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom transport (tests script fakes through this seam).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a configured status mapper instead of the built-in defaults.
    pub fn mapper(mut self, mapper: StatusMapper) -> Self {
        self.mapper = Some(mapper);
        self
    }

    /// Per-probe timeout. Defaults to 5 seconds.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    /// Recurring-poll interval. Defaults to 30 seconds.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Build the orchestrator.
    ///
    /// Fails only when no transport was supplied and the default HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<HealthOrchestrator, EngineError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(HealthOrchestrator {
            transport,
            mapper: Arc::new(self.mapper.unwrap_or_default()),
            probe_timeout: self.probe_timeout.unwrap_or(DEFAULT_PROBE_TIMEOUT),
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        })
    }
}

impl std::fmt::Debug for OrchestratorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrchestratorBuilder")
            .field("probe_timeout", &self.probe_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Handle for cancelling a recurring poll.
///
/// Drop this handle to stop polling, or call `stop()` explicitly.
/// Cancellation is the only caller-initiated way a poll ends; it is not a
/// failure.
pub struct PollHandle {
    stop_tx: watch::Sender<bool>,
}

impl PollHandle {
    /// Stop the recurring poll.
    pub fn stop(self) {
        let _ = self.stop_tx.send(true);
    }
}
