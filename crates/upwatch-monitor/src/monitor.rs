//! The polling loop — probes every endpoint each round, then reports
//! cumulative availability.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use upwatch_core::Endpoint;

use crate::aggregate::AvailabilityTracker;
use crate::probe::Prober;

/// Delay between polling rounds (seconds).
pub const DEFAULT_INTERVAL_SECS: u64 = 3;

/// Drives the round loop: probe every endpoint in configured order,
/// record each outcome, print the availability report, sleep, repeat.
///
/// Probing is strictly sequential, so counter updates land in
/// descriptor order and accumulation is deterministic for a given
/// sequence of probe outcomes. The monitor exclusively owns the tracker.
pub struct Monitor {
    endpoints: Vec<Endpoint>,
    prober: Prober,
    tracker: AvailabilityTracker,
    interval: Duration,
}

impl Monitor {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints,
            prober: Prober::new(),
            tracker: AvailabilityTracker::new(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
        }
    }

    /// Override the inter-round delay.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Cumulative availability for a domain, if it has been probed.
    pub fn availability(&self, domain: &str) -> Option<u32> {
        self.tracker.availability(domain)
    }

    /// Probe every endpoint once, in configured order, recording each
    /// outcome. Stops early when `shutdown` flips, without abandoning
    /// the in-flight probe. Returns false if the round was cut short.
    pub async fn probe_round(&mut self, shutdown: &watch::Receiver<bool>) -> bool {
        for endpoint in &self.endpoints {
            if *shutdown.borrow() {
                return false;
            }
            let outcome = self.prober.probe(endpoint).await;
            debug!(url = %endpoint.url, outcome = ?outcome, "probe recorded");
            self.tracker.record(endpoint.domain(), outcome.is_up());
        }
        true
    }

    /// Run rounds until the shutdown channel flips.
    ///
    /// Shutdown is observed at the two suspension boundaries: before
    /// each probe and during the inter-round sleep. No new round starts
    /// once stopping; a mid-round stop still reports the state
    /// accumulated so far before returning.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            endpoints = self.endpoints.len(),
            interval_secs = self.interval.as_secs(),
            "availability monitor started"
        );

        loop {
            let completed = self.probe_round(&shutdown).await;
            self.tracker.report();
            if !completed {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.changed() => break,
            }
        }

        info!("availability monitor stopped");
    }
}
