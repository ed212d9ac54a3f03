//! Probe execution — one HTTP request per endpoint per round.
//!
//! Every failure mode is contained here and classified DOWN; no error
//! from a single endpoint ever reaches the polling loop.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, warn};

use upwatch_core::Endpoint;

/// Total wait for one probe, connect through full response (seconds).
pub const PROBE_TIMEOUT_SECS: u64 = 60;

/// Slowest response still counted as UP (milliseconds).
pub const LATENCY_BUDGET_MS: u128 = 500;

/// Classification of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response, fully received within the latency budget.
    Up,
    /// 2xx response, but slower than the latency budget.
    Slow,
    /// Non-2xx response.
    HttpError,
    /// Timeout, DNS failure, connection or TLS error.
    TransportFailed,
    /// Method other than GET/POST — a configuration defect, never retried.
    UnsupportedMethod,
}

impl ProbeOutcome {
    /// Whether this probe counts toward availability.
    pub fn is_up(self) -> bool {
        matches!(self, ProbeOutcome::Up)
    }
}

/// Issues probes over a shared HTTP client.
#[derive(Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
    }

    /// Build a prober with a custom request timeout (tests use short ones).
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Probe one endpoint and classify the result.
    ///
    /// GET sends the configured headers and no body; POST additionally
    /// sends the body when one is configured. Any other method is logged
    /// and counted DOWN without touching the network.
    pub async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome {
        let mut request = match endpoint.method.as_str() {
            "GET" => self.client.get(&endpoint.url),
            "POST" => {
                let mut request = self.client.post(&endpoint.url);
                if let Some(body) = &endpoint.body {
                    request = request.body(body.clone());
                }
                request
            }
            other => {
                warn!(url = %endpoint.url, method = %other, "unsupported HTTP method");
                return ProbeOutcome::UnsupportedMethod;
            }
        };
        for (name, value) in &endpoint.headers {
            request = request.header(name, value);
        }

        let start = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %endpoint.url, error = %e, "probe transport failure");
                return ProbeOutcome::TransportFailed;
            }
        };

        let status = response.status();
        // Latency counts until the body is fully received, not just headers.
        if let Err(e) = response.bytes().await {
            debug!(url = %endpoint.url, error = %e, "probe body read failure");
            return ProbeOutcome::TransportFailed;
        }
        let elapsed_ms = start.elapsed().as_millis();

        if !status.is_success() {
            debug!(url = %endpoint.url, status = %status, "probe non-2xx");
            return ProbeOutcome::HttpError;
        }
        if elapsed_ms > LATENCY_BUDGET_MS {
            debug!(url = %endpoint.url, elapsed_ms = elapsed_ms as u64, "probe over latency budget");
            return ProbeOutcome::Slow;
        }
        ProbeOutcome::Up
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}
