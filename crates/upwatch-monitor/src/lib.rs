//! upwatch-monitor — the polling, classification, and aggregation core.
//!
//! Drives the availability monitor's round loop: every round probes each
//! configured endpoint in order, classifies the result UP or DOWN, folds
//! it into cumulative per-domain counters, and prints the availability
//! report.
//!
//! # Architecture
//!
//! ```text
//! Monitor (one task)
//!   ├── per round, per endpoint: Prober::probe() → ProbeOutcome
//!   ├── AvailabilityTracker::record() — cumulative (up, total) per domain
//!   ├── AvailabilityTracker::report() — one stdout line per domain
//!   └── inter-round sleep, raced against the shutdown watch channel
//! ```
//!
//! # Classification
//!
//! A probe is UP iff the status is 2xx **and** the full response arrived
//! within 500 ms. Slow 2xx responses, non-2xx responses, transport
//! failures, and unsupported methods all count DOWN; none of them ever
//! stop the loop. The availability percentage is the sole failure signal.
//!
//! # Shutdown
//!
//! Cooperative: a `watch` channel observed before each probe and during
//! the inter-round sleep. The in-flight probe always completes and no new
//! round starts once stopping.

pub mod aggregate;
pub mod monitor;
pub mod probe;

pub use aggregate::AvailabilityTracker;
pub use monitor::{DEFAULT_INTERVAL_SECS, Monitor};
pub use probe::{ProbeOutcome, Prober};
