//! Cumulative per-domain availability tracking.

use std::collections::HashMap;

/// Cumulative probe counters for one domain.
///
/// Both counts only ever grow, and `up_count <= total_count` holds by
/// construction.
#[derive(Debug, Clone, Copy, Default)]
struct DomainCounter {
    up_count: u64,
    total_count: u64,
}

/// Maps each observed domain to its cumulative (up, total) counters.
///
/// Counters are created lazily on a domain's first probe, never reset,
/// and never persisted. Reporting walks domains in first-observed order.
/// The tracker is exclusively owned by the polling loop, so no locking.
#[derive(Debug, Default)]
pub struct AvailabilityTracker {
    counters: HashMap<String, DomainCounter>,
    /// Domains in first-observed order, for deterministic reporting.
    order: Vec<String>,
}

impl AvailabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one probe result for a domain, creating its counter on
    /// first sight.
    pub fn record(&mut self, domain: &str, up: bool) {
        if !self.counters.contains_key(domain) {
            self.order.push(domain.to_string());
        }
        let counter = self.counters.entry(domain.to_string()).or_default();
        counter.total_count += 1;
        if up {
            counter.up_count += 1;
        }
    }

    /// Integer availability percentage for a domain, rounded
    /// half-away-from-zero. `None` until the domain's first probe, so
    /// the division is never by zero.
    pub fn availability(&self, domain: &str) -> Option<u32> {
        let counter = self.counters.get(domain)?;
        if counter.total_count == 0 {
            return None;
        }
        let percentage = 100.0 * counter.up_count as f64 / counter.total_count as f64;
        Some(percentage.round() as u32)
    }

    /// One report line per known domain, in first-observed order.
    pub fn report_lines(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|domain| {
                let percentage = self.availability(domain)?;
                Some(format!("{domain} has {percentage}% availability percentage"))
            })
            .collect()
    }

    /// Print the availability report to stdout.
    ///
    /// The report is the program's output contract, not diagnostics, so
    /// it bypasses tracing.
    pub fn report(&self) {
        for line in self.report_lines() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_domain_has_no_availability() {
        let tracker = AvailabilityTracker::new();
        assert_eq!(tracker.availability("a.test"), None);
        assert!(tracker.report_lines().is_empty());
    }

    #[test]
    fn all_up_is_100() {
        let mut tracker = AvailabilityTracker::new();
        for _ in 0..4 {
            tracker.record("a.test", true);
        }
        assert_eq!(tracker.availability("a.test"), Some(100));
    }

    #[test]
    fn all_down_is_0() {
        let mut tracker = AvailabilityTracker::new();
        for _ in 0..4 {
            tracker.record("a.test", false);
        }
        assert_eq!(tracker.availability("a.test"), Some(0));
    }

    #[test]
    fn half_up_is_50() {
        // Two endpoints on the same domain, one round: first succeeds,
        // second times out.
        let mut tracker = AvailabilityTracker::new();
        tracker.record("a.test", true);
        tracker.record("a.test", false);
        assert_eq!(tracker.availability("a.test"), Some(50));
        assert_eq!(
            tracker.report_lines(),
            ["a.test has 50% availability percentage"]
        );
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let mut tracker = AvailabilityTracker::new();
        // 1/8 = 12.5% → 13.
        tracker.record("a.test", true);
        for _ in 0..7 {
            tracker.record("a.test", false);
        }
        assert_eq!(tracker.availability("a.test"), Some(13));

        // 1/3 = 33.33…% → 33, 2/3 = 66.67…% → 67.
        let mut tracker = AvailabilityTracker::new();
        tracker.record("b.test", true);
        tracker.record("b.test", false);
        tracker.record("b.test", false);
        assert_eq!(tracker.availability("b.test"), Some(33));

        let mut tracker = AvailabilityTracker::new();
        tracker.record("c.test", true);
        tracker.record("c.test", true);
        tracker.record("c.test", false);
        assert_eq!(tracker.availability("c.test"), Some(67));
    }

    #[test]
    fn availability_stays_in_bounds() {
        let mut tracker = AvailabilityTracker::new();
        for i in 0..100 {
            tracker.record("a.test", i % 3 == 0);
            let availability = tracker.availability("a.test").unwrap();
            assert!(availability <= 100);
        }
    }

    #[test]
    fn report_order_is_first_observed() {
        let mut tracker = AvailabilityTracker::new();
        tracker.record("b.test", true);
        tracker.record("a.test", false);
        tracker.record("b.test", false);
        tracker.record("c.test", true);
        assert_eq!(
            tracker.report_lines(),
            [
                "b.test has 50% availability percentage",
                "a.test has 0% availability percentage",
                "c.test has 100% availability percentage",
            ]
        );
    }

    #[test]
    fn report_is_idempotent() {
        let mut tracker = AvailabilityTracker::new();
        tracker.record("a.test", true);
        tracker.record("b.test", false);
        assert_eq!(tracker.report_lines(), tracker.report_lines());
    }

    #[test]
    fn counters_accumulate_across_rounds() {
        let mut tracker = AvailabilityTracker::new();
        // Round 1: up. Round 2: down. Round 3: down.
        tracker.record("a.test", true);
        assert_eq!(tracker.availability("a.test"), Some(100));
        tracker.record("a.test", false);
        assert_eq!(tracker.availability("a.test"), Some(50));
        tracker.record("a.test", false);
        assert_eq!(tracker.availability("a.test"), Some(33));
    }
}
