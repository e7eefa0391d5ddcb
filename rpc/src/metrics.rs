//! Prometheus metrics for the airdrop gate.
//!
//! The [`GateMetrics`] struct owns a dedicated [`Registry`] that the
//! `/metrics` endpoint encodes into the Prometheus text exposition format.

use prometheus::{
    register_histogram_with_registry, register_int_counter_with_registry, Histogram,
    HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};

/// Central collection of all gate-level Prometheus metrics.
pub struct GateMetrics {
    /// The Prometheus registry that owns every metric below.
    pub registry: Registry,

    // ── Counters ────────────────────────────────────────────────────────
    /// Total number of eligibility evaluations requested.
    pub evaluations_total: IntCounter,
    /// Total number of eligible verdicts produced.
    pub verdicts_eligible: IntCounter,
    /// Total number of not-eligible verdicts produced.
    pub verdicts_ineligible: IntCounter,
    /// Total number of requests rejected for a malformed identity.
    pub validation_failures: IntCounter,
    /// Total number of evaluations that failed on a provider lookup.
    pub provider_failures: IntCounter,
    /// Total number of claims successfully submitted.
    pub claims_submitted: IntCounter,
    /// Total number of claim attempts refused (not eligible, already
    /// claimed) or failed.
    pub claims_rejected: IntCounter,

    // ── Histograms ──────────────────────────────────────────────────────
    /// End-to-end evaluation time, in milliseconds.
    pub evaluation_latency_ms: Histogram,
}

impl GateMetrics {
    /// Create a fresh set of metrics, all registered under a new
    /// [`Registry`].
    pub fn new() -> Self {
        let registry = Registry::new();

        let evaluations_total = register_int_counter_with_registry!(
            Opts::new(
                "airgate_evaluations_total",
                "Total eligibility evaluations requested"
            ),
            registry
        )
        .expect("failed to register evaluations_total counter");

        let verdicts_eligible = register_int_counter_with_registry!(
            Opts::new(
                "airgate_verdicts_eligible_total",
                "Total eligible verdicts produced"
            ),
            registry
        )
        .expect("failed to register verdicts_eligible counter");

        let verdicts_ineligible = register_int_counter_with_registry!(
            Opts::new(
                "airgate_verdicts_ineligible_total",
                "Total not-eligible verdicts produced"
            ),
            registry
        )
        .expect("failed to register verdicts_ineligible counter");

        let validation_failures = register_int_counter_with_registry!(
            Opts::new(
                "airgate_validation_failures_total",
                "Total requests rejected for a malformed identity"
            ),
            registry
        )
        .expect("failed to register validation_failures counter");

        let provider_failures = register_int_counter_with_registry!(
            Opts::new(
                "airgate_provider_failures_total",
                "Total evaluations that failed on a provider lookup"
            ),
            registry
        )
        .expect("failed to register provider_failures counter");

        let claims_submitted = register_int_counter_with_registry!(
            Opts::new(
                "airgate_claims_submitted_total",
                "Total claims successfully submitted"
            ),
            registry
        )
        .expect("failed to register claims_submitted counter");

        let claims_rejected = register_int_counter_with_registry!(
            Opts::new(
                "airgate_claims_rejected_total",
                "Total claim attempts refused or failed"
            ),
            registry
        )
        .expect("failed to register claims_rejected counter");

        let evaluation_latency_ms = register_histogram_with_registry!(
            HistogramOpts::new(
                "airgate_evaluation_latency_ms",
                "End-to-end evaluation time in milliseconds"
            )
            .buckets(vec![5.0, 25.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0]),
            registry
        )
        .expect("failed to register evaluation_latency histogram");

        Self {
            registry,
            evaluations_total,
            verdicts_eligible,
            verdicts_ineligible,
            validation_failures,
            provider_failures,
            claims_submitted,
            claims_rejected,
            evaluation_latency_ms,
        }
    }

    /// Encode every registered metric in the text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for GateMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_and_increment() {
        let metrics = GateMetrics::new();
        assert_eq!(metrics.evaluations_total.get(), 0);
        metrics.evaluations_total.inc();
        assert_eq!(metrics.evaluations_total.get(), 1);
    }

    #[test]
    fn encode_includes_metric_names() {
        let metrics = GateMetrics::new();
        metrics.evaluations_total.inc();
        let text = metrics.encode().unwrap();
        assert!(text.contains("airgate_evaluations_total"));
        assert!(text.contains("airgate_evaluation_latency_ms"));
    }
}
