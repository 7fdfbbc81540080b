//! Scanner gauges

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Markets fetched into the candidate pool
    CandidateMarkets,
    /// Markets dropped by the hard-exclusion ladder
    ExcludedMarkets,
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::CandidateMarkets => "polyscalper_candidate_markets",
        GaugeMetric::ExcludedMarkets => "polyscalper_excluded_markets",
    };

    tracing::debug!(metric = metric_name, value = value, "Setting gauge");
}
