//! Telemetry module
//!
//! Structured logging and scanner gauges

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{set_gauge, GaugeMetric};
