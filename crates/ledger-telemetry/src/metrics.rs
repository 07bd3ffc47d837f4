//! Prometheus metrics for the ledger.
//!
//! All metrics follow the naming convention: `ledger_<metric>_<unit>`
//!
//! - **Counter**: committed events per operation
//! - **Gauge**: current total supply and last committed sequence number

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Registry holding every ledger metric
    pub static ref REGISTRY: Registry = Registry::new();

    /// Committed ledger events, labelled by operation
    pub static ref LEDGER_EVENTS: IntCounterVec = IntCounterVec::new(
        Opts::new("ledger_events_total", "Total ledger events committed"),
        &["operation"]
    ).expect("metric creation failed");

    /// Total supply after the last committed event, in whole tokens
    pub static ref LEDGER_TOTAL_SUPPLY: IntGauge = IntGauge::new(
        "ledger_total_supply_tokens",
        "Total supply in whole tokens, rounded down"
    ).expect("metric creation failed");

    /// Sequence number of the last committed event
    pub static ref LEDGER_SEQUENCE: IntGauge = IntGauge::new(
        "ledger_sequence",
        "Sequence number of the last committed ledger event"
    ).expect("metric creation failed");
}

/// Register every ledger metric with `REGISTRY`. Safe to call repeatedly.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(LEDGER_EVENTS.clone()),
        Box::new(LEDGER_TOTAL_SUPPLY.clone()),
        Box::new(LEDGER_SEQUENCE.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
