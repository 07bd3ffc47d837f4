//! # Ledger Telemetry
//!
//! Observability for Ledger-Core.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter` and a pretty or JSON layer
//! - **Metrics**: Prometheus counters and gauges fed by `MetricsSink`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_core::{FanoutSink, LedgerConfig, LedgerService, TracingSink};
//! use ledger_telemetry::{init_telemetry, MetricsSink, TelemetryConfig};
//! use std::sync::Arc;
//!
//! init_telemetry(&TelemetryConfig::from_env())?;
//!
//! let sink = FanoutSink::new()
//!     .with(Arc::new(TracingSink))
//!     .with(Arc::new(MetricsSink::new()));
//! let ledger = LedgerService::new(&LedgerConfig::from_env()?, Arc::new(sink))?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LEDGER_SERVICE_NAME` | `ledger-core` | Service name in the startup log |
//! | `LEDGER_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `LEDGER_JSON_LOGS` | `false` | JSON formatted logs |
//! | `LEDGER_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

mod config;
mod metrics;
mod sink;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, LEDGER_EVENTS, LEDGER_SEQUENCE, LEDGER_TOTAL_SUPPLY,
    REGISTRY,
};
pub use sink::MetricsSink;
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Register metrics, then install the tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_tracing(config)
}
