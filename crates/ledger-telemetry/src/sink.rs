//! `EventSink` that feeds the Prometheus metrics.

use ledger_core::config::DECIMALS_FACTOR;
use ledger_core::{Amount, EventSink, LedgerRecord};

use crate::metrics::{LEDGER_EVENTS, LEDGER_SEQUENCE, LEDGER_TOTAL_SUPPLY};

/// Updates `ledger_events_total`, `ledger_total_supply_tokens` and `ledger_sequence`
/// for every committed record. Combine with other sinks through `FanoutSink`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSink;

impl MetricsSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for MetricsSink {
    fn emit(&self, record: &LedgerRecord) {
        LEDGER_EVENTS
            .with_label_values(&[record.event.operation()])
            .inc();
        LEDGER_TOTAL_SUPPLY.set(whole_tokens(record.total_supply));
        LEDGER_SEQUENCE.set(i64::try_from(record.sequence).unwrap_or(i64::MAX));
    }
}

/// Base units to whole tokens, saturating at `i64::MAX`.
fn whole_tokens(amount: Amount) -> i64 {
    i64::try_from(amount / DECIMALS_FACTOR).unwrap_or(i64::MAX)
}
