//! Event sink adapters
//!
//! Implementations of the `EventSink` port for the common deployments:
//! discard, log, buffer in memory, broadcast to async consumers, or fan out
//! to several of these at once.

use crate::domain::events::{LedgerEvent, LedgerRecord};
use crate::ports::outbound::EventSink;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Default channel capacity for `BroadcastSink`.
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1000;

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl EventSink for NoOpSink {
    fn emit(&self, _record: &LedgerRecord) {}
}

/// Writes every record to the `tracing` pipeline as a structured audit line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, record: &LedgerRecord) {
        let subject = record.event.subject();
        match &record.event {
            LedgerEvent::Transferred { to, amount, .. } => info!(
                target: "ledger::audit",
                sequence = record.sequence,
                operation = record.event.operation(),
                subject = %subject,
                counterparty = %to,
                amount = %amount,
                "Ledger event"
            ),
            LedgerEvent::Minted { amount, .. } | LedgerEvent::Burned { amount, .. } => info!(
                target: "ledger::audit",
                sequence = record.sequence,
                operation = record.event.operation(),
                subject = %subject,
                amount = %amount,
                total_supply = %record.total_supply,
                "Ledger event"
            ),
            LedgerEvent::RoleGranted { role, sender, .. }
            | LedgerEvent::RoleRevoked { role, sender, .. } => info!(
                target: "ledger::audit",
                sequence = record.sequence,
                operation = record.event.operation(),
                subject = %subject,
                role = %role,
                sender = %sender,
                "Ledger event"
            ),
            LedgerEvent::Paused { .. } | LedgerEvent::Unpaused { .. } => info!(
                target: "ledger::audit",
                sequence = record.sequence,
                operation = record.event.operation(),
                subject = %subject,
                "Ledger event"
            ),
            LedgerEvent::Approval {
                spender, amount, ..
            } => info!(
                target: "ledger::audit",
                sequence = record.sequence,
                operation = record.event.operation(),
                subject = %subject,
                counterparty = %spender,
                amount = %amount,
                "Ledger event"
            ),
        }
    }
}

/// Keeps every record in memory. Intended for tests and embedding hosts
/// that drain the log themselves.
#[derive(Debug, Default)]
pub struct InMemorySink {
    records: Mutex<Vec<LedgerRecord>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record received so far.
    pub fn records(&self) -> Vec<LedgerRecord> {
        self.records.lock().clone()
    }

    /// Events only, in commit order.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.records
            .lock()
            .iter()
            .map(|record| record.event.clone())
            .collect()
    }

    pub fn last(&self) -> Option<LedgerRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return every buffered record.
    pub fn drain(&self) -> Vec<LedgerRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl EventSink for InMemorySink {
    fn emit(&self, record: &LedgerRecord) {
        self.records.lock().push(record.clone());
    }
}

/// Publishes records on a `tokio::sync::broadcast` channel.
///
/// Sending never blocks. Records published while nobody is subscribed are
/// dropped; a subscriber that falls more than `capacity` records behind
/// sees `RecvError::Lagged`.
pub struct BroadcastSink {
    sender: broadcast::Sender<LedgerRecord>,
    capacity: usize,
}

impl BroadcastSink {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BROADCAST_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, capacity }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LedgerRecord> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for BroadcastSink {
    fn emit(&self, record: &LedgerRecord) {
        match self.sender.send(record.clone()) {
            Ok(receivers) => debug!(
                sequence = record.sequence,
                receivers, "Ledger record broadcast"
            ),
            Err(_) => debug!(
                sequence = record.sequence,
                "Ledger record dropped (no subscribers)"
            ),
        }
    }
}

/// Forwards every record to each inner sink, in registration order.
#[derive(Default, Clone)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for FanoutSink {
    fn emit(&self, record: &LedgerRecord) {
        for sink in &self.sinks {
            sink.emit(record);
        }
    }
}
