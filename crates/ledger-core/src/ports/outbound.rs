//! Outbound Ports (Driven Ports / SPI)

use crate::domain::events::LedgerRecord;

/// Audit side channel.
///
/// Invoked once per successful mutating command, after the mutation is
/// applied and while the ledger's write lock is still held, so records reach
/// the sink in commit order. Implementations must not block and must not
/// call back into the ledger.
pub trait EventSink: Send + Sync {
    fn emit(&self, record: &LedgerRecord);
}

impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    fn emit(&self, record: &LedgerRecord) {
        (**self).emit(record)
    }
}
