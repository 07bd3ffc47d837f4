//! # Ledger Core
//!
//! Fungible-asset ledger: a single authoritative state machine that tracks
//! balances, enforces an issuance cap, and gates every balance mutation behind
//! role-based authorization and an emergency pause switch.
//!
//! ## Architecture
//!
//! - **Domain**: Balance store, role registry, supply cap, pause gate,
//!   allowances and the `LedgerState` aggregate that composes them
//! - **Ports**: Inbound (`LedgerApi`) and Outbound (`EventSink`)
//! - **Adapters**: Event sinks (no-op, tracing, in-memory, broadcast, fan-out)
//! - **Application**: `LedgerService`, the lock-guarded entry point
//!
//! ## Command Pipeline
//!
//! ```text
//! caller ──→ [Access Control] ──→ [Pause Gate] ──→ [Supply Cap] ──→ [Balance Store]
//!                 │                    │              (mint only)          │
//!                 └──── Unauthorized   └──── LedgerPaused                  ↓
//!                                                                   LedgerRecord ──→ EventSink
//! ```
//!
//! Every command is evaluated completely before anything is written, so a
//! rejected command leaves the ledger exactly as it found it.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | `total_supply == Σ balances` | `domain/balances.rs` - mint/burn are the only supply writers |
//! | `total_supply <= max_supply` | `domain/supply.rs` - checked before every mint |
//! | No negative balance | `domain/balances.rs` - `checked_sub`, never wrapping |
//! | Atomic commands | `domain/ledger.rs` - check-all-then-apply |
//! | Serializable isolation | `application/service.rs` - one `RwLock` over the state |

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::sinks::{BroadcastSink, FanoutSink, InMemorySink, NoOpSink, TracingSink};
pub use application::service::LedgerService;
pub use config::{ConfigError, LedgerConfig};
pub use domain::errors::LedgerError;
pub use domain::events::{LedgerEvent, LedgerRecord};
pub use domain::ledger::LedgerState;
pub use domain::snapshot::{AllowanceEntry, LedgerSnapshot};
pub use domain::value_objects::*;
pub use ports::inbound::LedgerApi;
pub use ports::outbound::EventSink;
