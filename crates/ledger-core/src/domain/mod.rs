//! Domain module for the Ledger
//!
//! Contains the sub-stores, the aggregate state machine, errors, events and
//! invariants.

pub mod access;
pub mod allowances;
pub mod balances;
pub mod errors;
pub mod events;
pub mod invariants;
pub mod ledger;
pub mod pause;
pub mod snapshot;
pub mod supply;
pub mod value_objects;

pub use access::RoleRegistry;
pub use allowances::AllowanceBook;
pub use balances::BalanceStore;
pub use errors::*;
pub use events::*;
pub use ledger::LedgerState;
pub use pause::PauseGate;
pub use snapshot::*;
pub use supply::SupplyCap;
pub use value_objects::*;
