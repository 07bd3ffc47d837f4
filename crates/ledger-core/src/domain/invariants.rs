//! Domain invariants for the Ledger
//!
//! Executable forms of the ledger's safety properties. Snapshot restore runs
//! them; tests run them after every command.

use super::errors::LedgerError;
use super::ledger::LedgerState;

/// INVARIANT-1: Conservation
/// Total supply equals the sum of every balance.
pub fn invariant_conservation(state: &LedgerState) -> bool {
    state.balances().sum_of_balances() == Some(state.total_supply())
}

/// INVARIANT-2: Supply Cap
/// Total supply never exceeds the immutable maximum.
pub fn invariant_supply_cap(state: &LedgerState) -> bool {
    state.total_supply() <= state.max_supply()
}

/// INVARIANT-3: No Null Holder
/// The null account never holds a balance.
pub fn invariant_no_null_holder(state: &LedgerState) -> bool {
    state
        .balances()
        .iter()
        .all(|(account, balance)| !account.is_zero() || *balance == 0)
}

/// Run every invariant, reporting the first violation.
pub fn check_all(state: &LedgerState) -> Result<(), LedgerError> {
    if !invariant_conservation(state) {
        return Err(LedgerError::InvalidSnapshot(format!(
            "total supply {} does not match sum of balances",
            state.total_supply()
        )));
    }
    if !invariant_supply_cap(state) {
        return Err(LedgerError::InvalidSnapshot(format!(
            "total supply {} exceeds max supply {}",
            state.total_supply(),
            state.max_supply()
        )));
    }
    if !invariant_no_null_holder(state) {
        return Err(LedgerError::InvalidSnapshot(
            "null account holds a balance".to_string(),
        ));
    }
    Ok(())
}
