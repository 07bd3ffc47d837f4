//! # Ledger Snapshots
//!
//! Serializable copy of the full ledger state, for external persistence and
//! audit. Zero balances, zero allowances and empty role sets are omitted.
//! Restoring validates the snapshot against every ledger invariant.

use super::access::RoleRegistry;
use super::allowances::AllowanceBook;
use super::balances::BalanceStore;
use super::errors::LedgerError;
use super::invariants;
use super::ledger::LedgerState;
use super::supply::SupplyCap;
use super::value_objects::{Account, Amount, PauseState, Role};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One approved allowance.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AllowanceEntry {
    pub owner: Account,
    pub spender: Account,
    pub amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub max_supply: Amount,
    pub total_supply: Amount,
    pub pause_state: PauseState,
    pub balances: BTreeMap<Account, Amount>,
    pub roles: BTreeMap<Account, BTreeSet<Role>>,
    pub allowances: Vec<AllowanceEntry>,
    /// Sequence number of the last record committed before the snapshot
    pub sequence: u64,
}

impl LedgerState {
    /// Capture the full state. Deterministic: equal states give equal snapshots.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let balances = self
            .balances()
            .iter()
            .filter(|(_, balance)| **balance > 0)
            .map(|(account, balance)| (*account, *balance))
            .collect();

        let roles = self
            .roles()
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(account, set)| (*account, set.iter().copied().collect()))
            .collect();

        let mut allowances: Vec<AllowanceEntry> = self
            .allowances()
            .iter()
            .filter(|(_, amount)| **amount > 0)
            .map(|((owner, spender), amount)| AllowanceEntry {
                owner: *owner,
                spender: *spender,
                amount: *amount,
            })
            .collect();
        allowances.sort();

        LedgerSnapshot {
            max_supply: self.max_supply(),
            total_supply: self.total_supply(),
            pause_state: self.pause_state(),
            balances,
            roles,
            allowances,
            sequence: self.sequence(),
        }
    }

    /// Rebuild a ledger from a snapshot, rejecting any snapshot that breaks
    /// conservation, the supply cap, or credits the null account.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Result<Self, LedgerError> {
        let balances: HashMap<Account, Amount> = snapshot.balances.into_iter().collect();
        let store = BalanceStore::from_parts(balances, snapshot.total_supply);

        let mut roles = RoleRegistry::new();
        for (account, set) in snapshot.roles {
            for role in set {
                roles.grant(account, role);
            }
        }

        let mut allowances = AllowanceBook::new();
        for entry in snapshot.allowances {
            if entry.owner.is_zero() || entry.spender.is_zero() {
                return Err(LedgerError::InvalidSnapshot(
                    "allowance references the null account".to_string(),
                ));
            }
            allowances.approve(entry.owner, entry.spender, entry.amount);
        }

        let state = LedgerState::from_parts(
            store,
            roles,
            SupplyCap::new(snapshot.max_supply),
            snapshot.pause_state,
            allowances,
            snapshot.sequence,
        );
        invariants::check_all(&state)?;
        Ok(state)
    }
}
