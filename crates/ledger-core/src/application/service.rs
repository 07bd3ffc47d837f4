//! Ledger Service
//!
//! The application-layer entry point. Owns the `LedgerState` behind a single
//! `parking_lot::RwLock`: commands take the write lock for their whole
//! check-and-apply cycle, queries share the read lock. Records are handed to
//! the `EventSink` before the write lock is released.

use crate::config::LedgerConfig;
use crate::domain::errors::LedgerError;
use crate::domain::events::LedgerRecord;
use crate::domain::ledger::LedgerState;
use crate::domain::snapshot::LedgerSnapshot;
use crate::domain::value_objects::{Account, Amount, Role};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

pub struct LedgerService {
    state: RwLock<LedgerState>,
    sink: Arc<dyn EventSink>,
}

impl LedgerService {
    /// Run genesis from `config` and publish its records.
    pub fn new(config: &LedgerConfig, sink: Arc<dyn EventSink>) -> Result<Self, LedgerError> {
        let genesis =
            LedgerState::genesis(config.owner, config.initial_supply, config.max_supply)?;
        for record in &genesis.records {
            sink.emit(record);
        }

        info!(
            owner = %config.owner,
            initial_supply = %config.initial_supply,
            max_supply = %config.max_supply,
            "Ledger created"
        );

        Ok(Self::with_state(genesis.state, sink))
    }

    /// Wrap an existing state. Nothing is emitted.
    pub fn with_state(state: LedgerState, sink: Arc<dyn EventSink>) -> Self {
        Self {
            state: RwLock::new(state),
            sink,
        }
    }

    /// Restore from a snapshot, validating it first.
    pub fn from_snapshot(
        snapshot: LedgerSnapshot,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, LedgerError> {
        let state = LedgerState::from_snapshot(snapshot)?;
        info!(
            sequence = state.sequence(),
            total_supply = %state.total_supply(),
            "Ledger restored from snapshot"
        );
        Ok(Self::with_state(state, sink))
    }

    /// Sequence number of the last committed record.
    pub fn sequence(&self) -> u64 {
        self.state.read().sequence()
    }

    /// Run one command under the write lock. `Ok(true)` when a record was
    /// committed, `Ok(false)` for an accepted no-op.
    fn execute<F>(&self, op: &'static str, caller: Account, command: F) -> Result<bool, LedgerError>
    where
        F: FnOnce(&mut LedgerState) -> Result<Option<LedgerRecord>, LedgerError>,
    {
        let span = info_span!("ledger_command", op, caller = %caller);
        let _enter = span.enter();

        let mut state = self.state.write();
        match command(&mut *state) {
            Ok(Some(record)) => {
                self.sink.emit(&record);
                debug!(
                    sequence = record.sequence,
                    total_supply = %record.total_supply,
                    "Command applied"
                );
                Ok(true)
            }
            Ok(None) => {
                debug!("Command applied without state change");
                Ok(false)
            }
            Err(error) => {
                warn!(kind = error.kind(), %error, "Command rejected");
                Err(error)
            }
        }
    }
}

impl LedgerApi for LedgerService {
    fn transfer(&self, from: Account, to: Account, amount: Amount) -> Result<(), LedgerError> {
        self.execute("transfer", from, |state| {
            state.transfer(from, to, amount).map(Some)
        })?;
        Ok(())
    }

    fn mint(&self, caller: Account, to: Account, amount: Amount) -> Result<(), LedgerError> {
        self.execute("mint", caller, |state| state.mint(caller, to, amount).map(Some))?;
        Ok(())
    }

    fn burn(&self, caller: Account, amount: Amount) -> Result<(), LedgerError> {
        self.execute("burn", caller, |state| state.burn(caller, amount).map(Some))?;
        Ok(())
    }

    fn grant_role(&self, caller: Account, account: Account, role: Role) -> Result<(), LedgerError> {
        let changed = self.execute("grant_role", caller, |state| {
            state.grant_role(caller, account, role)
        })?;
        if changed {
            info!(%account, %role, granted_by = %caller, "Role granted");
        }
        Ok(())
    }

    fn revoke_role(
        &self,
        caller: Account,
        account: Account,
        role: Role,
    ) -> Result<(), LedgerError> {
        let changed = self.execute("revoke_role", caller, |state| {
            state.revoke_role(caller, account, role)
        })?;
        if changed {
            info!(%account, %role, revoked_by = %caller, "Role revoked");
        }
        Ok(())
    }

    fn renounce_role(&self, caller: Account, role: Role) -> Result<(), LedgerError> {
        let changed = self.execute("renounce_role", caller, |state| {
            state.renounce_role(caller, role)
        })?;
        if changed {
            info!(account = %caller, %role, "Role renounced");
        }
        Ok(())
    }

    fn pause(&self, caller: Account) -> Result<(), LedgerError> {
        self.execute("pause", caller, |state| state.pause(caller).map(Some))?;
        info!(by = %caller, "Ledger paused");
        Ok(())
    }

    fn unpause(&self, caller: Account) -> Result<(), LedgerError> {
        self.execute("unpause", caller, |state| state.unpause(caller).map(Some))?;
        info!(by = %caller, "Ledger unpaused");
        Ok(())
    }

    fn approve(&self, owner: Account, spender: Account, amount: Amount) -> Result<(), LedgerError> {
        self.execute("approve", owner, |state| {
            state.approve(owner, spender, amount).map(Some)
        })?;
        Ok(())
    }

    fn transfer_from(
        &self,
        spender: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.execute("transfer_from", spender, |state| {
            state.transfer_from(spender, from, to, amount).map(Some)
        })?;
        Ok(())
    }

    fn balance_of(&self, account: &Account) -> Amount {
        self.state.read().balance_of(account)
    }

    fn total_supply(&self) -> Amount {
        self.state.read().total_supply()
    }

    fn max_supply(&self) -> Amount {
        self.state.read().max_supply()
    }

    fn mintable_supply(&self) -> Amount {
        self.state.read().mintable_supply()
    }

    fn has_role(&self, account: &Account, role: Role) -> bool {
        self.state.read().has_role(account, role)
    }

    fn roles_of(&self, account: &Account) -> Vec<Role> {
        self.state.read().roles_of(account)
    }

    fn is_paused(&self) -> bool {
        self.state.read().is_paused()
    }

    fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.state.read().allowance(owner, spender)
    }

    fn snapshot(&self) -> LedgerSnapshot {
        self.state.read().snapshot()
    }
}
