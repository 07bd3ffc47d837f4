//! # Ledger State
//!
//! The aggregate that composes the balance store, role registry, supply cap,
//! pause gate and allowance book into one consistency domain.
//!
//! Every command runs its checks in a fixed order before writing anything:
//!
//! 1. Access control (commands that need a role)
//! 2. Pause gate (balance-mutating commands)
//! 3. Account validity
//! 4. Supply cap (mint only)
//! 5. Balance / allowance availability
//!
//! The only write that can still fail after the checks is the balance store
//! itself, and it computes its new values before touching its map. A
//! rejected command therefore has no observable effect.

use super::access::RoleRegistry;
use super::allowances::AllowanceBook;
use super::balances::BalanceStore;
use super::errors::LedgerError;
use super::events::{LedgerEvent, LedgerRecord};
use super::pause::PauseGate;
use super::supply::SupplyCap;
use super::value_objects::{Account, Amount, PauseState, Role};

/// A freshly created ledger and the records its creation produced.
#[derive(Debug, Clone)]
pub struct Genesis {
    pub state: LedgerState,
    pub records: Vec<LedgerRecord>,
}

#[derive(Debug, Clone)]
pub struct LedgerState {
    balances: BalanceStore,
    roles: RoleRegistry,
    cap: SupplyCap,
    gate: PauseGate,
    allowances: AllowanceBook,
    /// Sequence number of the last committed record
    sequence: u64,
}

impl LedgerState {
    /// Create the ledger with `initial_supply` credited to `owner`, who also
    /// receives every role.
    pub fn genesis(
        owner: Account,
        initial_supply: Amount,
        max_supply: Amount,
    ) -> Result<Genesis, LedgerError> {
        if owner.is_zero() {
            return Err(LedgerError::InvalidAccount);
        }
        let cap = SupplyCap::new(max_supply);
        cap.check(0, initial_supply)?;

        let mut state = Self {
            balances: BalanceStore::new(),
            roles: RoleRegistry::new(),
            cap,
            gate: PauseGate::new(),
            allowances: AllowanceBook::new(),
            sequence: 0,
        };

        let mut records = Vec::with_capacity(Role::ALL.len() + 1);
        for role in Role::ALL {
            state.roles.grant(owner, role);
            records.push(state.commit(LedgerEvent::RoleGranted {
                account: owner,
                role,
                sender: owner,
            }));
        }

        state.balances.mint(&owner, initial_supply)?;
        records.push(state.commit(LedgerEvent::Minted {
            to: owner,
            amount: initial_supply,
        }));

        Ok(Genesis { state, records })
    }

    pub(crate) fn from_parts(
        balances: BalanceStore,
        roles: RoleRegistry,
        cap: SupplyCap,
        pause_state: PauseState,
        allowances: AllowanceBook,
        sequence: u64,
    ) -> Self {
        Self {
            balances,
            roles,
            cap,
            gate: PauseGate::from_state(pause_state),
            allowances,
            sequence,
        }
    }

    fn commit(&mut self, event: LedgerEvent) -> LedgerRecord {
        self.sequence += 1;
        LedgerRecord {
            sequence: self.sequence,
            event,
            total_supply: self.balances.total_supply(),
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Move `amount` from `from` to `to`.
    pub fn transfer(
        &mut self,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<LedgerRecord, LedgerError> {
        self.gate.ensure_running()?;
        if from.is_zero() || to.is_zero() {
            return Err(LedgerError::InvalidAccount);
        }
        self.balances.transfer(&from, &to, amount)?;
        Ok(self.commit(LedgerEvent::Transferred { from, to, amount }))
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// the allowance `from` granted it.
    pub fn transfer_from(
        &mut self,
        spender: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<LedgerRecord, LedgerError> {
        self.gate.ensure_running()?;
        if from.is_zero() || to.is_zero() {
            return Err(LedgerError::InvalidAccount);
        }
        let current = self.allowances.allowance(&from, &spender);
        let remaining = self.allowances.remaining_after(&from, &spender, amount)?;
        self.balances.transfer(&from, &to, amount)?;
        if remaining != current {
            self.allowances.approve(from, spender, remaining);
        }
        Ok(self.commit(LedgerEvent::Transferred { from, to, amount }))
    }

    /// Issue `amount` of new supply to `to`. Requires `Minter`.
    pub fn mint(
        &mut self,
        caller: Account,
        to: Account,
        amount: Amount,
    ) -> Result<LedgerRecord, LedgerError> {
        self.roles.ensure_role(&caller, Role::Minter)?;
        self.gate.ensure_running()?;
        if to.is_zero() {
            return Err(LedgerError::InvalidAccount);
        }
        self.cap.check(self.balances.total_supply(), amount)?;
        self.balances.mint(&to, amount)?;
        Ok(self.commit(LedgerEvent::Minted { to, amount }))
    }

    /// Destroy `amount` of the caller's own balance.
    pub fn burn(&mut self, caller: Account, amount: Amount) -> Result<LedgerRecord, LedgerError> {
        self.gate.ensure_running()?;
        if caller.is_zero() {
            return Err(LedgerError::InvalidAccount);
        }
        self.balances.burn(&caller, amount)?;
        Ok(self.commit(LedgerEvent::Burned {
            from: caller,
            amount,
        }))
    }

    /// Grant `role` to `account`. Requires `Admin`; `None` if already held.
    pub fn grant_role(
        &mut self,
        granter: Account,
        account: Account,
        role: Role,
    ) -> Result<Option<LedgerRecord>, LedgerError> {
        self.roles.ensure_role(&granter, Role::Admin)?;
        if !self.roles.grant(account, role) {
            return Ok(None);
        }
        Ok(Some(self.commit(LedgerEvent::RoleGranted {
            account,
            role,
            sender: granter,
        })))
    }

    /// Revoke `role` from `account`. Requires `Admin`; `None` if not held.
    ///
    /// Revoking the last admin is allowed and locks role management for good.
    pub fn revoke_role(
        &mut self,
        granter: Account,
        account: Account,
        role: Role,
    ) -> Result<Option<LedgerRecord>, LedgerError> {
        self.roles.ensure_role(&granter, Role::Admin)?;
        if !self.roles.revoke(&account, role) {
            return Ok(None);
        }
        Ok(Some(self.commit(LedgerEvent::RoleRevoked {
            account,
            role,
            sender: granter,
        })))
    }

    /// Drop one of the caller's own roles. Needs no admin.
    pub fn renounce_role(
        &mut self,
        caller: Account,
        role: Role,
    ) -> Result<Option<LedgerRecord>, LedgerError> {
        if !self.roles.revoke(&caller, role) {
            return Ok(None);
        }
        Ok(Some(self.commit(LedgerEvent::RoleRevoked {
            account: caller,
            role,
            sender: caller,
        })))
    }

    /// Engage the pause gate. Requires `Pauser`.
    pub fn pause(&mut self, caller: Account) -> Result<LedgerRecord, LedgerError> {
        self.roles.ensure_role(&caller, Role::Pauser)?;
        self.gate.pause()?;
        Ok(self.commit(LedgerEvent::Paused { account: caller }))
    }

    /// Release the pause gate. Requires `Pauser`.
    pub fn unpause(&mut self, caller: Account) -> Result<LedgerRecord, LedgerError> {
        self.roles.ensure_role(&caller, Role::Pauser)?;
        self.gate.unpause()?;
        Ok(self.commit(LedgerEvent::Unpaused { account: caller }))
    }

    /// Set the allowance of `spender` over `owner`'s balance.
    pub fn approve(
        &mut self,
        owner: Account,
        spender: Account,
        amount: Amount,
    ) -> Result<LedgerRecord, LedgerError> {
        if owner.is_zero() || spender.is_zero() {
            return Err(LedgerError::InvalidAccount);
        }
        self.allowances.approve(owner, spender, amount);
        Ok(self.commit(LedgerEvent::Approval {
            owner,
            spender,
            amount,
        }))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn balance_of(&self, account: &Account) -> Amount {
        self.balances.balance_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.balances.total_supply()
    }

    pub fn max_supply(&self) -> Amount {
        self.cap.max()
    }

    pub fn mintable_supply(&self) -> Amount {
        self.cap.remaining(self.balances.total_supply())
    }

    pub fn has_role(&self, account: &Account, role: Role) -> bool {
        self.roles.has_role(account, role)
    }

    pub fn roles_of(&self, account: &Account) -> Vec<Role> {
        self.roles.roles_of(account)
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    pub fn pause_state(&self) -> PauseState {
        self.gate.state()
    }

    pub fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.allowances.allowance(owner, spender)
    }

    /// Sequence number of the last committed record.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn balances(&self) -> &BalanceStore {
        &self.balances
    }

    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    pub fn allowances(&self) -> &AllowanceBook {
        &self.allowances
    }
}
