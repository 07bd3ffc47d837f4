//! Inbound Ports (Driving Ports / API)
//!
//! The command/query surface offered to the host. Caller identities are
//! resolved by the host before they reach the ledger.

use crate::domain::errors::LedgerError;
use crate::domain::snapshot::LedgerSnapshot;
use crate::domain::value_objects::{Account, Amount, Role};

/// Primary Ledger API
///
/// Commands are atomic: each either applies completely or returns an error
/// with no effect. Queries never fail.
pub trait LedgerApi: Send + Sync {
    // === Commands ===

    /// Move `amount` from `from` to `to`.
    fn transfer(&self, from: Account, to: Account, amount: Amount) -> Result<(), LedgerError>;

    /// Issue new supply to `to`. Caller must hold `Minter`.
    fn mint(&self, caller: Account, to: Account, amount: Amount) -> Result<(), LedgerError>;

    /// Destroy `amount` of the caller's own balance.
    fn burn(&self, caller: Account, amount: Amount) -> Result<(), LedgerError>;

    /// Grant `role` to `account`. Caller must hold `Admin`.
    fn grant_role(&self, caller: Account, account: Account, role: Role)
        -> Result<(), LedgerError>;

    /// Revoke `role` from `account`. Caller must hold `Admin`.
    fn revoke_role(
        &self,
        caller: Account,
        account: Account,
        role: Role,
    ) -> Result<(), LedgerError>;

    /// Drop one of the caller's own roles.
    fn renounce_role(&self, caller: Account, role: Role) -> Result<(), LedgerError>;

    /// Engage the pause gate. Caller must hold `Pauser`.
    fn pause(&self, caller: Account) -> Result<(), LedgerError>;

    /// Release the pause gate. Caller must hold `Pauser`.
    fn unpause(&self, caller: Account) -> Result<(), LedgerError>;

    /// Let `spender` move up to `amount` of the owner's balance.
    fn approve(&self, owner: Account, spender: Account, amount: Amount)
        -> Result<(), LedgerError>;

    /// Move `amount` from `from` to `to`, spending `spender`'s allowance.
    fn transfer_from(
        &self,
        spender: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    // === Queries ===

    fn balance_of(&self, account: &Account) -> Amount;

    fn total_supply(&self) -> Amount;

    fn max_supply(&self) -> Amount;

    /// Amount that can still be minted before hitting the cap.
    fn mintable_supply(&self) -> Amount;

    fn has_role(&self, account: &Account, role: Role) -> bool;

    fn roles_of(&self, account: &Account) -> Vec<Role>;

    fn is_paused(&self) -> bool;

    fn allowance(&self, owner: &Account, spender: &Account) -> Amount;

    /// Consistent copy of the whole state.
    fn snapshot(&self) -> LedgerSnapshot;
}
