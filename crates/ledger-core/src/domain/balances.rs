//! Balance Store
//!
//! Account balances plus the running total-supply counter. Mint and burn are
//! the only writers of the counter, which keeps `total_supply == Σ balances`.

use super::errors::LedgerError;
use super::value_objects::{Account, Amount};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct BalanceStore {
    balances: HashMap<Account, Amount>,
    total_supply: Amount,
}

impl BalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `account`; zero for accounts never credited.
    pub fn balance_of(&self, account: &Account) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Fails with `InsufficientBalance` unless `account` holds at least `amount`.
    pub fn ensure_available(&self, account: &Account, amount: Amount) -> Result<(), LedgerError> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Both new balances are computed before either is written, so a failure
    /// leaves the store untouched. A zero or self transfer writes nothing.
    pub fn transfer(
        &mut self,
        from: &Account,
        to: &Account,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_available(from, amount)?;
        if amount == 0 || from == to {
            return Ok(());
        }

        let new_from = self.balance_of(from) - amount;
        let new_to = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(*from, new_from);
        self.balances.insert(*to, new_to);
        Ok(())
    }

    /// Credit `to` and grow the supply. Cap enforcement is the caller's job.
    /// Minting zero creates no balance record.
    pub fn mint(&mut self, to: &Account, amount: Amount) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let new_total = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(*to, new_balance);
        self.total_supply = new_total;
        Ok(())
    }

    /// Debit `from` and shrink the supply.
    pub fn burn(&mut self, from: &Account, amount: Amount) -> Result<(), LedgerError> {
        self.ensure_available(from, amount)?;
        if amount == 0 {
            return Ok(());
        }
        let new_total = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(*from, self.balance_of(from) - amount);
        self.total_supply = new_total;
        Ok(())
    }

    /// Sum of every balance; `None` on overflow.
    pub fn sum_of_balances(&self) -> Option<Amount> {
        self.balances
            .values()
            .try_fold(0 as Amount, |acc, bal| acc.checked_add(*bal))
    }

    /// Every account with a balance record, zero balances included.
    pub fn iter(&self) -> impl Iterator<Item = (&Account, &Amount)> {
        self.balances.iter()
    }

    /// Rebuild a store from raw entries. Used by snapshot restore, which
    /// validates the result against the ledger invariants.
    pub(crate) fn from_parts(balances: HashMap<Account, Amount>, total_supply: Amount) -> Self {
        Self {
            balances,
            total_supply,
        }
    }
}
