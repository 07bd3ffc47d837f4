//! Allowance Book
//!
//! Owner-approved spending limits for delegated transfers.

use super::errors::LedgerError;
use super::value_objects::{Account, Amount};
use std::collections::HashMap;

/// An allowance of this size is never decreased by spending.
pub const UNLIMITED_ALLOWANCE: Amount = Amount::MAX;

#[derive(Debug, Clone, Default)]
pub struct AllowanceBook {
    allowances: HashMap<(Account, Account), Amount>,
}

impl AllowanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite the allowance of `spender` over `owner`'s balance. A zero
    /// allowance is stored as no entry.
    pub fn approve(&mut self, owner: Account, spender: Account, amount: Amount) {
        if amount == 0 {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Allowance left after spending `amount`, without writing it.
    pub fn remaining_after(
        &self,
        owner: &Account,
        spender: &Account,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        let available = self.allowance(owner, spender);
        if available == UNLIMITED_ALLOWANCE {
            return Ok(available);
        }
        available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance {
                available,
                required: amount,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(Account, Account), &Amount)> {
        self.allowances.iter()
    }
}
