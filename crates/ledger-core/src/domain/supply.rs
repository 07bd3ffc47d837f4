//! Supply Cap Enforcer

use super::errors::LedgerError;
use super::value_objects::Amount;

/// Immutable issuance ceiling, fixed at ledger creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyCap {
    max: Amount,
}

impl SupplyCap {
    pub fn new(max: Amount) -> Self {
        Self { max }
    }

    pub fn max(&self) -> Amount {
        self.max
    }

    /// Reject a mint of `amount` on top of `current` that would exceed the
    /// cap. The bound is inclusive; overflow counts as exceeding it.
    pub fn check(&self, current: Amount, amount: Amount) -> Result<Amount, LedgerError> {
        match current.checked_add(amount) {
            Some(next) if next <= self.max => Ok(next),
            _ => Err(LedgerError::SupplyCapExceeded {
                max: self.max,
                current,
                requested: amount,
            }),
        }
    }

    /// Amount still mintable at `current` supply.
    pub fn remaining(&self, current: Amount) -> Amount {
        self.max.saturating_sub(current)
    }
}
