//! Access Control Registry
//!
//! Maps each account to the set of roles it holds.

use super::errors::LedgerError;
use super::value_objects::{Account, Role};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<Account, HashSet<Role>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an account holds a role. Unknown accounts hold nothing.
    pub fn has_role(&self, account: &Account, role: Role) -> bool {
        self.roles
            .get(account)
            .map(|set| set.contains(&role))
            .unwrap_or(false)
    }

    /// Fails with `Unauthorized` unless `account` holds `role`.
    pub fn ensure_role(&self, account: &Account, role: Role) -> Result<(), LedgerError> {
        if !self.has_role(account, role) {
            return Err(LedgerError::Unauthorized {
                account: *account,
                role,
            });
        }
        Ok(())
    }

    /// Add a role. Returns `false` if it was already held.
    pub fn grant(&mut self, account: Account, role: Role) -> bool {
        self.roles.entry(account).or_default().insert(role)
    }

    /// Remove a role. Returns `false` if it was not held.
    pub fn revoke(&mut self, account: &Account, role: Role) -> bool {
        self.roles
            .get_mut(account)
            .map(|set| set.remove(&role))
            .unwrap_or(false)
    }

    /// Roles held by `account`, sorted.
    pub fn roles_of(&self, account: &Account) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .roles
            .get(account)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        roles.sort();
        roles
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Account, &HashSet<Role>)> {
        self.roles.iter()
    }
}
