//! # Audit Events
//!
//! One event per successful mutating command, handed to the `EventSink`
//! after the mutation is applied. Rejected commands emit nothing.

use super::value_objects::{Account, Amount, Role};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// Balance moved between accounts (direct or delegated transfer)
    Transferred {
        from: Account,
        to: Account,
        amount: Amount,
    },
    /// New supply credited
    Minted { to: Account, amount: Amount },
    /// Supply destroyed from the holder's own balance
    Burned { from: Account, amount: Amount },
    /// Role added; `sender` is the admin (or the account itself at genesis)
    RoleGranted {
        account: Account,
        role: Role,
        sender: Account,
    },
    /// Role removed; `sender == account` for a renounce
    RoleRevoked {
        account: Account,
        role: Role,
        sender: Account,
    },
    /// Pause gate engaged
    Paused { account: Account },
    /// Pause gate released
    Unpaused { account: Account },
    /// Allowance set
    Approval {
        owner: Account,
        spender: Account,
        amount: Amount,
    },
}

impl LedgerEvent {
    /// Operation name, used as a metric label and log field.
    pub fn operation(&self) -> &'static str {
        match self {
            LedgerEvent::Transferred { .. } => "transfer",
            LedgerEvent::Minted { .. } => "mint",
            LedgerEvent::Burned { .. } => "burn",
            LedgerEvent::RoleGranted { .. } => "grant_role",
            LedgerEvent::RoleRevoked { .. } => "revoke_role",
            LedgerEvent::Paused { .. } => "pause",
            LedgerEvent::Unpaused { .. } => "unpause",
            LedgerEvent::Approval { .. } => "approve",
        }
    }

    /// The account the event is primarily about.
    pub fn subject(&self) -> Account {
        match self {
            LedgerEvent::Transferred { from, .. } => *from,
            LedgerEvent::Minted { to, .. } => *to,
            LedgerEvent::Burned { from, .. } => *from,
            LedgerEvent::RoleGranted { account, .. } => *account,
            LedgerEvent::RoleRevoked { account, .. } => *account,
            LedgerEvent::Paused { account } => *account,
            LedgerEvent::Unpaused { account } => *account,
            LedgerEvent::Approval { owner, .. } => *owner,
        }
    }
}

/// An event stamped with its commit order and the supply it left behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Strictly increasing, starting at 1
    pub sequence: u64,
    pub event: LedgerEvent,
    /// Total supply after the event was applied
    pub total_supply: Amount,
}
