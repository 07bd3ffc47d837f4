//! Error types for the Ledger
//!
//! Every variant is a rejected command: the ledger is left untouched and
//! stays usable. There is no fatal class.

use super::value_objects::{Account, Amount, Role};
use thiserror::Error;

/// All errors a ledger command can return
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Caller lacks the role the command requires
    #[error("Unauthorized: {account} lacks role {role}")]
    Unauthorized { account: Account, role: Role },

    /// Balance-mutating command attempted while the pause gate is engaged
    #[error("Ledger is paused")]
    LedgerPaused,

    /// Transfer or burn exceeds the available balance
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Amount, required: Amount },

    /// Delegated transfer exceeds the approved allowance
    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance { available: Amount, required: Amount },

    /// Mint would push total supply above the cap
    #[error("Supply cap exceeded: minting {requested} on top of {current} exceeds max {max}")]
    SupplyCapExceeded {
        max: Amount,
        current: Amount,
        requested: Amount,
    },

    /// Null identity used where a real account is required
    #[error("Invalid account: null identity")]
    InvalidAccount,

    /// Pause requested while already paused
    #[error("Ledger is already paused")]
    AlreadyPaused,

    /// Unpause requested while running
    #[error("Ledger is not paused")]
    NotPaused,

    /// Arithmetic overflow on a balance or counter
    #[error("Arithmetic overflow")]
    Overflow,

    /// Snapshot failed validation on restore
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl LedgerError {
    /// Stable short name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::Unauthorized { .. } => "unauthorized",
            LedgerError::LedgerPaused => "ledger_paused",
            LedgerError::InsufficientBalance { .. } => "insufficient_balance",
            LedgerError::InsufficientAllowance { .. } => "insufficient_allowance",
            LedgerError::SupplyCapExceeded { .. } => "supply_cap_exceeded",
            LedgerError::InvalidAccount => "invalid_account",
            LedgerError::AlreadyPaused => "already_paused",
            LedgerError::NotPaused => "not_paused",
            LedgerError::Overflow => "overflow",
            LedgerError::InvalidSnapshot(_) => "invalid_snapshot",
        }
    }
}
