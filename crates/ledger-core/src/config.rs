//! Ledger configuration.
//!
//! Genesis parameters: who owns the ledger, how much is issued up front and
//! the immutable issuance cap. Values come from `Default`, from serde, or
//! from environment variables.

use crate::domain::value_objects::{Account, Amount};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// 10^18 base units per whole token.
pub const DECIMALS_FACTOR: Amount = 1_000_000_000_000_000_000;

pub const DEFAULT_INITIAL_SUPPLY: Amount = 100_000_000 * DECIMALS_FACTOR;
pub const DEFAULT_MAX_SUPPLY: Amount = 1_000_000_000 * DECIMALS_FACTOR;

pub const ENV_OWNER: &str = "LEDGER_OWNER";
pub const ENV_INITIAL_SUPPLY: &str = "LEDGER_INITIAL_SUPPLY";
pub const ENV_MAX_SUPPLY: &str = "LEDGER_MAX_SUPPLY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ledger owner must not be the null account")]
    NullOwner,

    #[error("initial supply {initial} exceeds max supply {max}")]
    InitialExceedsMax { initial: Amount, max: Amount },

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Genesis configuration for a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Receives the initial supply and every role
    pub owner: Account,
    /// Base units credited to the owner at genesis
    pub initial_supply: Amount,
    /// Immutable issuance cap
    pub max_supply: Amount,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            owner: Account::from_low_u64(1),
            initial_supply: DEFAULT_INITIAL_SUPPLY,
            max_supply: DEFAULT_MAX_SUPPLY,
        }
    }
}

impl LedgerConfig {
    pub fn new(owner: Account, initial_supply: Amount, max_supply: Amount) -> Self {
        Self {
            owner,
            initial_supply,
            max_supply,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LEDGER_OWNER`: Owner account, `0x`-prefixed hex (default: `0x…01`)
    /// - `LEDGER_INITIAL_SUPPLY`: Base units issued at genesis (default: 10^8 tokens)
    /// - `LEDGER_MAX_SUPPLY`: Issuance cap in base units (default: 10^9 tokens)
    ///
    /// Amounts are decimal integers; `_` separators are accepted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let owner = match lookup(ENV_OWNER) {
            Some(raw) => raw
                .trim()
                .parse::<Account>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: ENV_OWNER,
                    reason: e.to_string(),
                })?,
            None => defaults.owner,
        };

        let initial_supply = match lookup(ENV_INITIAL_SUPPLY) {
            Some(raw) => parse_amount(ENV_INITIAL_SUPPLY, &raw)?,
            None => defaults.initial_supply,
        };

        let max_supply = match lookup(ENV_MAX_SUPPLY) {
            Some(raw) => parse_amount(ENV_MAX_SUPPLY, &raw)?,
            None => defaults.max_supply,
        };

        let config = Self {
            owner,
            initial_supply,
            max_supply,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations genesis would refuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::NullOwner);
        }
        if self.initial_supply > self.max_supply {
            return Err(ConfigError::InitialExceedsMax {
                initial: self.initial_supply,
                max: self.max_supply,
            });
        }
        Ok(())
    }
}

fn parse_amount(var: &'static str, raw: &str) -> Result<Amount, ConfigError> {
    let digits: String = raw.trim().chars().filter(|c| *c != '_').collect();
    digits
        .parse::<Amount>()
        .map_err(|e| ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
        })
}
