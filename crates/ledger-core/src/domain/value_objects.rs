//! Value objects for the Ledger
//!
//! Account identities, quantities, the closed role set and the pause state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token quantity. Unsigned, so a balance can never be negative.
pub type Amount = u128;

/// Account identity length in bytes (20-byte address).
pub const ACCOUNT_LEN: usize = 20;

/// Opaque account identity.
///
/// The all-zero address is the null identity: it can hold roles in
/// principle but is never accepted as the recipient of a balance.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Account([u8; ACCOUNT_LEN]);

impl Account {
    /// The null account.
    pub const ZERO: Account = Account([0u8; ACCOUNT_LEN]);

    pub const fn new(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an account whose low 8 bytes hold `val` big-endian.
    pub fn from_low_u64(val: u64) -> Self {
        let mut bytes = [0u8; ACCOUNT_LEN];
        bytes[ACCOUNT_LEN - 8..].copy_from_slice(&val.to_be_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_LEN] {
        &self.0
    }

    /// True for the null identity.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ACCOUNT_LEN]
    }
}

impl From<[u8; ACCOUNT_LEN]> for Account {
    fn from(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self)
    }
}

/// Failure to parse an account from its hex form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountParseError {
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl FromStr for Account {
    type Err = AccountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let decoded =
            hex::decode(digits).map_err(|e| AccountParseError::InvalidHex(e.to_string()))?;
        let bytes: [u8; ACCOUNT_LEN] = decoded.as_slice().try_into().map_err(|_| {
            AccountParseError::InvalidLength {
                expected: ACCOUNT_LEN,
                actual: decoded.len(),
            }
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Account {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Capability tag. The set is closed: an unknown role cannot be named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Grants and revokes every role, itself included
    Admin,
    /// Mints new supply
    Minter,
    /// Engages and releases the pause gate
    Pauser,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Minter, Role::Pauser];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Minter => "minter",
            Role::Pauser => "pauser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pause gate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
}

impl PauseState {
    pub fn is_paused(&self) -> bool {
        matches!(self, PauseState::Paused)
    }
}
