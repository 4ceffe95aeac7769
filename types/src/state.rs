//! State tags for token accounts and mint pause behaviour.
//!
//! Both tag sets are stable: the numeric tags and names round-trip through
//! every serialization the ledger uses.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The lifecycle state of a token account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountState {
    /// Open for every balance-affecting operation.
    Initialized,
    /// Frozen by the mint's freeze authority; reversible.
    Frozen,
    /// Terminal. Nothing touching the balance is accepted again.
    Revoked,
}

impl AccountState {
    pub const ALL: [AccountState; 3] = [Self::Initialized, Self::Frozen, Self::Revoked];

    pub fn tag(&self) -> u8 {
        match self {
            Self::Initialized => 0,
            Self::Frozen => 1,
            Self::Revoked => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, TypesError> {
        match tag {
            0 => Ok(Self::Initialized),
            1 => Ok(Self::Frozen),
            2 => Ok(Self::Revoked),
            _ => Err(TypesError::UnknownTag {
                kind: "account state",
                tag,
            }),
        }
    }

    /// Whether the account may send or receive.
    pub fn can_transact(&self) -> bool {
        matches!(self, Self::Initialized)
    }

    pub fn is_revoked(&self) -> bool {
        matches!(self, Self::Revoked)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialized => "Initialized",
            Self::Frozen => "Frozen",
            Self::Revoked => "Revoked",
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccountState {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| TypesError::UnknownName {
                kind: "account state",
                name: s.to_string(),
            })
    }
}

/// How a mint lets holders interrupt the chrono equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauseType {
    /// Accrual can be paused and later resumed unchanged.
    Pause,
    /// Accrual can be paused and is resumed by a re-up, which boosts the balance.
    ReUp,
}

impl PauseType {
    pub const ALL: [PauseType; 2] = [Self::Pause, Self::ReUp];

    pub fn tag(&self) -> u8 {
        match self {
            Self::Pause => 0,
            Self::ReUp => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, TypesError> {
        match tag {
            0 => Ok(Self::Pause),
            1 => Ok(Self::ReUp),
            _ => Err(TypesError::UnknownTag {
                kind: "pause type",
                tag,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::ReUp => "ReUp",
        }
    }
}

impl fmt::Display for PauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PauseType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| TypesError::UnknownName {
                kind: "pause type",
                name: s.to_string(),
            })
    }
}
