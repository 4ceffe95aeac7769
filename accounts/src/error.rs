//! Account-model errors.

use crt_equation::EquationError;
use crt_types::{AccountKey, ErrorCode, TypesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("no chrono equation configured on the account or its mint")]
    NoEquationConfigured,

    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("delegate allowance exceeded: need {needed}, delegated {available}")]
    InsufficientDelegatedAmount { needed: u64, available: u64 },

    #[error("mint mismatch: expected {expected}, got {actual}")]
    MintMismatch { expected: AccountKey, actual: AccountKey },

    #[error("account {0} is revoked")]
    AccountRevoked(AccountKey),

    #[error("account {0} is frozen")]
    AccountFrozen(AccountKey),

    #[error("decay pool belongs to {pool_owner}, not {account}")]
    DecayPoolMismatch { pool_owner: AccountKey, account: AccountKey },

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("arithmetic overflow in account update")]
    Overflow,

    #[error("{0} is not the authority for this operation")]
    InvalidAuthority(AccountKey),

    #[error("chrono hook enabled without program id, equation type, pause type and params")]
    IncompleteChronoConfig,

    #[error("re-up pause type requires a re-up percentage")]
    MissingReUpPercentage,

    #[error("re-up percentage {0} exceeds 100")]
    InvalidReUpPercentage(u8),

    #[error("re-up percentage {0} given for a mint without re-up")]
    UnexpectedReUpPercentage(u8),

    #[error("malformed account record: {0}")]
    Codec(String),

    #[error(transparent)]
    Equation(#[from] EquationError),

    #[error(transparent)]
    Types(#[from] TypesError),
}

impl AccountError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoEquationConfigured => ErrorCode::NoEquationConfigured,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::InsufficientDelegatedAmount { .. } => ErrorCode::InsufficientDelegatedAmount,
            Self::MintMismatch { .. } => ErrorCode::MintMismatch,
            Self::AccountRevoked(_) => ErrorCode::AccountRevoked,
            Self::AccountFrozen(_) => ErrorCode::AccountFrozenOrRevoked,
            Self::DecayPoolMismatch { .. } => ErrorCode::DecayPoolMismatch,
            Self::ZeroAmount => ErrorCode::ZeroAmount,
            Self::Overflow => ErrorCode::Overflow,
            Self::InvalidAuthority(_) => ErrorCode::InvalidAuthority,
            Self::IncompleteChronoConfig => ErrorCode::IncompleteChronoConfig,
            Self::MissingReUpPercentage => ErrorCode::MissingReUpPercentage,
            Self::InvalidReUpPercentage(_) => ErrorCode::InvalidReUpPercentage,
            Self::UnexpectedReUpPercentage(_) => ErrorCode::UnexpectedReUpPercentage,
            Self::Codec(_) => ErrorCode::InvalidAccountData,
            Self::Equation(e) => e.code(),
            Self::Types(e) => e.code(),
        }
    }
}

impl From<bincode::Error> for AccountError {
    fn from(e: bincode::Error) -> Self {
        Self::Codec(e.to_string())
    }
}
