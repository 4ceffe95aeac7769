//! Lifecycle errors.

use crt_accounts::AccountError;
use crt_types::{AccountKey, AccountState, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("account {0} is revoked")]
    AccountRevoked(AccountKey),

    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: AccountState, to: AccountState },

    #[error("{0} is not permitted by this mint's pause configuration")]
    InvalidPauseOperation(&'static str),

    #[error("account {0} is already paused")]
    AlreadyPaused(AccountKey),

    #[error("account {0} is not paused")]
    NotPaused(AccountKey),

    #[error("mint has no freeze authority")]
    NoFreezeAuthority,

    #[error("{0} is not the freeze authority")]
    InvalidAuthority(AccountKey),

    #[error("arithmetic overflow in lifecycle update")]
    Overflow,

    #[error(transparent)]
    Account(#[from] AccountError),
}

impl LifecycleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::AccountRevoked(_) => ErrorCode::AccountRevoked,
            Self::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            Self::InvalidPauseOperation(_) => ErrorCode::InvalidPauseOperation,
            Self::AlreadyPaused(_) => ErrorCode::AlreadyPaused,
            Self::NotPaused(_) => ErrorCode::NotPaused,
            Self::NoFreezeAuthority => ErrorCode::NoFreezeAuthority,
            Self::InvalidAuthority(_) => ErrorCode::InvalidAuthority,
            Self::Overflow => ErrorCode::Overflow,
            Self::Account(e) => e.code(),
        }
    }
}
