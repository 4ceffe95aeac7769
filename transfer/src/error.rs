//! Transfer errors.

use crt_accounts::AccountError;
use crt_types::{AccountKey, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("cannot transfer zero")]
    ZeroAmount,

    #[error("source and destination are the same account")]
    SelfTransfer,

    #[error("mint mismatch: expected {expected}, got {actual}")]
    MintMismatch { expected: AccountKey, actual: AccountKey },

    #[error("account {0} is frozen or revoked")]
    AccountFrozenOrRevoked(AccountKey),

    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("arithmetic overflow in transfer")]
    Overflow,

    #[error(transparent)]
    Account(#[from] AccountError),
}

impl TransferError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ZeroAmount => ErrorCode::ZeroAmount,
            Self::SelfTransfer => ErrorCode::SelfTransfer,
            Self::MintMismatch { .. } => ErrorCode::MintMismatch,
            Self::AccountFrozenOrRevoked(_) => ErrorCode::AccountFrozenOrRevoked,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::Overflow => ErrorCode::Overflow,
            Self::Account(e) => e.code(),
        }
    }
}
