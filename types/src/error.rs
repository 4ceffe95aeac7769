//! Type-level errors and the stable error codes shared by every crate.

use std::fmt;
use thiserror::Error;

/// Errors raised while decoding primitive types.
#[derive(Debug, Error)]
pub enum TypesError {
    #[error("unknown {kind} tag {tag}")]
    UnknownTag { kind: &'static str, tag: u8 },

    #[error("unknown {kind} name {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("invalid account key: {0}")]
    InvalidKey(String),
}

impl TypesError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownTag { .. } | Self::UnknownName { .. } => ErrorCode::UnknownTag,
            Self::InvalidKey(_) => ErrorCode::InvalidKey,
        }
    }
}

/// Flat, numbered failure kinds handed to the ledger submission layer.
///
/// Values live in the ledger program's custom-error range and never change
/// once assigned; new kinds are appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    UnknownEquation = 6000,
    NoEquationConfigured = 6001,
    InsufficientBalance = 6002,
    MintMismatch = 6003,
    AccountFrozenOrRevoked = 6004,
    AccountRevoked = 6005,
    InvalidPauseOperation = 6006,
    ClockSkew = 6007,
    MissingParameter = 6008,
    InvalidTimeUnit = 6009,
    InvalidDecayConstant = 6010,
    Overflow = 6011,
    ZeroAmount = 6012,
    SelfTransfer = 6013,
    DecayPoolMismatch = 6014,
    IncompleteChronoConfig = 6015,
    MissingReUpPercentage = 6016,
    InvalidReUpPercentage = 6017,
    UnexpectedReUpPercentage = 6018,
    InvalidTransition = 6019,
    AlreadyPaused = 6020,
    NotPaused = 6021,
    NoFreezeAuthority = 6022,
    InvalidAuthority = 6023,
    UnknownTag = 6024,
    InvalidKey = 6025,
    InvalidAccountData = 6026,
    InsufficientDelegatedAmount = 6027,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_start_at_custom_range() {
        assert_eq!(ErrorCode::UnknownEquation.as_u32(), 6000);
        assert_eq!(ErrorCode::InvalidAccountData.as_u32(), 6026);
        assert_eq!(ErrorCode::InsufficientDelegatedAmount.as_u32(), 6027);
    }

    #[test]
    fn types_errors_map_to_codes() {
        let err = TypesError::UnknownTag { kind: "pause type", tag: 7 };
        assert_eq!(err.code(), ErrorCode::UnknownTag);
        assert_eq!(err.to_string(), "unknown pause type tag 7");
    }
}
