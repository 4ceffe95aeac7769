//! Equation-specific errors.

use crt_types::{ErrorCode, Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EquationError {
    #[error("unknown chrono equation {0}")]
    UnknownEquation(String),

    #[error("clock skew: now {now} precedes snapshot time {snapshot_time}")]
    ClockSkew { now: Timestamp, snapshot_time: Timestamp },

    #[error("equation parameter `{0}` is not set")]
    MissingParameter(&'static str),

    #[error("time unit must be non-zero")]
    InvalidTimeUnit,

    #[error("decay constant must be finite, got {0}")]
    InvalidDecayConstant(f64),

    #[error("arithmetic overflow in balance computation")]
    Overflow,
}

impl EquationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownEquation(_) => ErrorCode::UnknownEquation,
            Self::ClockSkew { .. } => ErrorCode::ClockSkew,
            Self::MissingParameter(_) => ErrorCode::MissingParameter,
            Self::InvalidTimeUnit => ErrorCode::InvalidTimeUnit,
            Self::InvalidDecayConstant(_) => ErrorCode::InvalidDecayConstant,
            Self::Overflow => ErrorCode::Overflow,
        }
    }
}
