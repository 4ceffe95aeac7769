//! Per-mint chrono configuration.

use crate::error::AccountError;
use crt_equation::{ChronoEquation, EquationParams};
use crt_types::{AccountKey, PauseType};
use serde::{Deserialize, Serialize};

/// Chrono configuration shared by every account of a mint that does not
/// override its own equation. One-to-one with its mint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChronoExtension {
    /// Address of this extension (derived from the mint key).
    pub key: AccountKey,
    pub mint: AccountKey,
    pub authority: AccountKey,
    /// Hook program invoked by the ledger on pause and re-up.
    pub program_id: AccountKey,
    /// Default law for accounts without an override.
    pub equation_type: ChronoEquation,
    pub pause_type: PauseType,
    /// Share (0–100) of the boost and decay pool credited on re-up. Zero unless `ReUp`.
    pub reup_percentage: u8,
    pub equation_params: EquationParams,
}

impl ChronoExtension {
    /// Check the re-up percentage against the pause type.
    pub fn validate(&self) -> Result<(), AccountError> {
        match self.pause_type {
            PauseType::ReUp if self.reup_percentage > 100 => {
                Err(AccountError::InvalidReUpPercentage(self.reup_percentage))
            }
            PauseType::Pause if self.reup_percentage != 0 => {
                Err(AccountError::UnexpectedReUpPercentage(self.reup_percentage))
            }
            _ => Ok(()),
        }
    }

    /// `reup_percentage` of `amount`, truncated.
    pub fn reup_share(&self, amount: u64) -> u64 {
        // percentage <= 100, so the result never exceeds `amount`
        (amount as u128 * self.reup_percentage as u128 / 100) as u64
    }
}

/// Validate a re-up percentage supplied at mint creation.
///
/// `ReUp` mints need one (at most 100); other pause types must not carry one.
pub fn validate_reup_percentage(
    pause_type: PauseType,
    reup_percentage: Option<u8>,
) -> Result<u8, AccountError> {
    match (pause_type, reup_percentage) {
        (PauseType::ReUp, Some(pct)) if pct <= 100 => Ok(pct),
        (PauseType::ReUp, Some(pct)) => Err(AccountError::InvalidReUpPercentage(pct)),
        (PauseType::ReUp, None) => Err(AccountError::MissingReUpPercentage),
        (_, Some(pct)) => Err(AccountError::UnexpectedReUpPercentage(pct)),
        (_, None) => Ok(0),
    }
}
