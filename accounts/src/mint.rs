//! Mint entity and creation rules.

use crate::error::AccountError;
use crate::extension::{validate_reup_percentage, ChronoExtension};
use crt_equation::{ChronoEquation, EquationParams};
use crt_types::{AccountKey, PauseType};
use serde::{Deserialize, Serialize};

/// A token mint. Decimals and authorities never change after creation;
/// supply moves with mint and burn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mint {
    pub key: AccountKey,
    pub mint_authority: AccountKey,
    pub decimals: u8,
    pub supply: u64,
    pub freeze_authority: Option<AccountKey>,
    pub chrono_hook_enabled: bool,
    pub chrono_hook_program: Option<AccountKey>,
}

/// Arguments for [`Mint::initialize`].
#[derive(Clone, Debug, Default)]
pub struct MintInit {
    pub key: AccountKey,
    pub mint_authority: AccountKey,
    pub decimals: u8,
    pub supply: u64,
    pub freeze_authority: Option<AccountKey>,
    pub enable_chrono_hook: bool,
    pub chrono_hook_program: Option<AccountKey>,
    pub equation_type: Option<ChronoEquation>,
    pub pause_type: Option<PauseType>,
    pub equation_params: Option<EquationParams>,
    pub reup_percentage: Option<u8>,
}

impl Mint {
    /// Create a mint and, when the chrono hook is enabled, its extension.
    ///
    /// An enabled hook needs a program id, equation type, pause type and
    /// params; the re-up percentage must agree with the pause type.
    pub fn initialize(init: MintInit) -> Result<(Mint, Option<ChronoExtension>), AccountError> {
        let extension = if init.enable_chrono_hook {
            let (Some(program_id), Some(equation_type), Some(pause_type), Some(equation_params)) = (
                init.chrono_hook_program,
                init.equation_type,
                init.pause_type,
                init.equation_params,
            ) else {
                return Err(AccountError::IncompleteChronoConfig);
            };
            let reup_percentage = validate_reup_percentage(pause_type, init.reup_percentage)?;
            Some(ChronoExtension {
                key: init.key.chrono_extension_address(),
                mint: init.key,
                authority: init.mint_authority,
                program_id,
                equation_type,
                pause_type,
                reup_percentage,
                equation_params,
            })
        } else {
            None
        };

        let mint = Mint {
            key: init.key,
            mint_authority: init.mint_authority,
            decimals: init.decimals,
            supply: init.supply,
            freeze_authority: init.freeze_authority,
            chrono_hook_enabled: init.enable_chrono_hook,
            chrono_hook_program: init.chrono_hook_program,
        };
        Ok((mint, extension))
    }

    /// Fail unless `authority` is this mint's mint authority.
    pub fn ensure_mint_authority(&self, authority: &AccountKey) -> Result<(), AccountError> {
        if &self.mint_authority != authority {
            return Err(AccountError::InvalidAuthority(*authority));
        }
        Ok(())
    }

    pub(crate) fn increase_supply(&mut self, amount: u64) -> Result<(), AccountError> {
        self.supply = self
            .supply
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        Ok(())
    }

    pub(crate) fn decrease_supply(&mut self, amount: u64) -> Result<(), AccountError> {
        self.supply = self
            .supply
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;
        Ok(())
    }
}
