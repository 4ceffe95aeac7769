//! Equation resolution, live balances and settlement.

use crate::error::AccountError;
use crate::events::ChronoEvent;
use crate::extension::ChronoExtension;
use crate::mint::Mint;
use crate::token_account::TokenAccount;
use crt_equation::{compute_balance, ChronoEquation, EquationError, EquationParams};
use crt_types::{AccountKey, Timestamp};
use tracing::debug;

/// The equation and fully merged parameters governing one account.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEquation {
    pub equation: ChronoEquation,
    pub params: EquationParams,
}

impl ResolvedEquation {
    pub fn evaluate(&self, last_snapshot: u64, at: Timestamp) -> Result<u64, AccountError> {
        Ok(compute_balance(last_snapshot, self.equation, &self.params, at)?)
    }
}

/// Result of settling an account: the updated copy and what moved.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub account: TokenAccount,
    pub balance: u64,
    /// How much the snapshot shrank.
    pub decayed: u64,
    /// How much the snapshot grew.
    pub accrued: u64,
    /// The new snapshot time.
    pub at: Timestamp,
}

impl Settlement {
    pub fn event(&self) -> ChronoEvent {
        ChronoEvent::Settled {
            token_account: self.account.key,
            balance: self.balance,
            decayed: self.decayed,
            accrued: self.accrued,
            at: self.at,
        }
    }
}

/// Balance model for the accounts of one mint.
///
/// Holds the mint's chrono configuration and derives every balance from it;
/// account inputs are borrowed and updated copies are returned.
#[derive(Clone, Debug)]
pub struct AccountModel {
    mint: AccountKey,
    chrono_enabled: bool,
    extension: Option<ChronoExtension>,
    time_unit_fallback: Option<u64>,
}

impl AccountModel {
    /// Bind a mint and its extension, if any.
    pub fn new(mint: &Mint, extension: Option<&ChronoExtension>) -> Result<Self, AccountError> {
        if let Some(ext) = extension {
            if ext.mint != mint.key {
                return Err(AccountError::MintMismatch {
                    expected: mint.key,
                    actual: ext.mint,
                });
            }
            ext.validate()?;
        }
        Ok(Self {
            mint: mint.key,
            chrono_enabled: mint.chrono_hook_enabled,
            extension: extension.cloned(),
            time_unit_fallback: None,
        })
    }

    /// Time unit used when neither the account nor the extension sets one,
    /// ahead of the equation's own default.
    pub fn with_time_unit_fallback(mut self, secs: u64) -> Self {
        self.time_unit_fallback = Some(secs);
        self
    }

    pub fn mint(&self) -> AccountKey {
        self.mint
    }

    pub fn extension(&self) -> Option<&ChronoExtension> {
        self.extension.as_ref()
    }

    pub fn ensure_same_mint(&self, account: &TokenAccount) -> Result<(), AccountError> {
        if account.mint != self.mint {
            return Err(AccountError::MintMismatch {
                expected: self.mint,
                actual: account.mint,
            });
        }
        Ok(())
    }

    /// The effective equation of `account`, or `None` for a static balance.
    ///
    /// The account's own equation wins over the extension default. Parameters
    /// merge field by field: account override, extension, configured time
    /// unit, then the equation's defaults. `snapshot_time` is always the
    /// account's.
    pub fn resolve(&self, account: &TokenAccount) -> Result<Option<ResolvedEquation>, AccountError> {
        self.ensure_same_mint(account)?;

        let equation = account
            .current_chrono_equation
            .or_else(|| self.extension.as_ref().map(|ext| ext.equation_type));
        let Some(equation) = equation else {
            if self.chrono_enabled {
                return Err(AccountError::NoEquationConfigured);
            }
            return Ok(None);
        };

        let mut params = account.equation_params.clone().unwrap_or_default();
        if let Some(ext) = &self.extension {
            params = params.or(&ext.equation_params);
        }
        if let Some(unit) = self.time_unit_fallback {
            params = params.or(&EquationParams::new().with_time_unit(unit));
        }
        let params = params
            .or(&equation.default_params())
            .with_snapshot_time(account.snapshot_time);

        Ok(Some(ResolvedEquation { equation, params }))
    }

    /// Balance of `account` at `now`, evaluated no later than its pause instant.
    pub fn live_balance(&self, account: &TokenAccount, now: Timestamp) -> Result<u64, AccountError> {
        let at = account.accrual_instant(now);
        match self.resolve(account)? {
            Some(resolved) => resolved.evaluate(account.last_balance_snapshot, at),
            None => {
                if at < account.snapshot_time {
                    return Err(EquationError::ClockSkew {
                        now: at,
                        snapshot_time: account.snapshot_time,
                    }
                    .into());
                }
                Ok(account.last_balance_snapshot)
            }
        }
    }

    /// Materialize the live balance into the snapshot.
    ///
    /// The snapshot time moves to `now`, or to the pause instant while paused.
    pub fn settle(&self, account: &TokenAccount, now: Timestamp) -> Result<Settlement, AccountError> {
        if account.state.is_revoked() {
            return Err(AccountError::AccountRevoked(account.key));
        }
        let at = account.accrual_instant(now);
        let balance = self.live_balance(account, now)?;
        let before = account.last_balance_snapshot;

        let mut updated = account.clone();
        updated.last_balance_snapshot = balance;
        updated.snapshot_time = at;

        let settlement = Settlement {
            account: updated,
            balance,
            decayed: before.saturating_sub(balance),
            accrued: balance.saturating_sub(before),
            at,
        };
        debug!(
            account = %account.key,
            balance,
            decayed = settlement.decayed,
            accrued = settlement.accrued,
            at = %at,
            "settled"
        );
        Ok(settlement)
    }
}
