//! Token account entity.

use crate::decay_pool::DecayPool;
use crate::mint::Mint;
use crt_equation::{ChronoEquation, EquationParams};
use crt_types::{AccountKey, AccountState, Timestamp};
use serde::{Deserialize, Serialize};

/// A holder's balance record for one mint.
///
/// `last_balance_snapshot` is only meaningful as of `snapshot_time`; the
/// current balance is always re-derived through the chrono equation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenAccount {
    pub key: AccountKey,
    pub mint: AccountKey,
    pub owner: AccountKey,
    pub last_balance_snapshot: u64,
    /// Instant the snapshot is valid for.
    pub snapshot_time: Timestamp,
    /// Per-account equation override; falls back to the mint extension.
    pub current_chrono_equation: Option<ChronoEquation>,
    pub creation_time: Timestamp,
    pub state: AccountState,
    /// Set while decay is paused; evaluation stops at this instant.
    pub paused_at: Option<Timestamp>,
    pub delegate: Option<AccountKey>,
    pub delegated_amount: u64,
    pub close_authority: Option<AccountKey>,
    /// Per-account parameter override, merged field by field over the extension.
    pub equation_params: Option<EquationParams>,
}

impl TokenAccount {
    /// Open an empty account for `mint` together with its decay pool.
    pub fn initialize(
        key: AccountKey,
        mint: &Mint,
        owner: AccountKey,
        delegate: Option<AccountKey>,
        now: Timestamp,
    ) -> (TokenAccount, DecayPool) {
        let account = TokenAccount {
            key,
            mint: mint.key,
            owner,
            last_balance_snapshot: 0,
            snapshot_time: now,
            current_chrono_equation: None,
            creation_time: now,
            state: AccountState::Initialized,
            paused_at: None,
            delegate,
            delegated_amount: 0,
            close_authority: Some(owner),
            equation_params: None,
        };
        let pool = DecayPool::new(key);
        (account, pool)
    }

    /// Attach a per-account equation override.
    pub fn with_equation(mut self, equation: ChronoEquation, params: Option<EquationParams>) -> Self {
        self.current_chrono_equation = Some(equation);
        self.equation_params = params;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// The instant balances accrue up to: `now`, or the pause instant if earlier.
    pub fn accrual_instant(&self, now: Timestamp) -> Timestamp {
        self.paused_at.map_or(now, |p| p.min(now))
    }

    pub fn decay_pool_address(&self) -> AccountKey {
        self.key.decay_pool_address()
    }
}
