//! Events describing each state transition, for the submission layer to emit.

use crt_types::{AccountKey, AccountState, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ChronoEvent {
    /// A live balance was materialized into the snapshot.
    Settled {
        token_account: AccountKey,
        balance: u64,
        decayed: u64,
        accrued: u64,
        at: Timestamp,
    },
    MintTo {
        mint: AccountKey,
        token_account: AccountKey,
        amount: u64,
        new_balance: u64,
    },
    Burn {
        mint: AccountKey,
        token_account: AccountKey,
        amount: u64,
        new_balance: u64,
    },
    Transfer {
        mint: AccountKey,
        from: AccountKey,
        to: AccountKey,
        amount: u64,
        from_balance: u64,
        to_balance: u64,
        at: Timestamp,
    },
    Pause {
        mint: AccountKey,
        token_account: AccountKey,
        at: Timestamp,
    },
    Unpause {
        mint: AccountKey,
        token_account: AccountKey,
        at: Timestamp,
    },
    ReUp {
        mint: AccountKey,
        token_account: AccountKey,
        /// Boost plus the share recovered from the decay pool.
        amount: u64,
        new_balance: u64,
        decay_pool_balance: u64,
    },
    /// Freeze, thaw or revoke.
    StateChanged {
        token_account: AccountKey,
        from: AccountState,
        to: AccountState,
    },
}

impl ChronoEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Settled { .. } => "settled",
            Self::MintTo { .. } => "mint_to",
            Self::Burn { .. } => "burn",
            Self::Transfer { .. } => "transfer",
            Self::Pause { .. } => "pause",
            Self::Unpause { .. } => "unpause",
            Self::ReUp { .. } => "reup",
            Self::StateChanged { .. } => "state_changed",
        }
    }
}
