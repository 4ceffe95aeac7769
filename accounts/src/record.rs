//! Raw account records as stored by the ledger.
//!
//! Records are `bincode`-encoded. Enumerated fields are stored as `u8` tags
//! and validated when a record is decoded into its typed entity.

use crate::decay_pool::DecayPool;
use crate::error::AccountError;
use crate::extension::ChronoExtension;
use crate::mint::Mint;
use crate::token_account::TokenAccount;
use crt_equation::{ChronoEquation, EquationParams};
use crt_types::{AccountKey, AccountState, PauseType, Timestamp};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// An entity with a ledger record encoding.
pub trait AccountRecord: Sized {
    fn to_bytes(&self) -> Result<Vec<u8>, AccountError>;
    fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError>;
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, AccountError> {
    Ok(bincode::serialize(value)?)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AccountError> {
    Ok(bincode::deserialize(bytes)?)
}

impl AccountRecord for Mint {
    fn to_bytes(&self) -> Result<Vec<u8>, AccountError> {
        encode(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError> {
        decode(bytes)
    }
}

impl AccountRecord for DecayPool {
    fn to_bytes(&self) -> Result<Vec<u8>, AccountError> {
        encode(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError> {
        decode(bytes)
    }
}

/// Stored form of a [`TokenAccount`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawTokenAccount {
    pub key: AccountKey,
    pub mint: AccountKey,
    pub owner: AccountKey,
    pub last_balance_snapshot: u64,
    pub snapshot_time: Timestamp,
    pub equation_tag: Option<u8>,
    pub creation_time: Timestamp,
    pub state_tag: u8,
    pub paused_at: Option<Timestamp>,
    pub delegate: Option<AccountKey>,
    pub delegated_amount: u64,
    pub close_authority: Option<AccountKey>,
    pub equation_params: Option<EquationParams>,
}

impl From<&TokenAccount> for RawTokenAccount {
    fn from(account: &TokenAccount) -> Self {
        Self {
            key: account.key,
            mint: account.mint,
            owner: account.owner,
            last_balance_snapshot: account.last_balance_snapshot,
            snapshot_time: account.snapshot_time,
            equation_tag: account.current_chrono_equation.map(u8::from),
            creation_time: account.creation_time,
            state_tag: account.state.tag(),
            paused_at: account.paused_at,
            delegate: account.delegate,
            delegated_amount: account.delegated_amount,
            close_authority: account.close_authority,
            equation_params: account.equation_params.clone(),
        }
    }
}

impl TryFrom<RawTokenAccount> for TokenAccount {
    type Error = AccountError;

    fn try_from(raw: RawTokenAccount) -> Result<Self, Self::Error> {
        let current_chrono_equation = raw.equation_tag.map(ChronoEquation::from_tag).transpose()?;
        Ok(Self {
            key: raw.key,
            mint: raw.mint,
            owner: raw.owner,
            last_balance_snapshot: raw.last_balance_snapshot,
            snapshot_time: raw.snapshot_time,
            current_chrono_equation,
            creation_time: raw.creation_time,
            state: AccountState::from_tag(raw.state_tag)?,
            paused_at: raw.paused_at,
            delegate: raw.delegate,
            delegated_amount: raw.delegated_amount,
            close_authority: raw.close_authority,
            equation_params: raw.equation_params,
        })
    }
}

impl AccountRecord for TokenAccount {
    fn to_bytes(&self) -> Result<Vec<u8>, AccountError> {
        encode(&RawTokenAccount::from(self))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError> {
        decode::<RawTokenAccount>(bytes)?.try_into()
    }
}

/// Stored form of a [`ChronoExtension`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawChronoExtension {
    pub key: AccountKey,
    pub mint: AccountKey,
    pub authority: AccountKey,
    pub program_id: AccountKey,
    pub equation_tag: u8,
    pub pause_tag: u8,
    pub reup_percentage: u8,
    pub equation_params: EquationParams,
}

impl From<&ChronoExtension> for RawChronoExtension {
    fn from(ext: &ChronoExtension) -> Self {
        Self {
            key: ext.key,
            mint: ext.mint,
            authority: ext.authority,
            program_id: ext.program_id,
            equation_tag: ext.equation_type.tag(),
            pause_tag: ext.pause_type.tag(),
            reup_percentage: ext.reup_percentage,
            equation_params: ext.equation_params.clone(),
        }
    }
}

impl TryFrom<RawChronoExtension> for ChronoExtension {
    type Error = AccountError;

    fn try_from(raw: RawChronoExtension) -> Result<Self, Self::Error> {
        let ext = Self {
            key: raw.key,
            mint: raw.mint,
            authority: raw.authority,
            program_id: raw.program_id,
            equation_type: ChronoEquation::from_tag(raw.equation_tag)?,
            pause_type: PauseType::from_tag(raw.pause_tag)?,
            reup_percentage: raw.reup_percentage,
            equation_params: raw.equation_params,
        };
        ext.validate()?;
        Ok(ext)
    }
}

impl AccountRecord for ChronoExtension {
    fn to_bytes(&self) -> Result<Vec<u8>, AccountError> {
        encode(&RawChronoExtension::from(self))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError> {
        decode::<RawChronoExtension>(bytes)?.try_into()
    }
}
