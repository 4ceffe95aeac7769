//! Chrono token account model.
//!
//! The ledger stores snapshots, not balances. A token account's balance is
//! re-derived from `last_balance_snapshot` and the effective chrono equation
//! every time it is read, and only becomes durable when it is settled.
//!
//! This crate handles:
//! - Mint, token account, chrono extension and decay pool entities
//! - Resolving the effective equation of an account (own override or mint default)
//! - Live balance and settlement
//! - Minting and burning against settled balances
//! - Raw record encoding for the external ledger

pub mod decay_pool;
pub mod error;
pub mod events;
pub mod extension;
pub mod mint;
pub mod model;
pub mod record;
pub mod supply;
pub mod token_account;

pub use decay_pool::DecayPool;
pub use error::AccountError;
pub use events::ChronoEvent;
pub use extension::ChronoExtension;
pub use mint::{Mint, MintInit};
pub use model::{AccountModel, ResolvedEquation, Settlement};
pub use record::{AccountRecord, RawChronoExtension, RawTokenAccount};
pub use supply::SupplyOutcome;
pub use token_account::TokenAccount;
