//! Fundamental types for the chrono token core.
//!
//! This crate defines the primitives shared across every other crate in the
//! workspace: account keys, timestamps, account/pause state tags, and the
//! stable error codes handed back to the ledger submission layer.

pub mod error;
pub mod key;
pub mod state;
pub mod time;

pub use error::{ErrorCode, TypesError};
pub use key::AccountKey;
pub use state::{AccountState, PauseType};
pub use time::Timestamp;
