//! `crt` — command-line harness for the chrono token core.
//!
//! Every command loads a TOML ledger snapshot, applies one operation at a
//! given instant, writes the snapshot back and prints the resulting event as
//! JSON. It stands in for the external ledger that would otherwise submit
//! these operations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod snapshot;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::CliConfig;
pub use error::CliError;
pub use snapshot::LedgerSnapshot;

use crt_accounts::AccountError;
use crt_equation::EquationError;
use crt_lifecycle::LifecycleError;
use crt_transfer::TransferError;
use crt_types::{ErrorCode, TypesError};

/// The ledger error code behind `err`, if it came from the core.
pub fn error_code(err: &anyhow::Error) -> Option<ErrorCode> {
    if let Some(e) = err.downcast_ref::<TransferError>() {
        return Some(e.code());
    }
    if let Some(e) = err.downcast_ref::<LifecycleError>() {
        return Some(e.code());
    }
    if let Some(e) = err.downcast_ref::<AccountError>() {
        return Some(e.code());
    }
    if let Some(e) = err.downcast_ref::<EquationError>() {
        return Some(e.code());
    }
    err.downcast_ref::<TypesError>().map(TypesError::code)
}
