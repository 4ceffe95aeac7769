//! CLI errors for configuration and snapshot files.

use crt_types::AccountKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("account {0} is not in the snapshot")]
    UnknownAccount(AccountKey),

    #[error("no decay pool for account {0} in the snapshot")]
    UnknownDecayPool(AccountKey),
}
