//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crt_types::AccountKey;
use crt_utils::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "crt", about = "Chrono token ledger harness", version)]
pub struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "CRT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ledger snapshot file (defaults to the config's `ledger_path`).
    #[arg(long, env = "CRT_LEDGER")]
    pub ledger: Option<PathBuf>,

    /// Evaluation instant in Unix seconds. Defaults to the system clock.
    #[arg(long, env = "CRT_NOW", allow_negative_numbers = true)]
    pub now: Option<i64>,

    /// Time unit (seconds) for equations that leave it unset.
    #[arg(long, env = "CRT_TIME_UNIT")]
    pub time_unit: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CRT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CRT_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the live balance of an account.
    Balance { account: AccountKey },

    /// Materialize the live balance into the snapshot.
    Settle { account: AccountKey },

    /// Move value between two accounts of the mint.
    Transfer {
        from: AccountKey,
        to: AccountKey,
        amount: u64,
    },

    /// Mint new units into an account.
    #[command(name = "mint-to")]
    MintTo {
        account: AccountKey,
        amount: u64,
        /// Mint authority.
        #[arg(long)]
        authority: AccountKey,
    },

    /// Destroy units held by an account.
    Burn {
        account: AccountKey,
        amount: u64,
        /// Account owner or delegate.
        #[arg(long)]
        authority: AccountKey,
    },

    /// Stop decay accrual on an account.
    Pause { account: AccountKey },

    /// Resume decay accrual on a paused account.
    Unpause { account: AccountKey },

    /// Resume accrual with a boost and recover value from the decay pool.
    Reup { account: AccountKey },

    /// Freeze an account (freeze authority).
    Freeze {
        account: AccountKey,
        #[arg(long)]
        authority: AccountKey,
    },

    /// Thaw a frozen account (freeze authority).
    Thaw {
        account: AccountKey,
        #[arg(long)]
        authority: AccountKey,
    },

    /// Revoke an account permanently (freeze authority).
    Revoke {
        account: AccountKey,
        #[arg(long)]
        authority: AccountKey,
    },
}

impl Command {
    /// Whether the command changes the snapshot.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Balance { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_transfer_with_overrides() {
        let from = AccountKey::new([1; 32]).to_string();
        let to = AccountKey::new([2; 32]).to_string();
        let cli = Cli::try_parse_from([
            "crt", "--now", "-5", "--log-format", "json", "transfer", from.as_str(), to.as_str(), "10",
        ])
        .unwrap();
        assert_eq!(cli.now, Some(-5));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(matches!(cli.command, Command::Transfer { amount: 10, .. }));
        assert!(cli.command.is_mutating());
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(Cli::try_parse_from(["crt", "balance", "not-hex"]).is_err());
    }
}
