//! crt — entry point.

use clap::Parser;

use crt_cli::{error_code, run, Cli, CliConfig, LedgerSnapshot};
use crt_types::Timestamp;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        log_format: cli.log_format.unwrap_or(file_config.log_format),
        log_level: cli.log_level.clone().unwrap_or(file_config.log_level),
        ledger_path: cli.ledger.clone().unwrap_or(file_config.ledger_path),
        default_time_unit: cli.time_unit.or(file_config.default_time_unit),
    };

    crt_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let now = cli.now.map_or_else(Timestamp::now, Timestamp::new);
    let mut snapshot = LedgerSnapshot::load(&config.ledger_path)?;

    let output = match run(&cli.command, &mut snapshot, now, config.default_time_unit) {
        Ok(output) => output,
        Err(e) => {
            match error_code(&e) {
                Some(code) => tracing::warn!(%code, "operation rejected: {e}"),
                None => tracing::warn!("operation rejected: {e}"),
            }
            return Err(e);
        }
    };

    if cli.command.is_mutating() {
        snapshot.save(&config.ledger_path)?;
        tracing::info!(ledger = %config.ledger_path.display(), "snapshot written");
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
