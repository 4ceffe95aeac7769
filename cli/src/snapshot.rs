//! TOML ledger snapshot: one mint with its extension, accounts and decay pools.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crt_accounts::{AccountModel, ChronoExtension, DecayPool, Mint, TokenAccount};
use crt_types::AccountKey;

use crate::error::CliError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub mint: Mint,
    #[serde(default)]
    pub extension: Option<ChronoExtension>,
    #[serde(default)]
    pub accounts: Vec<TokenAccount>,
    #[serde(default)]
    pub decay_pools: Vec<DecayPool>,
}

impl LedgerSnapshot {
    pub fn new(mint: Mint, extension: Option<ChronoExtension>) -> Self {
        Self {
            mint,
            extension,
            accounts: Vec::new(),
            decay_pools: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Snapshot(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| CliError::Snapshot(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CliError::Snapshot(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| CliError::Snapshot(format!("{}: {e}", path.display())))
    }

    /// Balance model for this snapshot's mint.
    pub fn model(&self, time_unit_fallback: Option<u64>) -> Result<AccountModel, crt_accounts::AccountError> {
        let model = AccountModel::new(&self.mint, self.extension.as_ref())?;
        Ok(match time_unit_fallback {
            Some(secs) => model.with_time_unit_fallback(secs),
            None => model,
        })
    }

    pub fn account(&self, key: &AccountKey) -> Result<&TokenAccount, CliError> {
        self.accounts
            .iter()
            .find(|a| &a.key == key)
            .ok_or(CliError::UnknownAccount(*key))
    }

    /// The decay pool of the account at `key`.
    pub fn pool(&self, key: &AccountKey) -> Result<&DecayPool, CliError> {
        self.decay_pools
            .iter()
            .find(|p| &p.token_account == key)
            .ok_or(CliError::UnknownDecayPool(*key))
    }

    /// Add an account with its decay pool.
    pub fn open(&mut self, account: TokenAccount, pool: DecayPool) {
        self.put_account(account);
        self.put_pool(pool);
    }

    pub fn put_account(&mut self, account: TokenAccount) {
        match self.accounts.iter_mut().find(|a| a.key == account.key) {
            Some(slot) => *slot = account,
            None => self.accounts.push(account),
        }
    }

    pub fn put_pool(&mut self, pool: DecayPool) {
        match self.decay_pools.iter_mut().find(|p| p.key == pool.key) {
            Some(slot) => *slot = pool,
            None => self.decay_pools.push(pool),
        }
    }

    /// Credit settled decay to the account's pool.
    pub fn absorb_decay(&mut self, key: &AccountKey, amount: u64) -> anyhow::Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let mut pool = self.pool(key)?.clone();
        pool.absorb(amount)?;
        self.put_pool(pool);
        Ok(())
    }
}
