//! Minting and burning against settled balances.

use crate::error::AccountError;
use crate::events::ChronoEvent;
use crate::mint::Mint;
use crate::model::AccountModel;
use crate::token_account::TokenAccount;
use crt_types::{AccountKey, Timestamp};
use tracing::info;

/// Updated mint and account after a mint or burn.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplyOutcome {
    pub mint: Mint,
    pub account: TokenAccount,
    /// Value decayed out of the account while settling; owed to its decay pool.
    pub decayed: u64,
    pub event: ChronoEvent,
}

impl AccountModel {
    /// Settle `account` and credit `amount` newly minted units to it.
    ///
    /// `authority` must be the mint authority.
    pub fn mint_to(
        &self,
        mint: &Mint,
        account: &TokenAccount,
        authority: &AccountKey,
        amount: u64,
        now: Timestamp,
    ) -> Result<SupplyOutcome, AccountError> {
        self.check_supply_change(mint, account, amount)?;
        mint.ensure_mint_authority(authority)?;

        let settlement = self.settle(account, now)?;
        let new_balance = settlement
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        let mut mint = mint.clone();
        mint.increase_supply(amount)?;

        let mut account = settlement.account;
        account.last_balance_snapshot = new_balance;

        info!(mint = %mint.key, account = %account.key, amount, new_balance, "minted");
        Ok(SupplyOutcome {
            event: ChronoEvent::MintTo {
                mint: mint.key,
                token_account: account.key,
                amount,
                new_balance,
            },
            decayed: settlement.decayed,
            mint,
            account,
        })
    }

    /// Settle `account` and destroy `amount` units from it.
    ///
    /// `authority` must be the account owner or its delegate. A delegate may
    /// burn at most `delegated_amount`, which the burn then draws down.
    pub fn burn(
        &self,
        mint: &Mint,
        account: &TokenAccount,
        authority: &AccountKey,
        amount: u64,
        now: Timestamp,
    ) -> Result<SupplyOutcome, AccountError> {
        self.check_supply_change(mint, account, amount)?;
        let by_delegate = &account.owner != authority;
        if by_delegate {
            if account.delegate.as_ref() != Some(authority) {
                return Err(AccountError::InvalidAuthority(*authority));
            }
            if account.delegated_amount < amount {
                return Err(AccountError::InsufficientDelegatedAmount {
                    needed: amount,
                    available: account.delegated_amount,
                });
            }
        }

        let settlement = self.settle(account, now)?;
        if settlement.balance < amount {
            return Err(AccountError::InsufficientBalance {
                needed: amount,
                available: settlement.balance,
            });
        }
        let new_balance = settlement.balance - amount;
        let mut mint = mint.clone();
        mint.decrease_supply(amount)?;

        let mut account = settlement.account;
        account.last_balance_snapshot = new_balance;
        if by_delegate {
            account.delegated_amount -= amount;
        }

        info!(mint = %mint.key, account = %account.key, amount, new_balance, by_delegate, "burned");
        Ok(SupplyOutcome {
            event: ChronoEvent::Burn {
                mint: mint.key,
                token_account: account.key,
                amount,
                new_balance,
            },
            decayed: settlement.decayed,
            mint,
            account,
        })
    }

    fn check_supply_change(
        &self,
        mint: &Mint,
        account: &TokenAccount,
        amount: u64,
    ) -> Result<(), AccountError> {
        if amount == 0 {
            return Err(AccountError::ZeroAmount);
        }
        if mint.key != self.mint() {
            return Err(AccountError::MintMismatch {
                expected: self.mint(),
                actual: mint.key,
            });
        }
        self.ensure_same_mint(account)?;
        if account.state.is_revoked() {
            return Err(AccountError::AccountRevoked(account.key));
        }
        if account.is_frozen() {
            return Err(AccountError::AccountFrozen(account.key));
        }
        Ok(())
    }
}
