//! Decay pool — the per-account holding area for value removed by decay.

use crate::error::AccountError;
use crate::token_account::TokenAccount;
use crt_types::AccountKey;
use serde::{Deserialize, Serialize};

/// Value decayed out of a token account. Its address is derived from the
/// token account key; it is created with the account and never on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayPool {
    pub key: AccountKey,
    pub token_account: AccountKey,
    pub amount: u64,
}

impl DecayPool {
    pub fn new(token_account: AccountKey) -> Self {
        Self {
            key: token_account.decay_pool_address(),
            token_account,
            amount: 0,
        }
    }

    pub fn ensure_belongs_to(&self, account: &TokenAccount) -> Result<(), AccountError> {
        if self.token_account != account.key || self.key != account.key.decay_pool_address() {
            return Err(AccountError::DecayPoolMismatch {
                pool_owner: self.token_account,
                account: account.key,
            });
        }
        Ok(())
    }

    /// Credit decayed value to the pool.
    pub fn absorb(&mut self, amount: u64) -> Result<(), AccountError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        Ok(())
    }

    /// Take value back out of the pool.
    pub fn release(&mut self, amount: u64) -> Result<(), AccountError> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(AccountError::InsufficientBalance {
                needed: amount,
                available: self.amount,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_then_release() {
        let mut pool = DecayPool::new(AccountKey::new([5; 32]));
        pool.absorb(70).unwrap();
        pool.release(30).unwrap();
        assert_eq!(pool.amount, 40);
    }

    #[test]
    fn release_more_than_held_fails() {
        let mut pool = DecayPool::new(AccountKey::new([5; 32]));
        pool.absorb(10).unwrap();
        let err = pool.release(11).unwrap_err();
        assert!(matches!(
            err,
            AccountError::InsufficientBalance { needed: 11, available: 10 }
        ));
        assert_eq!(pool.amount, 10);
    }

    #[test]
    fn pool_address_is_derived_from_account() {
        let owner = AccountKey::new([5; 32]);
        assert_eq!(DecayPool::new(owner).key, owner.decay_pool_address());
    }
}
