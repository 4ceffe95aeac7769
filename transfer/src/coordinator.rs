//! Transfer coordinator.

use crate::error::TransferError;
use crt_accounts::{AccountModel, ChronoEvent, DecayPool, TokenAccount};
use crt_types::Timestamp;
use tracing::info;

/// Both accounts after a transfer, and the decay settled out of each.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferOutcome {
    pub from: TokenAccount,
    pub to: TokenAccount,
    pub from_decayed: u64,
    pub to_decayed: u64,
    pub event: ChronoEvent,
}

impl TransferOutcome {
    /// Credit each side's decayed value to its decay pool.
    ///
    /// Both pools are checked before either is touched.
    pub fn apply_decay(
        &self,
        from_pool: &mut DecayPool,
        to_pool: &mut DecayPool,
    ) -> Result<(), TransferError> {
        from_pool.ensure_belongs_to(&self.from)?;
        to_pool.ensure_belongs_to(&self.to)?;

        let mut from_next = from_pool.clone();
        from_next.absorb(self.from_decayed)?;
        let mut to_next = to_pool.clone();
        to_next.absorb(self.to_decayed)?;

        *from_pool = from_next;
        *to_pool = to_next;
        Ok(())
    }
}

/// Moves value between accounts of one mint.
#[derive(Clone, Debug)]
pub struct TransferCoordinator {
    model: AccountModel,
}

impl TransferCoordinator {
    pub fn new(model: AccountModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &AccountModel {
        &self.model
    }

    /// Settle both accounts at `now` and move `amount` from `from` to `to`.
    pub fn transfer(
        &self,
        from: &TokenAccount,
        to: &TokenAccount,
        amount: u64,
        now: Timestamp,
    ) -> Result<TransferOutcome, TransferError> {
        if amount == 0 {
            return Err(TransferError::ZeroAmount);
        }
        if from.key == to.key {
            return Err(TransferError::SelfTransfer);
        }
        let mint = self.model.mint();
        for account in [from, to] {
            if account.mint != mint {
                return Err(TransferError::MintMismatch {
                    expected: mint,
                    actual: account.mint,
                });
            }
        }
        for account in [from, to] {
            if !account.state.can_transact() {
                return Err(TransferError::AccountFrozenOrRevoked(account.key));
            }
        }

        let from_settled = self.model.settle(from, now)?;
        if from_settled.balance < amount {
            return Err(TransferError::InsufficientBalance {
                needed: amount,
                available: from_settled.balance,
            });
        }
        let to_settled = self.model.settle(to, now)?;

        let from_balance = from_settled.balance - amount;
        let to_balance = to_settled
            .balance
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        let mut from_account = from_settled.account;
        from_account.last_balance_snapshot = from_balance;
        let mut to_account = to_settled.account;
        to_account.last_balance_snapshot = to_balance;

        info!(
            mint = %mint,
            from = %from.key,
            to = %to.key,
            amount,
            from_balance,
            to_balance,
            "transfer"
        );

        Ok(TransferOutcome {
            event: ChronoEvent::Transfer {
                mint,
                from: from.key,
                to: to.key,
                amount,
                from_balance,
                to_balance,
                at: now,
            },
            from: from_account,
            to: to_account,
            from_decayed: from_settled.decayed,
            to_decayed: to_settled.decayed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_accounts::{Mint, MintInit};
    use crt_equation::{ChronoEquation, EquationParams};
    use crt_types::{AccountKey, AccountState, ErrorCode, PauseType};

    fn key(n: u8) -> AccountKey {
        AccountKey::new([n; 32])
    }

    fn setup(equation: ChronoEquation, params: EquationParams) -> (TransferCoordinator, Mint) {
        let init = MintInit {
            key: key(1),
            mint_authority: key(2),
            enable_chrono_hook: true,
            chrono_hook_program: Some(key(4)),
            equation_type: Some(equation),
            pause_type: Some(PauseType::Pause),
            equation_params: Some(params),
            ..Default::default()
        };
        let (mint, ext) = Mint::initialize(init).unwrap();
        let model = AccountModel::new(&mint, ext.as_ref()).unwrap();
        (TransferCoordinator::new(model), mint)
    }

    fn account(mint: &Mint, n: u8, snapshot: u64) -> (TokenAccount, DecayPool) {
        let (mut account, pool) = TokenAccount::initialize(key(n), mint, key(n + 100), None, Timestamp::EPOCH);
        account.last_balance_snapshot = snapshot;
        (account, pool)
    }

    fn deflationary() -> (TransferCoordinator, Mint) {
        setup(
            ChronoEquation::Deflationary,
            EquationParams::new().with_decay_rate(1).with_time_unit(1),
        )
    }

    #[test]
    fn transfer_settles_both_sides() {
        let (coordinator, mint) = deflationary();
        let (from, _) = account(&mint, 10, 1_000);
        let (to, _) = account(&mint, 11, 50);

        let out = coordinator.transfer(&from, &to, 300, Timestamp::new(100)).unwrap();
        assert_eq!(out.from.last_balance_snapshot, 600);
        assert_eq!(out.to.last_balance_snapshot, 300);
        assert_eq!(out.from.snapshot_time, Timestamp::new(100));
        assert_eq!(out.to.snapshot_time, Timestamp::new(100));
        assert_eq!(out.from_decayed, 100);
        assert_eq!(out.to_decayed, 50);
        assert_eq!(out.event.name(), "transfer");
    }

    #[test]
    fn decay_lands_in_pools() {
        let (coordinator, mint) = deflationary();
        let (from, mut from_pool) = account(&mint, 10, 1_000);
        let (to, mut to_pool) = account(&mint, 11, 50);

        let out = coordinator.transfer(&from, &to, 300, Timestamp::new(100)).unwrap();
        out.apply_decay(&mut from_pool, &mut to_pool).unwrap();
        assert_eq!(from_pool.amount, 100);
        assert_eq!(to_pool.amount, 50);
    }

    #[test]
    fn swapped_pools_are_rejected_untouched() {
        let (coordinator, mint) = deflationary();
        let (from, mut from_pool) = account(&mint, 10, 1_000);
        let (to, mut to_pool) = account(&mint, 11, 50);

        let out = coordinator.transfer(&from, &to, 1, Timestamp::new(100)).unwrap();
        let err = out.apply_decay(&mut to_pool, &mut from_pool).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DecayPoolMismatch);
        assert_eq!(from_pool.amount, 0);
        assert_eq!(to_pool.amount, 0);
    }

    #[test]
    fn insufficient_after_settlement() {
        let (coordinator, mint) = deflationary();
        let (from, _) = account(&mint, 10, 1_000);
        let (to, _) = account(&mint, 11, 0);
        let err = coordinator.transfer(&from, &to, 950, Timestamp::new(100)).unwrap_err();
        assert!(matches!(
            err,
            TransferError::InsufficientBalance { needed: 950, available: 900 }
        ));
    }

    #[test]
    fn checks_run_in_order() {
        let (coordinator, mint) = deflationary();
        let (from, _) = account(&mint, 10, 1_000);
        let (mut to, _) = account(&mint, 11, 0);

        assert!(matches!(
            coordinator.transfer(&from, &from, 0, Timestamp::EPOCH),
            Err(TransferError::ZeroAmount)
        ));
        assert!(matches!(
            coordinator.transfer(&from, &from, 1, Timestamp::EPOCH),
            Err(TransferError::SelfTransfer)
        ));

        to.state = AccountState::Frozen;
        to.mint = key(99);
        assert!(matches!(
            coordinator.transfer(&from, &to, 1, Timestamp::EPOCH),
            Err(TransferError::MintMismatch { .. })
        ));

        to.mint = mint.key;
        assert!(matches!(
            coordinator.transfer(&from, &to, 1, Timestamp::EPOCH),
            Err(TransferError::AccountFrozenOrRevoked(k)) if k == to.key
        ));
    }

    #[test]
    fn revoked_sender_is_rejected() {
        let (coordinator, mint) = deflationary();
        let (mut from, _) = account(&mint, 10, 1_000);
        let (to, _) = account(&mint, 11, 0);
        from.state = AccountState::Revoked;
        let err = coordinator.transfer(&from, &to, 1, Timestamp::EPOCH).unwrap_err();
        assert_eq!(err.code(), ErrorCode::AccountFrozenOrRevoked);
    }

    #[test]
    fn receiver_overflow_is_reported() {
        let (coordinator, mint) = setup(ChronoEquation::Linear, EquationParams::new().with_slope(0));
        let (from, _) = account(&mint, 10, 10);
        let (to, _) = account(&mint, 11, u64::MAX);
        assert!(matches!(
            coordinator.transfer(&from, &to, 1, Timestamp::EPOCH),
            Err(TransferError::Overflow)
        ));
    }

    #[test]
    fn paused_receiver_settles_at_pause_instant() {
        let (coordinator, mint) = deflationary();
        let (from, _) = account(&mint, 10, 1_000);
        let (mut to, _) = account(&mint, 11, 500);
        to.paused_at = Some(Timestamp::new(40));

        let out = coordinator.transfer(&from, &to, 300, Timestamp::new(100)).unwrap();
        assert_eq!(out.to.last_balance_snapshot, 760);
        assert_eq!(out.to.snapshot_time, Timestamp::new(40));
        assert_eq!(out.to.paused_at, Some(Timestamp::new(40)));
        assert_eq!(out.to_decayed, 40);
        assert_eq!(out.from.snapshot_time, Timestamp::new(100));

        let later = coordinator.model().live_balance(&out.to, Timestamp::new(1_000)).unwrap();
        assert_eq!(later, 760);
    }

    #[test]
    fn clock_skew_propagates() {
        let (coordinator, mint) = deflationary();
        let (from, _) = account(&mint, 10, 1_000);
        let (to, _) = account(&mint, 11, 0);
        let err = coordinator.transfer(&from, &to, 1, Timestamp::new(-1)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ClockSkew);
    }
}
