//! Pausing decay, resuming it, and re-up.

use crate::controller::{LifecycleController, LifecycleOutcome};
use crate::error::LifecycleError;
use crt_accounts::{ChronoEvent, ChronoExtension, DecayPool, TokenAccount};
use crt_types::{PauseType, Timestamp};
use tracing::info;

/// Account and decay pool after a re-up.
#[derive(Clone, Debug, PartialEq)]
pub struct ReUpOutcome {
    pub account: TokenAccount,
    pub pool: DecayPool,
    pub event: ChronoEvent,
}

impl LifecycleController {
    /// Settle at `now` and stop accrual there.
    ///
    /// Allowed on mints whose pause type is `Pause` or `ReUp`.
    pub fn pause_decay(
        &self,
        account: &TokenAccount,
        now: Timestamp,
    ) -> Result<LifecycleOutcome, LifecycleError> {
        self.pausable(account, "pause", &[PauseType::Pause, PauseType::ReUp])?;
        if account.is_paused() {
            return Err(LifecycleError::AlreadyPaused(account.key));
        }

        let settlement = self.model.settle(account, now)?;
        let mut updated = settlement.account;
        updated.paused_at = Some(now);

        info!(account = %account.key, balance = settlement.balance, at = %now, "decay paused");
        Ok(LifecycleOutcome {
            event: ChronoEvent::Pause {
                mint: updated.mint,
                token_account: updated.key,
                at: now,
            },
            account: updated,
            decayed: settlement.decayed,
        })
    }

    /// Resume accrual from `now`. Only for pause type `Pause`.
    pub fn unpause(
        &self,
        account: &TokenAccount,
        now: Timestamp,
    ) -> Result<LifecycleOutcome, LifecycleError> {
        self.pausable(account, "unpause", &[PauseType::Pause])?;
        if !account.is_paused() {
            return Err(LifecycleError::NotPaused(account.key));
        }

        // settles at the pause instant
        let settlement = self.model.settle(account, now)?;
        let mut updated = settlement.account;
        updated.paused_at = None;
        updated.snapshot_time = now;

        info!(account = %account.key, balance = settlement.balance, at = %now, "decay resumed");
        Ok(LifecycleOutcome {
            event: ChronoEvent::Unpause {
                mint: updated.mint,
                token_account: updated.key,
                at: now,
            },
            account: updated,
            decayed: settlement.decayed,
        })
    }

    /// Resume accrual from `now` with a boost. Only for pause type `ReUp`.
    ///
    /// Decay settled here is first absorbed into `pool`; then the re-up
    /// percentage of both the boost and the pool is credited to the account.
    pub fn reup(
        &self,
        account: &TokenAccount,
        pool: &DecayPool,
        now: Timestamp,
    ) -> Result<ReUpOutcome, LifecycleError> {
        let ext = self.pausable(account, "re-up", &[PauseType::ReUp])?;
        pool.ensure_belongs_to(account)?;

        let boost = self
            .model
            .resolve(account)?
            .map_or(0, |resolved| resolved.params.reup_boost_or_zero());
        let settlement = self.model.settle(account, now)?;

        let mut pool = pool.clone();
        pool.absorb(settlement.decayed)?;
        let recovered = ext.reup_share(pool.amount);
        pool.release(recovered)?;

        let amount = ext
            .reup_share(boost)
            .checked_add(recovered)
            .ok_or(LifecycleError::Overflow)?;
        let new_balance = settlement
            .balance
            .checked_add(amount)
            .ok_or(LifecycleError::Overflow)?;

        let mut updated = settlement.account;
        updated.last_balance_snapshot = new_balance;
        updated.paused_at = None;
        updated.snapshot_time = now;

        info!(account = %account.key, amount, new_balance, decay_pool = pool.amount, "re-up");
        Ok(ReUpOutcome {
            event: ChronoEvent::ReUp {
                mint: updated.mint,
                token_account: updated.key,
                amount,
                new_balance,
                decay_pool_balance: pool.amount,
            },
            account: updated,
            pool,
        })
    }

    /// The extension, if `operation` is permitted for `account` under it.
    fn pausable(
        &self,
        account: &TokenAccount,
        operation: &'static str,
        allowed: &[PauseType],
    ) -> Result<&ChronoExtension, LifecycleError> {
        self.model.ensure_same_mint(account)?;
        if account.state.is_revoked() {
            return Err(LifecycleError::AccountRevoked(account.key));
        }
        match self.model.extension() {
            Some(ext) if allowed.contains(&ext.pause_type) => Ok(ext),
            _ => Err(LifecycleError::InvalidPauseOperation(operation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_accounts::{AccountModel, Mint, MintInit};
    use crt_equation::{ChronoEquation, EquationParams};
    use crt_types::{AccountKey, AccountState, ErrorCode};

    fn key(n: u8) -> AccountKey {
        AccountKey::new([n; 32])
    }

    fn setup(
        pause_type: PauseType,
        reup_percentage: Option<u8>,
        params: EquationParams,
    ) -> (LifecycleController, TokenAccount, DecayPool) {
        let init = MintInit {
            key: key(1),
            mint_authority: key(2),
            freeze_authority: Some(key(3)),
            enable_chrono_hook: true,
            chrono_hook_program: Some(key(4)),
            equation_type: Some(ChronoEquation::Deflationary),
            pause_type: Some(pause_type),
            equation_params: Some(params),
            reup_percentage,
            ..Default::default()
        };
        let (mint, ext) = Mint::initialize(init).unwrap();
        let controller = LifecycleController::new(&mint, ext.as_ref()).unwrap();
        let (mut account, pool) = TokenAccount::initialize(key(8), &mint, key(7), None, Timestamp::EPOCH);
        account.last_balance_snapshot = 1_000;
        (controller, account, pool)
    }

    fn decay_per_second() -> EquationParams {
        EquationParams::new().with_decay_rate(5).with_time_unit(1)
    }

    #[test]
    fn reup_scenario() {
        let params = decay_per_second().with_reup_boost(50);
        let (controller, mut account, pool) = setup(PauseType::ReUp, Some(100), params);
        account.last_balance_snapshot = 500;
        account.snapshot_time = Timestamp::new(100);
        account.paused_at = Some(Timestamp::new(100));

        let out = controller.reup(&account, &pool, Timestamp::new(200)).unwrap();
        assert_eq!(out.account.last_balance_snapshot, 550);
        assert_eq!(out.account.snapshot_time, Timestamp::new(200));
        assert_eq!(out.account.paused_at, None);
        assert_eq!(
            out.event,
            ChronoEvent::ReUp {
                mint: key(1),
                token_account: key(8),
                amount: 50,
                new_balance: 550,
                decay_pool_balance: 0,
            }
        );
    }

    #[test]
    fn reup_recovers_share_of_pool() {
        let params = decay_per_second().with_reup_boost(40);
        let (controller, account, mut pool) = setup(PauseType::ReUp, Some(50), params);
        pool.absorb(100).unwrap();

        // 10s of decay: 50 settled out, pool 150, half recovered
        let out = controller.reup(&account, &pool, Timestamp::new(10)).unwrap();
        assert_eq!(out.pool.amount, 75);
        assert_eq!(out.account.last_balance_snapshot, 950 + 20 + 75);
    }

    #[test]
    fn pause_stops_decay() {
        let (controller, account, _) = setup(PauseType::Pause, None, decay_per_second());
        let paused = controller.pause_decay(&account, Timestamp::new(20)).unwrap();
        assert_eq!(paused.account.last_balance_snapshot, 900);
        assert_eq!(paused.decayed, 100);
        assert_eq!(paused.account.paused_at, Some(Timestamp::new(20)));

        let model = controller.model();
        assert_eq!(model.live_balance(&paused.account, Timestamp::new(10_000)).unwrap(), 900);

        let err = controller.pause_decay(&paused.account, Timestamp::new(30)).unwrap_err();
        assert!(matches!(err, LifecycleError::AlreadyPaused(_)));
    }

    #[test]
    fn unpause_resumes_from_now() {
        let (controller, account, _) = setup(PauseType::Pause, None, decay_per_second());
        let paused = controller.pause_decay(&account, Timestamp::new(20)).unwrap().account;
        let resumed = controller.unpause(&paused, Timestamp::new(500)).unwrap();
        assert_eq!(resumed.account.last_balance_snapshot, 900);
        assert_eq!(resumed.account.snapshot_time, Timestamp::new(500));
        assert_eq!(resumed.account.paused_at, None);
        assert_eq!(resumed.event.name(), "unpause");

        let model: &AccountModel = controller.model();
        assert_eq!(model.live_balance(&resumed.account, Timestamp::new(510)).unwrap(), 850);

        let err = controller.unpause(&resumed.account, Timestamp::new(600)).unwrap_err();
        assert!(matches!(err, LifecycleError::NotPaused(_)));
    }

    #[test]
    fn pause_type_gates_operations() {
        let (controller, account, pool) = setup(PauseType::Pause, None, decay_per_second());
        assert_eq!(
            controller.reup(&account, &pool, Timestamp::new(1)).unwrap_err().code(),
            ErrorCode::InvalidPauseOperation
        );

        let (controller, account, _) = setup(PauseType::ReUp, Some(10), decay_per_second());
        let paused = controller.pause_decay(&account, Timestamp::new(1)).unwrap().account;
        assert_eq!(
            controller.unpause(&paused, Timestamp::new(2)).unwrap_err().code(),
            ErrorCode::InvalidPauseOperation
        );
    }

    #[test]
    fn no_extension_means_no_pausing() {
        let init = MintInit {
            key: key(1),
            mint_authority: key(2),
            ..Default::default()
        };
        let (mint, _) = Mint::initialize(init).unwrap();
        let controller = LifecycleController::new(&mint, None).unwrap();
        let (account, _) = TokenAccount::initialize(key(8), &mint, key(7), None, Timestamp::EPOCH);
        assert!(matches!(
            controller.pause_decay(&account, Timestamp::new(1)),
            Err(LifecycleError::InvalidPauseOperation("pause"))
        ));
    }

    #[test]
    fn revoked_accounts_cannot_pause() {
        let (controller, mut account, pool) = setup(PauseType::ReUp, Some(10), decay_per_second());
        account.state = AccountState::Revoked;
        assert!(matches!(
            controller.pause_decay(&account, Timestamp::new(1)),
            Err(LifecycleError::AccountRevoked(_))
        ));
        assert!(matches!(
            controller.reup(&account, &pool, Timestamp::new(1)),
            Err(LifecycleError::AccountRevoked(_))
        ));
    }

    #[test]
    fn frozen_accounts_may_pause() {
        let (controller, mut account, _) = setup(PauseType::Pause, None, decay_per_second());
        account.state = AccountState::Frozen;
        assert!(controller.pause_decay(&account, Timestamp::new(1)).is_ok());
    }

    #[test]
    fn reup_rejects_foreign_pool() {
        let (controller, account, _) = setup(PauseType::ReUp, Some(10), decay_per_second());
        let foreign = DecayPool::new(key(50));
        assert_eq!(
            controller.reup(&account, &foreign, Timestamp::new(1)).unwrap_err().code(),
            ErrorCode::DecayPoolMismatch
        );
    }
}
