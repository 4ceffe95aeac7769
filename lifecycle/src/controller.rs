//! Account state machine.

use crate::error::LifecycleError;
use crt_accounts::{AccountModel, ChronoEvent, ChronoExtension, Mint, TokenAccount};
use crt_types::{AccountKey, AccountState};
use tracing::info;

/// An updated account and the event describing the change.
#[derive(Clone, Debug, PartialEq)]
pub struct LifecycleOutcome {
    pub account: TokenAccount,
    /// Value decayed out while settling; owed to the account's decay pool.
    pub decayed: u64,
    pub event: ChronoEvent,
}

/// Applies lifecycle transitions to the accounts of one mint.
#[derive(Clone, Debug)]
pub struct LifecycleController {
    pub(crate) model: AccountModel,
    freeze_authority: Option<AccountKey>,
}

impl LifecycleController {
    pub fn new(mint: &Mint, extension: Option<&ChronoExtension>) -> Result<Self, LifecycleError> {
        Ok(Self::from_model(AccountModel::new(mint, extension)?, mint.freeze_authority))
    }

    /// Wrap an already configured model, keeping its time unit fallback.
    pub fn from_model(model: AccountModel, freeze_authority: Option<AccountKey>) -> Self {
        Self {
            model,
            freeze_authority,
        }
    }

    pub fn model(&self) -> &AccountModel {
        &self.model
    }

    /// `Initialized → Frozen`.
    pub fn freeze(
        &self,
        account: &TokenAccount,
        authority: &AccountKey,
    ) -> Result<LifecycleOutcome, LifecycleError> {
        self.transition(account, authority, AccountState::Frozen)
    }

    /// `Frozen → Initialized`.
    pub fn thaw(
        &self,
        account: &TokenAccount,
        authority: &AccountKey,
    ) -> Result<LifecycleOutcome, LifecycleError> {
        self.transition(account, authority, AccountState::Initialized)
    }

    /// `Initialized | Frozen → Revoked`. Terminal.
    pub fn revoke(
        &self,
        account: &TokenAccount,
        authority: &AccountKey,
    ) -> Result<LifecycleOutcome, LifecycleError> {
        self.transition(account, authority, AccountState::Revoked)
    }

    fn transition(
        &self,
        account: &TokenAccount,
        authority: &AccountKey,
        to: AccountState,
    ) -> Result<LifecycleOutcome, LifecycleError> {
        self.model.ensure_same_mint(account)?;
        self.check_freeze_authority(authority)?;

        let from = account.state;
        let allowed = matches!(
            (from, to),
            (AccountState::Initialized, AccountState::Frozen)
                | (AccountState::Frozen, AccountState::Initialized)
                | (AccountState::Initialized | AccountState::Frozen, AccountState::Revoked)
        );
        if from == AccountState::Revoked {
            return Err(LifecycleError::AccountRevoked(account.key));
        }
        if !allowed {
            return Err(LifecycleError::InvalidTransition { from, to });
        }

        let mut updated = account.clone();
        updated.state = to;
        info!(account = %account.key, %from, %to, "account state changed");
        Ok(LifecycleOutcome {
            account: updated,
            decayed: 0,
            event: ChronoEvent::StateChanged {
                token_account: account.key,
                from,
                to,
            },
        })
    }

    fn check_freeze_authority(&self, authority: &AccountKey) -> Result<(), LifecycleError> {
        match &self.freeze_authority {
            None => Err(LifecycleError::NoFreezeAuthority),
            Some(expected) if expected != authority => {
                Err(LifecycleError::InvalidAuthority(*authority))
            }
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_accounts::MintInit;
    use crt_types::{ErrorCode, Timestamp};

    fn key(n: u8) -> AccountKey {
        AccountKey::new([n; 32])
    }

    fn setup(freeze_authority: Option<AccountKey>) -> (LifecycleController, TokenAccount) {
        let init = MintInit {
            key: key(1),
            mint_authority: key(2),
            freeze_authority,
            ..Default::default()
        };
        let (mint, ext) = Mint::initialize(init).unwrap();
        let controller = LifecycleController::new(&mint, ext.as_ref()).unwrap();
        let (account, _) = TokenAccount::initialize(key(8), &mint, key(7), None, Timestamp::EPOCH);
        (controller, account)
    }

    #[test]
    fn freeze_thaw_revoke() {
        let (controller, account) = setup(Some(key(3)));
        let frozen = controller.freeze(&account, &key(3)).unwrap();
        assert_eq!(frozen.account.state, AccountState::Frozen);
        assert_eq!(
            frozen.event,
            ChronoEvent::StateChanged {
                token_account: account.key,
                from: AccountState::Initialized,
                to: AccountState::Frozen,
            }
        );

        let thawed = controller.thaw(&frozen.account, &key(3)).unwrap();
        assert_eq!(thawed.account.state, AccountState::Initialized);

        let revoked = controller.revoke(&frozen.account, &key(3)).unwrap();
        assert_eq!(revoked.account.state, AccountState::Revoked);
    }

    #[test]
    fn revoked_is_terminal() {
        let (controller, account) = setup(Some(key(3)));
        let revoked = controller.revoke(&account, &key(3)).unwrap().account;
        for result in [
            controller.freeze(&revoked, &key(3)),
            controller.thaw(&revoked, &key(3)),
            controller.revoke(&revoked, &key(3)),
        ] {
            assert!(matches!(result, Err(LifecycleError::AccountRevoked(_))));
        }
    }

    #[test]
    fn illegal_transitions() {
        let (controller, account) = setup(Some(key(3)));
        let err = controller.thaw(&account, &key(3)).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidTransition {
                from: AccountState::Initialized,
                to: AccountState::Initialized,
            }
        ));
        let frozen = controller.freeze(&account, &key(3)).unwrap().account;
        assert_eq!(
            controller.freeze(&frozen, &key(3)).unwrap_err().code(),
            ErrorCode::InvalidTransition
        );
    }

    #[test]
    fn freeze_authority_is_enforced() {
        let (controller, account) = setup(Some(key(3)));
        assert!(matches!(
            controller.freeze(&account, &key(2)),
            Err(LifecycleError::InvalidAuthority(_))
        ));

        let (controller, account) = setup(None);
        assert!(matches!(
            controller.revoke(&account, &key(3)),
            Err(LifecycleError::NoFreezeAuthority)
        ));
    }

    #[test]
    fn foreign_account_is_rejected() {
        let (controller, mut account) = setup(Some(key(3)));
        account.mint = key(99);
        assert_eq!(
            controller.freeze(&account, &key(3)).unwrap_err().code(),
            ErrorCode::MintMismatch
        );
    }
}
