//! Property-based tests for transfers.

use crt_accounts::{AccountModel, Mint, MintInit, TokenAccount};
use crt_equation::{ChronoEquation, EquationParams};
use crt_transfer::{TransferCoordinator, TransferError};
use crt_types::{AccountKey, PauseType, Timestamp};
use proptest::prelude::*;

fn key(n: u8) -> AccountKey {
    AccountKey::new([n; 32])
}

fn coordinator(equation: ChronoEquation, params: EquationParams) -> (TransferCoordinator, Mint) {
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

fn arb_law() -> impl Strategy<Value = (ChronoEquation, EquationParams)> {
    prop_oneof![
        (0u64..1_000, 1u64..10_000).prop_map(|(rate, unit)| (
            ChronoEquation::Inflationary,
            EquationParams::new().with_inflation_rate(rate).with_time_unit(unit)
        )),
        (0u64..1_000, 1u64..10_000).prop_map(|(rate, unit)| (
            ChronoEquation::Deflationary,
            EquationParams::new().with_decay_rate(rate).with_time_unit(unit)
        )),
        (-1_000i64..1_000).prop_map(|slope| (
            ChronoEquation::Linear,
            EquationParams::new().with_slope(slope)
        )),
        (0.0f64..2.0, 1u64..100_000).prop_map(|(k, unit)| (
            ChronoEquation::Exponential,
            EquationParams::new().with_decay_constant(k).with_time_unit(unit)
        )),
    ]
}

fn opened(mint: &Mint, n: u8, snapshot: u64, at: i64) -> TokenAccount {
    let (mut account, _) = TokenAccount::initialize(key(n), mint, key(n + 100), None, Timestamp::new(at));
    account.last_balance_snapshot = snapshot;
    account
}

proptest! {
    #[test]
    fn transfer_conserves_live_value(
        (equation, params) in arb_law(),
        from_snapshot in 0u64..1_000_000_000,
        to_snapshot in 0u64..1_000_000_000,
        from_opened in 0i64..10_000,
        to_opened in 0i64..10_000,
        elapsed in 0i64..100_000,
        share in 1u64..=100,
    ) {
        let (coordinator, mint) = coordinator(equation, params);
        let from = opened(&mint, 10, from_snapshot, from_opened);
        let to = opened(&mint, 11, to_snapshot, to_opened);
        let now = Timestamp::new(10_000 + elapsed);

        let model = coordinator.model();
        let live_from = model.live_balance(&from, now).unwrap();
        let live_to = model.live_balance(&to, now).unwrap();
        prop_assume!(live_from > 0);
        let amount = (live_from * share / 100).max(1);

        let out = coordinator.transfer(&from, &to, amount, now).unwrap();
        prop_assert_eq!(
            live_from as u128 + live_to as u128,
            out.from.last_balance_snapshot as u128 + out.to.last_balance_snapshot as u128
        );
        prop_assert_eq!(out.from.snapshot_time, now);
        prop_assert_eq!(out.to.snapshot_time, now);
    }

    #[test]
    fn overdraft_fails_and_leaves_inputs_unchanged(
        (equation, params) in arb_law(),
        from_snapshot in 0u64..1_000_000,
        elapsed in 0i64..100_000,
        excess in 1u64..1_000,
    ) {
        let (coordinator, mint) = coordinator(equation, params);
        let from = opened(&mint, 10, from_snapshot, 0);
        let to = opened(&mint, 11, 5, 0);
        let before = (from.clone(), to.clone());
        let now = Timestamp::new(elapsed);

        let live_from = coordinator.model().live_balance(&from, now).unwrap();
        let err = coordinator.transfer(&from, &to, live_from + excess, now).unwrap_err();
        let is_insufficient = matches!(err, TransferError::InsufficientBalance { .. });
        prop_assert!(is_insufficient);
        prop_assert_eq!(before, (from, to));
    }
}
