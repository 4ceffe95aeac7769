//! Command execution against a loaded snapshot.

use anyhow::Context;
use serde_json::{json, Value};

use crt_accounts::ChronoEvent;
use crt_lifecycle::LifecycleController;
use crt_transfer::TransferCoordinator;
use crt_types::Timestamp;
use crt_utils::format_duration;

use crate::cli::Command;
use crate::snapshot::LedgerSnapshot;

/// Run `command` at `now`, updating `snapshot` in place.
///
/// Returns the JSON document to print: the resulting event, or the balance
/// report for `balance`. On error the snapshot is left untouched.
pub fn run(
    command: &Command,
    snapshot: &mut LedgerSnapshot,
    now: Timestamp,
    time_unit: Option<u64>,
) -> anyhow::Result<Value> {
    let model = snapshot
        .model(time_unit)
        .context("mint and extension do not match")?;

    let event = match command {
        Command::Balance { account } => {
            let account = snapshot.account(account)?;
            let balance = model.live_balance(account, now)?;
            return Ok(json!({
                "token_account": account.key,
                "balance": balance,
                "at": now,
                "snapshot": account.last_balance_snapshot,
                "since_snapshot": format_duration(now.seconds_since(account.snapshot_time)),
                "paused": account.is_paused(),
            }));
        }
        Command::Settle { account } => {
            let settlement = model.settle(snapshot.account(account)?, now)?;
            snapshot.absorb_decay(account, settlement.decayed)?;
            let event = settlement.event();
            snapshot.put_account(settlement.account);
            event
        }
        Command::Transfer { from, to, amount } => {
            let coordinator = TransferCoordinator::new(model);
            let out = coordinator.transfer(snapshot.account(from)?, snapshot.account(to)?, *amount, now)?;
            let mut from_pool = snapshot.pool(from)?.clone();
            let mut to_pool = snapshot.pool(to)?.clone();
            out.apply_decay(&mut from_pool, &mut to_pool)?;
            snapshot.put_pool(from_pool);
            snapshot.put_pool(to_pool);
            snapshot.put_account(out.from);
            snapshot.put_account(out.to);
            out.event
        }
        Command::MintTo {
            account,
            amount,
            authority,
        } => {
            let out = model.mint_to(&snapshot.mint, snapshot.account(account)?, authority, *amount, now)?;
            snapshot.absorb_decay(account, out.decayed)?;
            snapshot.mint = out.mint;
            snapshot.put_account(out.account);
            out.event
        }
        Command::Burn {
            account,
            amount,
            authority,
        } => {
            let out = model.burn(&snapshot.mint, snapshot.account(account)?, authority, *amount, now)?;
            snapshot.absorb_decay(account, out.decayed)?;
            snapshot.mint = out.mint;
            snapshot.put_account(out.account);
            out.event
        }
        Command::Pause { account } => {
            let controller = LifecycleController::from_model(model, snapshot.mint.freeze_authority);
            let out = controller.pause_decay(snapshot.account(account)?, now)?;
            snapshot.absorb_decay(account, out.decayed)?;
            snapshot.put_account(out.account);
            out.event
        }
        Command::Unpause { account } => {
            let controller = LifecycleController::from_model(model, snapshot.mint.freeze_authority);
            let out = controller.unpause(snapshot.account(account)?, now)?;
            snapshot.absorb_decay(account, out.decayed)?;
            snapshot.put_account(out.account);
            out.event
        }
        Command::Reup { account } => {
            let controller = LifecycleController::from_model(model, snapshot.mint.freeze_authority);
            let out = controller.reup(snapshot.account(account)?, snapshot.pool(account)?, now)?;
            snapshot.put_pool(out.pool);
            snapshot.put_account(out.account);
            out.event
        }
        Command::Freeze { account, authority } => {
            let controller = LifecycleController::from_model(model, snapshot.mint.freeze_authority);
            let out = controller.freeze(snapshot.account(account)?, authority)?;
            snapshot.put_account(out.account);
            out.event
        }
        Command::Thaw { account, authority } => {
            let controller = LifecycleController::from_model(model, snapshot.mint.freeze_authority);
            let out = controller.thaw(snapshot.account(account)?, authority)?;
            snapshot.put_account(out.account);
            out.event
        }
        Command::Revoke { account, authority } => {
            let controller = LifecycleController::from_model(model, snapshot.mint.freeze_authority);
            let out = controller.revoke(snapshot.account(account)?, authority)?;
            snapshot.put_account(out.account);
            out.event
        }
    };

    event_json(&event)
}

fn event_json(event: &ChronoEvent) -> anyhow::Result<Value> {
    serde_json::to_value(event).context("event is not serializable")
}
