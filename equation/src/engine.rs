//! Pure balance evaluation.

use crate::error::EquationError;
use crate::kind::ChronoEquation;
use crate::params::EquationParams;
use crt_types::Timestamp;

/// 2^64 as f64; the first value that no longer fits in a `u64`.
const U64_LIMIT_F64: f64 = 18_446_744_073_709_551_616.0;

/// Compute the balance an account holds at `now`.
///
/// `elapsed = now − snapshot_time`. A negative elapsed time is reported as
/// [`EquationError::ClockSkew`] for every law; it is never clamped.
///
/// All laws except `Exponential` use integer arithmetic with 128-bit
/// intermediates; rate divisions truncate toward zero. The function reads no
/// clock and no shared state, so identical inputs give identical outputs.
pub fn compute_balance(
    last_snapshot: u64,
    equation: ChronoEquation,
    params: &EquationParams,
    now: Timestamp,
) -> Result<u64, EquationError> {
    let snapshot_time = params.require_snapshot_time()?;
    let elapsed = now.seconds_since(snapshot_time);
    if elapsed < 0 {
        return Err(EquationError::ClockSkew { now, snapshot_time });
    }

    match equation {
        ChronoEquation::Subscription => {
            let expiration = params.require_expiration_time()?;
            Ok(if now <= expiration { last_snapshot } else { 0 })
        }
        ChronoEquation::Inflationary => {
            let growth = per_unit(elapsed, params.require_inflation_rate()?, params)?;
            let total = (last_snapshot as u128)
                .checked_add(growth)
                .ok_or(EquationError::Overflow)?;
            u64::try_from(total).map_err(|_| EquationError::Overflow)
        }
        ChronoEquation::Deflationary => {
            let decay = per_unit(elapsed, params.require_decay_rate()?, params)?;
            // Result is at most `last_snapshot`, so the narrowing is lossless.
            Ok((last_snapshot as u128).saturating_sub(decay) as u64)
        }
        ChronoEquation::Linear => {
            let delta = elapsed as i128 * params.require_slope()? as i128;
            let total = last_snapshot as i128 + delta;
            if total < 0 {
                return Ok(0);
            }
            u64::try_from(total).map_err(|_| EquationError::Overflow)
        }
        ChronoEquation::Exponential => {
            let k = params.require_decay_constant()?;
            let unit = params.require_time_unit()?;
            exponential(last_snapshot, k, elapsed, unit)
        }
    }
}

/// `elapsed × rate / time_unit`, truncated. Cannot overflow: `i64::MAX × u64::MAX < 2^128`.
fn per_unit(elapsed: i64, rate: u64, params: &EquationParams) -> Result<u128, EquationError> {
    let unit = params.require_time_unit()?;
    Ok(elapsed as u128 * rate as u128 / unit as u128)
}

/// `last × exp(−k × elapsed / unit)`, rounded half away from zero.
///
/// Precision: snapshots above 2^53 lose their low bits when converted to
/// f64, and `exp` contributes at most a few ULPs, so the result carries a
/// relative error of roughly 1e-15. A zero constant, zero elapsed time or zero
/// snapshot short-circuits and is exact.
fn exponential(last: u64, k: f64, elapsed: i64, unit: u64) -> Result<u64, EquationError> {
    if last == 0 || elapsed == 0 || k == 0.0 {
        return Ok(last);
    }
    let exponent = -k * (elapsed as f64) / (unit as f64);
    let value = (last as f64 * exponent.exp()).round();
    if !value.is_finite() || value >= U64_LIMIT_F64 {
        return Err(EquationError::Overflow);
    }
    Ok(value as u64)
}
