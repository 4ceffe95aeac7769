#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use crt_equation::{compute_balance, ChronoEquation, EquationParams};
use crt_types::Timestamp;

#[derive(Debug, Arbitrary)]
struct Input {
    tag: u8,
    last_snapshot: u64,
    snapshot_time: Option<i64>,
    now: i64,
    expiration_time: Option<i64>,
    inflation_rate: Option<u64>,
    decay_rate: Option<u64>,
    time_unit: Option<u64>,
    slope: Option<i64>,
    decay_constant: Option<f64>,
}

// Balance computation must return Ok or a typed error for every input, never panic.
fuzz_target!(|input: Input| {
    let Ok(equation) = ChronoEquation::from_tag(input.tag % 6) else {
        return;
    };
    let params = EquationParams {
        snapshot_time: input.snapshot_time.map(Timestamp::new),
        expiration_time: input.expiration_time.map(Timestamp::new),
        inflation_rate: input.inflation_rate,
        decay_rate: input.decay_rate,
        time_unit: input.time_unit,
        slope: input.slope,
        decay_constant: input.decay_constant,
        reup_boost: None,
    };
    let now = Timestamp::new(input.now);

    let first = compute_balance(input.last_snapshot, equation, &params, now);
    let second = compute_balance(input.last_snapshot, equation, &params, now);
    assert_eq!(first.ok(), second.ok());
});
