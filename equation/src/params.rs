//! Parameters read by the chrono equations.

use crate::error::EquationError;
use crt_types::Timestamp;
use serde::{Deserialize, Serialize};

/// Parameters for a chrono equation.
///
/// Every field is optional in stored form. Each law reads only the fields it
/// needs and reports `MissingParameter` for any that are absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquationParams {
    /// Instant the last balance snapshot is valid for.
    pub snapshot_time: Option<Timestamp>,
    /// Last instant a subscription balance is still held.
    pub expiration_time: Option<Timestamp>,
    /// Raw units gained per `time_unit`.
    pub inflation_rate: Option<u64>,
    /// Raw units lost per `time_unit`.
    pub decay_rate: Option<u64>,
    /// Seconds the rates and the decay constant are expressed per.
    pub time_unit: Option<u64>,
    /// Raw units gained (or lost, if negative) per second.
    pub slope: Option<i64>,
    /// Continuous decay constant per `time_unit`.
    pub decay_constant: Option<f64>,
    /// Raw units added to the balance on re-up, before scaling by the re-up percentage.
    pub reup_boost: Option<u64>,
}

impl EquationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot_time(mut self, at: Timestamp) -> Self {
        self.snapshot_time = Some(at);
        self
    }

    pub fn with_expiration_time(mut self, at: Timestamp) -> Self {
        self.expiration_time = Some(at);
        self
    }

    pub fn with_inflation_rate(mut self, rate: u64) -> Self {
        self.inflation_rate = Some(rate);
        self
    }

    pub fn with_decay_rate(mut self, rate: u64) -> Self {
        self.decay_rate = Some(rate);
        self
    }

    pub fn with_time_unit(mut self, secs: u64) -> Self {
        self.time_unit = Some(secs);
        self
    }

    pub fn with_slope(mut self, slope: i64) -> Self {
        self.slope = Some(slope);
        self
    }

    pub fn with_decay_constant(mut self, k: f64) -> Self {
        self.decay_constant = Some(k);
        self
    }

    pub fn with_reup_boost(mut self, boost: u64) -> Self {
        self.reup_boost = Some(boost);
        self
    }

    /// Fill every unset field from `fallback`. Set fields win.
    pub fn or(&self, fallback: &EquationParams) -> EquationParams {
        EquationParams {
            snapshot_time: self.snapshot_time.or(fallback.snapshot_time),
            expiration_time: self.expiration_time.or(fallback.expiration_time),
            inflation_rate: self.inflation_rate.or(fallback.inflation_rate),
            decay_rate: self.decay_rate.or(fallback.decay_rate),
            time_unit: self.time_unit.or(fallback.time_unit),
            slope: self.slope.or(fallback.slope),
            decay_constant: self.decay_constant.or(fallback.decay_constant),
            reup_boost: self.reup_boost.or(fallback.reup_boost),
        }
    }

    pub fn require_snapshot_time(&self) -> Result<Timestamp, EquationError> {
        require(self.snapshot_time, "snapshot_time")
    }

    pub fn require_expiration_time(&self) -> Result<Timestamp, EquationError> {
        require(self.expiration_time, "expiration_time")
    }

    pub fn require_inflation_rate(&self) -> Result<u64, EquationError> {
        require(self.inflation_rate, "inflation_rate")
    }

    pub fn require_decay_rate(&self) -> Result<u64, EquationError> {
        require(self.decay_rate, "decay_rate")
    }

    /// The time unit, which must also be non-zero.
    pub fn require_time_unit(&self) -> Result<u64, EquationError> {
        match require(self.time_unit, "time_unit")? {
            0 => Err(EquationError::InvalidTimeUnit),
            unit => Ok(unit),
        }
    }

    pub fn require_slope(&self) -> Result<i64, EquationError> {
        require(self.slope, "slope")
    }

    /// The decay constant, which must also be finite.
    pub fn require_decay_constant(&self) -> Result<f64, EquationError> {
        let k = require(self.decay_constant, "decay_constant")?;
        if !k.is_finite() {
            return Err(EquationError::InvalidDecayConstant(k));
        }
        Ok(k)
    }

    /// Re-up boost; unset means no boost.
    pub fn reup_boost_or_zero(&self) -> u64 {
        self.reup_boost.unwrap_or(0)
    }
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T, EquationError> {
    value.ok_or(EquationError::MissingParameter(name))
}
