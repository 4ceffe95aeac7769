//! Chrono equations — the laws that move a balance through time.
//!
//! A chrono token balance is a deterministic function of a settled snapshot
//! and elapsed time, not a number that changes on its own:
//! `balance(now) = law(last_snapshot, params, now - snapshot_time)`
//!
//! This crate handles:
//! - The closed set of laws (`ChronoEquation`) and their stable tags
//! - The parameters each law reads (`EquationParams`)
//! - Pure balance evaluation (`compute_balance`)

pub mod engine;
pub mod error;
pub mod kind;
pub mod params;

pub use engine::compute_balance;
pub use error::EquationError;
pub use kind::ChronoEquation;
pub use params::EquationParams;
