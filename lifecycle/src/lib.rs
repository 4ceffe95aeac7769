//! Account lifecycle for chrono tokens.
//!
//! Two independent concerns share this crate:
//! - The account state machine: `Initialized ⇄ Frozen`, either → `Revoked`
//!   (terminal), gated by the mint's freeze authority.
//! - Decay pausing: stopping accrual at an instant, resuming it, and re-up,
//!   which resumes with a boost and recovers value from the decay pool.

pub mod controller;
pub mod error;
pub mod pause;

pub use controller::{LifecycleController, LifecycleOutcome};
pub use error::LifecycleError;
pub use pause::ReUpOutcome;
