//! Transfers between chrono token accounts.
//!
//! Both sides are settled at the same instant before any value moves, so the
//! snapshots that come out are consistent with each other. Inputs are
//! borrowed and never mutated; a failed transfer changes nothing.

pub mod coordinator;
pub mod error;

pub use coordinator::{TransferCoordinator, TransferOutcome};
pub use error::TransferError;
