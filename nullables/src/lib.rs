//! Nullable infrastructure for deterministic testing.
//!
//! The core never reads a clock or a ledger itself; callers pass `now` and
//! the account records in. This crate provides stand-ins for both sides of
//! that boundary that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: drive the account model, transfers and lifecycle through these in tests.

pub mod clock;
pub mod ledger;

pub use clock::NullClock;
pub use ledger::NullLedger;
