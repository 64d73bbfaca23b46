//! # termstake-ledger
//!
//! **Position Ledger**: records deposits as immutable-after-creation
//! snapshots and exposes per-address stake history.
//!
//! ## Deposit flow
//!
//! ```text
//! caller → TierRegistry.rate_for() → interest_on() → FundsPort.credit()
//!        → Position snapshot appended → id indexed under the depositor
//! ```
//!
//! The rate is looked up **once**, at deposit time. Every later change to
//! the tier table leaves existing positions untouched — the snapshot is what
//! settlement pays against.

pub mod ledger;

pub use ledger::PositionLedger;
