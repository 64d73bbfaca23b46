//! # termstake-settlement
//!
//! **Settlement Engine**: finalizes positions, deciding and executing the
//! payout, and the [`StakingVault`] transaction-call facade.
//!
//! ## Closure flow
//!
//! 1. Validate the position exists and is still open (no double payout)
//! 2. Decide the payout from the stored snapshot and the observed time:
//!    principal + interest once the lock has elapsed, principal only before
//! 3. Transfer the payout to the closing caller through the funds port
//! 4. Flip the position closed — terminal — and append an audit receipt
//!
//! Any step failing leaves the ledger, the treasury, and the receipt trail
//! exactly as they were.

pub mod engine;
pub mod vault;

pub use engine::SettlementEngine;
pub use vault::StakingVault;
