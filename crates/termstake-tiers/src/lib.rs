//! # termstake-tiers
//!
//! **Tier Registry**: maps a lock duration (whole days) to a basis-point
//! interest rate and enumerates every duration ever offered.
//!
//! The registry is the leaf component of the vault: the Position Ledger
//! consults it exactly once per deposit to snapshot the rate in force. Rates
//! are inserted or overwritten in place by the vault owner and never deleted,
//! so the duration list is append-only and duplicate-free by construction.

pub mod registry;

pub use registry::TierRegistry;
