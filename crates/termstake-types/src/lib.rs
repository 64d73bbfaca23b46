//! # termstake-types
//!
//! Shared types, errors, and configuration for the **TermStake** fixed-term
//! staking ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`PositionId`]
//! - **Tier model**: [`TierEntry`], [`interest_on`], [`lock_span`]
//! - **Position model**: [`Position`]
//! - **Funds port**: [`FundsPort`], [`Treasury`]
//! - **Receipt model**: [`SettlementReceipt`]
//! - **Configuration**: [`VaultConfig`]
//! - **Errors**: [`VaultError`] with `TS_ERR_` prefix codes
//! - **Constants**: basis-point denominator, seeded tiers, time units

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod position;
pub mod receipt;
pub mod tier;
pub mod treasury;

// Re-export all primary types at crate root for ergonomic imports:
//   use termstake_types::{Position, TierEntry, Treasury, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use position::*;
pub use receipt::*;
pub use tier::*;
pub use treasury::*;

// Constants are accessed via `termstake_types::constants::FOO`
// (not re-exported to avoid name collisions).
