//! Error types for the TermStake staking ledger.
//!
//! All errors use the `TS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Tier registry errors
//! - 2xx: Position errors
//! - 3xx: Treasury / settlement errors
//! - 8xx: Authorization errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{AccountId, PositionId};

/// Central error enum for all TermStake operations.
#[derive(Debug, Error)]
pub enum VaultError {
    // =================================================================
    // Tier Registry Errors (1xx)
    // =================================================================
    /// The requested lock duration has no tier entry in the registry.
    #[error("TS_ERR_100: Unknown lock duration: {0} days")]
    UnknownLockDuration(u64),

    /// The unlock timestamp for a lock duration falls outside the
    /// representable time range. The registry enforces no bound on tier
    /// values, so a deposit against an extreme duration fails here.
    #[error("TS_ERR_101: Lock duration out of range: {0} days")]
    LockDurationOutOfRange(u64),

    // =================================================================
    // Position Errors (2xx)
    // =================================================================
    /// The requested position id has never been assigned.
    #[error("TS_ERR_200: Position not found: {0}")]
    PositionNotFound(PositionId),

    /// The position has already been closed (prevents double payout).
    #[error("TS_ERR_201: Position already closed: {0}")]
    PositionAlreadyClosed(PositionId),

    // =================================================================
    // Treasury / Settlement Errors (3xx)
    // =================================================================
    /// The treasury's held balance cannot cover the requested payout.
    #[error("TS_ERR_300: Insufficient reserve: need {needed}, held {held}")]
    InsufficientReserve { needed: u128, held: u128 },

    // =================================================================
    // Authorization Errors (8xx)
    // =================================================================
    /// A privileged operation was invoked by a non-owner account.
    #[error("TS_ERR_800: Unauthorized: caller {caller} is not the vault owner")]
    Unauthorized { caller: AccountId },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Fixed-point arithmetic overflowed the amount type.
    #[error("TS_ERR_900: Amount overflow during interest computation")]
    AmountOverflow,
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, VaultError>;
