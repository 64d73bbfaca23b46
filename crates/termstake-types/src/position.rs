//! # Position — one depositor's stake snapshot
//!
//! A `Position` is immutable after creation except for two fields:
//!
//! - `unlock_at`, which the vault owner may overwrite at will (including
//!   into the past, to force-unlock a stake);
//! - `is_open`, which transitions `true → false` exactly once, on closure.
//!
//! The interest amount is snapshotted at deposit time from the tier rate in
//! force at that moment. Later rate changes never touch existing positions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, PositionId, Result, VaultError};

/// One fixed-term stake: amount, rate snapshot, timing, lifecycle flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    /// Dense sequential identifier, assigned at deposit.
    pub id: PositionId,
    /// The depositing account.
    pub owner: AccountId,
    /// Observed time of the deposit call.
    pub created_at: DateTime<Utc>,
    /// When the lock elapses: `created_at + duration_days * 86,400s` at
    /// creation; the vault owner may overwrite this afterwards.
    pub unlock_at: DateTime<Utc>,
    /// Interest rate snapshot (basis points) taken at deposit time.
    pub rate_bps: u32,
    /// Staked amount in smallest currency units.
    pub principal: u128,
    /// Interest computed once at creation: `floor(principal * rate / 10,000)`.
    pub interest_accrued: u128,
    /// `true` until the position is closed. Closure is terminal.
    pub is_open: bool,
}

impl Position {
    /// Whether the lock has elapsed at the observed time.
    #[must_use]
    pub fn is_mature(&self, now: DateTime<Utc>) -> bool {
        now >= self.unlock_at
    }

    /// Payout owed if the position were closed at `now`: principal plus the
    /// snapshotted interest once mature, principal only (interest forfeited,
    /// never partial) while still locked.
    ///
    /// # Errors
    /// Returns [`VaultError::AmountOverflow`] if `principal + interest`
    /// exceeds the amount type.
    pub fn payout_at(&self, now: DateTime<Utc>) -> Result<u128> {
        if self.is_mature(now) {
            self.principal
                .checked_add(self.interest_accrued)
                .ok_or(VaultError::AmountOverflow)
        } else {
            Ok(self.principal)
        }
    }

    /// Transition to closed. Terminal — no reopening.
    ///
    /// # Errors
    /// Returns [`VaultError::PositionAlreadyClosed`] if already closed.
    pub fn mark_closed(&mut self) -> Result<()> {
        if !self.is_open {
            return Err(VaultError::PositionAlreadyClosed(self.id));
        }
        self.is_open = false;
        Ok(())
    }
}
