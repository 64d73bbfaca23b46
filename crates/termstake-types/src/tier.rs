//! Interest tiers: a lock duration paired with a basis-point rate.
//!
//! Interest is fixed-point: `rate_bps` units of interest per 10,000 units of
//! principal, computed once at deposit time with integer floor division.
//! Fractional interest below one smallest currency unit is dropped, never
//! rounded up.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{Result, VaultError, constants};

/// A single tier: a lock duration (the unique key) and its interest rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierEntry {
    /// Lock duration in whole days.
    pub duration_days: u64,
    /// Interest rate in basis points (10,000 = 100%). Unbounded by design —
    /// any value, including zero, is a legitimate rate.
    pub rate_bps: u32,
}

impl TierEntry {
    #[must_use]
    pub fn new(duration_days: u64, rate_bps: u32) -> Self {
        Self {
            duration_days,
            rate_bps,
        }
    }

    /// The lock span as a chrono duration (`duration_days * 86,400` seconds),
    /// or `None` when the span is not representable.
    #[must_use]
    pub fn lock_span(&self) -> Option<Duration> {
        lock_span(self.duration_days)
    }
}

/// The lock span for a duration in whole days, or `None` when the span
/// falls outside the representable range. No bound is enforced on tier
/// durations, so callers computing an unlock date must handle `None`
/// rather than panic.
#[must_use]
pub fn lock_span(duration_days: u64) -> Option<Duration> {
    let days = i64::try_from(duration_days).ok()?;
    Duration::try_seconds(days.checked_mul(constants::SECONDS_PER_DAY)?)
}

/// Interest owed on `principal` at `rate_bps`: `principal * rate / 10,000`,
/// floor division on smallest currency units.
///
/// # Errors
/// Returns [`VaultError::AmountOverflow`] if `principal * rate_bps` exceeds
/// the amount type.
pub fn interest_on(principal: u128, rate_bps: u32) -> Result<u128> {
    principal
        .checked_mul(u128::from(rate_bps))
        .map(|scaled| scaled / constants::BPS_DENOMINATOR)
        .ok_or(VaultError::AmountOverflow)
}
