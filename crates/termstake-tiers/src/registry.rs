//! The tier registry: recognized lock durations and their rates.

use std::collections::HashMap;

use termstake_types::{AccountId, Result, TierEntry, VaultError, constants};

/// Holds the set of recognized lock durations and their interest rates.
///
/// Seeded unconditionally at construction with the default tiers
/// {30: 700, 90: 1000, 180: 1200}. Only the stored owner may mutate the
/// table; lookups are open to anyone and return `None` for durations that
/// were never offered, so a zero rate is always an explicit zero.
pub struct TierRegistry {
    /// The privileged account permitted to upsert tiers.
    owner: AccountId,
    /// Rate (basis points) per duration key.
    rates: HashMap<u64, u32>,
    /// Every duration ever offered, in insertion order. Duplicate-free:
    /// `upsert` only appends when the duration key is new.
    durations: Vec<u64>,
}

impl TierRegistry {
    /// Create a registry owned by `owner`, seeded with the default tiers.
    #[must_use]
    pub fn new(owner: AccountId) -> Self {
        let mut registry = Self {
            owner,
            rates: HashMap::new(),
            durations: Vec::new(),
        };
        for (days, rate_bps) in constants::DEFAULT_TIER_DURATIONS
            .into_iter()
            .zip(constants::DEFAULT_TIER_RATES)
        {
            registry.insert(days, rate_bps);
        }
        registry
    }

    /// Insert or overwrite the rate for a duration. Owner-only.
    ///
    /// A new duration is appended to the enumerated list; an existing one
    /// has its rate overwritten in place without duplicating the list entry.
    /// No bound on the rate is enforced — zero and extreme values are the
    /// caller's responsibility.
    ///
    /// # Errors
    /// Returns [`VaultError::Unauthorized`] for any non-owner caller; the
    /// registry is unchanged.
    pub fn upsert(&mut self, caller: AccountId, duration_days: u64, rate_bps: u32) -> Result<()> {
        if caller != self.owner {
            tracing::warn!(
                caller = %caller,
                duration_days,
                "Tier upsert blocked: caller is not the owner"
            );
            return Err(VaultError::Unauthorized { caller });
        }
        self.insert(duration_days, rate_bps);
        tracing::info!(duration_days, rate_bps, "Tier upserted");
        Ok(())
    }

    /// The rate for a duration, or `None` if it was never offered.
    #[must_use]
    pub fn rate_for(&self, duration_days: u64) -> Option<u32> {
        self.rates.get(&duration_days).copied()
    }

    /// The full tier entry for a duration, or `None` if it was never offered.
    #[must_use]
    pub fn entry(&self, duration_days: u64) -> Option<TierEntry> {
        self.rate_for(duration_days)
            .map(|rate_bps| TierEntry::new(duration_days, rate_bps))
    }

    /// Every duration ever offered, in insertion order. The seeded defaults
    /// come first, followed by later additions.
    #[must_use]
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Whether a duration has a tier entry.
    #[must_use]
    pub fn contains(&self, duration_days: u64) -> bool {
        self.rates.contains_key(&duration_days)
    }

    /// The registry's owner.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    fn insert(&mut self, duration_days: u64, rate_bps: u32) {
        if self.rates.insert(duration_days, rate_bps).is_none() {
            self.durations.push(duration_days);
        }
    }
}
