//! Configuration for constructing a TermStake vault.

use serde::{Deserialize, Serialize};

use crate::{AccountId, TierEntry};

/// Construction-time configuration for a staking vault.
///
/// The owner identity is fixed here and never transferable afterwards. The
/// default tiers {30: 700, 90: 1000, 180: 1200} are always seeded; entries
/// in `extra_tiers` are applied on top (and may overwrite a default rate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// The single privileged account permitted to mutate tiers and unlock
    /// dates.
    pub owner: AccountId,
    /// Smallest currency units pre-funding the treasury. Interest payouts
    /// draw on this — the vault never mints.
    pub opening_reserve: u128,
    /// Tiers applied after the unconditional defaults.
    pub extra_tiers: Vec<TierEntry>,
}

impl VaultConfig {
    /// Config with the given owner, no opening reserve, default tiers only.
    #[must_use]
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            opening_reserve: 0,
            extra_tiers: Vec::new(),
        }
    }

    /// Set the opening reserve.
    #[must_use]
    pub fn with_reserve(mut self, opening_reserve: u128) -> Self {
        self.opening_reserve = opening_reserve;
        self
    }

    /// Add a tier to apply after the defaults.
    #[must_use]
    pub fn with_tier(mut self, tier: TierEntry) -> Self {
        self.extra_tiers.push(tier);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let owner = AccountId::random();
        let cfg = VaultConfig::new(owner)
            .with_reserve(1_000_000)
            .with_tier(TierEntry::new(365, 2000));
        assert_eq!(cfg.owner, owner);
        assert_eq!(cfg.opening_reserve, 1_000_000);
        assert_eq!(cfg.extra_tiers, vec![TierEntry::new(365, 2000)]);
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = VaultConfig::new(AccountId::random()).with_reserve(42);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: VaultConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.owner, back.owner);
        assert_eq!(cfg.opening_reserve, back.opening_reserve);
        assert_eq!(cfg.extra_tiers, back.extra_tiers);
    }
}
