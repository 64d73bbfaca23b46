//! The staking vault: the transaction-call surface over all three planes.

use chrono::{DateTime, Utc};
use termstake_ledger::PositionLedger;
use termstake_tiers::TierRegistry;
use termstake_types::{
    AccountId, FundsPort, Position, PositionId, Result, SettlementReceipt, TierEntry, Treasury,
    VaultConfig,
};

use crate::engine::SettlementEngine;

/// One staking vault: tier registry, position ledger, treasury, and
/// settlement engine behind a single call surface.
///
/// Each public method is one atomic operation — it either commits all of
/// its state changes (including the funds movement) or returns an error
/// leaving the vault untouched. The owner identity is fixed at construction
/// and never transferable.
pub struct StakingVault {
    registry: TierRegistry,
    ledger: PositionLedger,
    treasury: Treasury,
    engine: SettlementEngine,
}

impl StakingVault {
    /// Build a vault from its construction-time configuration: the owner,
    /// an opening reserve that pre-funds interest payouts, and any extra
    /// tiers to apply on top of the unconditional defaults.
    #[must_use]
    pub fn new(config: &VaultConfig) -> Self {
        let mut registry = TierRegistry::new(config.owner);
        for tier in &config.extra_tiers {
            // The config is authored by the deploying owner.
            registry
                .upsert(config.owner, tier.duration_days, tier.rate_bps)
                .expect("owner may always upsert");
        }
        tracing::info!(
            owner = %config.owner,
            opening_reserve = config.opening_reserve,
            tiers = registry.durations().len(),
            "Vault constructed"
        );
        Self {
            registry,
            ledger: PositionLedger::new(config.owner),
            treasury: Treasury::with_reserve(config.opening_reserve),
            engine: SettlementEngine::new(),
        }
    }

    // -----------------------------------------------------------------
    // Tier Registry surface
    // -----------------------------------------------------------------

    /// Insert or overwrite a tier. Owner-only.
    pub fn upsert_tier(
        &mut self,
        caller: AccountId,
        duration_days: u64,
        rate_bps: u32,
    ) -> Result<()> {
        self.registry.upsert(caller, duration_days, rate_bps)
    }

    /// The rate for a duration, or `None` if it was never offered.
    #[must_use]
    pub fn rate_for(&self, duration_days: u64) -> Option<u32> {
        self.registry.rate_for(duration_days)
    }

    /// The full tier entry for a duration.
    #[must_use]
    pub fn tier(&self, duration_days: u64) -> Option<TierEntry> {
        self.registry.entry(duration_days)
    }

    /// Every duration ever offered, in insertion order.
    #[must_use]
    pub fn lock_durations(&self) -> &[u64] {
        self.registry.durations()
    }

    // -----------------------------------------------------------------
    // Position Ledger surface
    // -----------------------------------------------------------------

    /// Deposit `value` smallest currency units against a lock duration.
    /// The attached value becomes the position's principal and is credited
    /// to the vault's held balance atomically with the call.
    pub fn deposit(
        &mut self,
        caller: AccountId,
        value: u128,
        duration_days: u64,
        now: DateTime<Utc>,
    ) -> Result<PositionId> {
        self.ledger.deposit(
            &self.registry,
            &mut self.treasury,
            caller,
            value,
            duration_days,
            now,
        )
    }

    /// The snapshot for a position id, or `None` if never assigned.
    #[must_use]
    pub fn position(&self, id: PositionId) -> Option<&Position> {
        self.ledger.position(id)
    }

    /// Every position id ever created by `address`, in call order.
    #[must_use]
    pub fn position_ids_for(&self, address: AccountId) -> &[PositionId] {
        self.ledger.position_ids_for(address)
    }

    /// The running position count — also the next id to be assigned.
    #[must_use]
    pub fn position_count(&self) -> u64 {
        self.ledger.position_count()
    }

    /// Overwrite a position's unlock date, unvalidated. Owner-only.
    pub fn set_unlock_at(
        &mut self,
        caller: AccountId,
        id: PositionId,
        new_unlock_at: DateTime<Utc>,
    ) -> Result<()> {
        self.ledger.set_unlock_at(caller, id, new_unlock_at)
    }

    // -----------------------------------------------------------------
    // Settlement surface
    // -----------------------------------------------------------------

    /// Close a position at observed time `now`. Any caller may close any
    /// position; the payout goes to the caller.
    pub fn close(
        &mut self,
        caller: AccountId,
        id: PositionId,
        now: DateTime<Utc>,
    ) -> Result<SettlementReceipt> {
        self.engine
            .close(&mut self.ledger, &mut self.treasury, caller, id, now)
    }

    /// The settlement audit trail, in execution order.
    #[must_use]
    pub fn receipts(&self) -> &[SettlementReceipt] {
        self.engine.receipts()
    }

    // -----------------------------------------------------------------
    // Treasury surface
    // -----------------------------------------------------------------

    /// The vault's current held balance.
    #[must_use]
    pub fn reserve(&self) -> u128 {
        self.treasury.held()
    }

    /// Cumulative amount the vault has paid out to `recipient`.
    #[must_use]
    pub fn paid_to(&self, recipient: AccountId) -> u128 {
        self.treasury.paid_to(recipient)
    }

    /// The vault's owner.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.ledger.owner()
    }
}
