//! The position ledger: deposit snapshots and the per-address index.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use termstake_tiers::TierRegistry;
use termstake_types::{
    AccountId, FundsPort, Position, PositionId, Result, VaultError, interest_on, lock_span,
};

/// Creates, stores, and indexes deposit positions.
///
/// Positions live in a dense table — `PositionId` doubles as the table
/// index — and are never removed. Closed positions stay queryable with
/// their final values. The per-address index is append-only and records
/// every position ever opened by an address, in call order.
pub struct PositionLedger {
    /// The privileged account permitted to override unlock dates.
    owner: AccountId,
    /// Dense position table; index = position id.
    positions: Vec<Position>,
    /// Every position id ever created per address, in call order.
    by_owner: HashMap<AccountId, Vec<PositionId>>,
}

impl PositionLedger {
    /// Create an empty ledger owned by `owner`.
    #[must_use]
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            positions: Vec::new(),
            by_owner: HashMap::new(),
        }
    }

    /// Record a deposit of `value` smallest currency units against a lock
    /// duration, at observed time `now`.
    ///
    /// 1. Look up the rate for `duration_days` — once, at call time
    /// 2. Compute the interest snapshot: `floor(value * rate / 10,000)`
    /// 3. Credit the vault's held balance through `funds`
    /// 4. Append the position and index it under the depositor
    ///
    /// All fallible steps run before any state changes, so a failed deposit
    /// leaves the ledger and the funds port untouched. `value = 0` is
    /// permitted and yields a zero-principal, zero-interest position.
    ///
    /// # Errors
    /// - [`VaultError::UnknownLockDuration`] if the duration has no tier
    /// - [`VaultError::LockDurationOutOfRange`] if the unlock timestamp is
    ///   not representable (tier durations are unbounded by design)
    /// - [`VaultError::AmountOverflow`] from interest computation or credit
    pub fn deposit<F: FundsPort>(
        &mut self,
        registry: &TierRegistry,
        funds: &mut F,
        depositor: AccountId,
        value: u128,
        duration_days: u64,
        now: DateTime<Utc>,
    ) -> Result<PositionId> {
        let rate_bps = registry
            .rate_for(duration_days)
            .ok_or(VaultError::UnknownLockDuration(duration_days))?;
        let interest_accrued = interest_on(value, rate_bps)?;
        let unlock_at = lock_span(duration_days)
            .and_then(|span| now.checked_add_signed(span))
            .ok_or(VaultError::LockDurationOutOfRange(duration_days))?;

        funds.credit(value)?;

        let id = PositionId(self.position_count());
        let position = Position {
            id,
            owner: depositor,
            created_at: now,
            unlock_at,
            rate_bps,
            principal: value,
            interest_accrued,
            is_open: true,
        };
        self.positions.push(position);
        self.by_owner.entry(depositor).or_default().push(id);

        tracing::info!(
            position = %id,
            depositor = %depositor,
            principal = value,
            rate_bps,
            duration_days,
            "Position opened"
        );
        Ok(id)
    }

    /// The full snapshot for an id, or `None` if the id was never assigned.
    #[must_use]
    pub fn position(&self, id: PositionId) -> Option<&Position> {
        self.positions.get(id.index()?)
    }

    /// Every position id ever created by `address`, in call order. Empty
    /// for an address with no history.
    #[must_use]
    pub fn position_ids_for(&self, address: AccountId) -> &[PositionId] {
        self.by_owner.get(&address).map_or(&[], Vec::as_slice)
    }

    /// Overwrite a position's unlock date. Owner-only.
    ///
    /// No validation is applied to `new_unlock_at` — moving the unlock date
    /// earlier, later, or before `created_at` is all permitted; backdating
    /// is how an operator force-unlocks a position. Principal, interest,
    /// creation time, and the open flag are untouched.
    ///
    /// # Errors
    /// - [`VaultError::Unauthorized`] for any non-owner caller
    /// - [`VaultError::PositionNotFound`] for a never-assigned id
    pub fn set_unlock_at(
        &mut self,
        caller: AccountId,
        id: PositionId,
        new_unlock_at: DateTime<Utc>,
    ) -> Result<()> {
        if caller != self.owner {
            tracing::warn!(
                caller = %caller,
                position = %id,
                "Unlock-date override blocked: caller is not the owner"
            );
            return Err(VaultError::Unauthorized { caller });
        }
        let position = id
            .index()
            .and_then(|idx| self.positions.get_mut(idx))
            .ok_or(VaultError::PositionNotFound(id))?;
        position.unlock_at = new_unlock_at;
        tracing::info!(position = %id, unlock_at = %new_unlock_at, "Unlock date overridden");
        Ok(())
    }

    /// Transition a position to closed. Terminal.
    ///
    /// # Errors
    /// - [`VaultError::PositionNotFound`] for a never-assigned id
    /// - [`VaultError::PositionAlreadyClosed`] if already closed
    pub fn mark_closed(&mut self, id: PositionId) -> Result<()> {
        id.index()
            .and_then(|idx| self.positions.get_mut(idx))
            .ok_or(VaultError::PositionNotFound(id))?
            .mark_closed()
    }

    /// The running position count — also the next id to be assigned.
    #[must_use]
    pub fn position_count(&self) -> u64 {
        self.positions.len() as u64
    }

    /// The ledger's owner.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }
}
