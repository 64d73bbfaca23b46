//! The funds port: the vault's view of the currency-transfer collaborator.
//!
//! The accounting engine never moves real value itself — it talks to a
//! [`FundsPort`]. Deposits credit the vault's held balance atomically with
//! the deposit call; settlement draws the payout back out. The port either
//! applies an operation fully or leaves the balance untouched.
//!
//! [`Treasury`] is the in-memory implementation: a held balance plus a
//! per-recipient record of everything paid out, so tests can assert on the
//! receiving side without a real transfer mechanism.

use std::collections::HashMap;

use crate::{AccountId, Result, VaultError};

/// The currency-transfer seam the ledger and settlement engine depend on.
pub trait FundsPort {
    /// Credit the vault's held balance (a deposit arriving).
    ///
    /// # Errors
    /// Returns [`VaultError::AmountOverflow`] if the held balance would
    /// overflow the amount type.
    fn credit(&mut self, amount: u128) -> Result<()>;

    /// Move `amount` from the vault's held balance to `to`.
    ///
    /// # Errors
    /// Returns [`VaultError::InsufficientReserve`] if the held balance is
    /// less than `amount`. The balance is unchanged on failure.
    fn transfer(&mut self, to: AccountId, amount: u128) -> Result<()>;

    /// The vault's current held balance.
    fn held(&self) -> u128;
}

/// In-memory treasury: the vault's held balance and its payout record.
#[derive(Debug, Clone, Default)]
pub struct Treasury {
    /// Smallest currency units currently held by the vault.
    held: u128,
    /// Cumulative amount transferred out, per recipient.
    payouts: HashMap<AccountId, u128>,
}

impl Treasury {
    /// An empty treasury holding nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A treasury pre-funded with an opening reserve. Interest is paid from
    /// funds already held, never minted — the reserve is where it comes from.
    #[must_use]
    pub fn with_reserve(opening_reserve: u128) -> Self {
        Self {
            held: opening_reserve,
            payouts: HashMap::new(),
        }
    }

    /// Cumulative amount this treasury has paid out to `recipient`.
    #[must_use]
    pub fn paid_to(&self, recipient: AccountId) -> u128 {
        self.payouts.get(&recipient).copied().unwrap_or(0)
    }
}

impl FundsPort for Treasury {
    fn credit(&mut self, amount: u128) -> Result<()> {
        self.held = self
            .held
            .checked_add(amount)
            .ok_or(VaultError::AmountOverflow)?;
        Ok(())
    }

    fn transfer(&mut self, to: AccountId, amount: u128) -> Result<()> {
        if self.held < amount {
            return Err(VaultError::InsufficientReserve {
                needed: amount,
                held: self.held,
            });
        }
        self.held -= amount;
        *self.payouts.entry(to).or_insert(0) += amount;
        Ok(())
    }

    fn held(&self) -> u128 {
        self.held
    }
}
