//! Position closure and payout execution.

use chrono::{DateTime, Utc};
use termstake_ledger::PositionLedger;
use termstake_types::{
    AccountId, FundsPort, PositionId, Result, SettlementReceipt, VaultError,
};

/// Closes positions and keeps the append-only settlement audit trail.
///
/// Closure policy: any caller may close any position, and the payout is
/// transferred to the caller — not necessarily the position's depositor.
/// The ledger records who opened the position; the receipt records who was
/// paid.
pub struct SettlementEngine {
    /// Every settlement ever executed, in execution order.
    receipts: Vec<SettlementReceipt>,
}

impl SettlementEngine {
    /// Create an engine with an empty receipt trail.
    #[must_use]
    pub fn new() -> Self {
        Self {
            receipts: Vec::new(),
        }
    }

    /// Close a position at observed time `now`, paying the caller.
    ///
    /// Pays `principal + interest_accrued` when `now >= unlock_at`, and
    /// `principal` only while the position is still locked — forfeited
    /// interest is never partially accrued. The transfer runs before the
    /// position flips closed, so a failed transfer leaves the position open
    /// and payable later; a closed position can never pay twice.
    ///
    /// # Errors
    /// - [`VaultError::PositionNotFound`] for a never-assigned id
    /// - [`VaultError::PositionAlreadyClosed`] on a second closure attempt
    /// - [`VaultError::InsufficientReserve`] if the held balance cannot
    ///   cover the payout
    /// - [`VaultError::AmountOverflow`] if `principal + interest` overflows
    pub fn close<F: FundsPort>(
        &mut self,
        ledger: &mut PositionLedger,
        funds: &mut F,
        caller: AccountId,
        id: PositionId,
        now: DateTime<Utc>,
    ) -> Result<SettlementReceipt> {
        let position = ledger
            .position(id)
            .ok_or(VaultError::PositionNotFound(id))?;
        if !position.is_open {
            return Err(VaultError::PositionAlreadyClosed(id));
        }

        let matured = position.is_mature(now);
        let principal = position.principal;
        let payout = position.payout_at(now)?;
        let interest_paid = payout - principal;

        funds.transfer(caller, payout)?;
        ledger.mark_closed(id)?;

        let receipt = SettlementReceipt::new(id, caller, principal, interest_paid, matured, now);
        tracing::info!(
            position = %id,
            recipient = %caller,
            payout,
            interest_paid,
            matured,
            digest = receipt.digest_hex(),
            "Position settled"
        );
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }

    /// The full settlement trail, in execution order.
    #[must_use]
    pub fn receipts(&self) -> &[SettlementReceipt] {
        &self.receipts
    }

    /// The receipt for a position, if it has been settled.
    #[must_use]
    pub fn receipt_for(&self, id: PositionId) -> Option<&SettlementReceipt> {
        self.receipts.iter().find(|r| r.position_id == id)
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}
