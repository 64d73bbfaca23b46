//! Settlement receipts for the TermStake audit trail.
//!
//! Every closure produces a [`SettlementReceipt`] recording what was paid,
//! to whom, and whether the lock had elapsed. The digest binds the receipt's
//! fields so a stored trail can be independently re-verified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{AccountId, PositionId};

/// Immutable record of one position closure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementReceipt {
    /// The position that was closed.
    pub position_id: PositionId,
    /// The account the payout was transferred to (the closing caller).
    pub recipient: AccountId,
    /// Principal returned.
    pub principal: u128,
    /// Interest paid on top of the principal. Zero on an early close.
    pub interest_paid: u128,
    /// Total amount transferred: `principal + interest_paid`.
    pub payout: u128,
    /// Whether the lock had elapsed at closure time.
    pub matured: bool,
    /// Observed time of the closure call.
    pub closed_at: DateTime<Utc>,
    /// SHA-256 over the canonical encoding of the fields above.
    pub digest: [u8; 32],
}

impl SettlementReceipt {
    /// Build a receipt, computing its digest.
    #[must_use]
    pub fn new(
        position_id: PositionId,
        recipient: AccountId,
        principal: u128,
        interest_paid: u128,
        matured: bool,
        closed_at: DateTime<Utc>,
    ) -> Self {
        let mut receipt = Self {
            position_id,
            recipient,
            principal,
            interest_paid,
            payout: principal + interest_paid,
            matured,
            closed_at,
            digest: [0u8; 32],
        };
        receipt.digest = receipt.compute_digest();
        receipt
    }

    /// Canonical digest: SHA-256 over a fixed-layout encoding of every
    /// field except the digest itself.
    #[must_use]
    pub fn compute_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"termstake:receipt:v1:");
        hasher.update(self.position_id.0.to_le_bytes());
        hasher.update(self.recipient.0);
        hasher.update(self.principal.to_le_bytes());
        hasher.update(self.interest_paid.to_le_bytes());
        hasher.update(self.payout.to_le_bytes());
        hasher.update([u8::from(self.matured)]);
        hasher.update(self.closed_at.timestamp().to_le_bytes());
        hasher.finalize().into()
    }

    /// Whether the stored digest matches the receipt's fields.
    #[must_use]
    pub fn verify_digest(&self) -> bool {
        self.digest == self.compute_digest()
    }

    /// Short hex rendering of the digest for logs.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest[..8])
    }
}
