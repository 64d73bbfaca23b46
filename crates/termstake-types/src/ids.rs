//! Identifiers used throughout TermStake.
//!
//! `AccountId` is a raw 20-byte address, matching the account model of the
//! hosting transaction environment. `PositionId` is dense and sequential —
//! the ledger assigns ids starting at zero and never reuses one.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// A depositor / caller identity: the raw 20-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct:{}", hex::encode(&self.0[..8]))
    }
}

/// Dummy accounts for testing. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl AccountId {
    /// Create a random account address for unit tests.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}

// ---------------------------------------------------------------------------
// PositionId
// ---------------------------------------------------------------------------

/// Dense, monotonically increasing, zero-based position identifier.
///
/// Assigned exactly once per successful deposit and never reused, so a
/// `PositionId` doubles as the position's index in the ledger's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PositionId(pub u64);

impl PositionId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The position's index in the dense ledger table, or `None` when the
    /// id does not fit in `usize` (a 32-bit host cannot address it, so it
    /// was never assigned there either).
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pos:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
