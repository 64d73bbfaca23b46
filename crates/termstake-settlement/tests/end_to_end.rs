//! End-to-end integration tests across all three planes.
//!
//! These tests exercise the full vault lifecycle through the
//! `StakingVault` call surface: seeding, deposits, per-address indexing,
//! tier modification, unlock-date overrides, and settlement — including the
//! force-unlock flow where the owner backdates a position before closure.

use chrono::{Duration, Utc};
use termstake_settlement::StakingVault;
use termstake_types::{AccountId, PositionId, TierEntry, VaultConfig, VaultError};

/// One ether's worth of smallest units, as the original deployments used.
const ETHER: u128 = 1_000_000_000_000_000_000;

fn deploy() -> (StakingVault, AccountId) {
    let owner = AccountId::random();
    let vault = StakingVault::new(&VaultConfig::new(owner).with_reserve(10 * ETHER));
    (vault, owner)
}

// =============================================================================
// Test: construction seeds the owner, tiers, and reserve
// =============================================================================
#[test]
fn e2e_deploy_seeds_tiers_and_reserve() {
    let (vault, owner) = deploy();

    assert_eq!(vault.owner(), owner);
    assert_eq!(vault.lock_durations(), &[30, 90, 180]);
    assert_eq!(vault.rate_for(30), Some(700));
    assert_eq!(vault.rate_for(90), Some(1000));
    assert_eq!(vault.rate_for(180), Some(1200));
    assert_eq!(vault.reserve(), 10 * ETHER);
    assert_eq!(vault.position_count(), 0);
}

// =============================================================================
// Test: deposit snapshots a position and credits the vault balance
// =============================================================================
#[test]
fn e2e_deposit_adds_position_and_value() {
    let (mut vault, _) = deploy();
    let alice = AccountId::random();
    let now = Utc::now();

    assert!(vault.position(PositionId(0)).is_none());

    let id = vault.deposit(alice, ETHER, 90, now).unwrap();
    assert_eq!(id, PositionId(0));
    assert_eq!(vault.position_count(), 1);
    assert_eq!(vault.reserve(), 11 * ETHER);

    let pos = vault.position(id).unwrap();
    assert_eq!(pos.id, PositionId(0));
    assert_eq!(pos.owner, alice);
    assert_eq!(pos.created_at, now);
    assert_eq!(pos.unlock_at, now + Duration::seconds(86_400 * 90));
    assert_eq!(pos.rate_bps, 1000);
    assert_eq!(pos.principal, ETHER);
    assert_eq!(pos.interest_accrued, ETHER * 1000 / 10_000);
    assert!(pos.is_open);
}

// =============================================================================
// Test: per-address index records every deposit in call order
// =============================================================================
#[test]
fn e2e_position_ids_indexed_by_address() {
    let (mut vault, _) = deploy();
    let alice = AccountId::random();
    let bob = AccountId::random();
    let now = Utc::now();
    let half = ETHER / 2;

    vault.deposit(alice, half, 30, now).unwrap();
    vault.deposit(alice, half, 30, now).unwrap();
    vault.deposit(bob, half, 90, now).unwrap();

    assert_eq!(
        vault.position_ids_for(alice),
        &[PositionId(0), PositionId(1)]
    );
    assert_eq!(vault.position_ids_for(bob), &[PositionId(2)]);
}

// =============================================================================
// Test: tier modification — owner appends and overwrites, non-owner reverts
// =============================================================================
#[test]
fn e2e_modify_tiers() {
    let (mut vault, owner) = deploy();

    // New duration: appended as a fourth entry.
    vault.upsert_tier(owner, 100, 999).unwrap();
    assert_eq!(vault.rate_for(100), Some(999));
    assert_eq!(vault.lock_durations(), &[30, 90, 180, 100]);

    // Existing duration: rate overwritten, no duplicate entry.
    vault.upsert_tier(owner, 30, 150).unwrap();
    assert_eq!(vault.rate_for(30), Some(150));
    assert_eq!(vault.lock_durations(), &[30, 90, 180, 100]);

    // Non-owner: rejected, registry unchanged.
    let stranger = AccountId::random();
    let err = vault.upsert_tier(stranger, 100, 1).unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized { caller } if caller == stranger));
    assert_eq!(vault.rate_for(100), Some(999));
}

// =============================================================================
// Test: unlock-date override — owner only, unlock date only
// =============================================================================
#[test]
fn e2e_change_unlock_date() {
    let (mut vault, owner) = deploy();
    let bob = AccountId::random();
    let now = Utc::now();

    let id = vault.deposit(bob, 8 * ETHER, 90, now).unwrap();
    let old = vault.position(id).unwrap().clone();

    let new_unlock = old.unlock_at - Duration::seconds(86_400 * 500);
    vault.set_unlock_at(owner, id, new_unlock).unwrap();

    let updated = vault.position(id).unwrap();
    assert_eq!(updated.unlock_at, new_unlock);
    assert_eq!(updated.principal, old.principal);
    assert_eq!(updated.interest_accrued, old.interest_accrued);
    assert_eq!(updated.created_at, old.created_at);
    assert!(updated.is_open);

    // The depositor themselves cannot move their own unlock date.
    let err = vault.set_unlock_at(bob, id, now).unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized { .. }));
    assert_eq!(vault.position(id).unwrap().unlock_at, new_unlock);
}

// =============================================================================
// Test: close after the unlock date pays principal and interest
// =============================================================================
#[test]
fn e2e_close_after_unlock_pays_principal_and_interest() {
    let (mut vault, owner) = deploy();
    let bob = AccountId::random();
    let now = Utc::now();

    let id = vault.deposit(bob, 8 * ETHER, 90, now).unwrap();

    // Force-unlock: backdate the unlock date into the past.
    vault
        .set_unlock_at(owner, id, now - Duration::seconds(86_400 * 100))
        .unwrap();

    let pos = vault.position(id).unwrap().clone();
    let receipt = vault.close(bob, id, now).unwrap();

    assert_eq!(receipt.payout, pos.principal + pos.interest_accrued);
    assert!(receipt.matured);
    assert_eq!(vault.paid_to(bob), pos.principal + pos.interest_accrued);
    assert!(!vault.position(id).unwrap().is_open);
    // Closed positions retain their final values.
    assert_eq!(vault.position(id).unwrap().principal, 8 * ETHER);
}

// =============================================================================
// Test: close before the unlock date pays only the principal
// =============================================================================
#[test]
fn e2e_close_before_unlock_pays_principal_only() {
    let (mut vault, _) = deploy();
    let bob = AccountId::random();
    let now = Utc::now();

    let id = vault.deposit(bob, 5 * ETHER, 90, now).unwrap();
    let receipt = vault.close(bob, id, now).unwrap();

    assert_eq!(receipt.payout, 5 * ETHER);
    assert_eq!(receipt.interest_paid, 0);
    assert!(!receipt.matured);
    assert_eq!(vault.paid_to(bob), 5 * ETHER);
}

// =============================================================================
// Test: worked example — 90 days at 1000 bps, exact timing and amounts
// =============================================================================
#[test]
fn e2e_worked_example_90_days() {
    let (mut vault, _) = deploy();
    let alice = AccountId::random();
    let t = Utc::now();

    // 10,000 smallest units at 1000 bps yields exactly 1,000 interest.
    let id = vault.deposit(alice, 10_000, 90, t).unwrap();
    let pos = vault.position(id).unwrap().clone();
    assert_eq!(pos.unlock_at, t + Duration::seconds(7_776_000));
    assert_eq!(pos.interest_accrued, 1_000);

    // Closing exactly at the unlock instant pays principal + interest.
    let receipt = vault.close(alice, id, pos.unlock_at).unwrap();
    assert_eq!(receipt.payout, 11_000);

    // A second deposit closed at its creation instant pays principal only.
    let id2 = vault.deposit(alice, 10_000, 90, t).unwrap();
    let receipt2 = vault.close(alice, id2, t).unwrap();
    assert_eq!(receipt2.payout, 10_000);
}

// =============================================================================
// Test: sub-unit interest floors to zero
// =============================================================================
#[test]
fn e2e_fractional_interest_floors_to_zero() {
    let (mut vault, owner) = deploy();
    let alice = AccountId::random();
    let now = Utc::now();

    // 1 unit at 1000 bps is 0.1 units of interest — dropped, never rounded up.
    let id = vault.deposit(alice, 1, 90, now).unwrap();
    assert_eq!(vault.position(id).unwrap().interest_accrued, 0);

    vault.set_unlock_at(owner, id, now).unwrap();
    let receipt = vault.close(alice, id, now).unwrap();
    assert!(receipt.matured);
    assert_eq!(receipt.payout, 1);
}

// =============================================================================
// Test: settlement is idempotent — one payout per position, ever
// =============================================================================
#[test]
fn e2e_double_close_never_double_pays() {
    let (mut vault, _) = deploy();
    let alice = AccountId::random();
    let now = Utc::now();

    let id = vault.deposit(alice, 2 * ETHER, 30, now).unwrap();
    vault.close(alice, id, now).unwrap();
    let reserve_after = vault.reserve();

    let err = vault.close(alice, id, now).unwrap_err();
    assert!(matches!(err, VaultError::PositionAlreadyClosed(_)));
    assert_eq!(vault.reserve(), reserve_after);
    assert_eq!(vault.paid_to(alice), 2 * ETHER);
    assert_eq!(vault.receipts().len(), 1);
}

// =============================================================================
// Test: deposit against a duration that was never offered
// =============================================================================
#[test]
fn e2e_deposit_unknown_duration_reverts() {
    let (mut vault, _) = deploy();
    let alice = AccountId::random();

    let err = vault.deposit(alice, ETHER, 45, Utc::now()).unwrap_err();
    assert!(matches!(err, VaultError::UnknownLockDuration(45)));
    assert_eq!(vault.position_count(), 0);
    assert_eq!(vault.reserve(), 10 * ETHER);
}

// =============================================================================
// Test: rate changes never reprice existing positions
// =============================================================================
#[test]
fn e2e_rate_change_does_not_touch_open_positions() {
    let (mut vault, owner) = deploy();
    let alice = AccountId::random();
    let now = Utc::now();

    let id = vault.deposit(alice, 10_000, 30, now).unwrap();
    vault.upsert_tier(owner, 30, 9_999).unwrap();

    let pos = vault.position(id).unwrap();
    assert_eq!(pos.rate_bps, 700);
    assert_eq!(pos.interest_accrued, 700);

    // A new deposit picks up the new rate.
    let id2 = vault.deposit(alice, 10_000, 30, now).unwrap();
    assert_eq!(vault.position(id2).unwrap().interest_accrued, 9_999);
}

// =============================================================================
// Test: full lifecycle with an extra tier configured at construction
// =============================================================================
#[test]
fn e2e_extra_tier_lifecycle() {
    let owner = AccountId::random();
    let mut vault = StakingVault::new(
        &VaultConfig::new(owner)
            .with_reserve(ETHER)
            .with_tier(TierEntry::new(365, 2000)),
    );
    let alice = AccountId::random();
    let now = Utc::now();

    let id = vault.deposit(alice, 10_000, 365, now).unwrap();
    let pos = vault.position(id).unwrap().clone();
    assert_eq!(pos.interest_accrued, 2_000);
    assert_eq!(pos.unlock_at, now + Duration::days(365));

    let receipt = vault.close(alice, id, pos.unlock_at + Duration::days(1)).unwrap();
    assert_eq!(receipt.payout, 12_000);
    assert!(receipt.verify_digest());
}
