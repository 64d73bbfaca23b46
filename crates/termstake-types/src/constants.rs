//! System-wide constants for the TermStake staking ledger.

/// Basis-point denominator: 10,000 bps = 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Seconds in one day. Lock durations are expressed in whole days.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Lock durations (days) seeded into every registry at construction.
pub const DEFAULT_TIER_DURATIONS: [u64; 3] = [30, 90, 180];

/// Interest rates (basis points) for the seeded durations, index-aligned
/// with [`DEFAULT_TIER_DURATIONS`]: 7%, 10%, 12%.
pub const DEFAULT_TIER_RATES: [u32; 3] = [700, 1000, 1200];

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "TermStake";
