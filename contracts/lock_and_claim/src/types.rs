//! Configuration, participant state, phases and storage keys.

use soroban_sdk::{contracttype, Address};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Deployment configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockConfig {
    /// Only address allowed to change the bonus schedule.
    pub admin: Address,
    /// Token deposited during the lock window.
    pub lock_token: Address,
    /// Token paid out on claim.
    pub reward_token: Address,
    /// First second of the lock window (inclusive).
    pub start_time: u64,
    /// End of the lock window (exclusive); claims open here.
    pub end_time: u64,
    /// `10^decimals` of the lock token. Amount tiers are scaled by this.
    pub unit: i128,
}

/// Day thresholds of the day-tier bonus, in whole days since `end_time`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DayLevels {
    pub day_level_1: u32,
    pub day_level_2: u32,
}

// ─── Participant state ─────────────────────────────────────────────────────

/// Per-address lock record. Never removed; a claimed record stays as a receipt.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Participant {
    /// Total lock-token units deposited.
    pub locked_amount: i128,
    /// Flips to true once, on a successful claim.
    pub claimed: bool,
    /// Reward units paid out at settlement (0 until claimed).
    pub claimed_amount: i128,
}

// ─── Phases ────────────────────────────────────────────────────────────────

/// Time-derived phase of the contract. Phases only ever advance.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// `now < start_time`: schedule may change; no lock, no claim.
    Configuration,
    /// `start_time <= now < end_time`: locking allowed.
    Lock,
    /// `now >= end_time`: claiming allowed.
    Claim,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// LockConfig. Stored in `instance()`.
    Config,
    /// DayLevels. Stored in `instance()`.
    DayLevels,
    /// Sum of all locked amounts. Stored in `instance()`.
    TotalLocked,
    /// Sum of all rewards paid. Stored in `instance()`.
    TotalClaimed,
    /// Per-address Participant. Stored in `persistent()`.
    Participant(Address),
}
