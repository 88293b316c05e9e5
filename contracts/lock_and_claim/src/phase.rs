//! Phase gate over the timeline
//! `[-inf, start_time) -> [start_time, end_time) -> [end_time, +inf)`.

use crate::types::{LockConfig, Phase};
use lock_claim_errors::ContractError;
use soroban_sdk::Env;

/// Phase at timestamp `now`.
pub fn phase_at(now: u64, start_time: u64, end_time: u64) -> Phase {
    if now < start_time {
        Phase::Configuration
    } else if now < end_time {
        Phase::Lock
    } else {
        Phase::Claim
    }
}

/// Phase at the current ledger timestamp.
pub fn current_phase(e: &Env, cfg: &LockConfig) -> Phase {
    phase_at(e.ledger().timestamp(), cfg.start_time, cfg.end_time)
}

/// Fails with `err` unless the contract is currently in `expected`.
pub fn require_phase(
    e: &Env,
    cfg: &LockConfig,
    expected: Phase,
    err: ContractError,
) -> Result<(), ContractError> {
    if current_phase(e, cfg) != expected {
        return Err(err);
    }
    Ok(())
}
