//! Lock-and-Claim Contract
//!
//! Participants lock a "lock token" during a fixed window and, once the window
//! closes, claim a "reward token" payout inflated by a bonus. The bonus grows
//! with the size of the deposit and with the number of whole days the
//! participant waits after the window closes before claiming.
//!
//! ## Timeline
//!
//! | Phase         | Range                          | Allowed                  |
//! |---------------|--------------------------------|--------------------------|
//! | Configuration | `now < start_time`             | `set_bonus_schedule`     |
//! | Lock          | `start_time <= now < end_time` | `lock`                   |
//! | Claim         | `now >= end_time`              | `claim`                  |
//!
//! ## Storage Layout
//!
//! | Key                        | Tier           |
//! |----------------------------|----------------|
//! | `DataKey::Config`          | `instance()`   |
//! | `DataKey::DayLevels`       | `instance()`   |
//! | `DataKey::TotalLocked`     | `instance()`   |
//! | `DataKey::TotalClaimed`    | `instance()`   |
//! | `DataKey::Participant(a)`  | `persistent()` |
//!
//! ## Key design decisions
//!
//! - **Checks-Effects-Interactions**: a claim is marked settled *before* the
//!   reward transfer.
//! - **Hard-fail on an underfunded pool**: a claim never pays less than the
//!   computed amount.
//! - **Phase before identity**: a late `set_bonus_schedule` reports the timing
//!   error whoever calls it.

#![no_std]

mod access_control;
pub mod bonus;
mod events;
mod math;
mod phase;
mod token_integration;
pub mod types;

pub use lock_claim_errors::{ContractError, ErrorCategory, ErrorExt};
pub use types::{DayLevels, LockConfig, Participant, Phase};

use types::DataKey;

use soroban_sdk::{contract, contractimpl, log, Address, Env};


#[cfg(test)]
mod test_math;

// ─── TTL constants ─────────────────────────────────────────────────────────

/// Minimum ledger TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_config(e: &Env) -> Result<LockConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

fn load_day_levels(e: &Env) -> DayLevels {
    e.storage()
        .instance()
        .get(&DataKey::DayLevels)
        .unwrap_or_else(bonus::default_day_levels)
}

fn load_total(e: &Env, key: &DataKey) -> i128 {
    e.storage().instance().get(key).unwrap_or(0)
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read a participant record and bump its TTL, if one exists.
fn load_participant(e: &Env, account: &Address) -> Option<Participant> {
    let key = DataKey::Participant(account.clone());
    let storage = e.storage().persistent();
    let participant: Participant = storage.get(&key)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(participant)
}

fn save_participant(e: &Env, account: &Address, participant: &Participant) {
    let key = DataKey::Participant(account.clone());
    e.storage().persistent().set(&key, participant);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Bonus percentage and reward for `participant` at the current ledger time.
/// Both are 0 before `end_time` and once the participant has claimed.
fn claimable_for(
    e: &Env,
    cfg: &LockConfig,
    participant: &Participant,
) -> Result<(u32, i128), ContractError> {
    if participant.claimed || phase::current_phase(e, cfg) != Phase::Claim {
        return Ok((0, 0));
    }
    let levels = load_day_levels(e);
    let pct = bonus::total_bonus_pct(
        participant.locked_amount,
        cfg.unit,
        e.ledger().timestamp(),
        cfg.end_time,
        &levels,
    )?;
    let amount = bonus::claimable_amount(participant.locked_amount, pct)?;
    Ok((pct, amount))
}

fn claimable_for_account(
    e: &Env,
    cfg: &LockConfig,
    account: &Address,
) -> Result<(u32, i128), ContractError> {
    let participant: Option<Participant> = e
        .storage()
        .persistent()
        .get(&DataKey::Participant(account.clone()));
    match participant {
        Some(p) => claimable_for(e, cfg, &p),
        None => Ok((0, 0)),
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct LockAndClaim;

#[contractimpl]
impl LockAndClaim {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// @param admin        Address allowed to change the bonus schedule
    /// @param lock_token   Token deposited during the lock window
    /// @param reward_token Token paid out on claim
    /// @param start_time   First second of the lock window
    /// @param end_time     First second of the claim phase
    ///
    /// Reads the lock token's decimals once; amount tiers are whole tokens.
    /// The day schedule starts at its defaults (10 / 20 days).
    pub fn initialize(
        e: Env,
        admin: Address,
        lock_token: Address,
        reward_token: Address,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        if start_time >= end_time {
            return Err(ContractError::InvalidLockWindow);
        }
        if lock_token == reward_token {
            return Err(ContractError::SameLockAndRewardToken);
        }

        let unit = math::pow10(token_integration::decimals(&e, &lock_token))?;
        let cfg = LockConfig {
            admin: admin.clone(),
            lock_token,
            reward_token,
            start_time,
            end_time,
            unit,
        };
        e.storage().instance().set(&DataKey::Config, &cfg);
        e.storage()
            .instance()
            .set(&DataKey::DayLevels, &bonus::default_day_levels());
        e.storage().instance().set(&DataKey::TotalLocked, &0_i128);
        e.storage().instance().set(&DataKey::TotalClaimed, &0_i128);
        bump_instance(&e);

        events::emit_initialized(&e, &admin, start_time, end_time);
        Ok(())
    }

    /// Replace the day thresholds of the day-tier bonus.
    ///
    /// Only before `start_time`, only by the admin. The phase is checked
    /// first, so after `start_time` every caller gets `ScheduleFrozen`.
    pub fn set_bonus_schedule(
        e: Env,
        admin: Address,
        day_level_1: u32,
        day_level_2: u32,
    ) -> Result<(), ContractError> {
        let cfg = load_config(&e)?;
        phase::require_phase(
            &e,
            &cfg,
            Phase::Configuration,
            ContractError::ScheduleFrozen,
        )?;
        access_control::require_admin(&cfg, &admin)?;
        if day_level_1 > day_level_2 {
            return Err(ContractError::InvalidDayLevels);
        }

        let levels = DayLevels {
            day_level_1,
            day_level_2,
        };
        e.storage().instance().set(&DataKey::DayLevels, &levels);
        bump_instance(&e);

        events::emit_day_level_changed(&e, day_level_1, day_level_2);
        Ok(())
    }

    // ── Lock / claim ───────────────────────────────────────────────────────

    /// Lock `amount` lock tokens from `owner`.
    ///
    /// Requirements:
    /// - lock phase
    /// - `amount` > 0
    /// - `owner` has approved the contract to spend `amount`
    ///
    /// Repeated locks accumulate. Returns the updated record.
    pub fn lock(e: Env, owner: Address, amount: i128) -> Result<Participant, ContractError> {
        owner.require_auth();
        let cfg = load_config(&e)?;
        phase::require_phase(&e, &cfg, Phase::Lock, ContractError::NotLockPhase)?;
        if amount <= 0 {
            return Err(ContractError::AmountMustBePositive);
        }

        let mut participant = load_participant(&e, &owner).unwrap_or_default();
        participant.locked_amount = math::add_i128(participant.locked_amount, amount)?;
        let total = math::add_i128(load_total(&e, &DataKey::TotalLocked), amount)?;

        token_integration::transfer_into_contract(&e, &cfg, &owner, amount);

        save_participant(&e, &owner, &participant);
        e.storage().instance().set(&DataKey::TotalLocked, &total);
        bump_instance(&e);

        events::emit_locked(&e, &owner, amount, participant.locked_amount);
        log!(&e, "lock", owner, amount, participant.locked_amount);
        Ok(participant)
    }

    /// Settle the caller's reward. One-shot: a second call always fails
    /// with `NothingToClaim`, the same error as never having locked.
    ///
    /// Fails with `RewardPoolUnderfunded` if the contract holds fewer reward
    /// tokens than owed; the claim is never truncated.
    pub fn claim(e: Env, claimant: Address) -> Result<i128, ContractError> {
        claimant.require_auth();
        let cfg = load_config(&e)?;
        phase::require_phase(&e, &cfg, Phase::Claim, ContractError::NotClaimPhase)?;

        let mut participant =
            load_participant(&e, &claimant).ok_or(ContractError::NothingToClaim)?;
        let (pct, amount) = claimable_for(&e, &cfg, &participant)?;
        if amount == 0 {
            return Err(ContractError::NothingToClaim);
        }
        if token_integration::reward_balance(&e, &cfg) < amount {
            return Err(ContractError::RewardPoolUnderfunded);
        }

        // CEI: settle before transfer.
        participant.claimed = true;
        participant.claimed_amount = amount;
        save_participant(&e, &claimant, &participant);
        let total = math::add_i128(load_total(&e, &DataKey::TotalClaimed), amount)?;
        e.storage().instance().set(&DataKey::TotalClaimed, &total);
        bump_instance(&e);

        token_integration::pay_reward(&e, &cfg, &claimant, amount);

        events::emit_claimed(&e, &claimant, amount);
        log!(&e, "claim", claimant, amount, pct);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Reward `account` would receive if it claimed now.
    /// 0 before `end_time`, for unknown accounts, and after a claim.
    ///
    /// This is the full entitlement and is not capped at the contract's
    /// reward balance. An underfunded pool is a funding error surfaced by
    /// `claim` as `RewardPoolUnderfunded`, never as a smaller payout.
    pub fn get_total_claimable_token(e: Env, account: Address) -> Result<i128, ContractError> {
        let cfg = load_config(&e)?;
        let (_, amount) = claimable_for_account(&e, &cfg, &account)?;
        Ok(amount)
    }

    /// Total bonus percentage (amount tier + day tier) `account` would get
    /// if it claimed now. 0 whenever the claimable amount is 0.
    pub fn get_bonus_percent(e: Env, account: Address) -> Result<u32, ContractError> {
        let cfg = load_config(&e)?;
        let (pct, amount) = claimable_for_account(&e, &cfg, &account)?;
        Ok(if amount == 0 { 0 } else { pct })
    }

    /// Lock record for `account`, if it ever locked.
    pub fn get_participant(e: Env, account: Address) -> Option<Participant> {
        e.storage()
            .persistent()
            .get(&DataKey::Participant(account))
    }

    /// Lock-token units locked by `account` (0 if none).
    pub fn get_locked_amount(e: Env, account: Address) -> i128 {
        Self::get_participant(e, account)
            .map(|p| p.locked_amount)
            .unwrap_or(0)
    }

    pub fn get_config(e: Env) -> Result<LockConfig, ContractError> {
        load_config(&e)
    }

    pub fn get_day_levels(e: Env) -> Result<DayLevels, ContractError> {
        load_config(&e)?;
        Ok(load_day_levels(&e))
    }

    /// Phase at the current ledger timestamp.
    pub fn get_phase(e: Env) -> Result<Phase, ContractError> {
        let cfg = load_config(&e)?;
        Ok(phase::current_phase(&e, &cfg))
    }

    pub fn get_total_locked(e: Env) -> i128 {
        load_total(&e, &DataKey::TotalLocked)
    }

    pub fn get_total_claimed(e: Env) -> i128 {
        load_total(&e, &DataKey::TotalClaimed)
    }

    /// Reward tokens currently held by the contract.
    pub fn get_reward_balance(e: Env) -> Result<i128, ContractError> {
        let cfg = load_config(&e)?;
        Ok(token_integration::reward_balance(&e, &cfg))
    }
}
