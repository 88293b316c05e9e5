//! Bonus schedule: amount tiers and day tiers.
//!
//! Both schedules are ordered breakpoint tables `(threshold, pct)` sorted by
//! descending threshold. A lookup returns the percentage of the first
//! breakpoint the value reaches, or 0 below the lowest one. Adding a tier
//! means adding a row, not a branch.
//!
//! | Amount locked (whole tokens) | Amount bonus |
//! |------------------------------|--------------|
//! | `>= 2000`                    | 75 %         |
//! | `>= 500`                     | 50 %         |
//! | below                        | 0 %          |
//!
//! | Days since `end_time`        | Day bonus    |
//! |------------------------------|--------------|
//! | `>= day_level_2`             | 30 %         |
//! | `>= day_level_1`             | 20 %         |
//! | below                        | 0 %          |

use crate::math;
use crate::types::DayLevels;
use lock_claim_errors::ContractError;

/// Percentages are expressed over this denominator.
pub const PERCENT_DENOMINATOR: i128 = 100;

/// One day in seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Default first day threshold.
pub const DEFAULT_DAY_LEVEL_1: u32 = 10;
/// Default second day threshold.
pub const DEFAULT_DAY_LEVEL_2: u32 = 20;

/// Bonus once `day_level_1` days have elapsed.
pub const DAY_LEVEL_1_BONUS_PCT: u32 = 20;
/// Bonus once `day_level_2` days have elapsed.
pub const DAY_LEVEL_2_BONUS_PCT: u32 = 30;

/// Amount tiers in whole lock tokens, descending.
pub const AMOUNT_TIERS: [(i128, u32); 2] = [(2_000, 75), (500, 50)];

/// Default schedule applied at initialization.
pub fn default_day_levels() -> DayLevels {
    DayLevels {
        day_level_1: DEFAULT_DAY_LEVEL_1,
        day_level_2: DEFAULT_DAY_LEVEL_2,
    }
}

/// Descending scan over a breakpoint table.
fn lookup<T: PartialOrd + Copy>(tiers: &[(T, u32)], value: T) -> u32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, pct)| *pct)
        .unwrap_or(0)
}

/// Day-tier table for the given schedule, descending.
pub fn day_tiers(levels: &DayLevels) -> [(u64, u32); 2] {
    [
        (levels.day_level_2 as u64, DAY_LEVEL_2_BONUS_PCT),
        (levels.day_level_1 as u64, DAY_LEVEL_1_BONUS_PCT),
    ]
}

/// Whole days elapsed since `end_time`, floored. 0 before `end_time`.
pub fn days_elapsed(now: u64, end_time: u64) -> u64 {
    now.saturating_sub(end_time) / SECONDS_PER_DAY
}

/// Amount-tier bonus for `locked` raw units, where `unit` is one whole token.
pub fn amount_bonus_pct(locked: i128, unit: i128) -> Result<u32, ContractError> {
    let mut scaled = [(0_i128, 0_u32); AMOUNT_TIERS.len()];
    for (slot, (whole, pct)) in scaled.iter_mut().zip(AMOUNT_TIERS.iter()) {
        *slot = (math::mul_i128(*whole, unit)?, *pct);
    }
    Ok(lookup(&scaled, locked))
}

/// Day-tier bonus after `days` whole days.
pub fn day_bonus_pct(days: u64, levels: &DayLevels) -> u32 {
    lookup(&day_tiers(levels), days)
}

/// Combined bonus percentage for a claim made at `now`.
pub fn total_bonus_pct(
    locked: i128,
    unit: i128,
    now: u64,
    end_time: u64,
    levels: &DayLevels,
) -> Result<u32, ContractError> {
    let amount_pct = amount_bonus_pct(locked, unit)?;
    let day_pct = day_bonus_pct(days_elapsed(now, end_time), levels);
    Ok(amount_pct + day_pct)
}

/// `locked * (100 + pct) / 100`, truncating.
pub fn claimable_amount(locked: i128, pct: u32) -> Result<i128, ContractError> {
    math::apply_bonus_pct(locked, pct, PERCENT_DENOMINATOR)
}
