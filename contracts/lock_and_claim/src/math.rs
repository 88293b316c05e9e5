//! Overflow-safe arithmetic helpers for reward calculations.
//!
//! Every helper uses checked arithmetic and reports failure as
//! `ContractError::Overflow` so the whole invocation is rolled back.

use lock_claim_errors::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` division. Division by zero is reported as overflow.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `10^decimals` as an `i128`.
#[inline]
pub fn pow10(decimals: u32) -> Result<i128, ContractError> {
    10_i128.checked_pow(decimals).ok_or(ContractError::Overflow)
}

/// `amount * (denominator + pct) / denominator`, truncating.
///
/// Multiplies before dividing so sub-percent remainders are not lost early.
#[inline]
pub fn apply_bonus_pct(amount: i128, pct: u32, denominator: i128) -> Result<i128, ContractError> {
    let factor = add_i128(denominator, pct as i128)?;
    div_i128(mul_i128(amount, factor)?, denominator)
}
