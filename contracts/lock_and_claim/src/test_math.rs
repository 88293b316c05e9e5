//! Tests for overflow-safe arithmetic helpers.

#![cfg(test)]

use crate::math;
use lock_claim_errors::ContractError;

#[test]
fn test_apply_bonus_pct_basic() {
    assert_eq!(math::apply_bonus_pct(1_000, 25, 100), Ok(1_250));
    assert_eq!(math::apply_bonus_pct(1_000, 0, 100), Ok(1_000));
}

#[test]
fn test_apply_bonus_pct_overflow() {
    assert_eq!(
        math::apply_bonus_pct(i128::MAX, 1, 100),
        Err(ContractError::Overflow)
    );
}

#[test]
fn test_add_overflow() {
    assert_eq!(math::add_i128(i128::MAX, 1), Err(ContractError::Overflow));
    assert_eq!(math::add_i128(1, 2), Ok(3));
}

#[test]
fn test_div_by_zero_is_error() {
    assert_eq!(math::div_i128(10, 0), Err(ContractError::Overflow));
}

#[test]
fn test_pow10() {
    assert_eq!(math::pow10(0), Ok(1));
    assert_eq!(math::pow10(7), Ok(10_000_000));
    assert_eq!(math::pow10(18), Ok(1_000_000_000_000_000_000));
    assert_eq!(math::pow10(39), Err(ContractError::Overflow));
}
