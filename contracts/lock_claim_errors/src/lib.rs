#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain display.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Operation invoked outside its phase (codes 200-299).
    Timing,
    /// Lock and claim settlement errors (codes 300-399).
    Claim,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum for the lock-and-claim contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1   -  99 : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Timing
///   300 - 399 : Claim
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    /// Lock window start must be strictly before its end.
    InvalidLockWindow = 3,

    /// Lock and reward tokens must be distinct contracts, otherwise locked
    /// principal would be counted as reward pool.
    SameLockAndRewardToken = 4,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    NotAdmin = 100,

    // --- Timing (200-299) ---
    /// The bonus schedule can only change before the lock window opens.
    ScheduleFrozen = 200,

    /// Locking is only allowed inside `[start_time, end_time)`.
    NotLockPhase = 201,

    /// Claiming is only allowed from `end_time` onwards.
    NotClaimPhase = 202,

    // --- Claim (300-399) ---
    /// Caller has no claimable reward: never locked, or already claimed.
    NothingToClaim = 300,

    /// The contract holds fewer reward tokens than the claim requires.
    RewardPoolUnderfunded = 301,

    /// Lock amount must be strictly positive.
    AmountMustBePositive = 302,

    /// First day level must not exceed the second.
    InvalidDayLevels = 303,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidLockWindow
            | ContractError::SameLockAndRewardToken => ErrorCategory::Initialization,

            ContractError::NotAdmin => ErrorCategory::Authorization,

            ContractError::ScheduleFrozen
            | ContractError::NotLockPhase
            | ContractError::NotClaimPhase => ErrorCategory::Timing,

            ContractError::NothingToClaim
            | ContractError::RewardPoolUnderfunded
            | ContractError::AmountMustBePositive
            | ContractError::InvalidDayLevels => ErrorCategory::Claim,

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::InvalidLockWindow => "Lock window start must precede its end",
            ContractError::SameLockAndRewardToken => {
                "Lock token and reward token must be different"
            }
            ContractError::NotAdmin => "Action restricted to admins only",
            ContractError::ScheduleFrozen => "Bonus schedule can only change before start time",
            ContractError::NotLockPhase => "Locking is only allowed during the lock window",
            ContractError::NotClaimPhase => "Claiming is only allowed after end time",
            ContractError::NothingToClaim => "No claimable token",
            ContractError::RewardPoolUnderfunded => {
                "Reward pool holds less than the claimable amount"
            }
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::InvalidDayLevels => "First day level must not exceed the second",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
