#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::InvalidLockWindow,
            ContractError::SameLockAndRewardToken,
            ContractError::NotAdmin,
            ContractError::ScheduleFrozen,
            ContractError::NotLockPhase,
            ContractError::NotClaimPhase,
            ContractError::NothingToClaim,
            ContractError::RewardPoolUnderfunded,
            ContractError::AmountMustBePositive,
            ContractError::InvalidDayLevels,
            ContractError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
        assert_eq!(ContractError::InvalidLockWindow as u32, 3);
        assert_eq!(ContractError::SameLockAndRewardToken as u32, 4);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::NotAdmin as u32, 100);
    }

    #[test]
    fn test_codes_timing() {
        assert_eq!(ContractError::ScheduleFrozen as u32, 200);
        assert_eq!(ContractError::NotLockPhase as u32, 201);
        assert_eq!(ContractError::NotClaimPhase as u32, 202);
    }

    #[test]
    fn test_codes_claim() {
        assert_eq!(ContractError::NothingToClaim as u32, 300);
        assert_eq!(ContractError::RewardPoolUnderfunded as u32, 301);
        assert_eq!(ContractError::AmountMustBePositive as u32, 302);
        assert_eq!(ContractError::InvalidDayLevels as u32, 303);
    }

    #[test]
    fn test_codes_arithmetic() {
        assert_eq!(ContractError::Overflow as u32, 700);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_codes_fall_inside_their_category_block() {
        for err in all_variants() {
            let code = err as u32;
            let in_block = match err.category() {
                ErrorCategory::Initialization => (1..100).contains(&code),
                ErrorCategory::Authorization => (100..200).contains(&code),
                ErrorCategory::Timing => (200..300).contains(&code),
                ErrorCategory::Claim => (300..400).contains(&code),
                ErrorCategory::Arithmetic => (700..800).contains(&code),
            };
            assert!(in_block, "{:?} (code {}) is outside its category block", err, code);
        }
    }

    #[test]
    fn test_timing_errors_are_distinct_per_operation() {
        let timing: Vec<ContractError> = all_variants()
            .into_iter()
            .filter(|e| e.category() == ErrorCategory::Timing)
            .collect();
        assert_eq!(timing.len(), 3);
        assert_ne!(
            ContractError::NotLockPhase.description(),
            ContractError::NotClaimPhase.description()
        );
        assert_ne!(
            ContractError::ScheduleFrozen.description(),
            ContractError::NotLockPhase.description()
        );
    }

    #[test]
    fn test_category_authorization() {
        assert_eq!(
            ContractError::NotAdmin.category(),
            ErrorCategory::Authorization
        );
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty_and_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            assert!(!a.description().is_empty());
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a.description(), b.description());
            }
        }
    }

    #[test]
    fn test_all_variants_count() {
        assert_eq!(
            all_variants().len(),
            13,
            "Update all_variants() and this count when adding new errors"
        );
    }

    // --- Result integration tests ---

    fn mock_claim(claimable: i128, pool: i128) -> Result<i128, ContractError> {
        if claimable == 0 {
            return Err(ContractError::NothingToClaim);
        }
        if pool < claimable {
            return Err(ContractError::RewardPoolUnderfunded);
        }
        Ok(claimable)
    }

    #[test]
    fn test_claim_errors_propagate() {
        assert_eq!(mock_claim(0, 100), Err(ContractError::NothingToClaim));
        assert_eq!(mock_claim(150, 100), Err(ContractError::RewardPoolUnderfunded));
        assert_eq!(mock_claim(100, 100), Ok(100));
    }
}
