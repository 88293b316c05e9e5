//! Single-admin authorization predicate.

use crate::types::LockConfig;
use lock_claim_errors::ContractError;
use soroban_sdk::Address;

/// Whether `caller` is the configured admin.
pub fn is_admin(cfg: &LockConfig, caller: &Address) -> bool {
    cfg.admin == *caller
}

/// Requires `caller` to have signed the invocation and to be the admin.
pub fn require_admin(cfg: &LockConfig, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !is_admin(cfg, caller) {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}
