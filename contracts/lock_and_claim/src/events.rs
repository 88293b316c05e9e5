use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the contract is configured.
///
/// # Topics
/// * `Symbol` - "lock_claim_initialized"
///
/// # Data
/// * `Address` - The admin
/// * `u64` - Lock window start
/// * `u64` - Lock window end
pub fn emit_initialized(e: &Env, admin: &Address, start_time: u64, end_time: u64) {
    let topics = (Symbol::new(e, "lock_claim_initialized"),);
    let data = (admin.clone(), start_time, end_time);
    e.events().publish(topics, data);
}

/// Emitted when the admin changes the day thresholds.
///
/// # Topics
/// * `Symbol` - "day_level_changed"
///
/// # Data
/// * `u32` - New first day level
/// * `u32` - New second day level
pub fn emit_day_level_changed(e: &Env, day_level_1: u32, day_level_2: u32) {
    let topics = (Symbol::new(e, "day_level_changed"),);
    e.events().publish(topics, (day_level_1, day_level_2));
}

/// Emitted on every successful lock.
///
/// # Topics
/// * `Symbol` - "lock"
/// * `Address` - The participant
///
/// # Data
/// * `i128` - The amount locked by this call
/// * `i128` - The participant's new locked total
pub fn emit_locked(e: &Env, owner: &Address, amount: i128, new_total: i128) {
    let topics = (Symbol::new(e, "lock"), owner.clone());
    e.events().publish(topics, (amount, new_total));
}

/// Emitted when a participant settles their claim.
///
/// # Topics
/// * `Symbol` - "claim"
/// * `Address` - The participant
///
/// # Data
/// * `i128` - Reward units transferred
pub fn emit_claimed(e: &Env, claimant: &Address, amount: i128) {
    let topics = (Symbol::new(e, "claim"), claimant.clone());
    e.events().publish(topics, amount);
}
