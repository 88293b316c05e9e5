//! Token plumbing for the lock and reward tokens.
//! Ledger failures (balance, allowance) trap inside the token contract and
//! abort the whole invocation; nothing here catches them.

use crate::types::LockConfig;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// @notice Decimals reported by `token`.
pub fn decimals(e: &Env, token: &Address) -> u32 {
    TokenClient::new(e, token).decimals()
}

/// @notice Pulls `amount` lock tokens from `owner` into the contract.
/// @dev Requires prior approval for the contract as spender.
pub fn transfer_into_contract(e: &Env, cfg: &LockConfig, owner: &Address, amount: i128) {
    let contract = e.current_contract_address();
    TokenClient::new(e, &cfg.lock_token).transfer_from(&contract, owner, &contract, &amount);
}

/// @notice Pays `amount` reward tokens from the contract to `recipient`.
pub fn pay_reward(e: &Env, cfg: &LockConfig, recipient: &Address, amount: i128) {
    let contract = e.current_contract_address();
    TokenClient::new(e, &cfg.reward_token).transfer(&contract, recipient, &amount);
}

/// @notice Reward tokens currently held by the contract.
pub fn reward_balance(e: &Env, cfg: &LockConfig) -> i128 {
    TokenClient::new(e, &cfg.reward_token).balance(&e.current_contract_address())
}
