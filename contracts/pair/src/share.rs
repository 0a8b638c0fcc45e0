// Liquidity-share ledger internals.
//
// The share is a plain fungible token over pair storage: total supply,
// per-holder balances, allowances. Any arithmetic fault here is fatal to
// the operation; balances never wrap.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::error::PairError;
use crate::events;
use crate::storage;

pub const TOKEN_NAME: &str = "Uniswap V2";
pub const TOKEN_SYMBOL: &str = "UNI-V2";
pub const TOKEN_DECIMALS: u32 = 18;

/// Allowance value treated as unlimited; transfer_from leaves it unchanged.
pub const UNLIMITED_ALLOWANCE: i128 = i128::MAX;

pub fn check_amount(env: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(env, PairError::InvalidAmount);
    }
}

pub fn mint_shares(env: &Env, to: &Address, amount: i128) {
    let supply = match storage::read_total_supply(env).checked_add(amount) {
        Some(supply) => supply,
        None => panic_with_error!(env, PairError::Overflow),
    };
    storage::write_total_supply(env, supply);

    // A holder balance is bounded by total supply, which was just checked.
    let balance = storage::read_balance(env, to) + amount;
    storage::write_balance(env, to, balance);

    events::emit_transfer(env, None, Some(to.clone()), amount);
}

/// Grow total supply with no holder entry. Used once, by the first mint,
/// to lock the minimum liquidity forever: no balance exists to transfer or
/// burn it from, so supply can never return to zero.
pub fn lock_shares(env: &Env, amount: i128) {
    let supply = match storage::read_total_supply(env).checked_add(amount) {
        Some(supply) => supply,
        None => panic_with_error!(env, PairError::Overflow),
    };
    storage::write_total_supply(env, supply);

    events::emit_transfer(env, None, None, amount);
}

pub fn burn_shares(env: &Env, from: &Address, amount: i128) {
    let balance = storage::read_balance(env, from);
    if balance < amount {
        panic_with_error!(env, PairError::InsufficientBalance);
    }
    storage::write_balance(env, from, balance - amount);

    let supply = match storage::read_total_supply(env).checked_sub(amount) {
        Some(supply) => supply,
        None => panic_with_error!(env, PairError::Overflow),
    };
    storage::write_total_supply(env, supply);

    events::emit_transfer(env, Some(from.clone()), None, amount);
}

pub fn transfer_shares(env: &Env, from: &Address, to: &Address, amount: i128) {
    check_amount(env, amount);

    let from_balance = storage::read_balance(env, from);
    if from_balance < amount {
        panic_with_error!(env, PairError::InsufficientBalance);
    }
    storage::write_balance(env, from, from_balance - amount);

    let to_balance = storage::read_balance(env, to) + amount;
    storage::write_balance(env, to, to_balance);

    events::emit_transfer(env, Some(from.clone()), Some(to.clone()), amount);
}

pub fn spend_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let allowance = storage::read_allowance(env, owner, spender);
    if allowance == UNLIMITED_ALLOWANCE {
        return;
    }
    if allowance < amount {
        panic_with_error!(env, PairError::InsufficientAllowance);
    }
    storage::write_allowance(env, owner, spender, allowance - amount);
}
