// SPDX-License-Identifier: MIT
// Pair Storage

use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env, U256};

use crate::error::PairError;
use crate::types::{PairConfig, Reserves};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Reserves,
    Price0Cumulative,
    Price1Cumulative,
    KLast,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
    Nonce(Address),
    PermitSigner(Address),
    DomainSeparator,
    Locked,
}

// ============================================================
// STORAGE CONFIGURATION
// ============================================================

pub mod storage_ttl {
    pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 6_307_200;
    pub const PERSISTENT_BUMP_AMOUNT: u32 = 6_307_200;
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        storage_ttl::PERSISTENT_LIFETIME_THRESHOLD,
        storage_ttl::PERSISTENT_BUMP_AMOUNT,
    );
}

// ============================================================
// INITIALIZATION
// ============================================================

#[inline]
pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_persistent_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &PairConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_persistent_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> PairConfig {
    match env.storage().persistent().get(&DataKey::Config) {
        Some(config) => {
            extend_persistent_ttl(env, &DataKey::Config);
            config
        }
        None => panic_with_error!(env, PairError::NotInitialized),
    }
}

// ============================================================
// RESERVES & ORACLE STATE
// ============================================================

pub fn write_reserves(env: &Env, reserves: &Reserves) {
    env.storage().persistent().set(&DataKey::Reserves, reserves);
    extend_persistent_ttl(env, &DataKey::Reserves);
}

pub fn read_reserves(env: &Env) -> Reserves {
    env.storage()
        .persistent()
        .get(&DataKey::Reserves)
        .unwrap_or(Reserves {
            reserve0: 0,
            reserve1: 0,
            block_timestamp_last: 0,
        })
}

pub fn write_price0_cumulative(env: &Env, value: &U256) {
    env.storage().persistent().set(&DataKey::Price0Cumulative, value);
    extend_persistent_ttl(env, &DataKey::Price0Cumulative);
}

pub fn read_price0_cumulative(env: &Env) -> U256 {
    env.storage()
        .persistent()
        .get(&DataKey::Price0Cumulative)
        .unwrap_or_else(|| U256::from_u32(env, 0))
}

pub fn write_price1_cumulative(env: &Env, value: &U256) {
    env.storage().persistent().set(&DataKey::Price1Cumulative, value);
    extend_persistent_ttl(env, &DataKey::Price1Cumulative);
}

pub fn read_price1_cumulative(env: &Env) -> U256 {
    env.storage()
        .persistent()
        .get(&DataKey::Price1Cumulative)
        .unwrap_or_else(|| U256::from_u32(env, 0))
}

pub fn write_k_last(env: &Env, value: &U256) {
    env.storage().persistent().set(&DataKey::KLast, value);
    extend_persistent_ttl(env, &DataKey::KLast);
}

pub fn read_k_last(env: &Env) -> U256 {
    env.storage()
        .persistent()
        .get(&DataKey::KLast)
        .unwrap_or_else(|| U256::from_u32(env, 0))
}

// ============================================================
// SHARE LEDGER
// ============================================================

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().persistent().set(&DataKey::TotalSupply, &supply);
    extend_persistent_ttl(env, &DataKey::TotalSupply);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, value: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().set(&key, &value);
    extend_persistent_ttl(env, &key);
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn write_nonce(env: &Env, owner: &Address, nonce: u128) {
    let key = DataKey::Nonce(owner.clone());
    env.storage().persistent().set(&key, &nonce);
    extend_persistent_ttl(env, &key);
}

pub fn read_nonce(env: &Env, owner: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Nonce(owner.clone()))
        .unwrap_or(0)
}

pub fn write_permit_signer(env: &Env, owner: &Address, signer: &BytesN<20>) {
    let key = DataKey::PermitSigner(owner.clone());
    env.storage().persistent().set(&key, signer);
    extend_persistent_ttl(env, &key);
}

pub fn read_permit_signer(env: &Env, owner: &Address) -> Option<BytesN<20>> {
    env.storage()
        .persistent()
        .get(&DataKey::PermitSigner(owner.clone()))
}

pub fn write_domain_separator(env: &Env, separator: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::DomainSeparator, separator);
    extend_persistent_ttl(env, &DataKey::DomainSeparator);
}

pub fn read_domain_separator(env: &Env) -> BytesN<32> {
    match env.storage().persistent().get(&DataKey::DomainSeparator) {
        Some(separator) => separator,
        None => panic_with_error!(env, PairError::NotInitialized),
    }
}

// ============================================================
// REENTRANCY GUARD
// ============================================================

/// Enter a guarded operation. The flag lives in instance storage and a
/// failed invocation rolls it back with everything else, so every exit
/// path leaves the pair unlocked.
pub fn acquire_lock(env: &Env) {
    if env.storage().instance().has(&DataKey::Locked) {
        panic_with_error!(env, PairError::Locked);
    }
    env.storage().instance().set(&DataKey::Locked, &true);
}

pub fn release_lock(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}
