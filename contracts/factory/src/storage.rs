//! Factory storage operations

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::error::FactoryError;
use crate::types::{DataKey, FactoryConfig};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> FactoryConfig {
    match env.storage().persistent().get(&DataKey::Config) {
        Some(config) => {
            extend_ttl(env, &DataKey::Config);
            config
        }
        None => panic_with_error!(env, FactoryError::NotInitialized),
    }
}

// ============================================================
// PAIR REGISTRY
// ============================================================

/// Canonical asset order (sorted by address)
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn pair_exists(env: &Env, token0: &Address, token1: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pair(token0.clone(), token1.clone()))
}

/// Record a pair under both asset orderings so lookups need no sorting.
pub fn write_pair(env: &Env, token0: &Address, token1: &Address, pair: &Address) {
    let forward = DataKey::Pair(token0.clone(), token1.clone());
    env.storage().persistent().set(&forward, pair);
    extend_ttl(env, &forward);

    let reverse = DataKey::Pair(token1.clone(), token0.clone());
    env.storage().persistent().set(&reverse, pair);
    extend_ttl(env, &reverse);
}

pub fn read_pair(env: &Env, token_a: &Address, token_b: &Address) -> Option<Address> {
    let key = DataKey::Pair(token_a.clone(), token_b.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn read_pair_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PairList)
        .unwrap_or(Vec::new(env))
}

pub fn add_to_pair_list(env: &Env, pair: &Address) {
    let mut list = read_pair_list(env);
    list.push_back(pair.clone());
    env.storage().persistent().set(&DataKey::PairList, &list);
    extend_ttl(env, &DataKey::PairList);
}

pub fn init_pair_list(env: &Env) {
    env.storage()
        .persistent()
        .set(&DataKey::PairList, &Vec::<Address>::new(env));
}

// ============================================================
// REGISTRY TESTS
// ============================================================
