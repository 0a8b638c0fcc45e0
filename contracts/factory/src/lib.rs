#![no_std]

use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, xdr::ToXdr, Address, Bytes, BytesN,
    Env, Vec,
};

mod error;
mod events;
mod storage;
pub mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
use types::FactoryConfig;

/// Surface of a freshly-deployed pair the factory drives.
#[contractclient(name = "PairClient")]
pub trait PairSetup {
    fn initialize(env: Env, factory: Address, token0: Address, token1: Address);
}

#[contract]
pub struct TideswapFactory;

#[contractimpl]
impl TideswapFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, fee_to_setter: Address, pair_wasm_hash: BytesN<32>) {
        fee_to_setter.require_auth();

        if is_initialized(&env) {
            panic_with_error!(&env, FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            fee_to: None,
            fee_to_setter: fee_to_setter.clone(),
            pair_wasm_hash: pair_wasm_hash.clone(),
        };
        write_config(&env, &config);
        init_pair_list(&env);
        set_initialized(&env);

        emit_factory_initialized(&env, &fee_to_setter, &pair_wasm_hash);
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Protocol-fee recipient; None means the fee is disabled. Pairs call
    /// this once per liquidity event.
    pub fn fee_to(env: Env) -> Option<Address> {
        read_config(&env).fee_to
    }

    pub fn fee_to_setter(env: Env) -> Address {
        read_config(&env).fee_to_setter
    }

    pub fn pair_wasm_hash(env: Env) -> BytesN<32> {
        read_config(&env).pair_wasm_hash
    }

    /// Registry lookup; symmetric in the asset order.
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        read_pair(&env, &token_a, &token_b)
    }

    pub fn all_pairs(env: Env) -> Vec<Address> {
        read_pair_list(&env)
    }

    pub fn all_pairs_length(env: Env) -> u32 {
        read_pair_list(&env).len()
    }

    // ========================================================
    // PAIR CREATION
    // ========================================================

    /// Deploy the pair for an unordered asset pair. At most one pair may
    /// ever exist per pair of assets, and its address is a deterministic
    /// function of this factory and the canonical ordering.
    pub fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address {
        if token_a == token_b {
            panic_with_error!(&env, FactoryError::IdenticalAssets);
        }

        let (token0, token1) = sort_tokens(&token_a, &token_b);
        if pair_exists(&env, &token0, &token1) {
            panic_with_error!(&env, FactoryError::PairExists);
        }

        let config = read_config(&env);
        let salt = pair_salt(&env, &token0, &token1);
        let pair = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(config.pair_wasm_hash, ());

        PairClient::new(&env, &pair).initialize(&env.current_contract_address(), &token0, &token1);

        write_pair(&env, &token0, &token1, &pair);
        add_to_pair_list(&env, &pair);
        let index = read_pair_list(&env).len();

        emit_pair_created(&env, &token0, &token1, &pair, index);
        pair
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Rotate the protocol-fee recipient. None disables the fee; accrual
    /// that was never materialized is forfeited by the pairs.
    pub fn set_fee_to(env: Env, caller: Address, fee_to: Option<Address>) {
        caller.require_auth();

        let mut config = read_config(&env);
        if caller != config.fee_to_setter {
            panic_with_error!(&env, FactoryError::Forbidden);
        }

        config.fee_to = fee_to.clone();
        write_config(&env, &config);

        emit_fee_to_updated(&env, &fee_to);
    }

    pub fn set_fee_to_setter(env: Env, caller: Address, new_setter: Address) {
        caller.require_auth();

        let mut config = read_config(&env);
        if caller != config.fee_to_setter {
            panic_with_error!(&env, FactoryError::Forbidden);
        }

        let old_setter = config.fee_to_setter.clone();
        config.fee_to_setter = new_setter.clone();
        write_config(&env, &config);

        emit_fee_to_setter_updated(&env, &old_setter, &new_setter);
    }

    /// Rotate the wasm used for future pair deployments. Existing pairs
    /// are unaffected.
    pub fn set_pair_wasm_hash(env: Env, caller: Address, pair_wasm_hash: BytesN<32>) {
        caller.require_auth();

        let mut config = read_config(&env);
        if caller != config.fee_to_setter {
            panic_with_error!(&env, FactoryError::Forbidden);
        }

        config.pair_wasm_hash = pair_wasm_hash.clone();
        write_config(&env, &config);

        emit_wasm_hash_updated(&env, &pair_wasm_hash);
    }
}

/// Deterministic deployment salt for the canonical pair.
fn pair_salt(env: &Env, token0: &Address, token1: &Address) -> BytesN<32> {
    let mut bytes = Bytes::new(env);
    bytes.append(&token0.clone().to_xdr(env));
    bytes.append(&token1.clone().to_xdr(env));
    env.crypto().sha256(&bytes).to_bytes()
}
