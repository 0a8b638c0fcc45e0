#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};
use tideswap_factory::{TideswapFactory, TideswapFactoryClient};

/// Register and initialize a factory with a placeholder pair wasm hash.
/// Tests here never reach the deploy path, so the hash is inert.
pub fn setup_factory(env: &Env) -> (TideswapFactoryClient<'_>, Address) {
    let fee_to_setter = Address::generate(env);
    let factory_id = env.register(TideswapFactory, ());
    let client = TideswapFactoryClient::new(env, &factory_id);

    let pair_wasm_hash = BytesN::from_array(env, &[0u8; 32]);
    client.initialize(&fee_to_setter, &pair_wasm_hash);

    (client, fee_to_setter)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}
