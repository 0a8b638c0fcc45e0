#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{self, StellarAssetClient},
    Address, BytesN, Env,
};
use tideswap_factory::{TideswapFactory, TideswapFactoryClient};
use tideswap_pair::{TideswapPair, TideswapPairClient};

/// One whole token at 18 decimals.
pub const E: i128 = 1_000_000_000_000_000_000;

pub const MINIMUM_LIQUIDITY: i128 = 1000;

pub struct PairFixture<'a> {
    pub pair: TideswapPairClient<'a>,
    pub pair_address: Address,
    pub factory: TideswapFactoryClient<'a>,
    pub fee_to_setter: Address,
    pub token0: Address,
    pub token1: Address,
}

/// Register a factory and a pair over two fresh test assets, canonically
/// ordered. The factory's pair wasm hash is inert here: the pair is
/// registered natively and initialized directly.
pub fn setup_pair(env: &Env) -> PairFixture<'_> {
    env.mock_all_auths();

    let fee_to_setter = Address::generate(env);
    let factory_id = env.register(TideswapFactory, ());
    let factory = TideswapFactoryClient::new(env, &factory_id);
    factory.initialize(&fee_to_setter, &BytesN::from_array(env, &[0u8; 32]));

    let (token0, token1) = create_token_pair(env);

    let pair_address = env.register(TideswapPair, ());
    let pair = TideswapPairClient::new(env, &pair_address);
    pair.initialize(&factory_id, &token0, &token1);

    PairFixture {
        pair,
        pair_address,
        factory,
        fee_to_setter,
        token0,
        token1,
    }
}

/// Two test assets in canonical order.
pub fn create_token_pair(env: &Env) -> (Address, Address) {
    let admin = Address::generate(env);
    let a = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let b = env.register_stellar_asset_contract_v2(admin).address();
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn token_balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

pub fn transfer_in(env: &Env, fx: &PairFixture, from: &Address, token: &Address, amount: i128) {
    token::Client::new(env, token).transfer(from, &fx.pair_address, &amount);
}

/// Mint fresh assets to `provider`, move them into the pair, and mint
/// liquidity shares. Returns the share quantity.
pub fn add_liquidity(
    env: &Env,
    fx: &PairFixture,
    provider: &Address,
    amount0: i128,
    amount1: i128,
) -> i128 {
    mint_tokens(env, &fx.token0, provider, amount0);
    mint_tokens(env, &fx.token1, provider, amount1);
    transfer_in(env, fx, provider, &fx.token0, amount0);
    transfer_in(env, fx, provider, &fx.token1, amount1);
    fx.pair.mint(provider, provider)
}
