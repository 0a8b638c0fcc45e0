mod common;

use common::{E, MINIMUM_LIQUIDITY};
use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, IntoVal, Symbol,
};

#[test]
fn test_first_mint_balanced() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    let wallet = Address::generate(&env);

    let liquidity = common::add_liquidity(&env, &fx, &wallet, E, 4 * E);

    // sqrt(1e18 * 4e18) = 2e18, minus the permanently locked minimum.
    assert_eq!(liquidity, 2 * E - MINIMUM_LIQUIDITY);
    assert_eq!(fx.pair.total_supply(), 2 * E);
    assert_eq!(fx.pair.balance(&wallet), 2 * E - MINIMUM_LIQUIDITY);

    let reserves = fx.pair.get_reserves();
    assert_eq!(reserves.reserve0, E as u128);
    assert_eq!(reserves.reserve1, (4 * E) as u128);
}

#[test]
fn test_first_mint_event_sequence() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    let wallet = Address::generate(&env);

    common::mint_tokens(&env, &fx.token0, &wallet, E);
    common::mint_tokens(&env, &fx.token1, &wallet, 4 * E);
    common::transfer_in(&env, &fx, &wallet, &fx.token0, E);
    common::transfer_in(&env, &fx, &wallet, &fx.token1, 4 * E);

    fx.pair.mint(&wallet, &wallet);

    // In order: lock transfer, holder transfer, reserve sync, mint.
    let events = env.events().all();
    assert_eq!(
        events,
        soroban_sdk::vec![
            &env,
            (
                fx.pair_address.clone(),
                (Symbol::new(&env, "Transfer"),).into_val(&env),
                (None::<Address>, None::<Address>, MINIMUM_LIQUIDITY).into_val(&env),
            ),
            (
                fx.pair_address.clone(),
                (Symbol::new(&env, "Transfer"),).into_val(&env),
                (None::<Address>, Some(wallet.clone()), 2 * E - MINIMUM_LIQUIDITY).into_val(&env),
            ),
            (
                fx.pair_address.clone(),
                (Symbol::new(&env, "Sync"),).into_val(&env),
                (E as u128, (4 * E) as u128).into_val(&env),
            ),
            (
                fx.pair_address.clone(),
                (Symbol::new(&env, "Mint"),).into_val(&env),
                (wallet.clone(), E, 4 * E).into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_second_mint_is_proportional() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    let wallet = Address::generate(&env);
    let second = Address::generate(&env);

    common::add_liquidity(&env, &fx, &wallet, 2 * E, 2 * E);

    // Matching the pool ratio doubles the supply.
    let liquidity = common::add_liquidity(&env, &fx, &second, 2 * E, 2 * E);
    assert_eq!(liquidity, 2 * E);
    assert_eq!(fx.pair.total_supply(), 4 * E);
}

#[test]
fn test_unbalanced_mint_takes_min_side() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    let wallet = Address::generate(&env);
    let second = Address::generate(&env);

    common::add_liquidity(&env, &fx, &wallet, 2 * E, 2 * E);

    // The excess token1 earns nothing; min(1E, 2E) of pro-rata share wins.
    let liquidity = common::add_liquidity(&env, &fx, &second, E, 2 * E);
    assert_eq!(liquidity, E);
}

#[test]
#[should_panic(expected = "Error(Contract, #30)")] // InsufficientLiquidityMinted
fn test_mint_without_deposit_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    let wallet = Address::generate(&env);

    common::add_liquidity(&env, &fx, &wallet, E, E);

    // No new assets were transferred in.
    fx.pair.mint(&wallet, &wallet);
}

#[test]
fn test_locked_minimum_has_no_holder() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    let wallet = Address::generate(&env);

    common::add_liquidity(&env, &fx, &wallet, E, E);

    // Supply exceeds the only holder's balance by exactly the locked
    // minimum, and nothing can ever move it.
    assert_eq!(
        fx.pair.total_supply() - fx.pair.balance(&wallet),
        MINIMUM_LIQUIDITY
    );
}
