mod common;

use common::E;
use soroban_sdk::{
    contract, contractimpl, symbol_short, testutils::Address as _, token, Address, Bytes, Env,
};

// Exact constant-product outputs for a 1e18 input against (5e18, 10e18)
// reserves with the 0.3% input fee.
const OUT1_FOR_1E_IN0: i128 = 1_662_497_915_624_478_906;
const OUT0_FOR_1E_IN1: i128 = 453_305_446_940_074_565;

fn seed_5_10(env: &Env, fx: &common::PairFixture) -> Address {
    let wallet = Address::generate(env);
    common::add_liquidity(env, fx, &wallet, 5 * E, 10 * E);
    wallet
}

#[test]
fn test_swap_token0_for_token1() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    common::mint_tokens(&env, &fx.token0, &trader, E);
    common::transfer_in(&env, &fx, &trader, &fx.token0, E);

    fx.pair
        .swap(&trader, &0, &OUT1_FOR_1E_IN0, &trader, &Bytes::new(&env));

    let reserves = fx.pair.get_reserves();
    assert_eq!(reserves.reserve0, (6 * E) as u128);
    assert_eq!(reserves.reserve1, (10 * E - OUT1_FOR_1E_IN0) as u128);
    assert_eq!(common::token_balance(&env, &fx.token1, &trader), OUT1_FOR_1E_IN0);
}

#[test]
#[should_panic(expected = "Error(Contract, #44)")] // InvariantViolation
fn test_swap_token0_one_extra_unit_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    common::mint_tokens(&env, &fx.token0, &trader, E);
    common::transfer_in(&env, &fx, &trader, &fx.token0, E);

    fx.pair.swap(
        &trader,
        &0,
        &(OUT1_FOR_1E_IN0 + 1),
        &trader,
        &Bytes::new(&env),
    );
}

#[test]
fn test_swap_token1_for_token0() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    common::mint_tokens(&env, &fx.token1, &trader, E);
    common::transfer_in(&env, &fx, &trader, &fx.token1, E);

    fx.pair
        .swap(&trader, &OUT0_FOR_1E_IN1, &0, &trader, &Bytes::new(&env));

    let reserves = fx.pair.get_reserves();
    assert_eq!(reserves.reserve0, (5 * E - OUT0_FOR_1E_IN1) as u128);
    assert_eq!(reserves.reserve1, (11 * E) as u128);
    assert_eq!(common::token_balance(&env, &fx.token0, &trader), OUT0_FOR_1E_IN1);
}

#[test]
#[should_panic(expected = "Error(Contract, #44)")] // InvariantViolation
fn test_swap_token1_one_extra_unit_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    common::mint_tokens(&env, &fx.token1, &trader, E);
    common::transfer_in(&env, &fx, &trader, &fx.token1, E);

    fx.pair.swap(
        &trader,
        &(OUT0_FOR_1E_IN1 + 1),
        &0,
        &trader,
        &Bytes::new(&env),
    );
}

// ============================================================
// VALIDATION
// ============================================================

#[test]
#[should_panic(expected = "Error(Contract, #40)")] // InsufficientOutputAmount
fn test_swap_zero_outputs_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    fx.pair.swap(&trader, &0, &0, &trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #42)")] // InsufficientLiquidity
fn test_swap_output_exceeding_reserve_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    fx.pair
        .swap(&trader, &0, &(10 * E), &trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #43)")] // InvalidTo
fn test_swap_to_asset_address_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    fx.pair.swap(&trader, &0, &E, &fx.token1, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #41)")] // InsufficientInputAmount
fn test_swap_without_input_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    // Nothing transferred in, no callback to deliver anything.
    let trader = Address::generate(&env);
    fx.pair.swap(&trader, &0, &E, &trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #23)")] // InvalidAmount
fn test_swap_negative_output_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let trader = Address::generate(&env);
    fx.pair.swap(&trader, &-1, &0, &trader, &Bytes::new(&env));
}

// ============================================================
// FLASH SWAP
// ============================================================

/// Test callee that repays a configured amount of one asset mid-swap.
#[contract]
pub struct FlashBorrower;

#[contractimpl]
impl FlashBorrower {
    pub fn configure(env: Env, token: Address, amount: i128, pair: Address) {
        env.storage()
            .instance()
            .set(&symbol_short!("cfg"), &(token, amount, pair));
    }

    pub fn on_swap(env: Env, _sender: Address, _amount0: i128, _amount1: i128, _data: Bytes) {
        let (token, amount, pair): (Address, i128, Address) = env
            .storage()
            .instance()
            .get(&symbol_short!("cfg"))
            .unwrap();
        if amount > 0 {
            token::Client::new(&env, &token).transfer(
                &env.current_contract_address(),
                &pair,
                &amount,
            );
        }
    }
}

#[test]
fn test_flash_swap_repaid_in_callback() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let borrower = env.register(FlashBorrower, ());
    let borrower_client = FlashBorrowerClient::new(&env, &borrower);
    borrower_client.configure(&fx.token0, &E, &fx.pair_address);
    common::mint_tokens(&env, &fx.token0, &borrower, E);

    // Output is delivered before any input exists; the callback repays.
    let trader = Address::generate(&env);
    fx.pair.swap(
        &trader,
        &0,
        &OUT1_FOR_1E_IN0,
        &borrower,
        &Bytes::from_slice(&env, &[1]),
    );

    let reserves = fx.pair.get_reserves();
    assert_eq!(reserves.reserve0, (6 * E) as u128);
    assert_eq!(reserves.reserve1, (10 * E - OUT1_FOR_1E_IN0) as u128);
    assert_eq!(
        common::token_balance(&env, &fx.token1, &borrower),
        OUT1_FOR_1E_IN0
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #41)")] // InsufficientInputAmount
fn test_flash_swap_unrepaid_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let borrower = env.register(FlashBorrower, ());
    let borrower_client = FlashBorrowerClient::new(&env, &borrower);
    borrower_client.configure(&fx.token0, &0, &fx.pair_address);

    let trader = Address::generate(&env);
    fx.pair.swap(
        &trader,
        &0,
        &OUT1_FOR_1E_IN0,
        &borrower,
        &Bytes::from_slice(&env, &[1]),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #44)")] // InvariantViolation
fn test_flash_swap_underpaid_fails() {
    let env = Env::default();
    let fx = common::setup_pair(&env);
    seed_5_10(&env, &fx);

    let borrower = env.register(FlashBorrower, ());
    let borrower_client = FlashBorrowerClient::new(&env, &borrower);
    // 1% short of the required input.
    borrower_client.configure(&fx.token0, &(E - E / 100), &fx.pair_address);
    common::mint_tokens(&env, &fx.token0, &borrower, E);

    let trader = Address::generate(&env);
    fx.pair.swap(
        &trader,
        &0,
        &OUT1_FOR_1E_IN0,
        &borrower,
        &Bytes::from_slice(&env, &[1]),
    );
}
