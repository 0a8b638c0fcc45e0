#![no_std]

use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, token, Address, Bytes, BytesN, Env,
    String, U256,
};

use tideswap_math::{
    constants::{FEE_DENOMINATOR, FEE_NUMERATOR, MAX_RESERVE, MINIMUM_LIQUIDITY},
    isqrt, mul_div, u256_is_zero, uq112, wrapping_add,
};

// Local modules
mod error;
mod events;
pub mod permit;
mod share;
mod storage;
pub mod types;

pub use error::PairError;
use events::*;
use storage::*;
use types::{PairConfig, Reserves};

// ============================================================
// CONSUMED INTERFACES
// ============================================================

/// Factory surface the pair consumes: one query per liquidity event.
#[contractclient(name = "FeeQueryClient")]
pub trait FeeQuery {
    fn fee_to(env: Env) -> Option<Address>;
}

/// Capability a swap recipient must implement to take the flash callback.
/// By the time `on_swap` returns, the recipient must have delivered enough
/// input asset to the pair for the invariant check to pass.
#[contractclient(name = "SwapCalleeClient")]
pub trait SwapCallee {
    fn on_swap(env: Env, sender: Address, amount0: i128, amount1: i128, data: Bytes);
}

#[contract]
pub struct TideswapPair;

#[contractimpl]
impl TideswapPair {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Bind the pair to its factory and canonical asset ordering. Called
    /// once by the factory right after deployment.
    pub fn initialize(env: Env, factory: Address, token0: Address, token1: Address) {
        factory.require_auth();

        if is_initialized(&env) {
            panic_with_error!(&env, PairError::AlreadyInitialized);
        }

        let config = PairConfig {
            factory,
            token0,
            token1,
        };
        write_config(&env, &config);

        let separator = permit::domain_separator(&env, &env.current_contract_address());
        write_domain_separator(&env, &separator);

        set_initialized(&env);
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn factory(env: Env) -> Address {
        read_config(&env).factory
    }

    pub fn token0(env: Env) -> Address {
        read_config(&env).token0
    }

    pub fn token1(env: Env) -> Address {
        read_config(&env).token1
    }

    pub fn get_reserves(env: Env) -> Reserves {
        read_reserves(&env)
    }

    pub fn price0_cumulative_last(env: Env) -> U256 {
        read_price0_cumulative(&env)
    }

    pub fn price1_cumulative_last(env: Env) -> U256 {
        read_price1_cumulative(&env)
    }

    pub fn k_last(env: Env) -> U256 {
        read_k_last(&env)
    }

    pub fn minimum_liquidity() -> i128 {
        MINIMUM_LIQUIDITY
    }

    // ========================================================
    // LIQUIDITY SHARE TOKEN
    // ========================================================

    pub fn name(env: Env) -> String {
        String::from_str(&env, share::TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, share::TOKEN_SYMBOL)
    }

    pub fn decimals() -> u32 {
        share::TOKEN_DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        read_allowance(&env, &owner, &spender)
    }

    pub fn nonce_of(env: Env, owner: Address) -> u128 {
        read_nonce(&env, &owner)
    }

    pub fn domain_separator(env: Env) -> BytesN<32> {
        read_domain_separator(&env)
    }

    /// Set an allowance to an exact value. No check-and-set; callers accept
    /// the known race.
    pub fn approve(env: Env, owner: Address, spender: Address, value: i128) {
        owner.require_auth();
        share::check_amount(&env, value);

        write_allowance(&env, &owner, &spender, value);
        emit_approval(&env, &owner, &spender, value);
    }

    pub fn transfer(env: Env, from: Address, to: Address, value: i128) {
        from.require_auth();
        share::transfer_shares(&env, &from, &to, value);
    }

    /// Spender-driven transfer. An allowance of `i128::MAX` is unlimited
    /// and left unchanged; anything else is decremented by exactly `value`.
    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, value: i128) {
        spender.require_auth();
        share::check_amount(&env, value);

        share::spend_allowance(&env, &from, &spender, value);
        share::transfer_shares(&env, &from, &to, value);
    }

    /// Bind the secp256k1 key whose signatures may approve on this owner's
    /// behalf. Rebinding rotates the key.
    pub fn bind_permit_key(env: Env, owner: Address, public_key: BytesN<65>) {
        owner.require_auth();

        let handle = permit::signer_handle(&env, &public_key);
        write_permit_signer(&env, &owner, &handle);
    }

    /// Commit an allowance from an off-chain signature. Consumes the
    /// owner's nonce exactly once; a replayed signature no longer matches
    /// the digest and fails.
    pub fn permit(
        env: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        v: u32,
        r: BytesN<32>,
        s: BytesN<32>,
    ) {
        if env.ledger().timestamp() > deadline {
            panic_with_error!(&env, PairError::PermitExpired);
        }
        share::check_amount(&env, value);

        let nonce = read_nonce(&env, &owner);
        let separator = read_domain_separator(&env);
        let digest = permit::permit_digest(
            &env,
            &separator,
            &owner,
            &spender,
            value as u128,
            nonce,
            deadline,
        );

        let recovered = permit::recover_signer(&env, &digest, v, &r, &s);
        let bound = read_permit_signer(&env, &owner);
        let valid = match bound {
            Some(signer) => !permit::is_zero_handle(&recovered) && recovered == signer,
            None => false,
        };
        if !valid {
            panic_with_error!(&env, PairError::InvalidSignature);
        }

        write_nonce(&env, &owner, nonce + 1);
        write_allowance(&env, &owner, &spender, value);
        emit_approval(&env, &owner, &spender, value);
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Mint liquidity shares against assets already transferred in.
    /// Deposits are measured as balance deltas, never caller-declared.
    pub fn mint(env: Env, sender: Address, to: Address) -> i128 {
        sender.require_auth();
        acquire_lock(&env);

        let config = read_config(&env);
        let reserves = read_reserves(&env);

        let balance0 = balance_of(&env, &config.token0);
        let balance1 = balance_of(&env, &config.token1);
        let amount0 = checked_delta(&env, balance0, reserves.reserve0);
        let amount1 = checked_delta(&env, balance1, reserves.reserve1);

        let fee_on = mint_fee(&env, reserves.reserve0, reserves.reserve1);
        let supply = read_total_supply(&env);

        let liquidity = if supply == 0 {
            let root = isqrt(
                &env,
                &U256::from_u128(&env, amount0).mul(&U256::from_u128(&env, amount1)),
            ) as i128;
            let liquidity = match root.checked_sub(MINIMUM_LIQUIDITY) {
                Some(liquidity) => liquidity,
                None => panic_with_error!(&env, PairError::Overflow),
            };
            share::lock_shares(&env, MINIMUM_LIQUIDITY);
            liquidity
        } else {
            // Truncating min punishes unbalanced deposits.
            let liquidity0 = mul_div(&env, amount0, supply as u128, reserves.reserve0);
            let liquidity1 = mul_div(&env, amount1, supply as u128, reserves.reserve1);
            to_i128(&env, liquidity0.min(liquidity1))
        };

        if liquidity == 0 {
            panic_with_error!(&env, PairError::InsufficientLiquidityMinted);
        }
        share::mint_shares(&env, &to, liquidity);

        update(&env, balance0, balance1, reserves.reserve0, reserves.reserve1);
        if fee_on {
            write_k_from_reserves(&env);
        }

        emit_mint(&env, &sender, amount0 as i128, amount1 as i128);
        release_lock(&env);
        liquidity
    }

    /// Burn the shares held at the pair's own address and pay out the
    /// pro-rata balances. Dust from truncation stays in the pool.
    pub fn burn(env: Env, sender: Address, to: Address) -> (i128, i128) {
        sender.require_auth();
        acquire_lock(&env);

        let config = read_config(&env);
        let reserves = read_reserves(&env);
        let pair_address = env.current_contract_address();

        let balance0 = balance_of(&env, &config.token0);
        let balance1 = balance_of(&env, &config.token1);
        let liquidity = read_balance(&env, &pair_address);

        let fee_on = mint_fee(&env, reserves.reserve0, reserves.reserve1);
        let supply = read_total_supply(&env);
        if supply == 0 {
            panic_with_error!(&env, PairError::InsufficientLiquidityBurned);
        }

        // Pro-rata on balances, not reserves: unsynced donations flow to
        // the exiting holder.
        let amount0 = mul_div(&env, liquidity as u128, balance0, supply as u128);
        let amount1 = mul_div(&env, liquidity as u128, balance1, supply as u128);
        if amount0 == 0 || amount1 == 0 {
            panic_with_error!(&env, PairError::InsufficientLiquidityBurned);
        }

        share::burn_shares(&env, &pair_address, liquidity);

        let amount0 = to_i128(&env, amount0);
        let amount1 = to_i128(&env, amount1);
        token::Client::new(&env, &config.token0).transfer(&pair_address, &to, &amount0);
        token::Client::new(&env, &config.token1).transfer(&pair_address, &to, &amount1);

        let balance0 = balance_of(&env, &config.token0);
        let balance1 = balance_of(&env, &config.token1);
        update(&env, balance0, balance1, reserves.reserve0, reserves.reserve1);
        if fee_on {
            write_k_from_reserves(&env);
        }

        emit_burn(&env, &sender, amount0, amount1, &to);
        release_lock(&env);
        (amount0, amount1)
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap with optional flash callback. Outputs are paid optimistically;
    /// inputs are whatever balance remains above `reserve - output` once
    /// the callback returns, and the fee-adjusted product must not fall
    /// below the pre-trade product.
    pub fn swap(
        env: Env,
        sender: Address,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        data: Bytes,
    ) {
        sender.require_auth();
        acquire_lock(&env);

        let out0 = as_amount(&env, amount0_out);
        let out1 = as_amount(&env, amount1_out);
        if out0 == 0 && out1 == 0 {
            panic_with_error!(&env, PairError::InsufficientOutputAmount);
        }

        let config = read_config(&env);
        let reserves = read_reserves(&env);
        if out0 >= reserves.reserve0 || out1 >= reserves.reserve1 {
            panic_with_error!(&env, PairError::InsufficientLiquidity);
        }
        if to == config.token0 || to == config.token1 {
            panic_with_error!(&env, PairError::InvalidTo);
        }

        let pair_address = env.current_contract_address();
        if out0 > 0 {
            token::Client::new(&env, &config.token0).transfer(&pair_address, &to, &amount0_out);
        }
        if out1 > 0 {
            token::Client::new(&env, &config.token1).transfer(&pair_address, &to, &amount1_out);
        }
        if !data.is_empty() {
            SwapCalleeClient::new(&env, &to).on_swap(&sender, &amount0_out, &amount1_out, &data);
        }

        let balance0 = balance_of(&env, &config.token0);
        let balance1 = balance_of(&env, &config.token1);

        let in0 = received(balance0, reserves.reserve0, out0);
        let in1 = received(balance1, reserves.reserve1, out1);
        if in0 == 0 && in1 == 0 {
            panic_with_error!(&env, PairError::InsufficientInputAmount);
        }

        // (b0*1000 - in0*3) * (b1*1000 - in1*3) >= r0 * r1 * 1000^2
        // Balances are only bounded by the reserve check further down, so
        // the adjusted terms are computed in 256 bits.
        let adjusted0 = adjusted_balance(&env, balance0, in0);
        let adjusted1 = adjusted_balance(&env, balance1, in1);
        let left = adjusted0.mul(&adjusted1);
        let right = U256::from_u128(&env, reserves.reserve0)
            .mul(&U256::from_u128(&env, reserves.reserve1))
            .mul(&U256::from_u128(&env, FEE_DENOMINATOR * FEE_DENOMINATOR));
        if left < right {
            panic_with_error!(&env, PairError::InvariantViolation);
        }

        update(&env, balance0, balance1, reserves.reserve0, reserves.reserve1);

        emit_swap(
            &env,
            &sender,
            in0 as i128,
            in1 as i128,
            amount0_out,
            amount1_out,
            &to,
        );
        release_lock(&env);
    }

    // ========================================================
    // RECONCILIATION
    // ========================================================

    /// Pay out any balance above the accounted reserves without touching
    /// the pair's view of them.
    pub fn skim(env: Env, to: Address) {
        acquire_lock(&env);

        let config = read_config(&env);
        let reserves = read_reserves(&env);
        let pair_address = env.current_contract_address();

        let excess0 = checked_delta(&env, balance_of(&env, &config.token0), reserves.reserve0);
        let excess1 = checked_delta(&env, balance_of(&env, &config.token1), reserves.reserve1);

        if excess0 > 0 {
            token::Client::new(&env, &config.token0).transfer(
                &pair_address,
                &to,
                &to_i128(&env, excess0),
            );
        }
        if excess1 > 0 {
            token::Client::new(&env, &config.token1).transfer(
                &pair_address,
                &to,
                &to_i128(&env, excess1),
            );
        }

        release_lock(&env);
    }

    /// Force reserves to adopt the current balances.
    pub fn sync(env: Env) {
        acquire_lock(&env);

        let config = read_config(&env);
        let reserves = read_reserves(&env);
        let balance0 = balance_of(&env, &config.token0);
        let balance1 = balance_of(&env, &config.token1);
        update(&env, balance0, balance1, reserves.reserve0, reserves.reserve1);

        release_lock(&env);
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn balance_of(env: &Env, asset: &Address) -> u128 {
    let raw = token::Client::new(env, asset).balance(&env.current_contract_address());
    // A pair can never hold a negative amount of a well-formed token.
    if raw < 0 {
        panic_with_error!(env, PairError::Overflow);
    }
    raw as u128
}

fn as_amount(env: &Env, value: i128) -> u128 {
    if value < 0 {
        panic_with_error!(env, PairError::InvalidAmount);
    }
    value as u128
}

fn to_i128(env: &Env, value: u128) -> i128 {
    if value > i128::MAX as u128 {
        panic_with_error!(env, PairError::Overflow);
    }
    value as i128
}

fn checked_delta(env: &Env, balance: u128, reserve: u128) -> u128 {
    match balance.checked_sub(reserve) {
        Some(delta) => delta,
        None => panic_with_error!(env, PairError::Overflow),
    }
}

/// Fee-adjusted balance for the invariant check: balance*1000 - in*3.
fn adjusted_balance(env: &Env, balance: u128, amount_in: u128) -> U256 {
    U256::from_u128(env, balance)
        .mul(&U256::from_u128(env, FEE_DENOMINATOR))
        .sub(&U256::from_u128(env, amount_in).mul(&U256::from_u128(env, FEE_NUMERATOR)))
}

/// Input received on one side: balance above `reserve - out`, if any.
fn received(balance: u128, reserve: u128, out: u128) -> u128 {
    let expected = reserve - out;
    if balance > expected {
        balance - expected
    } else {
        0
    }
}

/// Adopt observed balances as reserves, folding elapsed time into the
/// cumulative prices first. Always the last mutation of an operation.
fn update(env: &Env, balance0: u128, balance1: u128, reserve0: u128, reserve1: u128) {
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        panic_with_error!(env, PairError::Overflow);
    }

    let reserves = read_reserves(env);
    let now = env.ledger().timestamp() as u32;
    // Unsigned wraparound is intentional; consumers difference samples.
    let elapsed = now.wrapping_sub(reserves.block_timestamp_last);

    if elapsed > 0 && reserve0 != 0 && reserve1 != 0 {
        let elapsed = U256::from_u32(env, elapsed);

        let delta0 = uq112::uqdiv(env, &uq112::encode(env, reserve1), reserve0).mul(&elapsed);
        let cumulative0 = wrapping_add(env, &read_price0_cumulative(env), &delta0);
        write_price0_cumulative(env, &cumulative0);

        let delta1 = uq112::uqdiv(env, &uq112::encode(env, reserve0), reserve1).mul(&elapsed);
        let cumulative1 = wrapping_add(env, &read_price1_cumulative(env), &delta1);
        write_price1_cumulative(env, &cumulative1);
    }

    write_reserves(
        env,
        &Reserves {
            reserve0: balance0,
            reserve1: balance1,
            block_timestamp_last: now,
        },
    );
    emit_sync(env, balance0, balance1);
}

/// Mint the protocol's share of √k growth since the last liquidity event,
/// if the factory has a fee recipient. Returns whether the fee is on.
fn mint_fee(env: &Env, reserve0: u128, reserve1: u128) -> bool {
    let config = read_config(env);
    let fee_to = FeeQueryClient::new(env, &config.factory).fee_to();
    let k_last = read_k_last(env);

    match fee_to {
        Some(recipient) => {
            if !u256_is_zero(&k_last) {
                let k = U256::from_u128(env, reserve0).mul(&U256::from_u128(env, reserve1));
                let root_k = isqrt(env, &k);
                let root_k_last = isqrt(env, &k_last);
                if root_k > root_k_last {
                    // One sixth of the growth goes to the protocol: the
                    // 5*rootK + rootKLast denominator leaves five sixths
                    // with liquidity providers.
                    let supply = read_total_supply(env) as u128;
                    let liquidity = mul_div(
                        env,
                        supply,
                        root_k - root_k_last,
                        5 * root_k + root_k_last,
                    );
                    if liquidity > 0 {
                        share::mint_shares(env, &recipient, to_i128(env, liquidity));
                    }
                }
            }
            true
        }
        None => {
            // Toggling the fee off forfeits accrual that was never
            // materialized; the next event starts from a clean slate.
            if !u256_is_zero(&k_last) {
                write_k_last(env, &U256::from_u32(env, 0));
            }
            false
        }
    }
}

fn write_k_from_reserves(env: &Env) {
    let reserves = read_reserves(env);
    let k = U256::from_u128(env, reserves.reserve0).mul(&U256::from_u128(env, reserves.reserve1));
    write_k_last(env, &k);
}
