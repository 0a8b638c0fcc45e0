// SPDX-License-Identifier: MIT
// 256-bit helpers on top of the host U256.

use soroban_sdk::{Bytes, Env, U256};

/// Split a U256 into (high, low) 128-bit limbs.
pub fn to_limbs(v: &U256) -> (u128, u128) {
    let mut buf = [0u8; 32];
    v.to_be_bytes().copy_into_slice(&mut buf);
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    hi.copy_from_slice(&buf[..16]);
    lo.copy_from_slice(&buf[16..]);
    (u128::from_be_bytes(hi), u128::from_be_bytes(lo))
}

/// Rebuild a U256 from (high, low) 128-bit limbs.
pub fn from_limbs(env: &Env, hi: u128, lo: u128) -> U256 {
    let mut buf = [0u8; 32];
    buf[..16].copy_from_slice(&hi.to_be_bytes());
    buf[16..].copy_from_slice(&lo.to_be_bytes());
    U256::from_be_bytes(env, &Bytes::from_array(env, &buf))
}

/// Addition modulo 2^256.
///
/// The host U256 traps on overflow; the cumulative-price accumulators need
/// well-defined wraparound, so the sum is computed limb-wise.
pub fn wrapping_add(env: &Env, a: &U256, b: &U256) -> U256 {
    let (a_hi, a_lo) = to_limbs(a);
    let (b_hi, b_lo) = to_limbs(b);
    let (lo, carry) = a_lo.overflowing_add(b_lo);
    let hi = a_hi.wrapping_add(b_hi).wrapping_add(carry as u128);
    from_limbs(env, hi, lo)
}

#[inline]
pub fn u256_is_zero(v: &U256) -> bool {
    let (hi, lo) = to_limbs(v);
    hi == 0 && lo == 0
}

/// (a * b) / denominator with the product widened through U256.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("mul_div: divide by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    match result.to_u128() {
        Some(v) => v,
        None => panic!("mul_div: overflow"),
    }
}
