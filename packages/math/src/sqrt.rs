// SPDX-License-Identifier: MIT
// Integer square root over the host U256.

use soroban_sdk::{Env, U256};

/// Floor square root via Babylonian iteration.
///
/// Total for every `v < 2^256` (the result always fits 128 bits) and
/// monotone: `x <= y` implies `isqrt(x) <= isqrt(y)`.
pub fn isqrt(env: &Env, value: &U256) -> u128 {
    let zero = U256::from_u32(env, 0);
    if *value == zero {
        return 0;
    }

    let three = U256::from_u32(env, 3);
    if *value <= three {
        return 1;
    }

    let one = U256::from_u32(env, 1);
    let two = U256::from_u32(env, 2);

    let mut z = value.clone();
    let mut x = value.div(&two).add(&one);
    while x < z {
        z = x.clone();
        x = value.div(&x).add(&x).div(&two);
    }

    // Converged z is floor(sqrt(value)), which is below 2^128.
    z.to_u128().unwrap_or(u128::MAX)
}
