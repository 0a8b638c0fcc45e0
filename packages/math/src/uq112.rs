// SPDX-License-Identifier: MIT
// UQ112x112 Fixed-Point Operations
//
// A nonnegative integer below 2^112 is encoded by multiplication with 2^112,
// giving a value below 2^224 held in a host U256. Encoding is exact; division
// truncates toward zero.

use soroban_sdk::{Env, U256};

use crate::constants::Q112;

/// Encode `x` as a UQ112x112 value.
///
/// Exact for all `x < 2^112`; callers keep inputs within the reserve bound.
#[inline]
pub fn encode(env: &Env, x: u128) -> U256 {
    U256::from_u128(env, x).mul(&U256::from_u128(env, Q112))
}

/// Divide a UQ112x112 value by a plain integer, yielding UQ112x112.
///
/// Truncating integer division. Division by zero traps in the host; every
/// call site in the pair guarantees a nonzero denominator.
#[inline]
pub fn uqdiv(env: &Env, q: &U256, y: u128) -> U256 {
    q.div(&U256::from_u128(env, y))
}
