// Pair type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// PAIR CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct PairConfig {
    /// Factory that deployed this pair
    pub factory: Address,
    /// First asset (canonical order: token0 < token1)
    pub token0: Address,
    /// Second asset
    pub token1: Address,
}

// ============================================================
// RESERVES
// ============================================================

/// Reserve snapshot.
///
/// Both reserves and the timestamp live in one storage entry so they are
/// read and written atomically. Reserves never exceed 112 bits.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reserves {
    pub reserve0: u128,
    pub reserve1: u128,
    /// Ledger timestamp mod 2^32 at the last reserve update
    pub block_timestamp_last: u32,
}
