//! Factory error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization (1-9)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Pair creation (10-19)
    /// create_pair called with the same asset twice
    IdenticalAssets = 10,
    /// A pair for this unordered asset pair is already registered
    PairExists = 11,

    // Admin (20-29)
    /// Caller is not the fee_to_setter
    Forbidden = 20,
}
