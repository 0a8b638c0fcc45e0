//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Protocol-fee recipient; None disables the protocol fee
    pub fee_to: Option<Address>,
    /// Administrator allowed to rotate fee_to (and itself)
    pub fee_to_setter: Address,
    /// Wasm installed for future pair deployments
    pub pair_wasm_hash: BytesN<32>,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Factory config
    Config,
    /// Initialization flag
    Initialized,
    /// Pair address by asset pair; written under both orderings
    Pair(Address, Address),
    /// All pair addresses, in creation order
    PairList,
}
