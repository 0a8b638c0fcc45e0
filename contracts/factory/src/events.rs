// Factory events module

use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted when the factory is initialized
/// Topics: ("FactoryInit",)
/// Data: (fee_to_setter, pair_wasm_hash)
pub fn emit_factory_initialized(env: &Env, fee_to_setter: &Address, pair_wasm_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (fee_to_setter.clone(), pair_wasm_hash.clone()),
    );
}

/// Emitted when a new pair is created
/// Topics: ("PairCreated",)
/// Data: (token0, token1, pair, index); index is 1-based, equal to the
/// registry length after insertion
pub fn emit_pair_created(
    env: &Env,
    token0: &Address,
    token1: &Address,
    pair: &Address,
    index: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PairCreated"),),
        (token0.clone(), token1.clone(), pair.clone(), index),
    );
}

/// Emitted when the protocol-fee recipient changes
/// Topics: ("FeeToUpd",)
/// Data: (new_fee_to)
pub fn emit_fee_to_updated(env: &Env, fee_to: &Option<Address>) {
    env.events()
        .publish((Symbol::new(env, "FeeToUpd"),), (fee_to.clone(),));
}

/// Emitted when the administrator changes
/// Topics: ("SetterUpd",)
/// Data: (old_setter, new_setter)
pub fn emit_fee_to_setter_updated(env: &Env, old_setter: &Address, new_setter: &Address) {
    env.events().publish(
        (Symbol::new(env, "SetterUpd"),),
        (old_setter.clone(), new_setter.clone()),
    );
}

/// Emitted when the pair wasm is rotated
/// Topics: ("WasmUpdated",)
/// Data: (new_hash)
pub fn emit_wasm_hash_updated(env: &Env, new_hash: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "WasmUpdated"),), (new_hash.clone(),));
}
