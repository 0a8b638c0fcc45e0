// Pair events module
// One Symbol topic per event kind; share-ledger mints and burns carry a
// None counterparty.

use soroban_sdk::{Address, Env, Symbol};

/// Emitted on every share movement, including mints (from = None) and
/// burns (to = None)
/// Topics: ("Transfer",)
/// Data: (from, to, value)
pub fn emit_transfer(env: &Env, from: Option<Address>, to: Option<Address>, value: i128) {
    env.events()
        .publish((Symbol::new(env, "Transfer"),), (from, to, value));
}

/// Topics: ("Approval",)
/// Data: (owner, spender, value)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, value: i128) {
    env.events().publish(
        (Symbol::new(env, "Approval"),),
        (owner.clone(), spender.clone(), value),
    );
}

/// Emitted when liquidity is deposited
/// Topics: ("Mint",)
/// Data: (sender, amount0, amount1)
pub fn emit_mint(env: &Env, sender: &Address, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (sender.clone(), amount0, amount1),
    );
}

/// Emitted when liquidity is withdrawn
/// Topics: ("Burn",)
/// Data: (sender, amount0, amount1, to)
pub fn emit_burn(env: &Env, sender: &Address, amount0: i128, amount1: i128, to: &Address) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (sender.clone(), amount0, amount1, to.clone()),
    );
}

/// Topics: ("Swap",)
/// Data: (sender, amount0_in, amount1_in, amount0_out, amount1_out, to)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    amount0_in: i128,
    amount1_in: i128,
    amount0_out: i128,
    amount1_out: i128,
    to: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            sender.clone(),
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            to.clone(),
        ),
    );
}

/// Emitted whenever reserves adopt observed balances
/// Topics: ("Sync",)
/// Data: (reserve0, reserve1)
pub fn emit_sync(env: &Env, reserve0: u128, reserve1: u128) {
    env.events()
        .publish((Symbol::new(env, "Sync"),), (reserve0, reserve1));
}
