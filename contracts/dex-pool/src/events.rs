use soroban_sdk::{symbol_short, Address, Env};

/// Liquidity added to a range: (owner), (tick_lower, tick_upper, amount)
pub fn mint(env: &Env, owner: &Address, tick_lower: i32, tick_upper: i32, amount: u128) {
    env.events().publish(
        (symbol_short!("mint"), owner.clone()),
        (tick_lower, tick_upper, amount),
    );
}

/// Liquidity removed from a range: (owner), (tick_lower, tick_upper, amount)
pub fn burn(env: &Env, owner: &Address, tick_lower: i32, tick_upper: i32, amount: u128) {
    env.events().publish(
        (symbol_short!("burn"), owner.clone()),
        (tick_lower, tick_upper, amount),
    );
}
