use dex_types::Fee;
use soroban_sdk::{Address, Env, Symbol};

pub fn pool_created(
    env: &Env,
    token0: &Address,
    token1: &Address,
    fee: Fee,
    tick_spacing: i32,
    pool: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "pool_created"),),
        (token0.clone(), token1.clone(), fee, tick_spacing, pool.clone()),
    );
}

pub fn fee_enabled(env: &Env, fee: Fee, tick_spacing: i32) {
    env.events()
        .publish((Symbol::new(env, "fee_enabled"),), (fee, tick_spacing));
}

/// `old` is `None` when the factory is first constructed
pub fn owner_changed(env: &Env, old: Option<Address>, new: &Address) {
    env.events()
        .publish((Symbol::new(env, "owner_changed"),), (old, new.clone()));
}
