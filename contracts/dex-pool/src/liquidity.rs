use crate::events;
use crate::invariants;
use crate::storage::{get_config, get_position, get_tick, set_position, set_tick};
use crate::tick::{add_delta, flip_tick, next_state, validate_ticks};
use dex_guard::Direct;
use dex_types::{Error, PositionKey};
use soroban_sdk::{log, Address, Env};

/// Mint (add) liquidity to a position
pub fn mint(
    env: &Env,
    direct: &Direct,
    recipient: Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: u128,
) -> Result<(), Error> {
    let liquidity_delta = checked_delta(amount)?;

    let key = PositionKey {
        owner: recipient,
        tick_lower,
        tick_upper,
    };
    modify_position(env, direct, &key, liquidity_delta)?;

    events::mint(env, &key.owner, tick_lower, tick_upper, amount);
    Ok(())
}

/// Remove liquidity from a position
pub fn burn(
    env: &Env,
    direct: &Direct,
    owner: Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: u128,
) -> Result<(), Error> {
    let liquidity_delta = checked_delta(amount)?;

    let key = PositionKey {
        owner,
        tick_lower,
        tick_upper,
    };
    modify_position(env, direct, &key, -liquidity_delta)?;

    events::burn(env, &key.owner, tick_lower, tick_upper, amount);
    Ok(())
}

fn checked_delta(amount: u128) -> Result<i128, Error> {
    if amount == 0 {
        return Err(Error::ZeroAmount);
    }
    i128::try_from(amount).map_err(|_| Error::LiquidityOverflow)
}

/// Apply a liquidity delta to a position and both of its boundary ticks.
///
/// Only reachable from guarded entry points, hence the `Direct` proof
/// instead of a second guard check. Every new state is computed before the
/// first write.
fn modify_position(
    env: &Env,
    _direct: &Direct,
    key: &PositionKey,
    liquidity_delta: i128,
) -> Result<(), Error> {
    let config = get_config(env);
    validate_ticks(key.tick_lower, key.tick_upper, config.tick_spacing)?;

    let mut position = get_position(env, key);
    position.liquidity =
        add_delta(position.liquidity, liquidity_delta).ok_or(Error::InsufficientLiquidity)?;

    let (lower, flipped_lower) = next_state(
        &get_tick(env, key.tick_lower),
        liquidity_delta,
        false, // lower tick
        config.max_liquidity_per_tick,
    )?;
    let (upper, flipped_upper) = next_state(
        &get_tick(env, key.tick_upper),
        liquidity_delta,
        true, // upper tick
        config.max_liquidity_per_tick,
    )?;

    set_tick(env, key.tick_lower, &lower);
    set_tick(env, key.tick_upper, &upper);

    // Update tick bitmap if ticks were flipped
    if flipped_lower {
        flip_tick(env, key.tick_lower, config.tick_spacing)?;
        log!(env, "tick flipped", key.tick_lower, lower.is_initialized());
    }
    if flipped_upper {
        flip_tick(env, key.tick_upper, config.tick_spacing)?;
        log!(env, "tick flipped", key.tick_upper, upper.is_initialized());
    }

    debug_assert!(invariants::tick_state_consistent(env, key.tick_lower));
    debug_assert!(invariants::tick_state_consistent(env, key.tick_upper));

    set_position(env, key, &position);
    Ok(())
}
