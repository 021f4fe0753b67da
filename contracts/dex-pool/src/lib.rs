#![no_std]

mod events;
mod invariants;
mod liquidity;
mod storage;
mod tick;

use dex_guard::ContextGuard;
use dex_types::{Error, PoolConfig, PositionInfo, PositionKey, TickInfo};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};
use storage::{get_config, get_position, get_tick, set_config};

#[contract]
pub struct DexPool;

#[contractimpl]
impl DexPool {
    /// Create the pool with its immutable parameters.
    ///
    /// Called once, at deployment, by the factory.
    pub fn __constructor(
        env: Env,
        factory: Address,
        token0: Address,
        token1: Address,
        fee: u32,
        tick_spacing: i32,
    ) {
        if !invariants::tick_spacing_valid(tick_spacing) {
            panic_with_error!(&env, Error::InvalidTickSpacing);
        }

        let config = PoolConfig {
            factory,
            token0,
            token1,
            fee,
            tick_spacing,
            max_liquidity_per_tick: dex_types::max_liquidity_per_tick(tick_spacing),
        };
        // Validate token ordering
        if !invariants::tokens_ordered(&config) {
            panic_with_error!(&env, Error::TokenOrder);
        }
        set_config(&env, &config);

        if let Err(err) = ContextGuard::capture(&env) {
            panic_with_error!(&env, err);
        }
        log!(&env, "pool created", fee, tick_spacing);
    }

    /// Add liquidity to a position
    pub fn mint(
        env: Env,
        recipient: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: u128,
    ) -> Result<(), Error> {
        let direct = dex_guard::enter(&env)?;
        recipient.require_auth();
        liquidity::mint(&env, &direct, recipient, tick_lower, tick_upper, amount)
    }

    /// Remove liquidity from a position
    pub fn burn(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: u128,
    ) -> Result<(), Error> {
        let direct = dex_guard::enter(&env)?;
        owner.require_auth();
        liquidity::burn(&env, &direct, owner, tick_lower, tick_upper, amount)
    }

    /// Search up to `max_words` bitmap words for the next initialized tick.
    ///
    /// # Returns
    /// (tick, initialized) - the boundary reached when nothing was found
    pub fn find_next_initialized_tick(
        env: Env,
        tick: i32,
        lte: bool,
        max_words: u32,
    ) -> Result<(i32, bool), Error> {
        scan(&env, tick, lte, max_words)
    }

    // === View Functions ===

    /// Whether `tick` holds liquidity
    pub fn is_initialized(env: Env, tick: i32) -> bool {
        tick::is_initialized(&env, tick, get_config(&env).tick_spacing)
    }

    /// Find the next initialized tick within one word
    pub fn next_tick_in_word(env: Env, tick: i32, lte: bool) -> Result<(i32, bool), Error> {
        tick::next_initialized_tick_within_one_word(&env, tick, get_config(&env).tick_spacing, lte)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> PoolConfig {
        get_config(&env)
    }

    pub fn factory(env: Env) -> Address {
        get_config(&env).factory
    }

    /// Get token0 address
    pub fn token0(env: Env) -> Address {
        get_config(&env).token0
    }

    /// Get token1 address
    pub fn token1(env: Env) -> Address {
        get_config(&env).token1
    }

    /// Get fee
    pub fn fee(env: Env) -> u32 {
        get_config(&env).fee
    }

    /// Get tick spacing
    pub fn tick_spacing(env: Env) -> i32 {
        get_config(&env).tick_spacing
    }

    pub fn max_liquidity_per_tick(env: Env) -> u128 {
        get_config(&env).max_liquidity_per_tick
    }

    /// Get tick info
    pub fn get_tick(env: Env, tick: i32) -> TickInfo {
        get_tick(&env, tick)
    }

    /// Get position info
    pub fn get_position(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> PositionInfo {
        let key = PositionKey {
            owner,
            tick_lower,
            tick_upper,
        };
        get_position(&env, &key)
    }
}

/// Multi-word scan. Reachable from an unguarded entry point, so it checks
/// the execution context itself.
fn scan(env: &Env, tick: i32, lte: bool, max_words: u32) -> Result<(i32, bool), Error> {
    let direct = dex_guard::enter(env)?;
    let tick_spacing = get_config(env).tick_spacing;
    tick::find_next_initialized_tick(env, &direct, tick, tick_spacing, lte, max_words)
}
