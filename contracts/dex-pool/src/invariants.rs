// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Invariant checking functions that express the properties the pool must
// keep across every mint and burn. The pure checks take plain values; the
// storage checks read the pool's own tick and bitmap entries.
//
// INVARIANT CATEGORIES:
//
// 1. CONFIG INVARIANTS
//    - Tokens are strictly ordered
//    - Tick spacing is positive and bounded
//
// 2. TICK INVARIANTS
//    - Tick is within bounds and on spacing
//    - Tick bitmap is consistent with tick state
//    - Gross liquidity per tick is bounded
//
// 3. POSITION INVARIANTS
//    - tick_lower < tick_upper
//
// ============================================================================

use crate::storage::{get_config, get_tick};
use crate::tick::is_initialized;
use dex_types::{PoolConfig, MAX_TICK, MAX_TICK_SPACING, MIN_TICK};
use soroban_sdk::Env;

// ============================================================================
// CONFIG INVARIANTS
// ============================================================================

/// Invariant: tokens are canonically ordered
///
/// Property:
///   config.token0 < config.token1
pub fn tokens_ordered(config: &PoolConfig) -> bool {
    config.token0 < config.token1
}

/// Invariant: tick spacing is usable
///
/// Property:
///   0 < tick_spacing < MAX_TICK_SPACING
pub fn tick_spacing_valid(tick_spacing: i32) -> bool {
    tick_spacing > 0 && tick_spacing < MAX_TICK_SPACING
}

// ============================================================================
// TICK INVARIANTS
// ============================================================================

/// Invariant: tick is within valid bounds
///
/// Property:
///   MIN_TICK <= tick <= MAX_TICK
pub fn tick_in_bounds(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Invariant: tick is on spacing
///
/// Property:
///   tick % tick_spacing == 0
pub fn tick_on_spacing(tick: i32, tick_spacing: i32) -> bool {
    tick % tick_spacing == 0
}

/// Invariant: tick bitmap consistency
///
/// Property:
///   tick is initialized in storage IFF bit is set in bitmap
pub fn tick_bitmap_consistent(tick_initialized: bool, bitmap_bit_set: bool) -> bool {
    tick_initialized == bitmap_bit_set
}

/// Invariant: max liquidity per tick is respected
///
/// Property:
///   tick.liquidity_gross <= config.max_liquidity_per_tick
pub fn tick_liquidity_bounded(tick_liquidity_gross: u128, max_liquidity_per_tick: u128) -> bool {
    tick_liquidity_gross <= max_liquidity_per_tick
}

/// Check every tick invariant for one stored tick
pub fn tick_state_consistent(env: &Env, tick: i32) -> bool {
    let config = get_config(env);
    let info = get_tick(env, tick);

    if !tick_liquidity_bounded(info.liquidity_gross, config.max_liquidity_per_tick) {
        return false;
    }
    if !tick_in_bounds(tick) || !tick_on_spacing(tick, config.tick_spacing) {
        // Nothing may ever be stored for an unusable tick
        return !info.is_initialized();
    }
    tick_bitmap_consistent(info.is_initialized(), is_initialized(env, tick, config.tick_spacing))
}

// ============================================================================
// POSITION INVARIANTS
// ============================================================================

/// Invariant: tick_lower < tick_upper for a position
///
/// Property:
///   tick_lower < tick_upper
pub fn tick_range_valid(tick_lower: i32, tick_upper: i32) -> bool {
    tick_lower < tick_upper
}

// ============================================================================
// TESTS
// ============================================================================
