#![no_std]

mod address;
mod error;
mod pool;
mod position;
mod tick;

pub use address::*;
pub use error::*;
pub use pool::*;
pub use position::*;
pub use tick::*;

/// Minimum tick index
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = 887272;

/// Fee amount in hundredths of a basis point (1e-6)
/// 500 = 0.05%, 3000 = 0.3%, 10000 = 1%
pub type Fee = u32;

/// Exclusive upper bound on an enabled fee (100%)
pub const MAX_FEE: Fee = 1_000_000;

/// Exclusive upper bound on a tick spacing.
/// Keeps a single `next_initialized_tick_within_one_word` call from
/// jumping further than the tick range in one step.
pub const MAX_TICK_SPACING: i32 = 16384;

/// Fee tiers installed when a factory is constructed
pub const DEFAULT_FEE_TIERS: [(Fee, i32); 3] = [
    (500, 10),    // 0.05%
    (3000, 60),   // 0.3%
    (10000, 200), // 1%
];

/// Calculate maximum liquidity per tick for a given tick spacing
pub fn max_liquidity_per_tick(tick_spacing: i32) -> u128 {
    let min_tick = (MIN_TICK / tick_spacing) * tick_spacing;
    let max_tick = (MAX_TICK / tick_spacing) * tick_spacing;
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;
    u128::MAX / num_ticks
}
