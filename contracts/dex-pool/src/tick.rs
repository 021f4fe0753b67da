use crate::invariants::{tick_in_bounds, tick_on_spacing, tick_range_valid};
use crate::storage::{PoolBitmap, MAX_SEARCH_WORDS};
use dex_guard::Direct;
use dex_types::{Error, TickInfo, MAX_TICK, MIN_TICK};
use soroban_sdk::Env;

/// Add a signed delta to an unsigned amount, `None` on under/overflow
pub fn add_delta(x: u128, y: i128) -> Option<u128> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs())
    } else {
        x.checked_add(y as u128)
    }
}

/// Compute a tick's state after a liquidity delta without writing it.
///
/// Returns the new info and whether the tick was flipped (gross liquidity
/// moved between zero and non-zero).
pub fn next_state(
    info: &TickInfo,
    liquidity_delta: i128,
    upper: bool,
    max_liquidity: u128,
) -> Result<(TickInfo, bool), Error> {
    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = match add_delta(liquidity_gross_before, liquidity_delta) {
        Some(gross) => gross,
        None if liquidity_delta < 0 => return Err(Error::InsufficientLiquidity),
        None => return Err(Error::LiquidityOverflow),
    };

    if liquidity_gross_after > max_liquidity {
        return Err(Error::LiquidityOverflow);
    }

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    // Update liquidity_net (add for lower tick, subtract for upper tick)
    let liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(Error::LiquidityOverflow)?;

    Ok((
        TickInfo {
            liquidity_gross: liquidity_gross_after,
            liquidity_net,
        },
        flipped,
    ))
}

/// Validate a tick range against the pool's spacing and the tick bounds
pub fn validate_ticks(tick_lower: i32, tick_upper: i32, tick_spacing: i32) -> Result<(), Error> {
    if !tick_range_valid(tick_lower, tick_upper) {
        return Err(Error::InvalidTickRange);
    }
    if !tick_in_bounds(tick_lower) || !tick_in_bounds(tick_upper) {
        return Err(Error::TickOutOfBounds);
    }
    if !tick_on_spacing(tick_lower, tick_spacing) || !tick_on_spacing(tick_upper, tick_spacing) {
        return Err(Error::TickNotOnSpacing);
    }
    Ok(())
}

// === Tick Bitmap Operations ===
// 256 compressed ticks per word, see dex_math::tick_bitmap

/// Flip a tick in the bitmap
pub fn flip_tick(env: &Env, tick: i32, tick_spacing: i32) -> Result<(), Error> {
    dex_math::flip_tick(&mut PoolBitmap::new(env), tick, tick_spacing)
}

/// Ticks off the spacing are never initialized
pub fn is_initialized(env: &Env, tick: i32, tick_spacing: i32) -> bool {
    tick.rem_euclid(tick_spacing) == 0
        && dex_math::is_initialized(&PoolBitmap::new(env), tick, tick_spacing)
}

/// Find the next initialized tick within one word
/// Returns (tick, initialized)
pub fn next_initialized_tick_within_one_word(
    env: &Env,
    tick: i32,
    tick_spacing: i32,
    lte: bool, // less than or equal (searching left)
) -> Result<(i32, bool), Error> {
    if !tick_in_bounds(tick) {
        return Err(Error::TickOutOfBounds);
    }
    Ok(dex_math::next_initialized_tick_within_one_word(
        &PoolBitmap::new(env),
        tick,
        tick_spacing,
        lte,
    ))
}

/// Step word by word from `tick` until an initialized tick, the tick bounds
/// or `max_words` words have been searched.
///
/// Returns (tick, initialized); when nothing was found the tick is the last
/// boundary reached, clamped to [MIN_TICK, MAX_TICK].
pub fn find_next_initialized_tick(
    env: &Env,
    _direct: &Direct,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
    max_words: u32,
) -> Result<(i32, bool), Error> {
    if max_words == 0 || max_words > MAX_SEARCH_WORDS {
        return Err(Error::InvalidSearchWindow);
    }
    if !tick_in_bounds(tick) {
        return Err(Error::TickOutOfBounds);
    }

    let bitmap = PoolBitmap::new(env);
    let mut cursor = tick;
    let mut boundary = tick;

    for _ in 0..max_words {
        let (next, initialized) =
            dex_math::next_initialized_tick_within_one_word(&bitmap, cursor, tick_spacing, lte);
        if initialized {
            return Ok((next, true));
        }

        if lte && next <= MIN_TICK {
            return Ok((MIN_TICK, false));
        }
        if !lte && next >= MAX_TICK {
            return Ok((MAX_TICK, false));
        }

        boundary = next;
        // Left searches include the start tick, so step past the word's
        // lowest tick; right searches already start one tick over.
        cursor = if lte { next - 1 } else { next };
    }

    Ok((boundary, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{get_tick, get_tick_bitmap_word, set_tick};
    use soroban_sdk::Env;

    /// Helper to run test code within a contract context
    fn with_contract<F, R>(env: &Env, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let (contract_id, _) = crate::tests::register_pool(env, 60);
        env.as_contract(&contract_id, f)
    }

    // === next_state tests ===

    #[test]
    fn test_next_state_initializes_tick() {
        let (info, flipped) = next_state(&TickInfo::new(), 1000, false, u128::MAX).unwrap();

        assert!(flipped, "First liquidity addition should flip tick");
        assert!(info.is_initialized());
        assert_eq!(info.liquidity_gross, 1000);
        assert_eq!(info.liquidity_net, 1000);
    }

    #[test]
    fn test_next_state_add_liquidity_does_not_flip() {
        let (info, _) = next_state(&TickInfo::new(), 1000, false, u128::MAX).unwrap();
        let (info, flipped) = next_state(&info, 500, false, u128::MAX).unwrap();

        assert!(!flipped, "Adding more liquidity should not flip");
        assert_eq!(info.liquidity_gross, 1500);
        assert_eq!(info.liquidity_net, 1500, "Lower tick adds to liquidity_net");
    }

    #[test]
    fn test_next_state_upper_tick() {
        let (info, _) = next_state(&TickInfo::new(), 1000, true, u128::MAX).unwrap();

        assert_eq!(info.liquidity_gross, 1000);
        assert_eq!(info.liquidity_net, -1000, "Upper tick subtracts from liquidity_net");
    }

    #[test]
    fn test_next_state_remove_partial_and_all() {
        let (info, _) = next_state(&TickInfo::new(), 1000, false, u128::MAX).unwrap();

        let (partial, flipped) = next_state(&info, -400, false, u128::MAX).unwrap();
        assert!(!flipped, "Partial removal should not flip");
        assert_eq!(partial.liquidity_gross, 600);

        let (empty, flipped) = next_state(&info, -1000, false, u128::MAX).unwrap();
        assert!(flipped, "Removing all liquidity should flip tick");
        assert!(!empty.is_initialized());
        assert_eq!(empty.liquidity_net, 0);
    }

    #[test]
    fn test_next_state_exceeds_max_liquidity() {
        let result = next_state(&TickInfo::new(), 2000, false, 1000);
        assert_eq!(result, Err(Error::LiquidityOverflow));
    }

    #[test]
    fn test_next_state_underflow() {
        let (info, _) = next_state(&TickInfo::new(), 100, false, u128::MAX).unwrap();
        assert_eq!(next_state(&info, -101, false, u128::MAX), Err(Error::InsufficientLiquidity));
    }

    // === validate_ticks tests ===

    #[test]
    fn test_validate_ticks() {
        assert_eq!(validate_ticks(-120, 120, 60), Ok(()));
        assert_eq!(validate_ticks(120, 120, 60), Err(Error::InvalidTickRange));
        assert_eq!(validate_ticks(120, -120, 60), Err(Error::InvalidTickRange));
        assert_eq!(validate_ticks(MIN_TICK - 1, 0, 1), Err(Error::TickOutOfBounds));
        assert_eq!(validate_ticks(0, MAX_TICK + 1, 1), Err(Error::TickOutOfBounds));
        assert_eq!(validate_ticks(-61, 120, 60), Err(Error::TickNotOnSpacing));
        assert_eq!(validate_ticks(-60, 121, 60), Err(Error::TickNotOnSpacing));
    }

    // === bitmap tests ===

    #[test]
    fn test_flip_tick_in_storage() {
        let env = Env::default();
        with_contract(&env, || {
            flip_tick(&env, -60, 60).unwrap();
            assert!(is_initialized(&env, -60, 60));
            assert!(!is_initialized(&env, 0, 60));

            flip_tick(&env, -60, 60).unwrap();
            assert!(!is_initialized(&env, -60, 60));
            assert!(get_tick_bitmap_word(&env, -1).is_zero());
        });
    }

    #[test]
    fn test_flip_tick_off_spacing() {
        let env = Env::default();
        with_contract(&env, || {
            assert_eq!(flip_tick(&env, 30, 60), Err(Error::TickNotOnSpacing));
        });
    }

    #[test]
    fn test_next_within_one_word_rejects_out_of_bounds() {
        let env = Env::default();
        with_contract(&env, || {
            for tick in [i32::MIN, MIN_TICK - 1, MAX_TICK + 1, i32::MAX] {
                for lte in [true, false] {
                    assert_eq!(
                        next_initialized_tick_within_one_word(&env, tick, 60, lte),
                        Err(Error::TickOutOfBounds)
                    );
                }
            }
            assert_eq!(
                next_initialized_tick_within_one_word(&env, MAX_TICK, 1, false),
                Ok((MAX_TICK - MAX_TICK.rem_euclid(256) + 255, false))
            );
        });
    }

    #[test]
    fn test_set_tick_removes_empty() {
        let env = Env::default();
        with_contract(&env, || {
            let info = TickInfo {
                liquidity_gross: 10,
                liquidity_net: -10,
            };
            set_tick(&env, 120, &info);
            assert_eq!(get_tick(&env, 120), info);

            set_tick(&env, 120, &TickInfo::new());
            assert_eq!(get_tick(&env, 120), TickInfo::new());
        });
    }
}
