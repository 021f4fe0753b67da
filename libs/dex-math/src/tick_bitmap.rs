//! Sparse bitmap over compressed ticks.
//!
//! A compressed tick `c = floor(tick / tick_spacing)` lives in word `c >> 8`
//! at bit `c mod 256`. Floor division keeps negative ticks packed next to
//! positive ones: compressed `-1` is bit 255 of word `-1`, right below bit 0
//! of word `0`.

use crate::bit_math::Word256;
use dex_types::Error;

/// Number of compressed ticks covered by one bitmap word
pub const WORD_SIZE: i32 = 256;

/// Backing storage for bitmap words. Absent words read as zero.
pub trait BitmapStore {
    fn word(&self, word_pos: i32) -> Word256;

    fn set_word(&mut self, word_pos: i32, word: Word256);
}

/// Floor division of `tick` by a positive `tick_spacing`
pub fn compress(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing)
}

/// Word index and bit position of a compressed tick
pub fn position(compressed: i32) -> (i32, u8) {
    (compressed >> 8, compressed.rem_euclid(WORD_SIZE) as u8)
}

/// Flip the initialized state of `tick`. No other tick changes.
pub fn flip_tick<S: BitmapStore>(store: &mut S, tick: i32, tick_spacing: i32) -> Result<(), Error> {
    if tick.rem_euclid(tick_spacing) != 0 {
        return Err(Error::TickNotOnSpacing);
    }

    let (word_pos, bit_pos) = position(compress(tick, tick_spacing));
    let word = store.word(word_pos).toggle(bit_pos);
    store.set_word(word_pos, word);
    Ok(())
}

pub fn is_initialized<S: BitmapStore>(store: &S, tick: i32, tick_spacing: i32) -> bool {
    let (word_pos, bit_pos) = position(compress(tick, tick_spacing));
    store.word(word_pos).is_set(bit_pos)
}

/// Find the next initialized tick within one word.
///
/// With `lte` the search covers the current tick and everything below it in
/// the same word. Otherwise it starts one compressed tick to the right and
/// covers everything above that in the starting tick's word. When nothing is
/// set the word boundary in the search direction is returned with `false`,
/// so a caller can keep stepping one word at a time.
///
/// `tick` must lie within [MIN_TICK, MAX_TICK]; callers check the bounds.
///
/// Returns (tick, initialized)
pub fn next_initialized_tick_within_one_word<S: BitmapStore>(
    store: &S,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> (i32, bool) {
    let compressed = compress(tick, tick_spacing);

    if lte {
        let (word_pos, bit_pos) = position(compressed);
        let masked = store.word(word_pos) & Word256::at_or_below(bit_pos);

        match masked.most_significant_bit() {
            Some(msb) => ((compressed - (bit_pos - msb) as i32) * tick_spacing, true),
            None => ((compressed - bit_pos as i32) * tick_spacing, false),
        }
    } else {
        let start = compressed + 1;
        let (word_pos, bit_pos) = position(start);
        let masked = store.word(word_pos) & Word256::at_or_above(bit_pos);

        match masked.least_significant_bit() {
            Some(lsb) => ((start + (lsb - bit_pos) as i32) * tick_spacing, true),
            None => ((start + (255 - bit_pos) as i32) * tick_spacing, false),
        }
    }
}
