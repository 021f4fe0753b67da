use core::ops::{BitAnd, BitXor, Not};
use soroban_sdk::contracttype;

/// A 256-bit flag vector, stored as two 128-bit halves.
///
/// Bit `0` is the least significant bit of `lo`, bit `255` the most
/// significant bit of `hi`.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Word256 {
    pub hi: u128,
    pub lo: u128,
}

/// Bits `0..=bit` of a 128-bit half
fn half_at_or_below(bit: u8) -> u128 {
    if bit >= 127 {
        u128::MAX
    } else {
        (1u128 << (bit + 1)) - 1
    }
}

impl Word256 {
    pub const ZERO: Self = Self { hi: 0, lo: 0 };
    pub const MAX: Self = Self {
        hi: u128::MAX,
        lo: u128::MAX,
    };

    /// Word with only `bit` set
    pub fn bit(bit: u8) -> Self {
        if bit < 128 {
            Self {
                hi: 0,
                lo: 1u128 << bit,
            }
        } else {
            Self {
                hi: 1u128 << (bit - 128),
                lo: 0,
            }
        }
    }

    /// Mask of bits `0..=bit`
    pub fn at_or_below(bit: u8) -> Self {
        if bit < 128 {
            Self {
                hi: 0,
                lo: half_at_or_below(bit),
            }
        } else {
            Self {
                hi: half_at_or_below(bit - 128),
                lo: u128::MAX,
            }
        }
    }

    /// Mask of bits `bit..=255`
    pub fn at_or_above(bit: u8) -> Self {
        if bit == 0 {
            Self::MAX
        } else {
            !Self::at_or_below(bit - 1)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    pub fn is_set(&self, bit: u8) -> bool {
        !(*self & Self::bit(bit)).is_zero()
    }

    /// Flip exactly one bit
    pub fn toggle(self, bit: u8) -> Self {
        self ^ Self::bit(bit)
    }

    /// Index (0-255) of the highest set bit, `None` for zero
    pub fn most_significant_bit(&self) -> Option<u8> {
        if self.hi != 0 {
            Some(255 - self.hi.leading_zeros() as u8)
        } else if self.lo != 0 {
            Some(127 - self.lo.leading_zeros() as u8)
        } else {
            None
        }
    }

    /// Index (0-255) of the lowest set bit, `None` for zero
    pub fn least_significant_bit(&self) -> Option<u8> {
        if self.lo != 0 {
            Some(self.lo.trailing_zeros() as u8)
        } else if self.hi != 0 {
            Some(128 + self.hi.trailing_zeros() as u8)
        } else {
            None
        }
    }
}

impl BitAnd for Word256 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            hi: self.hi & rhs.hi,
            lo: self.lo & rhs.lo,
        }
    }
}

impl BitXor for Word256 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            hi: self.hi ^ rhs.hi,
            lo: self.lo ^ rhs.lo,
        }
    }
}

impl Not for Word256 {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            hi: !self.hi,
            lo: !self.lo,
        }
    }
}
