#![no_std]

pub mod bit_math;
pub mod tick_bitmap;

pub use bit_math::*;
pub use tick_bitmap::*;
