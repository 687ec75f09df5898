//! Bitmask encoding for transport to the audio engine.
//!
//! Bit `i` (least significant first) carries step `i`. Any unsigned primitive
//! works as the carrier; steps past its width are dropped on encode and read
//! back as rests on decode.

use super::core::Pattern;
use num_traits::{PrimInt, Unsigned};

/// Number of bits in `T`.
pub fn bit_width<T: PrimInt>() -> usize {
    T::zero().count_zeros() as usize
}

/// Encode a pattern as a bitmask. Bits at or beyond `pattern.len()` are 0.
pub fn to_bitmask<T: PrimInt + Unsigned>(pattern: &Pattern) -> T {
    pattern
        .iter()
        .take(bit_width::<T>())
        .enumerate()
        .filter(|(_, onset)| *onset)
        .fold(T::zero(), |mask, (i, _)| mask | (T::one() << i))
}

/// Like [`to_bitmask`], but `None` when the pattern does not fit in `T`.
pub fn checked_to_bitmask<T: PrimInt + Unsigned>(pattern: &Pattern) -> Option<T> {
    if pattern.len() > bit_width::<T>() {
        return None;
    }
    Some(to_bitmask(pattern))
}

/// Decode `steps` steps from a bitmask.
pub fn from_bitmask<T: PrimInt + Unsigned>(mask: T, steps: usize) -> Pattern {
    let width = bit_width::<T>();
    (0..steps)
        .map(|i| i < width && (mask >> i) & T::one() == T::one())
        .collect()
}
