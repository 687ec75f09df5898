//! Rotation and reversal.
//!
//! The pipeline order is fixed: generate, then rotate, then reverse. The two
//! transforms do not commute, and downstream consumers rely on this order.

use super::core::Pattern;

/// Rotate right by `rotation` steps: the last `r` steps move to the front.
///
/// `rotated[i] = pattern[(i - r) mod n]` with `r = rotation mod n`.
pub fn rotate(pattern: &Pattern, rotation: i64) -> Pattern {
    let len = pattern.len();
    if len == 0 {
        return pattern.clone();
    }
    let shift = rotation.rem_euclid(len as i64) as usize;
    let mut steps = pattern.as_slice().to_vec();
    steps.rotate_right(shift);
    Pattern::from(steps)
}

/// Reverse the step order when `reversed` is set, otherwise return a copy.
pub fn apply_reversal(pattern: &Pattern, reversed: bool) -> Pattern {
    if !reversed {
        return pattern.clone();
    }
    pattern.iter().rev().collect()
}
