//! Bjorklund algorithm for Euclidean rhythm generation.

use super::core::Pattern;

/// Generate a Euclidean rhythm pattern using Bjorklund's algorithm.
/// Distributes `pulses` evenly across `steps` slots.
/// Returns a Vec<bool> where `true` = onset, `false` = rest.
pub fn bjorklund(pulses: usize, steps: usize) -> Vec<bool> {
    if steps == 0 {
        return vec![];
    }
    if pulses >= steps {
        return vec![true; steps];
    }
    if pulses == 0 {
        return vec![false; steps];
    }

    let mut head: Vec<Vec<bool>> = vec![vec![true]; pulses];
    let mut tail: Vec<Vec<bool>> = vec![vec![false]; steps - pulses];

    // A single leftover group can only rotate the result, never spread it further.
    while tail.len() > 1 {
        let count = head.len().min(tail.len());
        let leftover_head = head.split_off(count);
        let leftover_tail = tail.split_off(count);

        for (group, rest) in head.iter_mut().zip(tail) {
            group.extend(rest);
        }

        tail = if leftover_head.is_empty() {
            leftover_tail
        } else {
            leftover_head
        };
    }

    head.into_iter().chain(tail).flatten().collect()
}

/// Generate the Euclidean pattern E(`pulses`, `steps`) rotated right by `rotation`.
///
/// Total over every integer input:
/// - `steps <= 0` gives an empty pattern
/// - `pulses <= 0` gives `steps` rests
/// - `pulses >= steps` gives `steps` onsets
///
/// `rotation` may be negative or larger than `steps`; it is taken modulo `steps`.
pub fn generate(pulses: i64, steps: i64, rotation: i64) -> Pattern {
    if steps <= 0 {
        return Pattern::default();
    }
    let pulses = pulses.clamp(0, steps) as usize;
    Pattern::from(bjorklund(pulses, steps as usize)).rotated(rotation)
}
