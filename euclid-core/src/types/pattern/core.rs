//! Core Pattern struct and its conversions.

use super::codec;
use super::transform;
use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered onset/rest sequence; index = time step.
///
/// Patterns are derived values: they come out of the generator and the
/// transforms and are never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    steps: Vec<bool>,
}

impl Pattern {
    pub fn new(steps: Vec<bool>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of onsets
    pub fn onsets(&self) -> usize {
        self.steps.iter().filter(|&&onset| onset).count()
    }

    /// Step indices that carry an onset, in order
    pub fn onset_positions(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(i, &onset)| onset.then_some(i))
            .collect()
    }

    /// Whether step `index` is an onset (`false` past the end)
    pub fn is_onset(&self, index: usize) -> bool {
        self.steps.get(index).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.steps.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.steps
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.steps
    }

    /// Steps as 0/1 values, the form the web front end consumes
    pub fn to_bits(&self) -> Vec<u8> {
        self.steps.iter().map(|&onset| onset as u8).collect()
    }

    /// Build from 0/1 values; anything non-zero is an onset.
    pub fn from_bits(bits: &[u8]) -> Self {
        bits.iter().map(|&bit| bit != 0).collect()
    }

    /// Rotate right by `rotation` steps (see [`transform::rotate`]).
    pub fn rotated(&self, rotation: i64) -> Self {
        transform::rotate(self, rotation)
    }

    /// Reverse the step order.
    pub fn reversed(&self) -> Self {
        transform::apply_reversal(self, true)
    }

    /// Bitmask with bit `i` set for an onset at step `i`.
    ///
    /// Steps past 64 are dropped; use [`codec::checked_to_bitmask`] to detect that.
    pub fn to_bitmask(&self) -> u64 {
        codec::to_bitmask(self)
    }

    pub fn from_bitmask(mask: u64, steps: usize) -> Self {
        codec::from_bitmask(mask, steps)
    }

    /// Grid for terminal output: `●` onsets, `·` rests, beats grouped by
    /// four, and the step under the playhead drawn inverted.
    #[cfg(feature = "colored")]
    pub fn colored(&self, current_step: Option<usize>) -> String {
        use colored::Colorize;

        let mut out = String::new();
        for (i, &onset) in self.steps.iter().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            let cell = match (onset, current_step == Some(i)) {
                (true, true) => "●".black().on_bright_yellow(),
                (false, true) => "·".black().on_white(),
                (true, false) => "●".bright_yellow().bold(),
                (false, false) => "·".dimmed(),
            };
            out.push_str(&cell.to_string());
        }
        out
    }
}

impl From<Vec<bool>> for Pattern {
    fn from(steps: Vec<bool>) -> Self {
        Self::new(steps)
    }
}

impl FromIterator<bool> for Pattern {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &onset in &self.steps {
            f.write_str(if onset { "x" } else { "." })?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    /// Parse a step grid such as `"x..x..x."` or `"1001 0010"`.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(i, c)| match c {
                'x' | 'X' | '1' => Ok(true),
                '.' | '-' | '_' | '0' => Ok(false),
                other => Err(anyhow!(
                    "Unexpected '{}' at step {} (use 'x' for onsets and '.' for rests)",
                    other,
                    i
                )),
            })
            .collect()
    }
}
