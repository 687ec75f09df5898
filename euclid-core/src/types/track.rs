//! Per-voice generation parameters
//!
//! A `TrackConfig` is a snapshot: every edit returns a new configuration and
//! leaves the old one untouched, so consumers can compare or keep revisions.

use crate::types::drum::DrumSound;
use crate::types::pattern::{apply_reversal, generate, EuclidParams, Pattern};

/// Generation parameters for one track.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackConfig {
    id: usize,
    name: String,
    pulses: i64,
    steps: i64,
    rotation: i64,
    reversed: bool,
}

impl TrackConfig {
    /// Raw constructor. Values are stored as given; the generator degrades
    /// out-of-range pulses on its own.
    pub fn new(id: usize, name: impl Into<String>, pulses: i64, steps: i64) -> Self {
        Self {
            id,
            name: name.into(),
            pulses,
            steps,
            rotation: 0,
            reversed: false,
        }
    }

    /// Track wired to a kit voice, named after it.
    pub fn for_voice(voice: DrumSound, pulses: i64, steps: i64) -> Self {
        Self::new(voice.index(), voice.display_name(), pulses, steps)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pulses(&self) -> i64 {
        self.pulses
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn rotation(&self) -> i64 {
        self.rotation
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Kit voice for this track's id, if it is one of the eight
    pub fn voice(&self) -> Option<DrumSound> {
        DrumSound::from_index(self.id)
    }

    /// New revision with `pulses` clamped to `[0, steps]`.
    pub fn with_pulses(&self, pulses: i64) -> Self {
        Self {
            pulses: pulses.clamp(0, self.steps.max(0)),
            ..self.clone()
        }
    }

    pub fn with_rotation(&self, rotation: i64) -> Self {
        Self {
            rotation,
            ..self.clone()
        }
    }

    pub fn with_reversed(&self, reversed: bool) -> Self {
        Self {
            reversed,
            ..self.clone()
        }
    }

    pub fn toggle_reversed(&self) -> Self {
        self.with_reversed(!self.reversed)
    }

    /// New revision with a different step count; pulses shrink to fit.
    pub fn with_steps(&self, steps: i64) -> Self {
        Self {
            steps,
            pulses: self.pulses.min(steps).max(0),
            ..self.clone()
        }
    }

    /// Apply `(k,n,r)` parameters in one edit.
    pub fn with_params(&self, params: &EuclidParams) -> Self {
        self.with_steps(params.steps)
            .with_pulses(params.pulses)
            .with_rotation(params.rotation)
    }

    pub fn params(&self) -> EuclidParams {
        EuclidParams::new(self.pulses, self.steps, self.rotation)
    }

    /// generate, rotate, then reverse
    pub fn pattern(&self) -> Pattern {
        let base = generate(self.pulses, self.steps, self.rotation);
        apply_reversal(&base, self.reversed)
    }

    /// Engine bitmask of [`TrackConfig::pattern`]
    pub fn bitmask(&self) -> u64 {
        self.pattern().to_bitmask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_return_new_revisions() {
        let original = TrackConfig::for_voice(DrumSound::Snare, 2, 16);
        let edited = original.with_pulses(5).with_rotation(3).toggle_reversed();

        assert_eq!(original.pulses(), 2);
        assert_eq!(original.rotation(), 0);
        assert!(!original.is_reversed());

        assert_eq!(edited.pulses(), 5);
        assert_eq!(edited.rotation(), 3);
        assert!(edited.is_reversed());
        assert_eq!(edited.id(), 1);
        assert_eq!(edited.name(), "Snare");
    }

    #[test]
    fn test_with_pulses_clamps() {
        let track = TrackConfig::new(0, "Kick", 4, 8);
        assert_eq!(track.with_pulses(12).pulses(), 8);
        assert_eq!(track.with_pulses(-3).pulses(), 0);
    }

    #[test]
    fn test_raw_constructor_keeps_out_of_range_pulses() {
        let track = TrackConfig::new(0, "Kick", 12, 8);
        assert_eq!(track.pulses(), 12);
        assert_eq!(track.pattern().to_string(), "xxxxxxxx");
    }

    #[test]
    fn test_with_steps_shrinks_pulses() {
        let track = TrackConfig::new(2, "HH Closed", 8, 16).with_steps(5);
        assert_eq!(track.steps(), 5);
        assert_eq!(track.pulses(), 5);
    }

    #[test]
    fn test_pattern_rotates_before_reversing() {
        let track = TrackConfig::new(7, "Cowbell", 2, 5)
            .with_rotation(1)
            .with_reversed(true);
        // x.x.. -> rotate 1 -> .x.x. -> reverse -> .x.x.
        assert_eq!(track.pattern().to_string(), ".x.x.");

        let track = TrackConfig::new(7, "Cowbell", 3, 8)
            .with_rotation(1)
            .with_reversed(true);
        // x..x..x. -> rotate 1 -> .x..x..x -> reverse -> x..x..x.
        assert_eq!(track.pattern().to_string(), "x..x..x.");
    }

    #[test]
    fn test_bitmask_includes_reversal() {
        let track = TrackConfig::new(0, "Kick", 1, 4);
        assert_eq!(track.bitmask(), 0b0001);
        assert_eq!(track.with_reversed(true).bitmask(), 0b1000);
    }

    #[test]
    fn test_with_params() {
        let params = EuclidParams::parse("(3,8,2)").unwrap();
        let track = TrackConfig::for_voice(DrumSound::Rim, 0, 16).with_params(&params);
        assert_eq!(track.params(), params);
        assert_eq!(track.pattern(), params.pattern());
    }

    #[test]
    fn test_voice() {
        assert_eq!(
            TrackConfig::new(4, "Clap", 0, 16).voice(),
            Some(DrumSound::Clap)
        );
        assert_eq!(TrackConfig::new(9, "Extra", 0, 16).voice(), None);
    }
}
