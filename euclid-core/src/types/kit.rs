//! The eight-voice track set shared by the grid and the engine

use crate::types::drum::DrumSound;
use crate::types::preset::RhythmPreset;
use crate::types::track::TrackConfig;

/// Step count a fresh kit starts with
pub const DEFAULT_STEPS: i64 = 16;
/// Default upper bound for the global step count
pub const DEFAULT_MAX_STEPS: i64 = 16;
/// Widest pattern the engine's 32-bit pattern endpoints can carry
pub const MAX_STEPS_LIMIT: i64 = 32;

/// All tracks plus the global step count.
///
/// Like [`TrackConfig`], a `Kit` is never edited in place; every `with_*`
/// method returns the next revision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kit {
    tracks: Vec<TrackConfig>,
    steps: i64,
    max_steps: i64,
}

impl Kit {
    /// Default kit: four-on-the-floor kick, backbeat snare, eighth hats.
    pub fn new(steps: i64) -> Self {
        let steps = steps.clamp(1, DEFAULT_MAX_STEPS);
        let tracks = DrumSound::ALL
            .iter()
            .map(|&voice| {
                let pulses = match voice {
                    DrumSound::Kick => 4,
                    DrumSound::Snare => 2,
                    DrumSound::HiHat => 8,
                    _ => 0,
                };
                TrackConfig::for_voice(voice, 0, steps).with_pulses(pulses)
            })
            .collect();

        Self {
            tracks,
            steps,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Raise or lower the step ceiling (1 to [`MAX_STEPS_LIMIT`]); the
    /// current step count is clamped into the new range.
    pub fn with_max_steps(&self, max_steps: i64) -> Self {
        let next = Self {
            max_steps: max_steps.clamp(1, MAX_STEPS_LIMIT),
            ..self.clone()
        };
        if next.steps > next.max_steps {
            next.with_global_steps(next.max_steps)
        } else {
            next
        }
    }

    pub fn tracks(&self) -> &[TrackConfig] {
        &self.tracks
    }

    pub fn track(&self, id: usize) -> Option<&TrackConfig> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    /// Resolve a track by index (`"3"`) or voice name (`"oh"`, `"cowbell"`).
    pub fn find_track(&self, query: &str) -> Option<&TrackConfig> {
        let query = query.trim();
        if let Ok(id) = query.parse::<usize>() {
            return self.track(id);
        }
        let voice = DrumSound::from_name(query)?;
        self.track(voice.index())
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn max_steps(&self) -> i64 {
        self.max_steps
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Replace the track with the same id. Unknown ids leave the kit as is.
    pub fn with_track(&self, config: TrackConfig) -> Self {
        let tracks = self
            .tracks
            .iter()
            .map(|t| {
                if t.id() == config.id() {
                    config.clone()
                } else {
                    t.clone()
                }
            })
            .collect();
        Self {
            tracks,
            ..self.clone()
        }
    }

    /// Set every track to `steps` (clamped to `[1, max_steps]`), shrinking
    /// pulses that no longer fit.
    pub fn with_global_steps(&self, steps: i64) -> Self {
        let steps = steps.clamp(1, self.max_steps);
        Self {
            tracks: self.tracks.iter().map(|t| t.with_steps(steps)).collect(),
            steps,
            max_steps: self.max_steps,
        }
    }

    /// Load a preset: its step count everywhere, its pulses and rotation on
    /// the voices it lists, silence on the rest, reversal cleared.
    pub fn with_preset(&self, preset: &RhythmPreset) -> Self {
        let steps = preset.steps.clamp(1, self.max_steps);
        let tracks = self
            .tracks
            .iter()
            .map(|t| {
                let (pulses, rotation) = t
                    .voice()
                    .and_then(|voice| preset.track(voice))
                    .map(|p| (p.pulses, p.rotation))
                    .unwrap_or((0, 0));
                t.with_steps(steps)
                    .with_pulses(pulses)
                    .with_rotation(rotation)
                    .with_reversed(false)
            })
            .collect();
        Self {
            tracks,
            steps,
            max_steps: self.max_steps,
        }
    }
}

impl Default for Kit {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::preset;

    #[test]
    fn test_default_kit() {
        let kit = Kit::default();
        assert_eq!(kit.len(), 8);
        assert_eq!(kit.steps(), 16);
        let pulses: Vec<i64> = kit.tracks().iter().map(|t| t.pulses()).collect();
        assert_eq!(pulses, vec![4, 2, 8, 0, 0, 0, 0, 0]);
        assert_eq!(kit.track(0).unwrap().pattern().to_string(), "x...x...x...x...");
    }

    #[test]
    fn test_find_track() {
        let kit = Kit::default();
        assert_eq!(kit.find_track("2").map(|t| t.name()), Some("HH Closed"));
        assert_eq!(kit.find_track("cowbell").map(|t| t.id()), Some(7));
        assert!(kit.find_track("8").is_none());
        assert!(kit.find_track("crash").is_none());
    }

    #[test]
    fn test_with_track_replaces_by_id() {
        let kit = Kit::default();
        let snare = kit.track(1).unwrap().with_pulses(3);
        let next = kit.with_track(snare);
        assert_eq!(next.track(1).unwrap().pulses(), 3);
        assert_eq!(kit.track(1).unwrap().pulses(), 2);

        let stranger = TrackConfig::new(42, "Stranger", 1, 16);
        assert_eq!(kit.with_track(stranger), kit);
    }

    #[test]
    fn test_global_steps_clamp_pulses() {
        let kit = Kit::default().with_global_steps(5);
        assert_eq!(kit.steps(), 5);
        for track in kit.tracks() {
            assert_eq!(track.steps(), 5);
            assert!(track.pulses() <= 5);
        }
        assert_eq!(kit.track(2).unwrap().pulses(), 5);
        assert_eq!(kit.track(0).unwrap().pulses(), 4);
    }

    #[test]
    fn test_global_steps_range() {
        let kit = Kit::default();
        assert_eq!(kit.with_global_steps(0).steps(), 1);
        assert_eq!(kit.with_global_steps(40).steps(), 16);
        assert_eq!(kit.with_max_steps(32).with_global_steps(40).steps(), 32);
        assert_eq!(kit.with_max_steps(99).max_steps(), MAX_STEPS_LIMIT);
        assert_eq!(kit.with_max_steps(8).steps(), 8);
    }

    #[test]
    fn test_with_preset() {
        let start = Kit::default().with_track(
            TrackConfig::for_voice(DrumSound::Tom, 3, 16).with_reversed(true),
        );
        let kit = start.with_preset(preset::find("cinquillo").unwrap());

        assert_eq!(kit.steps(), 8);
        assert_eq!(kit.track(0).unwrap().pattern().to_string(), "x.xx.xx.");
        assert_eq!(kit.track(6).unwrap().rotation(), 2);
        assert_eq!(kit.track(6).unwrap().pulses(), 3);

        // unlisted voices go silent
        let tom = kit.track(5).unwrap();
        assert_eq!(tom.pulses(), 0);
        assert!(!tom.is_reversed());
        assert_eq!(kit.track(1).unwrap().pulses(), 0);
    }

    #[test]
    fn test_preset_respects_max_steps() {
        let kit = Kit::default()
            .with_max_steps(12)
            .with_preset(preset::find("samba").unwrap());
        assert_eq!(kit.steps(), 12);
        assert_eq!(kit.track(2).unwrap().pulses(), 12);
    }
}
