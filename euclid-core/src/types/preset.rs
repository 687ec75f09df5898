//! Traditional rhythms expressed as Euclidean kit settings

use crate::types::drum::DrumSound;

/// Pulses and rotation for one voice of a preset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackPreset {
    pub voice: DrumSound,
    pub pulses: i64,
    pub rotation: i64,
}

/// A named kit setting; voices not listed are silenced when applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RhythmPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub steps: i64,
    pub tracks: &'static [TrackPreset],
}

impl RhythmPreset {
    /// Preset settings for `voice`, if the preset uses it
    pub fn track(&self, voice: DrumSound) -> Option<&TrackPreset> {
        self.tracks.iter().find(|t| t.voice == voice)
    }
}

const fn voice(voice: DrumSound, pulses: i64, rotation: i64) -> TrackPreset {
    TrackPreset {
        voice,
        pulses,
        rotation,
    }
}

pub static PRESETS: &[RhythmPreset] = &[
    RhythmPreset {
        id: "tresillo",
        name: "Tresillo (3,8)",
        description: "The basic cross-rhythm of Cuban music and reggaeton.",
        steps: 8,
        tracks: &[
            voice(DrumSound::Kick, 4, 0),
            voice(DrumSound::Snare, 0, 0),
            voice(DrumSound::HiHat, 8, 0),
            voice(DrumSound::Clap, 2, 0),
            voice(DrumSound::Cowbell, 3, 0),
        ],
    },
    RhythmPreset {
        id: "take-five",
        name: "Take Five (2,5)",
        description: "Quintuple meter, after Dave Brubeck.",
        steps: 5,
        tracks: &[
            voice(DrumSound::Kick, 1, 0),
            voice(DrumSound::HiHat, 5, 0),
            voice(DrumSound::Cowbell, 2, 0),
        ],
    },
    RhythmPreset {
        id: "cinquillo",
        name: "Cinquillo (5,8)",
        description: "Cuban habanera and danzon; strong forward drive.",
        steps: 8,
        tracks: &[
            voice(DrumSound::Kick, 5, 0),
            voice(DrumSound::HiHat, 8, 0),
            voice(DrumSound::Rim, 3, 2),
            voice(DrumSound::Cowbell, 5, 0),
        ],
    },
    RhythmPreset {
        id: "fandango",
        name: "Fandango (4,12)",
        description: "Compound 12/8 feel underpinning many polyrhythms.",
        steps: 12,
        tracks: &[
            voice(DrumSound::Kick, 4, 0),
            voice(DrumSound::Clap, 4, 0),
            voice(DrumSound::Cowbell, 4, 1),
        ],
    },
    RhythmPreset {
        id: "bembe",
        name: "Bembe (7,12)",
        description: "Afro-Cuban bell pattern in 6/8.",
        steps: 12,
        tracks: &[
            voice(DrumSound::Kick, 4, 0),
            voice(DrumSound::Snare, 0, 0),
            voice(DrumSound::Tom, 5, 0),
            voice(DrumSound::Cowbell, 7, 0),
        ],
    },
    RhythmPreset {
        id: "macedonian",
        name: "Macedonian (5,13)",
        description: "Odd meter over a prime-length cycle.",
        steps: 13,
        tracks: &[
            voice(DrumSound::Kick, 4, 0),
            voice(DrumSound::HiHat, 13, 0),
            voice(DrumSound::Cowbell, 5, 0),
        ],
    },
    RhythmPreset {
        id: "samba",
        name: "Samba (9,16)",
        description: "Brazilian samba on a sixteenth-note grid.",
        steps: 16,
        tracks: &[
            voice(DrumSound::Kick, 4, 0),
            voice(DrumSound::Snare, 0, 0),
            voice(DrumSound::HiHat, 16, 0),
            voice(DrumSound::Cowbell, 9, 0),
        ],
    },
];

/// Look a preset up by id or display name (case-insensitive).
pub fn find(query: &str) -> Option<&'static RhythmPreset> {
    let query = query.trim();
    PRESETS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(query) || p.name.eq_ignore_ascii_case(query))
}
