//! Drum voices of the kit
//!
//! Provides `DrumSound` for the eight fixed voices, with TidalCycles-style
//! short names and the track index each voice occupies.

use std::fmt;

/// One of the eight kit voices, in track order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrumSound {
    /// Bass drum / Kick
    Kick,
    /// Snare
    Snare,
    /// Closed hi-hat
    HiHat,
    /// Open hi-hat
    OpenHiHat,
    /// Hand clap
    Clap,
    /// Tom
    Tom,
    /// Rimshot / Side stick
    Rim,
    /// Cowbell
    Cowbell,
}

impl DrumSound {
    /// Every voice, indexed by track number
    pub const ALL: [DrumSound; 8] = [
        DrumSound::Kick,
        DrumSound::Snare,
        DrumSound::HiHat,
        DrumSound::OpenHiHat,
        DrumSound::Clap,
        DrumSound::Tom,
        DrumSound::Rim,
        DrumSound::Cowbell,
    ];

    /// Parse drum sound from string (TidalCycles-style names)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            // Kick / Bass drum
            "kick" | "k" | "bd" | "bass" => Some(DrumSound::Kick),
            // Snare
            "snare" | "s" | "sn" | "sd" => Some(DrumSound::Snare),
            // Hi-hat (closed)
            "hihat" | "hh" | "h" | "ch" => Some(DrumSound::HiHat),
            // Hi-hat (open)
            "openhat" | "oh" | "ho" => Some(DrumSound::OpenHiHat),
            // Clap
            "clap" | "cp" | "cl" => Some(DrumSound::Clap),
            // Tom
            "tom" | "t" | "lt" => Some(DrumSound::Tom),
            // Rim / Side stick
            "rim" | "rm" | "rs" => Some(DrumSound::Rim),
            // Cowbell
            "cowbell" | "cb" | "cow" => Some(DrumSound::Cowbell),
            _ => None,
        }
    }

    /// Voice for a track index (0-7)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Track index this voice is wired to on the engine
    pub fn index(&self) -> usize {
        match self {
            DrumSound::Kick => 0,
            DrumSound::Snare => 1,
            DrumSound::HiHat => 2,
            DrumSound::OpenHiHat => 3,
            DrumSound::Clap => 4,
            DrumSound::Tom => 5,
            DrumSound::Rim => 6,
            DrumSound::Cowbell => 7,
        }
    }

    /// Get short display name for the drum
    pub fn short_name(&self) -> &'static str {
        match self {
            DrumSound::Kick => "kick",
            DrumSound::Snare => "snare",
            DrumSound::HiHat => "hh",
            DrumSound::OpenHiHat => "oh",
            DrumSound::Clap => "clap",
            DrumSound::Tom => "tom",
            DrumSound::Rim => "rim",
            DrumSound::Cowbell => "cowbell",
        }
    }

    /// Track label shown on the grid
    pub fn display_name(&self) -> &'static str {
        match self {
            DrumSound::Kick => "Kick",
            DrumSound::Snare => "Snare",
            DrumSound::HiHat => "HH Closed",
            DrumSound::OpenHiHat => "HH Open",
            DrumSound::Clap => "Clap",
            DrumSound::Tom => "Tom",
            DrumSound::Rim => "Rim",
            DrumSound::Cowbell => "Cowbell",
        }
    }
}

impl fmt::Display for DrumSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
