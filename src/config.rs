//! Start-up configuration
//!
//! Command-line flags (also readable from `EUCLID_*` environment variables)
//! and the validated session settings derived from them.

use crate::machine::{DrumMachine, DEFAULT_TEMPO, MAX_TEMPO, MIN_TEMPO};
use anyhow::{anyhow, Result};
use clap::Parser;
use euclid_core::types::kit::{DEFAULT_MAX_STEPS, DEFAULT_STEPS, MAX_STEPS_LIMIT};
use euclid_core::types::preset::{self, RhythmPreset};
use euclid_core::types::Kit;
use std::path::PathBuf;

/// Euclidean rhythm drum machine
#[derive(Parser, Debug, Clone)]
#[command(name = "euclid")]
#[command(about = "Euclidean rhythm drum machine for the terminal")]
#[command(version)]
pub struct Args {
    /// Tempo in BPM
    #[arg(long, env = "EUCLID_TEMPO", default_value_t = DEFAULT_TEMPO)]
    pub tempo: f64,

    /// Global step count
    #[arg(long, env = "EUCLID_STEPS", default_value_t = DEFAULT_STEPS)]
    pub steps: i64,

    /// Largest step count the grid allows
    #[arg(long, env = "EUCLID_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: i64,

    /// Rhythm preset to load at start-up (id or name)
    #[arg(long, env = "EUCLID_PRESET")]
    pub preset: Option<String>,

    /// Command script to run at start-up
    #[arg(long, env = "EUCLID_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Re-run the script whenever it changes
    #[arg(long, env = "EUCLID_WATCH", requires = "script")]
    pub watch: bool,

    /// Start without connecting the built-in engine
    #[arg(long, env = "EUCLID_NO_ENGINE")]
    pub no_engine: bool,
}

/// Validated session settings
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub tempo: f64,
    pub steps: i64,
    pub max_steps: i64,
    pub preset: Option<&'static RhythmPreset>,
    pub script: Option<PathBuf>,
    pub watch: bool,
    pub engine: bool,
}

impl SessionConfig {
    /// Clamp ranges and resolve the preset name
    pub fn from_args(args: &Args) -> Result<Self> {
        let max_steps = args.max_steps.clamp(1, MAX_STEPS_LIMIT);
        let preset = match &args.preset {
            Some(name) => Some(
                preset::find(name)
                    .ok_or_else(|| anyhow!("Unknown preset '{}' (try 'presets')", name))?,
            ),
            None => None,
        };

        Ok(Self {
            tempo: args.tempo.clamp(MIN_TEMPO, MAX_TEMPO),
            steps: args.steps.clamp(1, max_steps),
            max_steps,
            preset,
            script: args.script.clone(),
            watch: args.watch,
            engine: !args.no_engine,
        })
    }

    /// Fresh session with these settings, not yet connected
    pub fn build_machine(&self) -> DrumMachine {
        let mut kit = Kit::default()
            .with_max_steps(self.max_steps)
            .with_global_steps(self.steps);
        if let Some(preset) = self.preset {
            kit = kit.with_preset(preset);
        }
        DrumMachine::new(kit, self.tempo)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            steps: DEFAULT_STEPS,
            max_steps: DEFAULT_MAX_STEPS,
            preset: None,
            script: None,
            watch: false,
            engine: true,
        }
    }
}
