//! # Euclid
//!
//! Euclid is a step-sequencer drum machine built on Euclidean rhythms: each
//! of its eight voices spreads a number of onsets as evenly as possible over
//! a cycle of steps, optionally rotated and reversed. Pattern generation lives
//! in `euclid-core`; this crate is the host around it.
//!
//! ## Modules
//!
//! - `engine`: The parameter link to the audio engine, plus an in-process
//!   mock engine that tracks what it was sent and reports a playhead.
//! - `machine`: Session state (kit, tempo, transport) that pushes every
//!   change to the engine.
//! - `commands`: The command registry shared by the prompt and scripts.
//! - `repl`: Interactive prompt with script hot-reload.
//! - `render`: Colored terminal grid.
//! - `config`: Command-line flags and validated start-up settings.

pub mod commands;
pub mod config;
pub mod engine;
pub mod machine;
pub mod render;
pub mod repl;

// Re-export commonly used types and functions for convenience
pub use crate::config::{Args, SessionConfig};
pub use crate::engine::{EngineError, EngineEvent, EngineLink, PatchConnection};
pub use crate::machine::DrumMachine;
pub use euclid_core::{generate, DrumSound, Kit, Pattern, TrackConfig};
