// euclid-core/src/types/mod.rs

pub mod drum;
pub mod endpoint;
pub mod kit;
pub mod pattern;
pub mod preset;
pub mod track;

pub use drum::DrumSound;
pub use endpoint::{Direction, Endpoint, EndpointSpec, ParamValue, ValueKind, ENDPOINTS};
pub use kit::Kit;
pub use pattern::{apply_reversal, from_bitmask, generate, to_bitmask, EuclidParams, Pattern};
pub use preset::{RhythmPreset, TrackPreset, PRESETS};
pub use track::TrackConfig;
