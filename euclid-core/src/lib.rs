//! # Euclid Core
//!
//! WASM-compatible core library for the Euclid drum machine.
//! Generates Euclidean rhythms with Bjorklund's algorithm, applies rotation and
//! reversal, and encodes patterns as bitmasks for the audio engine. Everything
//! here is a pure function of its inputs; there is no audio or I/O.
//!
//! ## Features
//!
//! - **serde**: Enable JSON serialization for web interop
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Enable colored terminal output (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use euclid_core::types::{apply_reversal, generate, Pattern};
//!
//! let tresillo = generate(3, 8, 0);
//! assert_eq!(tresillo.to_string(), "x..x..x.");
//! assert_eq!(tresillo.to_bitmask(), 0b0100_1001);
//!
//! let back = apply_reversal(&tresillo, true);
//! assert_eq!(back.onsets(), 3);
//! assert_eq!(Pattern::from_bitmask(73, 8), tresillo);
//! ```

pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use types::{
    apply_reversal, from_bitmask, generate, to_bitmask, DrumSound, Endpoint, EuclidParams, Kit,
    ParamValue, Pattern, TrackConfig,
};
