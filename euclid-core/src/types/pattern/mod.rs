//! Euclidean rhythm patterns
//!
//! Generation (Bjorklund), the rotate-then-reverse transforms, and the
//! bitmask codec used to hand patterns to the audio engine.

pub mod codec;
mod core;
mod euclidean;
mod parser;
pub mod transform;


// Re-export public types
pub use codec::{checked_to_bitmask, from_bitmask, to_bitmask};
pub use core::Pattern;
pub use euclidean::{bjorklund, generate};
pub use parser::EuclidParams;
pub use transform::{apply_reversal, rotate};
