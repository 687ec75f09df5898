//! WASM bindings for euclid-core
//!
//! Provides JavaScript-accessible pattern generation for the web grid. Steps
//! cross the boundary as 0/1 byte arrays and bitmasks as 32-bit integers,
//! matching the engine's `pattern{n}` endpoints.

#[cfg(feature = "wasm")]
use crate::types::ENDPOINTS;
use crate::types::{pattern::codec, preset::PRESETS, Pattern, TrackConfig};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Preset listing entry for the editor's preset menu
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: i64,
    /// Grid of the preset's signature voice (the last one listed)
    pub preview: String,
}

impl PresetSummary {
    pub fn all() -> Vec<Self> {
        PRESETS
            .iter()
            .map(|preset| PresetSummary {
                id: preset.id.to_string(),
                name: preset.name.to_string(),
                description: preset.description.to_string(),
                steps: preset.steps,
                preview: preset
                    .tracks
                    .last()
                    .map(|t| crate::types::generate(t.pulses, preset.steps, t.rotation))
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }
}

/// Decode a 0/1 byte array coming from JavaScript
pub fn pattern_from_js(bits: &[u8]) -> Pattern {
    Pattern::from_bits(bits)
}

/// A track's steps as 0/1 bytes plus its 32-bit engine bitmask
pub fn track_output(track: &TrackConfig) -> (Vec<u8>, u32) {
    let pattern = track.pattern();
    (pattern.to_bits(), codec::to_bitmask::<u32>(&pattern))
}

// ============================================================================
// WASM Bindings
// ============================================================================

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn euclidean(pulses: i32, steps: i32, rotation: i32) -> js_sys::Uint8Array {
    let pattern = crate::types::generate(pulses.into(), steps.into(), rotation.into());
    js_sys::Uint8Array::from(pattern.to_bits().as_slice())
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn apply_reversal(bits: &[u8], reversed: bool) -> Vec<u8> {
    crate::types::apply_reversal(&pattern_from_js(bits), reversed).to_bits()
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn pattern_to_bitmask(bits: &[u8]) -> u32 {
    codec::to_bitmask::<u32>(&pattern_from_js(bits))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn bitmask_to_pattern(mask: u32, steps: u32) -> Vec<u8> {
    codec::from_bitmask(mask, steps as usize).to_bits()
}

/// Pattern for a serialized `TrackConfig`, or `null` if it does not deserialize
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn track_pattern(config: JsValue) -> JsValue {
    match serde_wasm_bindgen::from_value::<TrackConfig>(config) {
        Ok(track) => {
            let (bits, bitmask) = track_output(&track);
            serde_wasm_bindgen::to_value(&serde_json::json!({
                "bits": bits,
                "bitmask": bitmask,
            }))
            .unwrap_or(JsValue::NULL)
        }
        Err(_) => JsValue::NULL,
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn presets() -> JsValue {
    serde_wasm_bindgen::to_value(&PresetSummary::all()).unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn endpoints_json() -> String {
    serde_json::to_string(ENDPOINTS).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DrumSound;

    #[test]
    fn test_preset_summaries() {
        let summaries = PresetSummary::all();
        assert_eq!(summaries.len(), PRESETS.len());

        let tresillo = summaries.iter().find(|s| s.id == "tresillo").unwrap();
        assert_eq!(tresillo.steps, 8);
        assert_eq!(tresillo.preview, "x..x..x.");

        let take_five = summaries.iter().find(|s| s.id == "take-five").unwrap();
        assert_eq!(take_five.preview, "x.x..");
    }

    #[test]
    fn test_track_output_honors_reversal() {
        let track = TrackConfig::for_voice(DrumSound::Cowbell, 3, 8).with_reversed(true);
        let (bits, bitmask) = track_output(&track);
        assert_eq!(bits, vec![0, 1, 0, 0, 1, 0, 0, 1]);
        assert_eq!(bitmask, 0b1001_0010);
    }

    #[test]
    fn test_pattern_from_js() {
        assert_eq!(pattern_from_js(&[1, 0, 0, 1]).to_string(), "x..x");
    }
}
