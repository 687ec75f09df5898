//! Drum machine session state
//!
//! Owns the kit and transport settings and keeps the engine in step with
//! them: every change sends exactly the endpoints it affects.

use crate::engine::{EngineError, EngineEvent, EngineLink, PatchConnection};
use euclid_core::types::{Endpoint, Kit, ParamValue, RhythmPreset, TrackConfig};
use tracing::{debug, warn};

pub const DEFAULT_TEMPO: f64 = 120.0;
pub const MIN_TEMPO: f64 = 40.0;
pub const MAX_TEMPO: f64 = 300.0;

/// Kit, tempo, transport and the link to the engine
pub struct DrumMachine {
    kit: Kit,
    tempo: f64,
    playing: bool,
    current_step: Option<usize>,
    link: EngineLink,
}

impl DrumMachine {
    pub fn new(kit: Kit, tempo: f64) -> Self {
        Self {
            kit,
            tempo: tempo.clamp(MIN_TEMPO, MAX_TEMPO),
            playing: false,
            current_step: None,
            link: EngineLink::new(),
        }
    }

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Step the engine last reported, for highlighting
    pub fn current_step(&self) -> Option<usize> {
        self.current_step
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    /// Attach an engine and bring it up to date with the whole session
    pub fn connect(&mut self, connection: Box<dyn PatchConnection>) -> Result<(), EngineError> {
        self.link.connect(connection);
        self.sync_all()
    }

    pub fn disconnect(&mut self) {
        self.link.disconnect();
        self.current_step = None;
    }

    /// Send every pattern plus tempo, transport and step count
    pub fn sync_all(&mut self) -> Result<(), EngineError> {
        self.send_patterns()?;
        self.send(Endpoint::Tempo, ParamValue::Float(self.tempo))?;
        self.send(Endpoint::Playing, ParamValue::Bool(self.playing))?;
        self.send(Endpoint::Steps, ParamValue::Int(self.kit.steps()))
    }

    /// Replace one track's configuration and send its new pattern
    pub fn update_track(&mut self, config: TrackConfig) -> Result<(), EngineError> {
        let id = config.id();
        if self.kit.track(id).is_none() {
            warn!(track = id, "no such track, edit ignored");
            return Ok(());
        }
        self.kit = self.kit.with_track(config);
        let update = self.kit.track(id).map(pattern_update);
        if let Some((endpoint, value)) = update {
            debug!(track = id, %value, "track updated");
            self.send(endpoint, value)?;
        }
        Ok(())
    }

    /// Change the global step count; returns the clamped value actually used
    pub fn set_global_steps(&mut self, steps: i64) -> Result<i64, EngineError> {
        self.kit = self.kit.with_global_steps(steps);
        let steps = self.kit.steps();
        debug!(steps, "global steps changed");
        self.send(Endpoint::Steps, ParamValue::Int(steps))?;
        self.send_patterns()?;
        Ok(steps)
    }

    /// Change the tempo; returns the clamped value actually used
    pub fn set_tempo(&mut self, bpm: f64) -> Result<f64, EngineError> {
        self.tempo = bpm.clamp(MIN_TEMPO, MAX_TEMPO);
        debug!(tempo = self.tempo, "tempo changed");
        self.send(Endpoint::Tempo, ParamValue::Float(self.tempo))?;
        Ok(self.tempo)
    }

    pub fn set_playing(&mut self, playing: bool) -> Result<(), EngineError> {
        self.playing = playing;
        if !playing {
            self.current_step = None;
        }
        debug!(playing, "transport changed");
        self.send(Endpoint::Playing, ParamValue::Bool(playing))
    }

    /// Load a preset into the kit and send the result
    pub fn apply_preset(&mut self, preset: &RhythmPreset) -> Result<(), EngineError> {
        self.kit = self.kit.with_preset(preset);
        debug!(preset = preset.id, "preset applied");
        self.send(Endpoint::Steps, ParamValue::Int(self.kit.steps()))?;
        self.send_patterns()
    }

    /// Consume pending engine events; returns the resulting current step
    pub fn poll_engine(&mut self) -> Option<usize> {
        for event in self.link.poll_events() {
            match event {
                EngineEvent::CurrentStep(step) => {
                    self.current_step = usize::try_from(step).ok();
                }
            }
        }
        self.current_step
    }

    fn send_patterns(&mut self) -> Result<(), EngineError> {
        let updates: Vec<_> = self.kit.tracks().iter().map(pattern_update).collect();
        for (endpoint, value) in updates {
            self.send(endpoint, value)?;
        }
        Ok(())
    }

    fn send(&mut self, endpoint: Endpoint, value: ParamValue) -> Result<(), EngineError> {
        self.link.send(endpoint, value).map_err(|e| {
            warn!(key = %endpoint, error = %e, "engine rejected value");
            e
        })
    }
}

impl Default for DrumMachine {
    fn default() -> Self {
        Self::new(Kit::default(), DEFAULT_TEMPO)
    }
}

fn pattern_update(track: &TrackConfig) -> (Endpoint, ParamValue) {
    (
        Endpoint::Pattern(track.id()),
        ParamValue::Int(track.bitmask() as i64),
    )
}
