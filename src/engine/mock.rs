//! In-process stand-in for the audio engine
//!
//! Runs on its own thread and receives parameters over a channel, the same
//! asynchronous shape as the real engine's transport. It keeps the last value
//! of every key and reports a playhead, which moves only when
//! [`MockEngineHandle::advance`] asks it to. There is no timer and no audio.

use super::{EngineError, EngineEvent, PatchConnection};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use euclid_core::types::{Endpoint, ParamValue};
use std::collections::HashMap;
use std::thread::{self, JoinHandle};
use tracing::{debug, trace};

/// Step count assumed until the host sends `steps`
const FALLBACK_STEPS: i64 = 16;

/// Commands that can be sent to the engine thread
enum EngineCommand {
    Set { key: String, value: ParamValue },
    /// Move the playhead N steps, reply with the final position
    Advance(usize, Sender<Option<usize>>),
    Snapshot(Sender<HashMap<String, ParamValue>>),
    Shutdown,
}

/// Engine state, owned by the engine thread
pub struct MockEngine {
    params: HashMap<String, ParamValue>,
    playhead: Option<usize>,
    command_rx: Receiver<EngineCommand>,
    event_tx: Sender<EngineEvent>,
}

impl MockEngine {
    /// Start the engine thread. The connection goes to the host's
    /// [`EngineLink`](super::EngineLink); the handle drives and inspects the engine.
    pub fn spawn() -> (MockConnection, MockEngineHandle) {
        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();

        let thread = thread::spawn(move || {
            MockEngine {
                params: HashMap::new(),
                playhead: None,
                command_rx,
                event_tx,
            }
            .run();
        });
        debug!("mock engine started");

        let connection = MockConnection {
            command_tx: command_tx.clone(),
            event_rx,
            closed: false,
        };
        let handle = MockEngineHandle {
            command_tx,
            thread: Some(thread),
        };
        (connection, handle)
    }

    fn run(mut self) {
        while let Ok(command) = self.command_rx.recv() {
            match command {
                EngineCommand::Set { key, value } => {
                    trace!(%key, %value, "mock engine received");
                    if key == "playing" && value == ParamValue::Bool(false) {
                        self.playhead = None;
                    }
                    self.params.insert(key, value);
                }
                EngineCommand::Advance(count, reply) => {
                    for _ in 0..count {
                        if let Some(step) = self.next_step() {
                            let _ = self.event_tx.send(EngineEvent::CurrentStep(step as i64));
                        }
                    }
                    let _ = reply.send(self.playhead);
                }
                EngineCommand::Snapshot(reply) => {
                    let _ = reply.send(self.params.clone());
                }
                EngineCommand::Shutdown => break,
            }
        }
        debug!("mock engine stopped");
    }

    fn is_playing(&self) -> bool {
        self.params
            .get("playing")
            .and_then(ParamValue::as_bool)
            .unwrap_or(false)
    }

    fn step_count(&self) -> usize {
        self.params
            .get("steps")
            .and_then(ParamValue::as_int)
            .filter(|&steps| steps > 0)
            .unwrap_or(FALLBACK_STEPS) as usize
    }

    fn next_step(&mut self) -> Option<usize> {
        if !self.is_playing() {
            return None;
        }
        let steps = self.step_count();
        let next = match self.playhead {
            Some(step) => (step + 1) % steps,
            None => 0,
        };
        self.playhead = Some(next);
        Some(next)
    }
}

/// Host side of the parameter channel
pub struct MockConnection {
    command_tx: Sender<EngineCommand>,
    event_rx: Receiver<EngineEvent>,
    closed: bool,
}

impl PatchConnection for MockConnection {
    fn send_value(&mut self, endpoint: &Endpoint, value: ParamValue) -> Result<(), EngineError> {
        if self.closed {
            return Err(EngineError::Disconnected);
        }
        self.command_tx
            .send(EngineCommand::Set {
                key: endpoint.key(),
                value,
            })
            .map_err(|_| EngineError::Disconnected)
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Control handle; dropping it stops the engine thread
pub struct MockEngineHandle {
    command_tx: Sender<EngineCommand>,
    thread: Option<JoinHandle<()>>,
}

impl MockEngineHandle {
    /// Move the playhead `steps` times. Returns the final position, `None`
    /// while stopped. Every step's event is queued before this returns.
    pub fn advance(&self, steps: usize) -> Result<Option<usize>, EngineError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx
            .send(EngineCommand::Advance(steps, reply_tx))
            .map_err(|_| EngineError::Disconnected)?;
        reply_rx.recv().map_err(|_| EngineError::Disconnected)
    }

    /// Every parameter the engine has received so far, by key
    pub fn snapshot(&self) -> Result<HashMap<String, ParamValue>, EngineError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx
            .send(EngineCommand::Snapshot(reply_tx))
            .map_err(|_| EngineError::Disconnected)?;
        reply_rx.recv().map_err(|_| EngineError::Disconnected)
    }

    /// Last value received for one endpoint
    pub fn value(&self, endpoint: &Endpoint) -> Result<Option<ParamValue>, EngineError> {
        Ok(self.snapshot()?.get(&endpoint.key()).copied())
    }
}

impl Drop for MockEngineHandle {
    fn drop(&mut self) {
        let _ = self.command_tx.send(EngineCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(connection: &mut MockConnection, steps: i64) {
        connection
            .send_value(&Endpoint::Steps, ParamValue::Int(steps))
            .unwrap();
        connection
            .send_value(&Endpoint::Playing, ParamValue::Bool(true))
            .unwrap();
    }

    #[test]
    fn test_snapshot_sees_earlier_sends() {
        let (mut connection, handle) = MockEngine::spawn();
        connection
            .send_value(&Endpoint::Pattern(3), ParamValue::Int(73))
            .unwrap();
        connection
            .send_value(&Endpoint::Tempo, ParamValue::Float(98.0))
            .unwrap();

        assert_eq!(
            handle.value(&Endpoint::Pattern(3)).unwrap(),
            Some(ParamValue::Int(73))
        );
        assert_eq!(handle.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn test_playhead_stays_put_while_stopped() {
        let (mut connection, handle) = MockEngine::spawn();
        assert_eq!(handle.advance(3).unwrap(), None);
        assert_eq!(connection.poll_event(), None);
    }

    #[test]
    fn test_playhead_wraps_at_steps() {
        let (mut connection, handle) = MockEngine::spawn();
        play(&mut connection, 4);

        assert_eq!(handle.advance(6).unwrap(), Some(1));

        let mut steps = Vec::new();
        while let Some(EngineEvent::CurrentStep(step)) = connection.poll_event() {
            steps.push(step);
        }
        assert_eq!(steps, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_stop_resets_playhead() {
        let (mut connection, handle) = MockEngine::spawn();
        play(&mut connection, 8);
        handle.advance(3).unwrap();
        connection
            .send_value(&Endpoint::Playing, ParamValue::Bool(false))
            .unwrap();
        connection
            .send_value(&Endpoint::Playing, ParamValue::Bool(true))
            .unwrap();
        assert_eq!(handle.advance(1).unwrap(), Some(0));
    }

    #[test]
    fn test_closed_connection_rejects_sends() {
        let (mut connection, _handle) = MockEngine::spawn();
        connection.close();
        assert_eq!(
            connection.send_value(&Endpoint::Tempo, ParamValue::Float(120.0)),
            Err(EngineError::Disconnected)
        );
    }

    #[test]
    fn test_dropped_engine_disconnects() {
        let (mut connection, handle) = MockEngine::spawn();
        drop(handle);
        assert_eq!(
            connection.send_value(&Endpoint::Tempo, ParamValue::Float(120.0)),
            Err(EngineError::Disconnected)
        );
    }
}
