//! Link to the external audio engine
//!
//! The engine is a capability: anything that accepts values under the keys of
//! the endpoint contract and reports which step it is playing. Having no
//! engine yet is the normal state while start-up is still in progress, so an
//! empty link accepts and drops values instead of failing.

pub mod mock;

use euclid_core::types::{Direction, Endpoint, ParamValue, ValueKind};
use thiserror::Error;
use tracing::{info, trace};

/// Notification coming back from the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// Playhead position (`currentStep` endpoint)
    CurrentStep(i64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("endpoint '{0}' is written by the engine, not the host")]
    WrongDirection(String),
    #[error("endpoint '{key}' expects {expected}, got {got}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        got: ValueKind,
    },
    #[error("engine connection closed")]
    Disconnected,
}

/// Fixed method set every engine connection provides
pub trait PatchConnection: Send {
    /// Write `value` to an outbound endpoint
    fn send_value(&mut self, endpoint: &Endpoint, value: ParamValue) -> Result<(), EngineError>;

    /// Next pending inbound event, without blocking
    fn poll_event(&mut self) -> Option<EngineEvent>;

    /// Release the connection. Further sends may fail with `Disconnected`.
    fn close(&mut self) {}
}

/// Check a value against the endpoint contract before it goes out
pub fn validate(endpoint: &Endpoint, value: &ParamValue) -> Result<(), EngineError> {
    if endpoint.direction() != Direction::Outbound {
        return Err(EngineError::WrongDirection(endpoint.key()));
    }
    if endpoint.kind() != value.kind() {
        return Err(EngineError::TypeMismatch {
            key: endpoint.key(),
            expected: endpoint.kind(),
            got: value.kind(),
        });
    }
    Ok(())
}

/// Optional connection to the engine
#[derive(Default)]
pub struct EngineLink {
    connection: Option<Box<dyn PatchConnection>>,
}

impl EngineLink {
    /// A link with nothing connected yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Attach a connection, closing any previous one
    pub fn connect(&mut self, connection: Box<dyn PatchConnection>) {
        self.disconnect();
        self.connection = Some(connection);
        info!("engine connected");
    }

    pub fn disconnect(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            connection.close();
            info!("engine disconnected");
        }
    }

    /// Validate and forward a value. Without a connection the value is dropped.
    pub fn send(&mut self, endpoint: Endpoint, value: ParamValue) -> Result<(), EngineError> {
        validate(&endpoint, &value)?;
        match self.connection.as_mut() {
            Some(connection) => {
                trace!(key = %endpoint, %value, "send");
                connection.send_value(&endpoint, value)
            }
            None => {
                trace!(key = %endpoint, %value, "no engine, value dropped");
                Ok(())
            }
        }
    }

    /// Drain every pending inbound event
    pub fn poll_events(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        if let Some(connection) = self.connection.as_mut() {
            while let Some(event) = connection.poll_event() {
                events.push(event);
            }
        }
        events
    }
}

impl Drop for EngineLink {
    fn drop(&mut self) {
        self.disconnect();
    }
}
