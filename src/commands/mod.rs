//! Command registry for REPL commands
//!
//! Every line typed at the prompt, and every line of a script, goes through
//! the same registry.

pub mod general;
pub mod pattern;
pub mod track;
pub mod transport;

use crate::engine::mock::{MockEngine, MockEngineHandle};
use crate::engine::EngineError;
use crate::machine::DrumMachine;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered command matches
    NotACommand,
    /// Error occurred
    Error(String),
    /// Watch a file for changes
    Watch(String),
    /// Run a command script once
    Load(String),
}

impl From<EngineError> for CommandResult {
    fn from(err: EngineError) -> Self {
        CommandResult::Error(format!("Engine: {}", err))
    }
}

/// Context passed to command handlers
pub struct CommandContext {
    pub machine: DrumMachine,
    /// Control side of the built-in engine, while one is running
    pub engine: Option<MockEngineHandle>,
}

impl CommandContext {
    pub fn new(machine: DrumMachine) -> Self {
        Self {
            machine,
            engine: None,
        }
    }

    /// Start the built-in engine and connect the session to it
    pub fn connect_engine(&mut self) -> Result<(), EngineError> {
        self.disconnect_engine();
        let (connection, handle) = MockEngine::spawn();
        self.engine = Some(handle);
        self.machine.connect(Box::new(connection))
    }

    pub fn disconnect_engine(&mut self) {
        self.machine.disconnect();
        self.engine = None;
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix, longest first
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Track editing
    registry.register("show", track::cmd_show);
    registry.register("pulses", track::cmd_pulses);
    registry.register("rotate", track::cmd_rotate);
    registry.register("reverse", track::cmd_reverse);
    registry.register("euclid", track::cmd_euclid);

    // Transport and engine
    registry.register("steps", transport::cmd_steps);
    registry.register("tempo", transport::cmd_tempo);
    registry.register("play", transport::cmd_play);
    registry.register("stop", transport::cmd_stop);
    registry.register("preset", transport::cmd_preset);
    registry.register("presets", transport::cmd_presets);
    registry.register("tick", transport::cmd_tick);
    registry.register("connect", transport::cmd_connect);
    registry.register("disconnect", transport::cmd_disconnect);

    // Pattern tools
    registry.register("pattern", pattern::cmd_pattern);
    registry.register("encode", pattern::cmd_encode);
    registry.register("decode", pattern::cmd_decode);

    // General commands
    registry.register("endpoints", general::cmd_endpoints);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);
    registry.register("watch", general::cmd_watch);
    registry.register("load", general::cmd_load);

    registry
}

/// Run a command script, one command per line. Blank lines and lines starting
/// with `#` are skipped. Stops at the first failing line; returns the messages
/// produced so far otherwise.
pub fn run_script(
    source: &str,
    registry: &CommandRegistry,
    ctx: &mut CommandContext,
) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fail = |reason: String| anyhow!("line {}: {}", number + 1, reason);
        match registry.execute(line, ctx) {
            CommandResult::Success => {}
            CommandResult::Message(msg) => messages.push(msg),
            CommandResult::Error(e) => return Err(fail(e)),
            CommandResult::NotACommand => {
                return Err(fail(format!("Unknown command '{}'", line)))
            }
            CommandResult::Exit | CommandResult::Watch(_) | CommandResult::Load(_) => {
                return Err(fail(format!("'{}' is not allowed in a script", line)))
            }
        }
    }
    Ok(messages)
}

/// Read `path` and run it with [`run_script`]
pub fn load_script(
    path: impl AsRef<Path>,
    registry: &CommandRegistry,
    ctx: &mut CommandContext,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    run_script(&source, registry, ctx).with_context(|| format!("In {}", path.display()))
}

/// Split a track argument from the rest: `"kick 3"` -> `("kick", "3")`
pub(crate) fn split_track(args: &str) -> (&str, &str) {
    match args.split_once(char::is_whitespace) {
        Some((track, rest)) => (track, rest.trim()),
        None => (args, ""),
    }
}
