//! REPL (Read-Eval-Print Loop) for the drum machine
//!
//! Line editing runs on its own thread. The main loop selects over typed
//! lines and file-watch events, so a watched script re-runs while the prompt
//! stays usable.

use crate::commands::{create_registry, load_script, CommandContext, CommandRegistry, CommandResult};
use crate::config::SessionConfig;
use crate::render;
use crate::repl::watcher::{is_reload, FileWatcher};
use anyhow::{anyhow, Result};
use colored::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use notify::Event;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, info};

pub mod watcher;

/// Types of events the REPL loop handles
enum ReplEvent {
    Input(Result<String, ReadlineError>),
}

/// What the loop does after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Registry, session state and script watching, without the line editor
pub struct Session {
    registry: CommandRegistry,
    pub ctx: CommandContext,
    tx_watcher: Sender<notify::Result<Event>>,
    watcher: Option<FileWatcher>,
}

impl Session {
    pub fn new(config: &SessionConfig, tx_watcher: Sender<notify::Result<Event>>) -> Result<Self> {
        let mut ctx = CommandContext::new(config.build_machine());
        if config.engine {
            ctx.connect_engine()?;
        }
        Ok(Self {
            registry: create_registry(),
            ctx,
            tx_watcher,
            watcher: None,
        })
    }

    /// Execute one line and print what it produced
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let result = self.registry.execute(line, &mut self.ctx);
        self.apply(result)
    }

    fn apply(&mut self, result: CommandResult) -> Flow {
        match result {
            CommandResult::Success => {}
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Exit => return Flow::Exit,
            CommandResult::Error(e) => println!("{} {}", "Error:".bright_red().bold(), e.red()),
            CommandResult::NotACommand => println!(
                "{} Unknown command (type '{}')",
                "Error:".bright_red().bold(),
                "help".bright_green()
            ),
            CommandResult::Load(path) => {
                self.run_file(Path::new(&path));
            }
            CommandResult::Watch(path) => {
                let path = PathBuf::from(path);
                if self.start_watch(&path) {
                    self.run_file(&path);
                }
            }
        }
        Flow::Continue
    }

    /// Run a script and print its messages; false if it failed
    pub fn run_file(&mut self, path: &Path) -> bool {
        match load_script(path, &self.registry, &mut self.ctx) {
            Ok(messages) => {
                for msg in messages {
                    println!("{}", msg);
                }
                println!("{} Ran {}", "✓".bright_green(), path.display());
                true
            }
            Err(e) => {
                println!("{} {:#}", "Error:".bright_red().bold(), e);
                false
            }
        }
    }

    /// Start watching `path`; false (after printing why) if it cannot be watched
    pub fn start_watch(&mut self, path: &Path) -> bool {
        if self.watcher.is_none() {
            match FileWatcher::new(self.tx_watcher.clone()) {
                Ok(w) => self.watcher = Some(w),
                Err(e) => {
                    println!("{} Failed to create watcher: {}", "Error:".red(), e);
                    return false;
                }
            }
        }

        let Some(watcher) = self.watcher.as_mut() else {
            return false;
        };
        match watcher.watch(path) {
            Ok(()) => {
                info!(path = %path.display(), "watching script");
                println!(
                    "{} Watching {} for changes...",
                    "👀".bright_cyan(),
                    path.display().to_string().bright_green()
                );
                true
            }
            Err(e) => {
                println!("{} Failed to watch {}: {}", "Error:".red(), path.display(), e);
                false
            }
        }
    }

    /// React to a file-watch event by re-running every changed script
    pub fn handle_watch_event(&mut self, event: Event) {
        if !is_reload(&event) {
            return;
        }
        for path in event.paths {
            debug!(path = %path.display(), "script changed");
            println!("{} File changed: {}", "⚡".bright_yellow(), path.display());
            if self.run_file(&path) {
                println!("{}", render::machine(&self.ctx.machine));
            }
        }
    }
}

/// Interactive REPL for the drum machine
pub struct Repl {
    editor: Option<DefaultEditor>,
    session: Session,
    startup_script: Option<(PathBuf, bool)>,

    // Event channels
    tx_input: Sender<ReplEvent>,
    rx_input: Receiver<ReplEvent>,
    rx_watcher: Receiver<notify::Result<Event>>,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| anyhow!("Failed to initialize line editor: {}", e))?;
        let (tx_input, rx_input) = unbounded();
        let (tx_watcher, rx_watcher) = unbounded();
        let session = Session::new(config, tx_watcher)?;

        Ok(Repl {
            editor: Some(editor),
            session,
            startup_script: config.script.clone().map(|path| (path, config.watch)),
            tx_input,
            rx_input,
            rx_watcher,
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🥁".bright_yellow(),
            "Euclid Drum Machine".bright_cyan().bold()
        );
        println!(
            "Try: {}, {}, {}",
            "euclid cowbell (3,8)".cyan(),
            "preset bembe".cyan(),
            "play".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        if let Some((path, watch)) = self.startup_script.take() {
            if watch {
                self.session.start_watch(&path);
            }
            self.session.run_file(&path);
        }
        println!("{}", render::machine(&self.session.ctx.machine));

        // Move editor to thread
        let mut editor = self
            .editor
            .take()
            .ok_or_else(|| anyhow!("REPL is already running"))?;
        let tx_input = self.tx_input.clone();

        thread::spawn(move || loop {
            let prompt = format!("{} ", "euclid>".bright_magenta().bold());
            let readline = editor.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        let _ = editor.add_history_entry(&line);
                    }
                    if tx_input.send(ReplEvent::Input(Ok(line))).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx_input.send(ReplEvent::Input(Err(err)));
                    break;
                }
            }
        });

        loop {
            crossbeam_channel::select! {
                recv(self.rx_input) -> msg => match msg {
                    Ok(ReplEvent::Input(Ok(line))) => {
                        if line.is_empty() {
                            continue;
                        }
                        if self.session.handle_line(&line) == Flow::Exit {
                            println!("{} 🥁", "Goodbye!".bright_cyan());
                            break;
                        }
                    }
                    Ok(ReplEvent::Input(Err(ReadlineError::Interrupted | ReadlineError::Eof))) => {
                        println!("{} 🥁", "Goodbye!".bright_cyan());
                        break;
                    }
                    Ok(ReplEvent::Input(Err(err))) => {
                        println!(
                            "{} {}",
                            "Error reading input:".bright_red().bold(),
                            err.to_string().red()
                        );
                        break;
                    }
                    Err(_) => break, // Channel closed
                },

                recv(self.rx_watcher) -> msg => match msg {
                    Ok(Ok(event)) => self.session.handle_watch_event(event),
                    Ok(Err(e)) => println!("{} Watch error: {}", "Error:".red(), e),
                    Err(_) => break,
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start(config: &SessionConfig) -> Result<()> {
    let mut repl = Repl::new(config)?;
    repl.run()
}
