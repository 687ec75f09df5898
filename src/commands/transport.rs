//! Transport, preset and engine commands

use crate::commands::{CommandContext, CommandResult};
use crate::machine::{MAX_TEMPO, MIN_TEMPO};
use crate::render;
use colored::*;
use euclid_core::types::preset::{self, PRESETS};

/// Handle `steps [n]` command
pub fn cmd_steps(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let max = ctx.machine.kit().max_steps();
    if args.is_empty() {
        return CommandResult::Message(format!(
            "Global steps: {} (max {})",
            ctx.machine.kit().steps(),
            max
        ));
    }
    match args.parse::<i64>() {
        Ok(n) if (1..=max).contains(&n) => match ctx.machine.set_global_steps(n) {
            Ok(steps) => CommandResult::Message(format!("Steps set to {}", steps)),
            Err(e) => e.into(),
        },
        _ => CommandResult::Error(format!("Invalid step count. Use a value between 1-{}", max)),
    }
}

/// Handle `tempo [bpm]` command
pub fn cmd_tempo(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current tempo: {:.1} BPM", ctx.machine.tempo()));
    }

    match args.parse::<f64>() {
        Ok(bpm) if (MIN_TEMPO..=MAX_TEMPO).contains(&bpm) => match ctx.machine.set_tempo(bpm) {
            Ok(bpm) => CommandResult::Message(
                format!("🎵 Tempo set to {:.1} BPM", bpm)
                    .bright_green()
                    .to_string(),
            ),
            Err(e) => e.into(),
        },
        _ => CommandResult::Error(format!(
            "Invalid tempo. Use a value between {}-{} BPM",
            MIN_TEMPO, MAX_TEMPO
        )),
    }
}

/// Handle `play` command
pub fn cmd_play(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.machine.set_playing(true) {
        Ok(()) => CommandResult::Message("▶ Playing".bright_green().to_string()),
        Err(e) => e.into(),
    }
}

/// Handle `stop` command
pub fn cmd_stop(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.machine.set_playing(false) {
        Ok(()) => CommandResult::Message("■ Stopped".bright_red().to_string()),
        Err(e) => e.into(),
    }
}

/// Handle `preset [name]`; without a name, same as `presets`
pub fn cmd_preset(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return cmd_presets(args, ctx);
    }
    let Some(rhythm) = preset::find(args) else {
        return CommandResult::Error(format!("Unknown preset '{}' (try 'presets')", args));
    };
    if let Err(e) = ctx.machine.apply_preset(rhythm) {
        return e.into();
    }
    CommandResult::Message(format!(
        "{} {}\n{}",
        "Loaded".bright_green(),
        rhythm.name.bold(),
        render::machine(&ctx.machine)
    ))
}

/// Handle `presets` command
pub fn cmd_presets(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut out = format!("{}\n", "Traditional rhythms:".bold());
    for rhythm in PRESETS {
        out.push_str(&format!(
            "  {:<12} {:<12} {}\n",
            rhythm.id.cyan(),
            rhythm.name,
            rhythm.description.dimmed()
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `tick [n]`: advance the built-in engine's playhead
pub fn cmd_tick(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let count = if args.is_empty() {
        1
    } else {
        match args.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return CommandResult::Error("Usage: tick [n] (n > 0)".to_string()),
        }
    };
    let Some(engine) = ctx.engine.as_ref() else {
        return CommandResult::Error("No engine connected (try 'connect')".to_string());
    };
    if let Err(e) = engine.advance(count) {
        return e.into();
    }
    match ctx.machine.poll_engine() {
        Some(_) => CommandResult::Message(render::machine(&ctx.machine)),
        None => CommandResult::Message("Engine is stopped (try 'play')".to_string()),
    }
}

/// Handle `connect` command
pub fn cmd_connect(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.connect_engine() {
        Ok(()) => CommandResult::Message("🔌 Engine connected".bright_green().to_string()),
        Err(e) => e.into(),
    }
}

/// Handle `disconnect` command
pub fn cmd_disconnect(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    if !ctx.machine.is_connected() {
        return CommandResult::Message("Not connected".to_string());
    }
    ctx.disconnect_engine();
    CommandResult::Message("Engine disconnected".to_string())
}
