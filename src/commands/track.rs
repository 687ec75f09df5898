//! Track editing commands (show, pulses, rotate, reverse, euclid)

use crate::commands::{split_track, CommandContext, CommandResult};
use crate::render;
use euclid_core::types::{EuclidParams, TrackConfig};

/// Resolve the track named in `query`
fn lookup(ctx: &CommandContext, query: &str) -> Result<TrackConfig, CommandResult> {
    if query.is_empty() {
        return Err(CommandResult::Error("Missing track (0-7 or voice name)".to_string()));
    }
    ctx.machine
        .kit()
        .find_track(query)
        .cloned()
        .ok_or_else(|| CommandResult::Error(format!("Unknown track '{}'", query)))
}

/// Store an edited track and echo its new row
fn commit(ctx: &mut CommandContext, track: TrackConfig) -> CommandResult {
    if let Err(e) = ctx.machine.update_track(track.clone()) {
        return e.into();
    }
    CommandResult::Message(render::track_row(&track, ctx.machine.current_step()))
}

/// Parse `<track> <n>` into the track and an integer
fn track_and_number(
    args: &str,
    ctx: &CommandContext,
    usage: &str,
) -> Result<(TrackConfig, i64), CommandResult> {
    let (query, rest) = split_track(args);
    if rest.is_empty() {
        return Err(CommandResult::Error(format!("Usage: {}", usage)));
    }
    let track = lookup(ctx, query)?;
    let n = rest
        .parse::<i64>()
        .map_err(|_| CommandResult::Error(format!("'{}' is not a number", rest)))?;
    Ok((track, n))
}

/// Handle `show` command
pub fn cmd_show(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.machine.poll_engine();
    CommandResult::Message(render::machine(&ctx.machine))
}

/// Handle `pulses <track> <n>`; clamps to the track's step count
pub fn cmd_pulses(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match track_and_number(args, ctx, "pulses <track> <n>") {
        Ok((track, pulses)) => commit(ctx, track.with_pulses(pulses)),
        Err(result) => result,
    }
}

/// Handle `rotate <track> <n>`
pub fn cmd_rotate(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match track_and_number(args, ctx, "rotate <track> <n>") {
        Ok((track, rotation)) => commit(ctx, track.with_rotation(rotation)),
        Err(result) => result,
    }
}

/// Handle `reverse <track>`
pub fn cmd_reverse(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match lookup(ctx, args) {
        Ok(track) => commit(ctx, track.toggle_reversed()),
        Err(result) => result,
    }
}

/// Handle `euclid <track> (k,n[,r])`. The track gets its own step count,
/// capped at the kit's maximum.
pub fn cmd_euclid(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let (query, rest) = split_track(args);
    if rest.is_empty() {
        return CommandResult::Error("Usage: euclid <track> (k,n[,r])".to_string());
    }
    let track = match lookup(ctx, query) {
        Ok(track) => track,
        Err(result) => return result,
    };
    let params = match EuclidParams::parse(rest) {
        Ok(params) => params,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    let max_steps = ctx.machine.kit().max_steps();
    if params.steps > max_steps {
        return CommandResult::Error(format!(
            "At most {} steps per track (got {})",
            max_steps, params.steps
        ));
    }
    commit(ctx, track.with_params(&params))
}
