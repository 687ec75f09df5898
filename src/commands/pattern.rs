//! Pattern tools that work outside the kit (pattern, encode, decode)

use crate::commands::{CommandContext, CommandResult};
use crate::render;
use euclid_core::types::pattern::checked_to_bitmask;
use euclid_core::types::{apply_reversal, from_bitmask, EuclidParams, Pattern};

/// Longest pattern the preview tools draw; also the widest bitmask
const MAX_PREVIEW_STEPS: usize = 64;

fn describe(pattern: &Pattern) -> String {
    let mask = checked_to_bitmask::<u64>(pattern)
        .map(|m| format!("{} (0x{:x})", m, m))
        .unwrap_or_else(|| "too long for 64 bits".to_string());
    format!(
        "{}  {} onsets / {} steps  bitmask {}",
        render::grid(pattern, None),
        pattern.onsets(),
        pattern.len(),
        mask
    )
}

/// Handle `pattern (k,n[,r]) [rev]`
pub fn cmd_pattern(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let (text, reversed) = match args.strip_suffix("rev") {
        Some(rest) => (rest.trim(), true),
        None => (args, false),
    };
    if text.is_empty() {
        return CommandResult::Error("Usage: pattern (k,n[,r]) [rev]".to_string());
    }
    let params = match EuclidParams::parse(text) {
        Ok(params) => params,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    if params.steps > MAX_PREVIEW_STEPS as i64 {
        return CommandResult::Error(format!(
            "At most {} steps (got {})",
            MAX_PREVIEW_STEPS, params.steps
        ));
    }
    let pattern = apply_reversal(&params.pattern(), reversed);
    CommandResult::Message(describe(&pattern))
}

/// Handle `encode <grid>`, e.g. `encode x..x..x.`
pub fn cmd_encode(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: encode <grid>".to_string());
    }
    match args.parse::<Pattern>() {
        Ok(pattern) => CommandResult::Message(describe(&pattern)),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `decode <mask> <steps>`; the mask may be decimal, `0x` hex or `0b` binary
pub fn cmd_decode(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut parts = args.split_whitespace();
    let (Some(mask), Some(steps), None) = (parts.next(), parts.next(), parts.next()) else {
        return CommandResult::Error("Usage: decode <mask> <steps>".to_string());
    };
    let Some(mask) = parse_mask(mask) else {
        return CommandResult::Error(format!("'{}' is not a bitmask", mask));
    };
    match steps.parse::<usize>() {
        Ok(steps) if steps <= MAX_PREVIEW_STEPS => {
            CommandResult::Message(describe(&from_bitmask(mask, steps)))
        }
        _ => CommandResult::Error(format!("Step count must be between 0-{}", MAX_PREVIEW_STEPS)),
    }
}

fn parse_mask(text: &str) -> Option<u64> {
    let text = text.replace('_', "");
    if let Some(hex) = text.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = text.strip_prefix("0b") {
        u64::from_str_radix(bin, 2).ok()
    } else {
        text.parse().ok()
    }
}
