//! General REPL commands (help, quit, watch, load, endpoints)

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use euclid_core::types::{Direction, ENDPOINTS};

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `watch [file]` command
pub fn cmd_watch(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: watch <file>".to_string());
    }
    CommandResult::Watch(args.to_string())
}

/// Handle `load <file>` command
pub fn cmd_load(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: load <file>".to_string());
    }
    CommandResult::Load(args.to_string())
}

/// Handle `endpoints` command: print the engine parameter contract
pub fn cmd_endpoints(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut out = format!("{}\n", "Engine endpoints:".bold());
    for spec in ENDPOINTS {
        let arrow = match spec.direction {
            Direction::Outbound => "→".bright_green(),
            Direction::Inbound => "←".bright_blue(),
        };
        out.push_str(&format!(
            "  {} {:<12} {:<6} {}\n",
            arrow,
            spec.key.cyan(),
            spec.kind.to_string(),
            spec.meaning
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Print help information
fn print_help() {
    println!("{}", "🥁 Euclid Drum Machine Help".bold());
    println!("{}", "===========================".bold());
    println!();
    println!(
        "Tracks are named by index ({}) or voice ({}, {}, {}, {}, {}, {}, {}, {}).",
        "0-7".cyan(),
        "kick".cyan(),
        "snare".cyan(),
        "hh".cyan(),
        "oh".cyan(),
        "clap".cyan(),
        "tom".cyan(),
        "rim".cyan(),
        "cowbell".cyan()
    );
    println!();
    println!("{}", "Tracks:".green());
    println!("  {}                  - Draw the grid", "show".cyan());
    println!("  {}   - Set onset count", "pulses <track> <n>".cyan());
    println!("  {}   - Rotate right by n steps", "rotate <track> <n>".cyan());
    println!("  {}      - Toggle playing backwards", "reverse <track>".cyan());
    println!("  {} - Set pulses, steps and rotation", "euclid <track> (k,n[,r])".cyan());
    println!();
    println!("{}", "Transport:".green());
    println!("  {}             - Show or set global steps", "steps [n]".cyan());
    println!("  {}           - Show or set tempo (40-300)", "tempo [bpm]".cyan());
    println!("  {} / {}           - Start or stop", "play".cyan(), "stop".cyan());
    println!("  {}              - Advance the engine playhead", "tick [n]".cyan());
    println!();
    println!("{}", "Presets:".green());
    println!("  {}               - List traditional rhythms", "presets".cyan());
    println!("  {}         - Load one", "preset <name>".cyan());
    println!();
    println!("{}", "Pattern Tools:".green());
    println!("  {} - Preview a rhythm", "pattern (k,n[,r]) [rev]".cyan());
    println!("  {}        - Grid to bitmask", "encode <grid>".cyan());
    println!("  {} - Bitmask to grid", "decode <mask> <steps>".cyan());
    println!();
    println!("{}", "Engine:".green());
    println!("  {} / {} - Built-in engine", "connect".cyan(), "disconnect".cyan());
    println!("  {}             - Parameter contract", "endpoints".cyan());
    println!();
    println!("{}", "Scripts:".green());
    println!("  {}           - Run a command file", "load <file>".cyan());
    println!("  {}          - Re-run it on every save", "watch <file>".cyan());
    println!();
    println!("{}", "Examples:".green());
    println!("  euclid> {}", "euclid cowbell (3,8)".cyan());
    println!("  euclid> {}", "pattern (5,8,2) rev".cyan());
    println!("  euclid> {}", "preset bembe".cyan());
    println!();
    println!("{}", "Other Commands:".green());
    println!("  {}              - Show this help", "help".bright_green());
    println!("  {}              - Exit the REPL", "quit".bright_red());
}
