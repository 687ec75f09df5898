//! Terminal drawing of the step grid

use crate::machine::DrumMachine;
use colored::*;
use euclid_core::types::{Pattern, TrackConfig};

const NAME_WIDTH: usize = 10;

/// Grid for a bare pattern, beats grouped by four
pub fn grid(pattern: &Pattern, current_step: Option<usize>) -> String {
    pattern.colored(current_step)
}

/// A track line: index, name, grid, then its Euclidean parameters
pub fn track_row(track: &TrackConfig, current_step: Option<usize>) -> String {
    let pattern = track.pattern();
    let reversed = if track.is_reversed() {
        " rev".bright_magenta().to_string()
    } else {
        String::new()
    };
    format!(
        "{} {:<width$} {}  {}{}",
        format!("{}", track.id()).dimmed(),
        track.name().bright_cyan(),
        grid(&pattern, current_step),
        track.params().to_string().green(),
        reversed,
        width = NAME_WIDTH,
    )
}

/// Header plus every track of the session
pub fn machine(machine: &DrumMachine) -> String {
    let transport = if machine.is_playing() {
        "▶ playing".bright_green().to_string()
    } else {
        "■ stopped".bright_red().to_string()
    };
    let engine = if machine.is_connected() {
        "engine connected".bright_green().to_string()
    } else {
        "no engine".yellow().to_string()
    };
    let mut lines = vec![format!(
        "{}  {:.1} BPM  {} steps  {}  {}",
        "🥁 Euclid".bold(),
        machine.tempo(),
        machine.kit().steps(),
        transport,
        engine,
    )];
    lines.extend(
        machine
            .kit()
            .tracks()
            .iter()
            .map(|track| track_row(track, machine.current_step())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid_core::types::DrumSound;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_grid_groups_beats() {
        plain();
        let pattern = euclid_core::generate(3, 8, 0);
        assert_eq!(grid(&pattern, None), "●··● ··●·");
    }

    #[test]
    fn test_track_row() {
        plain();
        let track = TrackConfig::for_voice(DrumSound::Cowbell, 3, 8).with_reversed(true);
        let row = track_row(&track, Some(1));
        assert!(row.starts_with("7 Cowbell    "), "{}", row);
        assert!(row.contains("·●·· ●··●"), "{}", row);
        assert!(row.contains("(3,8)"));
        assert!(row.ends_with(" rev"));
    }

    #[test]
    fn test_machine_header() {
        plain();
        let out = machine(&DrumMachine::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains("120.0 BPM"));
        assert!(lines[0].contains("16 steps"));
        assert!(lines[0].contains("stopped"));
    }
}
