use euclid::commands::{create_registry, load_script, run_script, CommandContext};
use euclid::config::SessionConfig;
use euclid_core::types::{Endpoint, ParamValue};
use std::io::Write;

fn connected() -> CommandContext {
    let mut ctx = CommandContext::new(SessionConfig::default().build_machine());
    ctx.connect_engine().unwrap();
    ctx
}

#[test]
fn test_script_file_drives_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# cinquillo on the cowbell, kick halved").unwrap();
    writeln!(file, "steps 8").unwrap();
    writeln!(file, "euclid cowbell (5,8)").unwrap();
    writeln!(file, "pulses kick 2").unwrap();
    writeln!(file, "tempo 96").unwrap();
    writeln!(file, "play").unwrap();

    let registry = create_registry();
    let mut ctx = connected();
    load_script(file.path(), &registry, &mut ctx).unwrap();

    let engine = ctx.engine.as_ref().unwrap();
    let params = engine.snapshot().unwrap();
    // x.xx.xx. -> bits 0, 2, 3, 5, 6
    assert_eq!(params.get("pattern7"), Some(&ParamValue::Int(0b0110_1101)));
    // x...x... -> bits 0, 4
    assert_eq!(params.get("pattern0"), Some(&ParamValue::Int(0b0001_0001)));
    assert_eq!(params.get("tempo"), Some(&ParamValue::Float(96.0)));
    assert_eq!(params.get("playing"), Some(&ParamValue::Bool(true)));
    assert_eq!(params.get("steps"), Some(&ParamValue::Int(8)));
}

#[test]
fn test_engine_steps_move_highlight() {
    let registry = create_registry();
    let mut ctx = connected();
    run_script("steps 4\nplay\ntick 6\n", &registry, &mut ctx).unwrap();
    assert_eq!(ctx.machine.current_step(), Some(1));

    run_script("stop\n", &registry, &mut ctx).unwrap();
    assert_eq!(ctx.machine.current_step(), None);
}

#[test]
fn test_reconnect_resends_state() {
    let registry = create_registry();
    let mut ctx = connected();
    run_script("preset samba\ndisconnect\ntempo 180\nconnect\n", &registry, &mut ctx).unwrap();

    let engine = ctx.engine.as_ref().unwrap();
    assert_eq!(
        engine.value(&Endpoint::Tempo).unwrap(),
        Some(ParamValue::Float(180.0))
    );
    let cowbell = ctx.machine.kit().find_track("cowbell").unwrap();
    assert_eq!(
        engine.value(&Endpoint::Pattern(7)).unwrap(),
        Some(ParamValue::Int(cowbell.bitmask() as i64))
    );
}

#[test]
fn test_edits_without_engine_are_kept() {
    let registry = create_registry();
    let mut ctx = CommandContext::new(SessionConfig::default().build_machine());
    run_script("pulses snare 5\nreverse snare\n", &registry, &mut ctx).unwrap();

    let snare = ctx.machine.kit().find_track("snare").unwrap();
    assert_eq!(snare.pulses(), 5);
    assert!(snare.is_reversed());
}

#[test]
fn test_missing_script_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let registry = create_registry();
    let mut ctx = CommandContext::new(SessionConfig::default().build_machine());
    let err = load_script(dir.path().join("absent.txt"), &registry, &mut ctx).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}
