use euclid_core::types::pattern::{checked_to_bitmask, rotate};
use euclid_core::types::preset::{self, PRESETS};
use euclid_core::{
    apply_reversal, from_bitmask, generate, to_bitmask, DrumSound, EuclidParams, Kit, Pattern,
    TrackConfig,
};

#[test]
fn test_signature_rhythms() {
    assert_eq!(generate(4, 8, 0).to_bits(), vec![1, 0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(generate(3, 8, 0).to_bits(), vec![1, 0, 0, 1, 0, 0, 1, 0]);
    assert_eq!(generate(5, 8, 0).to_bits(), vec![1, 0, 1, 1, 0, 1, 1, 0]);
}

#[test]
fn test_boundaries_never_fail() {
    for steps in -3..=3_i64 {
        for pulses in -5..=5_i64 {
            for rotation in [-7_i64, -1, 0, 1, 7] {
                let p = generate(pulses, steps, rotation);
                let expected_len = steps.max(0) as usize;
                assert_eq!(p.len(), expected_len);
                assert_eq!(p.onsets(), pulses.clamp(0, steps.max(0)) as usize);
            }
        }
    }
}

#[test]
fn test_two_of_five_rotated_by_two() {
    let base = generate(2, 5, 0);
    let shifted = rotate(&base, 2);
    let expected: Vec<usize> = base.onset_positions().iter().map(|i| (i + 2) % 5).collect();
    let mut actual = shifted.onset_positions();
    actual.sort_unstable();
    let mut expected = expected;
    expected.sort_unstable();
    assert_eq!(actual, expected);
    assert_eq!(shifted.onsets(), 2);
}

#[test]
fn test_bitmask_contract() {
    assert_eq!(to_bitmask::<u32>(&Pattern::from_bits(&[1, 0, 1, 0])), 5);
    assert_eq!(from_bitmask(5_u32, 4).to_bits(), vec![1, 0, 1, 0]);
    assert_eq!(checked_to_bitmask::<u32>(&generate(1, 33, 0)), None);
    assert_eq!(checked_to_bitmask::<u64>(&generate(1, 33, 0)), Some(1));
}

#[test]
fn test_reversed_nine_of_sixteen() {
    let base = generate(9, 16, 0);
    let reversed = apply_reversal(&base, true);
    assert_eq!(reversed.onsets(), 9);
    assert_eq!(reversed.reversed(), base);
    assert_eq!(apply_reversal(&base, false), base);
}

#[test]
fn test_track_pipeline_matches_free_functions() {
    let params = EuclidParams::parse("(5,16,3)").unwrap();
    let track = TrackConfig::for_voice(DrumSound::Cowbell, 0, 16)
        .with_params(&params)
        .with_reversed(true);

    let expected = apply_reversal(&generate(5, 16, 3), true);
    assert_eq!(track.pattern(), expected);
    assert_eq!(track.bitmask(), expected.to_bitmask());
    assert_eq!(from_bitmask(track.bitmask(), 16), expected);
}

#[test]
fn test_every_preset_loads() {
    for rhythm in PRESETS {
        let kit = Kit::default().with_preset(rhythm);
        assert_eq!(kit.steps(), rhythm.steps);
        for track in kit.tracks() {
            let pattern = track.pattern();
            assert_eq!(pattern.len() as i64, rhythm.steps);
            let wanted = track
                .voice()
                .and_then(|v| rhythm.track(v))
                .map(|t| t.pulses)
                .unwrap_or(0);
            assert_eq!(pattern.onsets() as i64, wanted, "{} {}", rhythm.id, track.name());
        }
    }
    assert!(preset::find("bembe").is_some());
}
