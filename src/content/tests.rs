//! Content domain: unit tests for tuning deserialization.

use super::data::MovementTuningDef;
use crate::movement::MovementTuning;

#[test]
fn test_tuning_def_parses_partial_overrides() {
    let source = r#"(
        gravity_accel: 2000.0,
        max_jumps: 2,
        wall_slide_jump: false,
    )"#;

    let def: MovementTuningDef = ron::from_str(source).expect("valid tuning RON");
    let tuning: MovementTuning = def.into();

    assert_eq!(tuning.gravity_accel, 2000.0);
    assert_eq!(tuning.max_jumps, 2);
    assert!(!tuning.wall_slide_jump);
    // Unlisted fields keep their defaults.
    let defaults = MovementTuning::default();
    assert_eq!(tuning.jump_accel, defaults.jump_accel);
    assert_eq!(tuning.dash_speed, defaults.dash_speed);
}

#[test]
fn test_tuning_def_round_trips() {
    let def: MovementTuningDef = MovementTuning::default().into();
    let text = ron::ser::to_string(&def).expect("serializable");
    let back: MovementTuningDef = ron::from_str(&text).expect("round trip");
    assert_eq!(back.max_jump_duration, def.max_jump_duration);
    assert_eq!(back.max_dashes, def.max_dashes);
}
