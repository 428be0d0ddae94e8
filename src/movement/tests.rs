//! Movement domain: unit tests for the mode gate, deferred tasks, and
//! per-mode integration.

use bevy::prelude::*;

use super::{Facing, MotionState, MovementMode, MovementTuning, TaskKind};

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Walk the gate into `mode` through legal transitions.
fn state_in(mode: MovementMode) -> MotionState {
    let mut state = MotionState::default();
    match mode {
        MovementMode::Grounded => {}
        MovementMode::WallSlide => {
            state.change_movement(MovementMode::Falling);
            state.change_movement(MovementMode::WallSlide);
        }
        other => {
            state.change_movement(other);
        }
    }
    assert_eq!(state.mode(), mode);
    state
}

#[test]
fn test_gate_matches_transition_table() {
    use MovementMode::*;
    let all = [Grounded, Jumping, Rising, Falling, Dashing, WallSlide];

    for current in all {
        for requested in all {
            let allowed = match requested {
                Grounded | Jumping | Rising => current != Dashing,
                Falling => current != Jumping,
                Dashing => true,
                WallSlide => current == Falling,
            };
            let expected = allowed && requested != current;

            let mut state = state_in(current);
            assert_eq!(
                state.change_movement(requested),
                expected,
                "{current:?} -> {requested:?}"
            );
            let end = if expected || (allowed && requested == current) {
                requested
            } else {
                current
            };
            assert_eq!(state.mode(), end, "{current:?} -> {requested:?}");
        }
    }
}

#[test]
fn test_gate_falling_unreachable_from_jumping() {
    // A jump cannot drop straight into Falling; it exits through Rising.
    let mut state = state_in(MovementMode::Jumping);
    assert!(!state.change_movement(MovementMode::Falling));
    assert_eq!(state.mode(), MovementMode::Jumping);

    state.stop_jump(false, DT);
    assert_eq!(state.mode(), MovementMode::Rising);
    assert!(state.change_movement(MovementMode::Falling));
}

#[test]
fn test_gate_dash_is_sticky() {
    use MovementMode::*;
    // Dashing is reachable from everywhere...
    for current in [Grounded, Jumping, Rising, Falling, WallSlide] {
        let mut state = state_in(current);
        assert!(state.change_movement(Dashing), "{current:?} -> Dashing");
    }
    // ...but nothing cancels it except an explicit drop into Falling.
    for requested in [Grounded, Jumping, Rising, WallSlide] {
        let mut state = state_in(Dashing);
        assert!(!state.change_movement(requested), "Dashing -> {requested:?}");
        assert_eq!(state.mode(), Dashing);
    }
    let mut state = state_in(Dashing);
    assert!(state.change_movement(Falling));
}

#[test]
fn test_gate_same_mode_is_a_no_op() {
    let mut state = MotionState::default();
    assert!(!state.change_movement(MovementMode::Grounded));
    assert_eq!(state.mode(), MovementMode::Grounded);
}

#[test]
fn test_add_velocity_accumulates_linearly() {
    let mut state = MotionState::default();
    let direction = Vec2::new(0.6, 0.8); // unit length
    for _ in 0..12 {
        state.add_velocity(direction, 50.0, DT);
    }
    assert!(approx(state.pending_velocity.length(), 12.0 * 50.0 * DT));
    // The accumulator alone moved; the committed velocity did not.
    assert_eq!(state.velocity, Vec2::ZERO);
}

#[test]
fn test_commit_folds_and_clears_the_accumulator() {
    let tuning = MovementTuning::default();
    let mut state = MotionState::default();
    state.velocity = Vec2::new(10.0, -20.0);
    state.add_velocity(Vec2::X, 60.0, DT);

    let resolved = state.commit_velocity(&tuning);
    assert!(approx(resolved.x, 10.0 + 60.0 * DT));
    assert!(approx(resolved.y, -20.0));
    assert_eq!(state.pending_velocity, Vec2::ZERO);
}

#[test]
fn test_gravity_scale_per_mode() {
    let tuning = MovementTuning::default();

    let mut state = state_in(MovementMode::Grounded);
    state.apply_gravity(state.mode(), &tuning, DT);
    assert!(approx(state.pending_velocity.y, -tuning.gravity_accel * DT));

    let mut state = state_in(MovementMode::Rising);
    state.apply_gravity(state.mode(), &tuning, DT);
    assert!(approx(
        state.pending_velocity.y,
        -tuning.rising_gravity_accel * DT
    ));

    for mode in [MovementMode::Jumping, MovementMode::Dashing] {
        let mut state = state_in(mode);
        state.apply_gravity(state.mode(), &tuning, DT);
        assert_eq!(state.pending_velocity, Vec2::ZERO, "{mode:?}");
    }
}

#[test]
fn test_gravity_pulls_into_the_wall_while_sliding() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::WallSlide);
    state.wall_direction = -1.0;

    state.apply_gravity(state.mode(), &tuning, DT);
    assert!(approx(state.pending_velocity.x, -tuning.gravity_accel * DT));
    assert!(approx(state.pending_velocity.y, 0.0));
}

#[test]
fn test_grounding_resets_counters_and_arms_the_check() {
    let mut state = state_in(MovementMode::Falling);
    state.jump_counter = 1;
    state.dash_counter = 1;

    state.grounded();
    assert_eq!(state.mode(), MovementMode::Grounded);
    assert_eq!(state.jump_counter, 0);
    assert_eq!(state.dash_counter, 0);
    assert!(state.tasks.is_scheduled(TaskKind::UngroundedCheck));
}

#[test]
fn test_ungrounded_check_confirms_a_stuck_landing() {
    let mut state = state_in(MovementMode::Falling);
    state.touching_ground = true;
    state.grounded();

    // Contact held when the check fires: landing stuck.
    state.run_due_tasks(DT);
    assert_eq!(state.mode(), MovementMode::Grounded);
    assert!(!state.tasks.is_scheduled(TaskKind::UngroundedCheck));

    // Contact gone: the re-armed check demotes to Falling a tick later.
    state.touching_ground = false;
    state.tasks.schedule(TaskKind::UngroundedCheck, 0.0);
    state.run_due_tasks(DT);
    assert_eq!(state.mode(), MovementMode::Falling);
}

#[test]
fn test_ungrounded_leaves_airborne_modes_alone() {
    for mode in [
        MovementMode::Jumping,
        MovementMode::Rising,
        MovementMode::Falling,
    ] {
        let mut state = state_in(mode);
        state.ungrounded();
        assert_eq!(state.mode(), mode);
    }
}

#[test]
fn test_jump_runs_its_full_duration_then_rises() {
    let tuning = MovementTuning::default();
    let mut state = MotionState::default();

    state.start_jump(&tuning);
    assert_eq!(state.mode(), MovementMode::Jumping);
    assert_eq!(state.jump_timer, 0.0);

    let mut frames = 0;
    while state.mode() == MovementMode::Jumping {
        let mode = state.mode();
        state.apply_gravity(mode, &tuning, DT);
        state.jumping(mode, &tuning, DT);
        frames += 1;
        assert!(frames < 1000, "jump never ended");
    }

    assert_eq!(state.mode(), MovementMode::Rising);
    assert!(state.jump_timer >= tuning.max_jump_duration);
    // Every powered frame pushed straight up.
    assert!(state.pending_velocity.y > 0.0);
    assert!(approx(state.pending_velocity.x, 0.0));
}

#[test]
fn test_air_jump_consumes_a_charge_and_runs_out() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::Falling);

    state.start_jump(&tuning);
    assert_eq!(state.mode(), MovementMode::Jumping);
    assert_eq!(state.jump_counter, 1);

    // Out of charges: denied, mode untouched.
    state.stop_jump(false, DT);
    state.change_movement(MovementMode::Falling);
    state.start_jump(&tuning);
    assert_eq!(state.mode(), MovementMode::Falling);
    assert_eq!(state.jump_counter, tuning.max_jumps);
}

#[test]
fn test_wall_jump_restarts_velocity_and_kicks_away() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::Falling);
    state.touching_wall = true;
    state.wall_direction = 1.0;
    state.velocity = Vec2::new(150.0, -300.0);

    state.start_jump(&tuning);
    assert_eq!(state.mode(), MovementMode::Jumping);
    assert!(state.wall_jump_initial);
    assert_eq!(state.velocity, Vec2::ZERO);
    // Wall jumps do not bill the air-jump counter.
    assert_eq!(state.jump_counter, 0);

    // First powered frame kicks away from a right-side wall.
    state.jumping(state.mode(), &tuning, DT);
    assert!(state.pending_velocity.x < 0.0);
    assert!(state.pending_velocity.y > 0.0);
}

#[test]
fn test_wall_jump_kick_decays_at_half_duration() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::Falling);
    state.touching_wall = true;
    state.wall_direction = 1.0;
    state.start_jump(&tuning);

    while state.jump_timer < tuning.max_jump_duration / 2.0 {
        state.jumping(state.mode(), &tuning, DT);
    }

    assert_eq!(state.mode(), MovementMode::Jumping);
    assert!(!state.wall_jump_initial);
}

#[test]
fn test_sharp_stop_brakes_two_thirds_of_vertical_speed() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::Jumping);
    state.velocity = Vec2::new(0.0, 600.0);

    state.stop_jump(true, DT);
    assert_eq!(state.mode(), MovementMode::Rising);

    let resolved = state.commit_velocity(&tuning);
    assert!(approx(resolved.y, 200.0));
}

#[test]
fn test_sharp_stop_guards_a_zero_dt() {
    let mut state = state_in(MovementMode::Jumping);
    state.velocity = Vec2::new(0.0, 600.0);

    state.stop_jump(true, 0.0);
    assert_eq!(state.mode(), MovementMode::Rising);
    assert_eq!(state.pending_velocity, Vec2::ZERO);
}

#[test]
fn test_stop_jump_outside_jumping_is_a_no_op() {
    for mode in [MovementMode::Grounded, MovementMode::Rising] {
        let mut state = state_in(mode);
        state.stop_jump(true, DT);
        assert_eq!(state.mode(), mode);
    }
}

#[test]
fn test_wall_slide_entry_sets_and_debounces_the_landed_flag() {
    let mut state = state_in(MovementMode::Falling);
    state.touching_wall = true;
    state.wall_direction = 1.0;

    assert!(state.change_movement(MovementMode::WallSlide));
    assert!(state.wall_landed);
    assert!(state.tasks.is_scheduled(TaskKind::WallLandedReset));

    // 0.05 s of simulated time: still inside the debounce window.
    state.run_due_tasks(0.05);
    assert!(state.wall_landed);

    // 0.1 s total: the flag drops and the task is gone.
    state.run_due_tasks(0.05);
    assert!(!state.wall_landed);
    assert!(!state.tasks.is_scheduled(TaskKind::WallLandedReset));
    assert_eq!(state.mode(), MovementMode::WallSlide);
}

#[test]
fn test_leaving_wall_slide_clears_the_landed_flag() {
    let mut state = state_in(MovementMode::WallSlide);
    assert!(state.wall_landed);

    assert!(state.change_movement(MovementMode::Grounded));
    assert!(!state.wall_landed);
}

#[test]
fn test_wall_slide_caps_downward_speed_on_commit() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::WallSlide);
    state.velocity = Vec2::new(0.0, -500.0);

    let resolved = state.commit_velocity(&tuning);
    assert!(approx(resolved.y, -tuning.wall_slide_speed));
}

#[test]
fn test_dash_locks_velocity_and_expires_into_falling() {
    let tuning = MovementTuning::default();
    let mut state = MotionState::default();
    state.facing = Facing::Left;

    state.start_dash(0.0, &tuning);
    assert_eq!(state.mode(), MovementMode::Dashing);
    assert_eq!(state.dash_counter, 1);
    assert_eq!(state.dash_direction, -1.0);

    let mut frames = 0;
    while state.mode() == MovementMode::Dashing {
        let mode = state.mode();
        state.apply_gravity(mode, &tuning, DT);
        state.dashing(mode, &tuning, DT);
        assert_eq!(state.velocity, Vec2::new(-tuning.dash_speed, 0.0));
        frames += 1;
        assert!(frames < 1000, "dash never ended");
    }

    assert_eq!(state.mode(), MovementMode::Falling);
    // No gravity leaked in while the dash owned the velocity.
    assert_eq!(state.pending_velocity, Vec2::ZERO);
}

#[test]
fn test_dash_denied_without_charges() {
    let tuning = MovementTuning::default();
    let mut state = state_in(MovementMode::Falling);
    state.dash_counter = tuning.max_dashes;

    state.start_dash(1.0, &tuning);
    assert_eq!(state.mode(), MovementMode::Falling);

    // Grounding hands the charge back.
    state.grounded();
    state.start_dash(1.0, &tuning);
    assert_eq!(state.mode(), MovementMode::Dashing);
    assert_eq!(state.dash_direction, 1.0);
}

#[test]
fn test_tasks_reschedule_replaces_the_delay() {
    let mut state = MotionState::default();
    state.tasks.schedule(TaskKind::WallLandedReset, 0.1);
    state.tasks.schedule(TaskKind::WallLandedReset, 0.2);

    assert!(state.tasks.tick(0.15).is_empty());
    assert_eq!(state.tasks.tick(0.06), vec![TaskKind::WallLandedReset]);
}

#[test]
fn test_tasks_cancel_is_idempotent() {
    let mut state = MotionState::default();
    state.tasks.cancel(TaskKind::WallLandedReset);
    state.tasks.cancel(TaskKind::WallLandedReset);

    state.tasks.schedule(TaskKind::UngroundedCheck, 0.0);
    state.tasks.cancel(TaskKind::UngroundedCheck);
    assert!(state.tasks.tick(1.0).is_empty());
}

#[test]
fn test_reset_wall_landed_cancels_its_own_entry() {
    let mut state = state_in(MovementMode::WallSlide);
    assert!(state.tasks.is_scheduled(TaskKind::WallLandedReset));

    // Manual reset before the debounce elapses: flag and entry both go.
    state.reset_wall_landed();
    assert!(!state.wall_landed);
    assert!(!state.tasks.is_scheduled(TaskKind::WallLandedReset));

    // And again, on nothing: still fine.
    state.reset_wall_landed();
}

#[test]
fn test_tuning_jump_reach() {
    let tuning = MovementTuning::default();
    assert!(approx(
        tuning.full_jump_speed(),
        tuning.jump_accel * tuning.max_jump_duration
    ));
    assert!(tuning.full_jump_height() > 0.0);
    // The coasting rise comes on top of the powered ascent.
    let powered = 0.5 * tuning.jump_accel * tuning.max_jump_duration * tuning.max_jump_duration;
    assert!(tuning.full_jump_height() > powered);
}
