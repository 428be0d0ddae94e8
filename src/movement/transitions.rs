//! Movement domain: the transition-rule table behind the mode gate.

use crate::movement::MovementMode;

/// Whether the gate lets `requested` replace `current`.
///
/// One row per requested mode:
/// - `Grounded` / `Jumping` / `Rising` cannot cancel an active dash.
/// - `Falling` cannot directly follow `Jumping`; a jump hands off through
///   `Rising` first.
/// - `Dashing` is always granted.
/// - `WallSlide` is only entered out of a fall.
///
/// Same-mode requests pass the table; the gate itself reports them as
/// no-ops.
pub(crate) fn transition_allowed(current: MovementMode, requested: MovementMode) -> bool {
    use MovementMode::*;

    match requested {
        Grounded => current != Dashing,
        Jumping => current != Dashing,
        Rising => current != Dashing,
        Falling => current != Jumping,
        Dashing => true,
        WallSlide => current == Falling,
    }
}
