//! Floor collision
//!
//! The floor is the only surface with physics. The net and baseline are
//! decoration.

use super::state::BallState;

/// Details of a floor contact, reported for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorContact {
    /// How far below the floor limit the ball was before clamping
    pub penetration: f64,
    /// Vertical velocity at impact, before restitution
    pub impact_vy: f64,
    /// Horizontal velocity before the override was applied
    pub prior_vx: f64,
}

/// Resolve floor contact after the position update.
///
/// On contact: vy is scaled by the bounce factor, y is clamped to the floor
/// limit, and vx is overwritten by the pending `bounce_x` override (0.0 when
/// none is pending, which zeroes horizontal motion). With `preserve_vx` an
/// unset override leaves vx alone. The override is consumed either way.
pub fn resolve_floor(
    ball: &mut BallState,
    court_height: f64,
    preserve_vx: bool,
) -> Option<FloorContact> {
    let floor = ball.floor_limit(court_height);
    if ball.pos.y <= floor {
        return None;
    }

    let contact = FloorContact {
        penetration: ball.pos.y - floor,
        impact_vy: ball.vel.y,
        prior_vx: ball.vel.x,
    };

    ball.vel.y *= ball.bounce_factor;
    ball.pos.y = floor;
    match ball.bounce_x.take() {
        Some(vx) => ball.vel.x = vx,
        None if preserve_vx => {}
        None => ball.vel.x = 0.0,
    }

    Some(contact)
}
