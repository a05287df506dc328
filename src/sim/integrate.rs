//! Fixed-step integrator
//!
//! One call is one tick of unit length. The scheme is a one-step-lagged
//! semi-implicit Euler:
//!
//! ```text
//! 1. v += a          (acceleration computed on the previous tick)
//! 2. p += v
//! 3. a  = -drag * v  (then a.x += spin_force * spin)
//! ```
//!
//! Reordering these steps changes every trajectory, so don't.

use serde::{Deserialize, Serialize};

use super::state::BallState;
use crate::consts::{DRAG, SPIN_FORCE};

/// Force coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forces {
    /// Linear drag, opposing velocity
    pub drag: f64,
    /// Horizontal (Magnus-like) force per unit of spin
    pub spin_force: f64,
    /// Vertical force per unit of spin. Zero keeps spin purely horizontal.
    pub spin_lift: f64,
}

impl Default for Forces {
    fn default() -> Self {
        Self {
            drag: DRAG,
            spin_force: SPIN_FORCE,
            spin_lift: 0.0,
        }
    }
}

impl Forces {
    /// Acceleration for the next tick given the current velocity and spin
    pub fn acceleration(&self, ball: &BallState) -> glam::DVec2 {
        let mut acc = ball.vel * -self.drag;
        acc.x += self.spin_force * ball.spin;
        if self.spin_lift != 0.0 {
            acc.y += self.spin_lift * ball.spin;
        }
        acc
    }
}

/// Advance the ball by one tick
pub fn integrate(ball: &mut BallState, forces: &Forces) {
    ball.vel += ball.acc;
    ball.pos += ball.vel;
    ball.acc = forces.acceleration(ball);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    #[test]
    fn test_uses_previous_acceleration() {
        let mut ball = BallState::default();
        ball.vel = DVec2::new(2.0, -1.0);
        ball.acc = DVec2::new(0.5, 0.25);

        integrate(&mut ball, &Forces::default());

        assert_eq!(ball.vel, DVec2::new(2.5, -0.75));
        assert_eq!(ball.pos, DVec2::new(52.5, 449.25));
        // Acceleration now reflects the updated velocity
        assert!((ball.acc.x - (-0.25 + 0.3)).abs() < 1e-12);
        assert!((ball.acc.y - 0.075).abs() < 1e-12);
    }

    #[test]
    fn test_spin_has_no_vertical_component() {
        let mut ball = BallState::default();
        integrate(&mut ball, &Forces::default());
        // At rest: only the spin term survives, on x
        assert!((ball.acc.x - 0.3).abs() < 1e-12);
        assert_eq!(ball.acc.y, 0.0);
    }

    #[test]
    fn test_spin_lift_adds_vertical_force() {
        let mut ball = BallState::default();
        let forces = Forces {
            spin_lift: 0.02,
            ..Forces::default()
        };
        integrate(&mut ball, &forces);
        assert!((ball.acc.y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_drag_is_linear() {
        let mut ball = BallState::default();
        ball.spin = 0.0;
        ball.vel = DVec2::new(4.0, -8.0);
        integrate(&mut ball, &Forces::default());
        assert!((ball.acc.x + 0.4).abs() < 1e-12);
        assert!((ball.acc.y - 0.8).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_position_follows_lagged_velocity(
            y in -1000.0f64..1000.0,
            vy in -50.0f64..50.0,
            ay in -5.0f64..5.0,
        ) {
            let mut ball = BallState::default();
            ball.pos.y = y;
            ball.vel.y = vy;
            ball.acc.y = ay;

            integrate(&mut ball, &Forces::default());

            let vy_updated = vy + ay;
            prop_assert_eq!(ball.vel.y, vy_updated);
            prop_assert_eq!(ball.pos.y, y + vy_updated);
        }
    }
}
