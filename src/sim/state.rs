//! Simulation state and core types
//!
//! Everything the tick function and the start-gesture handler mutate lives
//! in [`SimState`]; there is no ambient global state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::Classification;

/// Interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the start gesture; nothing advances
    #[default]
    Idle,
    /// Ball in flight. There is no way back to `Idle` by default.
    Running,
}

/// A value that is read exactly once and cleared by the read
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OneShot<T>(Option<T>);

impl<T> OneShot<T> {
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Arm the one-shot, replacing any pending value
    pub fn fire(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Consume the pending value, leaving the one-shot unset
    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn peek(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

/// Launch parameters a ball is (re)built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchParams {
    pub x: f64,
    pub y: f64,
    /// Diameter
    pub size: f64,
    /// Launch direction in degrees (converted to radians on the ball)
    pub launch_angle_deg: f64,
    pub launch_speed: f64,
    pub spin: f64,
    pub mass: f64,
    /// Restitution applied to vy at floor contact
    pub bounce_factor: f64,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            x: BALL_START_X,
            y: BALL_START_Y,
            size: BALL_SIZE,
            launch_angle_deg: LAUNCH_ANGLE_DEG,
            launch_speed: LAUNCH_SPEED,
            spin: BALL_SPIN,
            mass: BALL_MASS,
            bounce_factor: BOUNCE_FACTOR,
        }
    }
}

impl LaunchParams {
    /// Parameters a restart resets to. Same as the defaults except spin.
    pub fn restart_defaults() -> Self {
        Self {
            spin: RESTART_SPIN,
            ..Self::default()
        }
    }
}

/// Kinematic and physical state of the ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: DVec2,
    /// Units per tick
    pub vel: DVec2,
    /// Recomputed every tick from velocity and spin, applied on the next one
    pub acc: DVec2,
    /// Radians
    pub launch_angle: f64,
    pub launch_speed: f64,
    /// Diameter; also sets the floor contact threshold
    pub size: f64,
    pub spin: f64,
    /// Not used by the force model
    pub mass: f64,
    pub bounce_factor: f64,
    /// Horizontal velocity imposed by the next floor contact
    pub bounce_x: OneShot<f64>,
    /// Prior positions, newest first. Never read by the physics.
    #[serde(skip)]
    pub trail: Vec<DVec2>,
}

impl BallState {
    /// Build a ball at rest from launch parameters. No validation.
    pub fn from_params(params: &LaunchParams) -> Self {
        Self {
            pos: DVec2::new(params.x, params.y),
            vel: DVec2::ZERO,
            acc: DVec2::ZERO,
            launch_angle: params.launch_angle_deg.to_radians(),
            launch_speed: params.launch_speed,
            size: params.size,
            spin: params.spin,
            mass: params.mass,
            bounce_factor: params.bounce_factor,
            bounce_x: OneShot::unset(),
            trail: Vec::new(),
        }
    }

    /// Lowest allowed centre y before the ball touches the floor
    #[inline]
    pub fn floor_limit(&self, court_height: f64) -> f64 {
        court_height - self.size / 2.0
    }

    /// Record current position to the trail
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

impl Default for BallState {
    fn default() -> Self {
        Self::from_params(&LaunchParams::default())
    }
}

/// Complete simulation state, owned by the host and passed by `&mut`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub ball: BallState,
    pub phase: Phase,
    /// Pending restart, consumed at the start of the next tick
    pub restart: OneShot<()>,
    /// Ticks advanced while running
    pub time_ticks: u64,
    /// Last IN/OUT verdict, `None` until the first running tick
    pub classification: Option<Classification>,
}

impl SimState {
    pub fn new(params: &LaunchParams) -> Self {
        Self {
            ball: BallState::from_params(params),
            phase: Phase::Idle,
            restart: OneShot::unset(),
            time_ticks: 0,
            classification: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(&LaunchParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_consumed_once() {
        let mut shot = OneShot::unset();
        assert!(!shot.is_set());
        shot.fire(3.5);
        assert_eq!(shot.peek(), Some(&3.5));
        assert_eq!(shot.take(), Some(3.5));
        assert_eq!(shot.take(), None);
        assert!(!shot.is_set());
    }

    #[test]
    fn test_default_ball_matches_reference() {
        let ball = BallState::default();
        assert_eq!(ball.pos, DVec2::new(50.0, 450.0));
        assert_eq!(ball.vel, DVec2::ZERO);
        assert_eq!(ball.acc, DVec2::ZERO);
        assert_eq!(ball.size, 20.0);
        assert_eq!(ball.spin, 30.0);
        assert_eq!(ball.mass, 1.0);
        assert_eq!(ball.bounce_factor, 0.6);
        assert!((ball.launch_angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!(!ball.bounce_x.is_set());
        assert!(ball.trail.is_empty());
    }

    #[test]
    fn test_restart_defaults_only_differ_in_spin() {
        let restart = LaunchParams::restart_defaults();
        let initial = LaunchParams::default();
        assert_eq!(restart.spin, 10.0);
        assert_eq!(LaunchParams { spin: initial.spin, ..restart }, initial);
    }

    #[test]
    fn test_floor_limit() {
        let ball = BallState::default();
        assert_eq!(ball.floor_limit(600.0), 590.0);
    }

    #[test]
    fn test_trail_is_capped() {
        let mut ball = BallState::default();
        for i in 0..(TRAIL_LENGTH + 5) {
            ball.pos.x = i as f64;
            ball.record_trail();
        }
        assert_eq!(ball.trail.len(), TRAIL_LENGTH);
        assert_eq!(ball.trail[0].x, (TRAIL_LENGTH + 4) as f64);
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = SimState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.restart.is_set());
        assert_eq!(state.time_ticks, 0);
        assert!(state.classification.is_none());
    }
}
