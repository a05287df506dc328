//! Court Ball - a single ball launched across a court
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integrator, floor bounce, start/restart)
//! - `render`: Values the drawing layer needs each frame
//! - `settings`: Serde-backed configuration

pub mod render;
pub mod settings;
pub mod sim;

pub use render::{Classification, RenderFrame};
pub use settings::{Settings, SettingsError};

/// Reference constants
pub mod consts {
    /// Nominal host frame rate (ticks per second). The integrator ignores it.
    pub const TICK_RATE: u32 = 60;

    /// Court dimensions (canvas space, y grows downward)
    pub const COURT_WIDTH: f64 = 800.0;
    pub const COURT_HEIGHT: f64 = 600.0;

    /// Linear drag coefficient, per tick
    pub const DRAG: f64 = 0.1;
    /// Horizontal force per unit of spin
    pub const SPIN_FORCE: f64 = 0.01;

    /// Launch defaults
    pub const BALL_START_X: f64 = 50.0;
    pub const BALL_START_Y: f64 = 450.0;
    pub const BALL_SIZE: f64 = 20.0;
    pub const LAUNCH_ANGLE_DEG: f64 = 45.0;
    pub const LAUNCH_SPEED: f64 = 5.0;
    pub const BALL_SPIN: f64 = 30.0;
    /// Spin seeded by a restart (differs from `BALL_SPIN`)
    pub const RESTART_SPIN: f64 = 10.0;
    pub const BALL_MASS: f64 = 1.0;
    pub const BOUNCE_FACTOR: f64 = 0.6;

    /// Maximum number of trail points kept when trail recording is on
    pub const TRAIL_LENGTH: usize = 20;
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f64) -> glam::DVec2 {
    glam::DVec2::new(angle.cos(), angle.sin())
}
