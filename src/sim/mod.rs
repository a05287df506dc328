//! Deterministic simulation module
//!
//! All ball physics lives here. This module must stay pure and deterministic:
//! - Fixed unit timestep, not scaled by wall-clock time
//! - Explicit state passed by `&mut`, no globals
//! - No rendering or platform dependencies

pub mod collision;
pub mod integrate;
pub mod state;
pub mod tick;

pub use collision::{FloorContact, resolve_floor};
pub use integrate::{Forces, integrate};
pub use state::{BallState, LaunchParams, OneShot, Phase, SimState};
pub use tick::{TickInput, classify, request_restart, start_gesture, tick};
