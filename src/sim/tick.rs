//! Fixed-step simulation tick
//!
//! The host calls [`tick`] once per frame. Input handling ([`start_gesture`],
//! [`request_restart`]) takes the same `&mut SimState`, so it can never run
//! interleaved with a tick.

use super::collision::resolve_floor;
use super::integrate::integrate;
use super::state::{BallState, Phase, SimState};
use crate::direction;
use crate::render::Classification;
use crate::settings::{Court, Settings};

/// Input events collected since the last tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start gesture (click/tap)
    pub launch: bool,
    /// Ask for a restart; takes effect at the start of this tick
    pub restart: bool,
}

/// Start gesture handler.
///
/// Switches to `Running`, seeds velocity from launch speed and angle, and
/// clears the trail. Firing again while running re-seeds velocity unless
/// `ignore_gesture_while_running` is set.
pub fn start_gesture(state: &mut SimState, settings: &Settings) {
    if state.is_running() && settings.behavior.ignore_gesture_while_running {
        return;
    }

    let ball = &mut state.ball;
    let angle = settings.angle_mode.trig_angle(ball.launch_angle);
    ball.vel = direction(angle) * ball.launch_speed;
    ball.clear_trail();

    if state.phase == Phase::Idle {
        log::info!(
            "Launch: speed {} angle {:.1}° spin {}",
            ball.launch_speed,
            ball.launch_angle.to_degrees(),
            ball.spin
        );
    } else {
        log::debug!("Start gesture while running, velocity re-seeded");
    }
    state.phase = Phase::Running;
}

/// Queue a restart for the next tick
pub fn request_restart(state: &mut SimState) {
    state.restart.fire(());
}

/// IN when the ball centre is strictly left of the net
#[inline]
pub fn classify(x: f64, court: &Court) -> Classification {
    if x < court.net_x() {
        Classification::In
    } else {
        Classification::Out
    }
}

/// Reset the ball to the restart parameters. Size is kept.
fn reset(state: &mut SimState, settings: &Settings) {
    let size = state.ball.size;
    state.ball = BallState::from_params(&settings.restart);
    state.ball.size = size;

    if settings.behavior.restart_to_idle {
        state.phase = Phase::Idle;
        state.classification = None;
    }
    log::info!("Restart (spin {})", state.ball.spin);
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput, settings: &Settings) {
    if input.launch {
        start_gesture(state, settings);
    }
    if input.restart {
        request_restart(state);
    }

    // Nothing moves before the start gesture
    if state.phase == Phase::Idle {
        return;
    }

    state.time_ticks += 1;

    // A pending restart replaces this tick's step
    if state.restart.take().is_some() {
        reset(state, settings);
        if state.is_running() {
            state.classification = Some(classify(state.ball.pos.x, &settings.court));
        }
        return;
    }

    integrate(&mut state.ball, &settings.forces);

    if let Some(contact) = resolve_floor(
        &mut state.ball,
        settings.court.height,
        settings.behavior.preserve_vx_on_bounce,
    ) {
        log::debug!(
            "Floor contact at tick {}: vy {:.3} -> {:.3}, vx {:.3} -> {:.3}",
            state.time_ticks,
            contact.impact_vy,
            state.ball.vel.y,
            contact.prior_vx,
            state.ball.vel.x
        );
    }

    if settings.behavior.record_trail {
        state.ball.record_trail();
    }

    let verdict = classify(state.ball.pos.x, &settings.court);
    if state.classification != Some(verdict) {
        log::debug!("Tick {}: ball is {}", state.time_ticks, verdict.label());
    }
    state.classification = Some(verdict);
}
