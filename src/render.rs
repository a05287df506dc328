//! Render output contract
//!
//! The core doesn't draw. Each frame it hands the drawing layer either the
//! start prompt or the ball ellipse plus the IN/OUT verdict.

use serde::{Deserialize, Serialize};

use crate::settings::Court;
use crate::sim::SimState;

/// Text shown before the start gesture
pub const START_PROMPT: &str = "Click to Start Simulation";

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Which side of the net the ball is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    In,
    Out,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::In => "IN",
            Classification::Out => "OUT",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Classification::In => Rgb::GREEN,
            Classification::Out => Rgb::RED,
        }
    }
}

/// Text overlay for the verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub label: &'static str,
    pub color: Rgb,
}

impl From<Classification> for Verdict {
    fn from(c: Classification) -> Self {
        Self {
            label: c.label(),
            color: c.color(),
        }
    }
}

/// Everything the drawing layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum RenderFrame {
    /// Before the start gesture: no ball, just the prompt
    Prompt { text: &'static str },
    /// Ball ellipse (centre + diameter) and verdict text
    Ball {
        tick: u64,
        x: f64,
        y: f64,
        size: f64,
        verdict: Option<Verdict>,
    },
}

/// Build the frame for the current state
pub fn frame(state: &SimState) -> RenderFrame {
    if !state.is_running() {
        return RenderFrame::Prompt { text: START_PROMPT };
    }
    RenderFrame::Ball {
        tick: state.time_ticks,
        x: state.ball.pos.x,
        y: state.ball.pos.y,
        size: state.ball.size,
        verdict: state.classification.map(Verdict::from),
    }
}

/// A decorative line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgb,
}

/// Net (full height) and baseline (lower half), both at the court centre.
/// Neither takes part in the physics.
pub fn court_lines(court: &Court) -> [CourtLine; 2] {
    let x = court.net_x();
    [
        CourtLine {
            from: (x, 0.0),
            to: (x, court.height),
            color: Rgb::WHITE,
        },
        CourtLine {
            from: (x, court.height / 2.0),
            to: (x, court.height),
            color: Rgb::WHITE,
        },
    ]
}
