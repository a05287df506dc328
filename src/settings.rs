//! Simulation settings
//!
//! Loaded from a JSON file by the native runner. Every field has a default,
//! so partial files are fine. Validation here is advisory: the simulation
//! core itself never rejects a configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{COURT_HEIGHT, COURT_WIDTH, TICK_RATE};
use crate::sim::{Forces, LaunchParams};

/// Error type for settings operations
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "JSON parse error: {}", e),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Canvas geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Court {
    pub width: f64,
    pub height: f64,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_HEIGHT,
        }
    }
}

impl Court {
    /// x of the net (and the IN/OUT threshold)
    pub fn net_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// How the start gesture interprets the ball's launch angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleMode {
    /// Angle is used as radians (45° launch)
    #[default]
    Radians,
    /// The host's trig functions work in degrees, so the stored radian value
    /// is read as degrees (a launch of roughly 0.785°)
    HostDegrees,
}

impl AngleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleMode::Radians => "radians",
            AngleMode::HostDegrees => "host-degrees",
        }
    }

    /// Angle in radians to hand to `cos`/`sin`
    pub fn trig_angle(&self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::HostDegrees => angle.to_radians(),
        }
    }
}

/// Switches for behaviours that look unintended but are reproduced by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Behavior {
    /// Keep vx on a floor bounce when no override is pending
    pub preserve_vx_on_bounce: bool,
    /// Return to Idle after a restart instead of moving straight away
    pub restart_to_idle: bool,
    /// Ignore the start gesture once running (otherwise it re-seeds velocity)
    pub ignore_gesture_while_running: bool,
    /// Record prior positions into the ball's trail each tick
    pub record_trail: bool,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub court: Court,
    /// Parameters the ball is created with
    pub launch: LaunchParams,
    /// Parameters a restart resets to
    pub restart: LaunchParams,
    pub forces: Forces,
    pub angle_mode: AngleMode,
    pub behavior: Behavior,
    /// Nominal ticks per second for the host loop
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court: Court::default(),
            launch: LaunchParams::default(),
            restart: LaunchParams::restart_defaults(),
            forces: Forces::default(),
            angle_mode: AngleMode::default(),
            behavior: Behavior::default(),
            tick_rate: TICK_RATE,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save settings to a JSON file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load_from(path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Failed to load {}: {}", path.display(), e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Construction-time sanity checks.
    ///
    /// The simulation runs regardless of the result; callers decide what to
    /// do with a failure.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.court.width > 0.0 && self.court.height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "court must be positive, got {}x{}",
                self.court.width, self.court.height
            )));
        }
        for (name, params) in [("launch", &self.launch), ("restart", &self.restart)] {
            if !(params.size > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name}.size must be positive, got {}",
                    params.size
                )));
            }
            if !(0.0..=1.0).contains(&params.bounce_factor) {
                return Err(SettingsError::Invalid(format!(
                    "{name}.bounce_factor must be in [0, 1], got {}",
                    params.bounce_factor
                )));
            }
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be non-zero".into()));
        }
        Ok(())
    }
}
