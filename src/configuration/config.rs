//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. Every section is optional and falls back to the built-in
//! Hearthian system, so an empty file is a valid scenario.
//!
//! - [`EngineConfig`]       – integrator and tick rate
//! - [`ParametersConfig`]   – step size, gravitational constant, trail length
//! - [`ViewConfig`]         – viewport and the two scale factors
//! - [`ClockConfig`]        – scrub bound and step
//! - [`AudioConfig`]        – asset played by the audio cue
//! - [`BodyConfig`]         – initial state for each body
//! - [`TimelineRuleConfig`] – optional override of the scripted timeline
//! - [`ScenarioConfig`]     – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "symplectic_euler"   # or "verlet"
//!   frame_rate: 60.0
//!
//! parameters:
//!   h0: 86400.0                      # simulated seconds per tick
//!   G: 6.67430e-11
//!   trail_capacity: 200
//!
//! bodies:
//!   - name: "Sun"
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.989e30
//!     color: [255, 255, 0]
//!     radius: 15.0
//!
//! timeline:
//!   - during: [254, 527]
//!     appearance: { color: [255, 205, 0], radius: 15.5 }
//!   - at: 1203
//!     play_audio: { volume: 0.5 }
//!   - from: 1320
//!     terminate: true
//! ```
//!
//! The scenario builder maps this into runtime types and validates it.

use serde::Deserialize;

use crate::simulation::clock::{DEFAULT_MAX_SCRUB_ELAPSED, DEFAULT_SCRUB_STEP};
use crate::simulation::params::{GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY};
use crate::simulation::states::Rgb;
use crate::view::trail::DEFAULT_TRAIL_CAPACITY;

/// Which integrator method used by the engine
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "symplectic_euler")] // Semi-implicit Euler: kick with a_n, then drift with v_n+1. One force evaluation
    SymplecticEuler,

    #[serde(rename = "verlet")] // Velocity Verlet, two force evaluations per step
    Verlet,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    pub frame_rate: f64, // ticks per second; one tick is one h0 of simulated time
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::SymplecticEuler,
            frame_rate: 60.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub h0: f64, // time step size
    pub G: f64, // gravitational constant
    pub trail_capacity: usize,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: SECONDS_PER_DAY,
            G: GRAVITATIONAL_CONSTANT,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub scale: f64, // wide view
    pub zoom_scale: f64,
    pub title: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 0.4e-9,
            zoom_scale: 1e-9,
            title: "Outer Wilds Solar System Simulation".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub max_scrub_elapsed: i64, // scrubbing never pushes elapsed past this
    pub scrub_step: i64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_scrub_elapsed: DEFAULT_MAX_SCRUB_ELAPSED,
            scrub_step: DEFAULT_SCRUB_STEP,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub asset: String, // relative to the runtime's asset directory
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            asset: "sounds/supernova.ogg".to_string(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub x: Vec<f64>, // position (m)
    pub v: Vec<f64>, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub color: Rgb,
    pub radius: f64, // display radius
}

impl BodyConfig {
    fn new(name: &str, x: [f64; 2], v: [f64; 2], m: f64, color: Rgb, radius: f64) -> Self {
        Self {
            name: name.to_string(),
            x: x.to_vec(),
            v: v.to_vec(),
            m,
            color,
            radius,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AppearanceConfig {
    pub color: Rgb,
    pub radius: f64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlayAudioConfig {
    pub volume: f32,
}

/// One timeline rule: exactly one trigger key and exactly one effect key
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimelineRuleConfig {
    // triggers
    pub during: Option<[i64; 2]>,
    pub at: Option<i64>,
    pub from: Option<i64>,

    // effects
    pub appearance: Option<AppearanceConfig>,
    pub play_audio: Option<PlayAudioConfig>,
    pub replace_bodies: Option<Vec<BodyConfig>>,
    pub grow_radius: Option<f64>,
    pub terminate: Option<bool>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub view: ViewConfig,
    pub clock: ClockConfig,
    pub audio: AudioConfig,
    pub bodies: Vec<BodyConfig>,
    pub timeline: Option<Vec<TimelineRuleConfig>>, // None -> built-in script
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            view: ViewConfig::default(),
            clock: ClockConfig::default(),
            audio: AudioConfig::default(),
            bodies: hearthian_bodies(),
            timeline: None,
        }
    }
}

/// The star and its seven companions
pub fn hearthian_bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig::new("Sun", [0.0, 0.0], [0.0, 0.0], 1.989e30, Rgb(255, 255, 0), 15.0),
        BodyConfig::new("Ash Twin", [5.79e10, 1e9], [-2e3, 4.74e4], 4.302e23, Rgb(255, 75, 8), 5.0),
        BodyConfig::new("Ember Twin", [5.81e10, -1e9], [2e3, 4.74e4], 4.302e23, Rgb(250, 75, 8), 5.0),
        BodyConfig::new("Timber Hearth", [1.5e11, 0.0], [0.0, 2.98e4], 5.972e24, Rgb(0, 150, 0), 7.0),
        BodyConfig::new("Brittle Hollow", [2.28e11, 0.0], [0.0, 2.41e4], 6.39e23, Rgb(25, 0, 150), 8.0),
        BodyConfig::new("Giant's Deep", [3.78e11, 0.0], [0.0, 1.91e4], 7.898e23, Rgb(0, 200, 100), 11.0),
        BodyConfig::new("Dark Bramble", [4.43e11, 0.0], [0.0, 1.81e4], 8.683e23, Rgb(85, 68, 50), 10.0),
        BodyConfig::new("Interloper", [5.50e11, 0.0], [0.0, 3.48e3], 4.024e23, Rgb(50, 100, 255), 6.0),
    ]
}
