//! High-level runtime engine settings
//!
//! Selects the integrator and the tick rate used when building and running
//! a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // symplectic euler or verlet
    pub frame_rate: f64, // ticks per wall-clock second
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::SymplecticEuler,
            frame_rate: 60.0,
        }
    }
}
