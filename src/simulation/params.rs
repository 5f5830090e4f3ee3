//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step (simulated seconds per tick),
//! - gravitational constant `G`,
//! - per-body trail capacity

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size (s)
    pub G: f64, // gravitational constant
    pub trail_capacity: usize, // max trail points per body
}

/// One simulated day per tick
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// CODATA 2018 value, m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: SECONDS_PER_DAY,
            G: GRAVITATIONAL_CONSTANT,
            trail_capacity: crate::view::trail::DEFAULT_TRAIL_CAPACITY,
        }
    }
}
