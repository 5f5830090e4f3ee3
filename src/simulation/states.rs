//! Core state types for the N-body simulation.
//!
//! - `Body`   one celestial mass with its display metadata and trail
//! - `System` the ordered, replaceable collection of bodies and the
//!   accumulated simulated time `t`

use nalgebra::Vector2;
use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::view::trail::{TrailBuffer, DEFAULT_TRAIL_CAPACITY};

pub type NVec2 = Vector2<f64>;

/// 8-bit RGB color, deserialized from `[r, g, b]`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub color: Rgb, // fill color
    pub radius: f64, // display radius
    pub name: String,
    pub trail: TrailBuffer, // screen-space history, oldest first
}

impl Body {
    /// Build a body, rejecting non-positive mass or radius
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64, color: Rgb, radius: f64) -> SimResult<Self> {
        let name = name.into();
        // also catches NaN
        if !(m > 0.0) || !m.is_finite() {
            return Err(SimError::NonPositiveMass { name, mass: m });
        }
        if !(radius > 0.0) {
            return Err(SimError::NonPositiveRadius { name, radius });
        }
        Ok(Self {
            x,
            v,
            m,
            color,
            radius,
            name,
            trail: TrailBuffer::new(DEFAULT_TRAIL_CAPACITY),
        })
    }

    /// Same body with a different trail capacity
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = TrailBuffer::new(capacity);
        self
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // 2d collection of bodies
    pub t: f64, // simulated time (s)
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Swap the whole body set in one assignment
    pub fn replace_bodies(&mut self, mut bodies: Vec<Body>) {
        for b in bodies.iter_mut() {
            b.trail.clear();
        }
        self.bodies = bodies;
    }

    pub fn clear_trails(&mut self) {
        for b in self.bodies.iter_mut() {
            b.trail.clear();
        }
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }
}
