//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums its terms, and direct
//! all-pairs Newtonian gravity

use crate::simulation::states::{System, NVec2};
use crate::simulation::vecmath::pair_force;

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct Newtonian gravity, no softening
///
/// Every body sums the pull of every other body on its own, so a pair is
/// visited twice per step. Coincident pairs are skipped rather than
/// producing an infinite force.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        for (i, bi) in sys.bodies.iter().enumerate() {
            // a = F / m; a massless body would turn into NaN here
            assert!(bi.m > 0.0, "body `{}` has non-positive mass {}", bi.name, bi.m);

            let mut f = NVec2::zeros();
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                f += pair_force(self.G, bi.m, bj.m, &bi.x, &bj.x);
            }

            out[i] += f / bi.m;
        }
    }
}
