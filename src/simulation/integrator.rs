//! Fixed-step time integrators for the N-body system
//!
//! Provides semi-implicit (symplectic) Euler and velocity-Verlet, both driven
//! by `AccelSet` and `Parameters`, plus `step`, which runs the configured
//! integrator and records every body's trail point for the same tick

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;
use crate::configuration::config::IntegratorConfig;
use crate::view::transform::{ViewState, ViewTransform};

/// Advance the system by one step using semi-implicit Euler
/// All accelerations come from the state at the start of the step;
/// velocity is updated first, then position from the new velocity
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0;

    // a_n from x_n
    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        // v_n+1 = v_n + dt a_n
        b.v += *a * dt;
        // x_n+1 = x_n + dt v_n+1
        b.x += b.v * dt;
    }

    sys.t += dt;
}

/// Advance the system by one step using velocity–Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place based on `params.h0`
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2, half update for verlet

    // a_old[i] holds a_n for body i at the current time t = sys.t
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // Kick: v_n+1/2 = v_n + (1/2 * dt) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + 0.5 dt a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }
}

/// Append each body's current screen position to its trail
pub fn record_trails(sys: &mut System, view: &ViewTransform, state: &ViewState) {
    for b in sys.bodies.iter_mut() {
        let p = view.trail_point(&b.x, state.zoomed);
        b.trail.push(p);
    }
}

/// One full tick of physics: integrate with the selected method, then
/// record trail points at the scale currently in effect
pub fn step(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    method: &IntegratorConfig,
    view: &ViewTransform,
    state: &ViewState,
) {
    match method {
        IntegratorConfig::SymplecticEuler => symplectic_euler(sys, forces, params),
        IntegratorConfig::Verlet => verlet_integrator(sys, forces, params),
    }
    record_trails(sys, view, state);
}
