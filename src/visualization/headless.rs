//! Window-less runner
//!
//! Drives a scenario at its configured tick rate against a synthetic wall
//! clock (tick k happens at k / frame_rate seconds), so a run is fully
//! deterministic. Audio cues are logged instead of played.

use tracing::{debug, info};

use crate::simulation::params::SECONDS_PER_DAY;
use crate::simulation::scenario::Scenario;

/// Run until the scenario stops or `max_ticks` ticks have passed.
/// Returns the number of ticks executed.
pub fn run_headless(scenario: &mut Scenario, max_ticks: u64) -> u64 {
    let rate = scenario.engine.frame_rate;
    let log_every = rate.max(1.0) as u64;

    let mut ticks = 0;
    while scenario.running && ticks < max_ticks {
        let wall_ms = (ticks as f64 * 1000.0 / rate) as u64;
        let frame = scenario.tick(wall_ms, &[]);

        if let Some(cue) = &frame.audio {
            info!(asset = %cue.asset, volume = cue.volume, "audio cue (headless, not played)");
        }
        if ticks % log_every == 0 {
            debug!(timer = %frame.timer, bodies = frame.bodies.len(), "tick");
        }
        ticks += 1;
    }

    info!(
        ticks,
        simulated_days = scenario.system.t / SECONDS_PER_DAY,
        running = scenario.running,
        "headless run finished"
    );
    ticks
}
