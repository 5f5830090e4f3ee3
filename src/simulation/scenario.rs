//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`, the
//! single context object that owns everything a tick touches:
//! - engine settings (`Engine`) and numerical parameters (`Parameters`)
//! - system state (`System`, bodies at t = 0)
//! - active force set (`AccelSet`)
//! - view transform and toggles (`ViewTransform`, `ViewState`)
//! - clock and timeline (`SimulationClock`, `TimelineScript`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven one tick at
//! a time by the runtime adapter

use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::configuration::config::{BodyConfig, ScenarioConfig, TimelineRuleConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::clock::SimulationClock;
use crate::simulation::command::Command;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::timeline::{Effect, TimelineRule, TimelineScript, Trigger};
use crate::view::frame::{AudioCue, FrameDescriptor};
use crate::view::trail::TrailBuffer;
use crate::view::transform::{ViewState, ViewTransform};

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub view: ViewTransform,
    pub view_state: ViewState,
    pub clock: SimulationClock,
    pub scrub_step: i64,
    pub timeline: TimelineScript,
    pub audio_asset: String,
    pub title: String,
    pub running: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            G: p_cfg.G,
            trail_capacity: p_cfg.trail_capacity,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = build_bodies(&cfg.bodies, parameters.trail_capacity)?;
        if bodies.is_empty() {
            return Err(SimError::EmptyBodySet);
        }

        if !(cfg.engine.frame_rate > 0.0) {
            return Err(SimError::InvalidView(format!("frame rate {}", cfg.engine.frame_rate)));
        }
        let engine = Engine {
            integrator: cfg.engine.integrator,
            frame_rate: cfg.engine.frame_rate,
        };

        let v_cfg = cfg.view;
        let view = ViewTransform::new(v_cfg.width, v_cfg.height, v_cfg.scale, v_cfg.zoom_scale)?;

        let timeline = match cfg.timeline {
            Some(rules) => {
                let rules = rules
                    .iter()
                    .map(|r| build_rule(r, parameters.trail_capacity))
                    .collect::<SimResult<Vec<_>>>()?;
                TimelineScript::new(rules)
            }
            None => TimelineScript::default_script(),
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });

        info!(
            bodies = bodies.len(),
            rules = timeline.rules().len(),
            integrator = ?engine.integrator,
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
            view,
            view_state: ViewState::default(),
            clock: SimulationClock::new(cfg.clock.max_scrub_elapsed),
            scrub_step: cfg.clock.scrub_step,
            timeline,
            audio_asset: cfg.audio.asset,
            title: v_cfg.title,
            running: true,
        })
    }

    /// Apply one input command at wall time `wall_ms`
    pub fn handle(&mut self, cmd: Command, wall_ms: u64) {
        match cmd {
            Command::Quit => {
                info!("quit requested");
                self.running = false;
            }
            Command::ToggleZoom => {
                self.view_state.zoomed = !self.view_state.zoomed;
                // old points were projected at the other scale
                self.system.clear_trails();
                debug!(zoomed = self.view_state.zoomed, "toggle zoom");
            }
            Command::ToggleLabels => {
                self.view_state.labeled = !self.view_state.labeled;
                debug!(labeled = self.view_state.labeled, "toggle labels");
            }
            Command::ScrubForward => self.scrub(self.scrub_step, wall_ms),
            Command::ScrubBackward => self.scrub(-self.scrub_step, wall_ms),
        }
    }

    fn scrub(&mut self, delta: i64, wall_ms: u64) {
        self.clock.scrub(delta, wall_ms);
        self.system.clear_trails();
        debug!(delta, elapsed = self.clock.elapsed(wall_ms), "scrub");
    }

    /// Run one tick: commands, clock, timeline, physics, frame
    ///
    /// Once `running` is false the state is frozen and the returned frame
    /// only reflects it.
    pub fn tick(&mut self, wall_ms: u64, commands: &[Command]) -> FrameDescriptor {
        for cmd in commands {
            if !self.running {
                break;
            }
            self.handle(*cmd, wall_ms);
        }

        let elapsed = self.clock.elapsed(wall_ms);
        let mut audio = None;

        if self.running {
            let effects = self.timeline.evaluate(elapsed);
            let outcome = TimelineScript::apply(effects, &mut self.system);

            if outcome.replaced {
                for b in self.system.bodies.iter_mut() {
                    b.trail = TrailBuffer::new(self.parameters.trail_capacity);
                }
            }
            audio = outcome.audio_volume.map(|volume| AudioCue {
                asset: self.audio_asset.clone(),
                volume,
            });

            if outcome.terminated {
                info!(elapsed, "timeline reached its end");
                self.running = false;
            } else {
                integrator::step(
                    &mut self.system,
                    &self.forces,
                    &self.parameters,
                    &self.engine.integrator,
                    &self.view,
                    &self.view_state,
                );
            }
        }

        FrameDescriptor::build(&self.system, &self.view, &self.view_state, elapsed, audio, self.running)
    }
}

fn build_bodies(cfgs: &[BodyConfig], trail_capacity: usize) -> SimResult<Vec<Body>> {
    cfgs.iter().map(|bc| build_body(bc, trail_capacity)).collect()
}

fn build_body(bc: &BodyConfig, trail_capacity: usize) -> SimResult<Body> {
    let x = vec2(&bc.name, "x", &bc.x)?;
    let v = vec2(&bc.name, "v", &bc.v)?;
    Ok(Body::new(bc.name.clone(), x, v, bc.m, bc.color, bc.radius)?.with_trail_capacity(trail_capacity))
}

fn vec2(name: &str, field: &'static str, xs: &[f64]) -> SimResult<NVec2> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::BadVector {
            name: name.to_string(),
            field,
            len: xs.len(),
        }),
    }
}

fn build_rule(rc: &TimelineRuleConfig, trail_capacity: usize) -> SimResult<TimelineRule> {
    let mut triggers = Vec::new();
    if let Some([start, end]) = rc.during {
        if start > end {
            return Err(SimError::InvalidTimeline(format!("empty range [{start}, {end}]")));
        }
        triggers.push(Trigger::During { start, end });
    }
    if let Some(s) = rc.at {
        triggers.push(Trigger::At(s));
    }
    if let Some(s) = rc.from {
        triggers.push(Trigger::From(s));
    }

    let mut effects = Vec::new();
    if let Some(a) = rc.appearance {
        if !(a.radius > 0.0) {
            return Err(SimError::InvalidTimeline(format!("appearance radius {}", a.radius)));
        }
        effects.push(Effect::Appearance { color: a.color, radius: a.radius });
    }
    if let Some(p) = rc.play_audio {
        effects.push(Effect::PlayAudio { volume: p.volume.clamp(0.0, 1.0) });
    }
    if let Some(bodies) = &rc.replace_bodies {
        let bodies = build_bodies(bodies, trail_capacity)?;
        if bodies.is_empty() {
            return Err(SimError::InvalidTimeline("replace_bodies with no bodies".to_string()));
        }
        effects.push(Effect::ReplaceBodies(bodies));
    }
    if let Some(dr) = rc.grow_radius {
        effects.push(Effect::GrowRadius(dr));
    }
    if rc.terminate == Some(true) {
        effects.push(Effect::Terminate);
    }

    match (triggers.as_slice(), effects.len()) {
        ([trigger], 1) => Ok(TimelineRule::new(*trigger, effects.remove(0))),
        (t, n) => Err(SimError::InvalidTimeline(format!(
            "expected one trigger and one effect, got {} and {}",
            t.len(),
            n
        ))),
    }
}
