//! Scripted events keyed on elapsed simulated seconds
//!
//! A `TimelineScript` is an ordered list of rules. Each tick the scenario
//! asks it which effects are due at the current elapsed second and applies
//! them to the system. Effects always act on the first body of the set (the
//! star in every shipped scenario).
//!
//! Trigger semantics:
//! - `During` and `From` are level checks, re-evaluated every tick. Applying
//!   an appearance twice is harmless; `GrowRadius` deliberately compounds.
//! - `At` is a one-shot. It fires on the tick that elapsed crosses its second
//!   going forward (previous observation below, current at or above) and is
//!   latched afterwards, so it never fires twice in a run no matter how the
//!   clock is scrubbed. Jumps that skip over the second still fire it.

use tracing::info;

use crate::simulation::states::{Body, NVec2, Rgb, System};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Every tick with `start <= elapsed <= end`
    During { start: i64, end: i64 },
    /// Once, when elapsed first reaches this second
    At(i64),
    /// Every tick with `elapsed >= second`
    From(i64),
}

impl Trigger {
    fn is_one_shot(&self) -> bool {
        matches!(self, Trigger::At(_))
    }
}

#[derive(Debug, Clone)]
pub enum Effect {
    Appearance { color: Rgb, radius: f64 },
    PlayAudio { volume: f32 },
    ReplaceBodies(Vec<Body>),
    GrowRadius(f64),
    Terminate,
}

#[derive(Debug, Clone)]
pub struct TimelineRule {
    pub trigger: Trigger,
    pub effect: Effect,
}

impl TimelineRule {
    pub fn new(trigger: Trigger, effect: Effect) -> Self {
        Self { trigger, effect }
    }
}

/// What applying a tick's effects asks of the runtime
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineOutcome {
    pub audio_volume: Option<f32>,
    pub replaced: bool,
    pub terminated: bool,
}

#[derive(Debug, Clone)]
pub struct TimelineScript {
    rules: Vec<TimelineRule>,
    fired: Vec<bool>,
    last_seen: Option<i64>,
}

impl TimelineScript {
    pub fn new(rules: Vec<TimelineRule>) -> Self {
        let fired = vec![false; rules.len()];
        Self {
            rules,
            fired,
            last_seen: None,
        }
    }

    /// The star's end-of-life sequence
    pub fn default_script() -> Self {
        let appearance = |r: u8, g: u8, b: u8, radius: f64| Effect::Appearance {
            color: Rgb(r, g, b),
            radius,
        };
        let supernova = Body {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            m: 1.989e31,
            color: Rgb(0, 200, 255),
            radius: 1.0,
            name: "Supernova".to_string(),
            trail: Default::default(),
        };

        Self::new(vec![
            TimelineRule::new(Trigger::During { start: 254, end: 527 }, appearance(255, 205, 0, 15.5)),
            TimelineRule::new(Trigger::During { start: 528, end: 781 }, appearance(255, 155, 0, 16.0)),
            TimelineRule::new(Trigger::During { start: 782, end: 1035 }, appearance(255, 105, 0, 16.5)),
            TimelineRule::new(Trigger::During { start: 1036, end: 1199 }, appearance(255, 55, 0, 17.0)),
            TimelineRule::new(Trigger::During { start: 1200, end: 1289 }, appearance(255, 20, 0, 17.5)),
            TimelineRule::new(Trigger::At(1203), Effect::PlayAudio { volume: 0.5 }),
            TimelineRule::new(Trigger::At(1290), Effect::ReplaceBodies(vec![supernova])),
            TimelineRule::new(Trigger::From(1291), Effect::GrowRadius(0.33)),
            TimelineRule::new(Trigger::From(1320), Effect::Terminate),
        ])
    }

    pub fn rules(&self) -> &[TimelineRule] {
        &self.rules
    }

    /// Whether the one-shot rule at `index` has already fired
    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    /// Effects due at `elapsed`, in rule order. Latches one-shots.
    pub fn evaluate(&mut self, elapsed: i64) -> Vec<Effect> {
        // first observation counts as coming up from below zero
        let prev = self.last_seen.unwrap_or(i64::MIN);
        self.last_seen = Some(elapsed);

        let mut due = Vec::new();
        for (rule, fired) in self.rules.iter().zip(self.fired.iter_mut()) {
            let hit = match rule.trigger {
                Trigger::During { start, end } => (start..=end).contains(&elapsed),
                Trigger::From(second) => elapsed >= second,
                Trigger::At(second) => !*fired && prev < second && elapsed >= second,
            };
            if hit {
                if rule.trigger.is_one_shot() {
                    *fired = true;
                }
                due.push(rule.effect.clone());
            }
        }
        due
    }

    /// Apply effects to the system's first body (or to the whole set for a
    /// replacement)
    pub fn apply(effects: Vec<Effect>, sys: &mut System) -> TimelineOutcome {
        let mut outcome = TimelineOutcome::default();
        for effect in effects {
            match effect {
                Effect::Appearance { color, radius } => {
                    if let Some(b) = sys.bodies.first_mut() {
                        b.color = color;
                        b.radius = radius;
                    }
                }
                Effect::GrowRadius(dr) => {
                    if let Some(b) = sys.bodies.first_mut() {
                        b.radius += dr;
                    }
                }
                Effect::PlayAudio { volume } => {
                    info!(volume, "timeline: audio cue");
                    outcome.audio_volume = Some(volume);
                }
                Effect::ReplaceBodies(bodies) => {
                    info!(count = bodies.len(), t = sys.t, "timeline: replacing body set");
                    sys.replace_bodies(bodies);
                    outcome.replaced = true;
                }
                Effect::Terminate => {
                    outcome.terminated = true;
                }
            }
        }
        outcome
    }
}

impl Default for TimelineScript {
    fn default() -> Self {
        Self::default_script()
    }
}
