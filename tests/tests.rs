use novasim::simulation::states::{Body, NVec2, Rgb, System};
use novasim::simulation::params::Parameters;
use novasim::simulation::forces::{AccelSet, NewtonianGravity};
use novasim::simulation::integrator::{symplectic_euler, verlet_integrator};
use novasim::simulation::vecmath::{distance, pair_force, unit_direction};
use novasim::simulation::clock::SimulationClock;
use novasim::simulation::timeline::{Effect, TimelineScript};
use novasim::simulation::command::Command;
use novasim::simulation::scenario::Scenario;
use novasim::view::trail::TrailBuffer;
use novasim::view::transform::{ViewState, ViewTransform};
use novasim::view::frame::timer_readout;
use novasim::configuration::config::{BodyConfig, ScenarioConfig, TimelineRuleConfig};
use novasim::error::SimError;
use novasim::run_headless;

const G: f64 = 6.67430e-11;
const SUN_MASS: f64 = 1.989e30;

/// Plain white body with radius 1
pub fn body(name: &str, x: [f64; 2], v: [f64; 2], m: f64) -> Body {
    Body::new(name, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]), m, Rgb(255, 255, 255), 1.0).unwrap()
}

/// Two bodies separated along the x-axis, at rest
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    System::new(vec![
        body("a", [-dist / 2.0, 0.0], [0.0, 0.0], m1),
        body("b", [dist / 2.0, 0.0], [0.0, 0.0], m2),
    ])
}

/// Sun at the origin with one planet on a circular orbit at `r`
pub fn circular_orbit(r: f64, m_planet: f64) -> System {
    let v = (G * SUN_MASS / r).sqrt();
    System::new(vec![
        body("sun", [0.0, 0.0], [0.0, 0.0], SUN_MASS),
        body("planet", [r, 0.0], [0.0, v], m_planet),
    ])
}

pub fn test_params(h0: f64) -> Parameters {
    Parameters {
        h0,
        G,
        trail_capacity: 200,
    }
}

pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity { G: p.G })
}

pub fn default_scenario() -> Scenario {
    Scenario::build_scenario(ScenarioConfig::default()).unwrap()
}

fn is_audio(e: &Effect) -> bool {
    matches!(e, Effect::PlayAudio { .. })
}

fn is_replace(e: &Effect) -> bool {
    matches!(e, Effect::ReplaceBodies(_))
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0e9, 1.0e24, 1.0e24);
    let forces = gravity_set(&test_params(1.0));

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Acceleration is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0e9, 1.0e24, 1.0e24);
    let sys_2r = two_body_system(2.0e9, 1.0e24, 1.0e24);
    let forces = gravity_set(&test_params(1.0));

    let mut acc_r = vec![NVec2::zeros(); 2];
    let mut acc_2r = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
}

#[test]
fn pair_force_matches_newton() {
    let from = NVec2::new(0.0, 0.0);
    let to = NVec2::new(3.0e10, 4.0e10);
    let f = pair_force(G, 2.0e24, 3.0e24, &from, &to);

    let expected = G * 2.0e24 * 3.0e24 / (5.0e10 * 5.0e10);
    assert!((f.norm() - expected).abs() / expected < 1e-12);
    let dir = unit_direction(&from, &to).unwrap();
    assert!((dir - NVec2::new(0.6, 0.8)).norm() < 1e-12);
    assert!((f.normalize() - dir).norm() < 1e-12);
}

#[test]
fn coincident_bodies_feel_no_force() {
    let sys = System::new(vec![
        body("a", [1.0e9, 1.0e9], [0.0, 0.0], 1.0e24),
        body("b", [1.0e9, 1.0e9], [0.0, 0.0], 1.0e24),
    ]);
    let forces = gravity_set(&test_params(1.0));

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    assert_eq!(acc[0], NVec2::zeros());
    assert_eq!(acc[1], NVec2::zeros());
    assert!(unit_direction(&sys.bodies[0].x, &sys.bodies[1].x).is_none());
}

#[test]
fn zero_mass_is_rejected_at_construction() {
    let err = Body::new("ghost", NVec2::zeros(), NVec2::zeros(), 0.0, Rgb(0, 0, 0), 1.0).unwrap_err();
    assert!(matches!(err, SimError::NonPositiveMass { .. }), "got {:?}", err);

    let err = Body::new("nan", NVec2::zeros(), NVec2::zeros(), f64::NAN, Rgb(0, 0, 0), 1.0).unwrap_err();
    assert!(matches!(err, SimError::NonPositiveMass { .. }), "got {:?}", err);

    let err = Body::new("dot", NVec2::zeros(), NVec2::zeros(), 1.0, Rgb(0, 0, 0), 0.0).unwrap_err();
    assert!(matches!(err, SimError::NonPositiveRadius { .. }), "got {:?}", err);
}

#[test]
#[should_panic(expected = "non-positive mass")]
fn zero_mass_fails_fast_in_integrator() {
    let mut sys = two_body_system(1.0e9, 1.0e24, 1.0e24);
    // bypass the constructor check
    sys.bodies[0].m = 0.0;
    let p = test_params(1.0);
    symplectic_euler(&mut sys, &gravity_set(&p), &p);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn symplectic_euler_kicks_before_drifting() {
    let mut sys = two_body_system(2.0e10, 1.0e28, 1.0e28);
    let p = test_params(1000.0);
    let forces = gravity_set(&p);

    let x0 = sys.bodies[0].x;
    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    symplectic_euler(&mut sys, &forces, &p);

    let v1 = acc[0] * p.h0;
    assert!((sys.bodies[0].v - v1).norm() < 1e-12 * v1.norm());
    // position moved with the *new* velocity
    assert!((sys.bodies[0].x - (x0 + v1 * p.h0)).norm() < 1e-6);
    assert_eq!(sys.t, p.h0);
}

#[test]
fn two_body_mirror_symmetry() {
    let mut sys = System::new(vec![
        body("a", [1.0e10, 0.0], [0.0, 1.5e4], 1.0e27),
        body("b", [-1.0e10, 0.0], [0.0, -1.5e4], 1.0e27),
    ]);
    let p = test_params(3600.0);
    let forces = gravity_set(&p);

    for _ in 0..500 {
        symplectic_euler(&mut sys, &forces, &p);
        let (a, b) = (&sys.bodies[0], &sys.bodies[1]);
        assert!((a.x + b.x).norm() <= 1e-6 * a.x.norm(), "positions not mirrored: {:?} {:?}", a.x, b.x);
        assert!((a.v + b.v).norm() <= 1e-9 * a.v.norm(), "velocities not mirrored: {:?} {:?}", a.v, b.v);
    }
}

#[test]
fn momentum_drift_is_bounded() {
    let mut sys = circular_orbit(1.5e11, 5.972e24);
    let p = test_params(3600.0);
    let forces = gravity_set(&p);

    let p0 = sys.total_momentum();
    let scale = sys.bodies[1].momentum().norm();

    for _ in 0..1000 {
        symplectic_euler(&mut sys, &forces, &p);
    }

    let drift = (sys.total_momentum() - p0).norm();
    assert!(drift < 1e-9 * scale, "momentum drifted by {} (scale {})", drift, scale);
}

#[test]
fn verlet_keeps_circular_orbit_radius() {
    let r0 = 1.5e11;
    let mut sys = circular_orbit(r0, 5.972e24);
    let p = test_params(3600.0);
    let forces = gravity_set(&p);

    for _ in 0..1000 {
        verlet_integrator(&mut sys, &forces, &p);
    }

    let r = distance(&sys.bodies[0].x, &sys.bodies[1].x);
    assert!((r - r0).abs() / r0 < 1e-3, "orbit radius drifted to {}", r);
}

#[test]
fn first_step_pulls_timber_hearth_toward_sun() {
    let mut scenario = default_scenario();
    let idx = scenario.system.bodies.iter().position(|b| b.name == "Timber Hearth").unwrap();
    let v0 = scenario.system.bodies[idx].v;
    assert_eq!(v0, NVec2::new(0.0, 2.98e4));

    scenario.tick(0, &[]);

    let v1 = scenario.system.bodies[idx].v;
    let expected = G * SUN_MASS / (1.5e11 * 1.5e11) * 86400.0;

    // the sun lies along -x from the planet
    let dvx = v0.x - v1.x;
    assert!((dvx - expected).abs() / expected < 1e-3, "dvx = {}, expected {}", dvx, expected);
    assert!((v1.y - v0.y).abs() < 1e-3 * expected, "vy changed by {}", v1.y - v0.y);
}

#[test]
fn mass_constant_until_replacement() {
    let mut scenario = default_scenario();
    let masses: Vec<f64> = scenario.system.bodies.iter().map(|b| b.m).collect();

    // one tick per simulated second, right up to the replacement second
    for s in 0..1290u64 {
        scenario.tick(s * 1000, &[]);
        let now: Vec<f64> = scenario.system.bodies.iter().map(|b| b.m).collect();
        assert_eq!(now, masses, "mass changed at second {}", s);
    }

    scenario.tick(1_290_000, &[]);
    assert_eq!(scenario.system.bodies.len(), 1);
    assert_eq!(scenario.system.bodies[0].m, 1.989e31);
}

// ==================================================================================
// View and trail tests
// ==================================================================================

#[test]
fn trail_keeps_newest_200_in_order() {
    let mut trail = TrailBuffer::new(200);
    for i in 0..250 {
        trail.push((i, -i));
    }

    assert_eq!(trail.len(), 200);
    let points: Vec<(i32, i32)> = trail.iter().copied().collect();
    let expected: Vec<(i32, i32)> = (50..250).map(|i| (i, -i)).collect();
    assert_eq!(points, expected);
}

#[test]
fn trail_polyline_needs_two_points() {
    let mut trail = TrailBuffer::default();
    assert!(trail.polyline().is_empty());
    trail.push((1, 1));
    assert!(trail.polyline().is_empty());
    trail.push((2, 2));
    assert_eq!(trail.polyline(), vec![(1, 1), (2, 2)]);
    trail.clear();
    assert!(trail.is_empty());
}

#[test]
fn scenario_trails_never_exceed_cap() {
    let mut scenario = default_scenario();
    for k in 0..250u64 {
        scenario.tick(k * 16, &[]);
    }
    for b in &scenario.system.bodies {
        assert_eq!(b.trail.capacity(), 200);
        assert_eq!(b.trail.len(), 200, "{} has {} points", b.name, b.trail.len());
    }
}

#[test]
fn view_transform_maps_origin_to_center() {
    let view = ViewTransform::default();
    assert_eq!(view.project(&NVec2::zeros(), false), (400.0, 300.0));

    let p = NVec2::new(1.0e11, -1.0e11);
    let (wx, wy) = view.project(&p, false);
    assert!((wx - 440.0).abs() < 1e-9 && (wy - 260.0).abs() < 1e-9);
    let (zx, zy) = view.project(&p, true);
    assert!((zx - 500.0).abs() < 1e-9 && (zy - 200.0).abs() < 1e-9);

    // trail points truncate
    assert_eq!(view.trail_point(&NVec2::new(-1.5e9, 1.5e9), false), (399, 300));
}

#[test]
fn zoom_toggle_and_scrub_clear_trails() {
    let mut scenario = default_scenario();
    for k in 0..10u64 {
        scenario.tick(k * 16, &[]);
    }
    assert!(scenario.system.bodies.iter().all(|b| b.trail.len() == 10));

    scenario.handle(Command::ToggleZoom, 200);
    assert!(scenario.view_state.zoomed);
    assert!(scenario.system.bodies.iter().all(|b| b.trail.is_empty()));

    scenario.tick(216, &[]);
    scenario.tick(232, &[]);
    assert!(scenario.system.bodies.iter().all(|b| b.trail.len() == 2));

    scenario.tick(248, &[Command::ScrubForward]);
    // cleared by the scrub, then one point from this tick's step
    assert!(scenario.system.bodies.iter().all(|b| b.trail.len() == 1));

    // labels do not touch trails
    scenario.tick(264, &[Command::ToggleLabels]);
    assert!(scenario.system.bodies.iter().all(|b| b.trail.len() == 2));
}

#[test]
fn labels_toggle_off_and_on() {
    let mut scenario = default_scenario();
    let frame = scenario.tick(0, &[]);
    assert_eq!(frame.bodies[0].label.as_deref(), Some("Sun"));
    assert_eq!(frame.label_font_size, 10.0);

    let frame = scenario.tick(16, &[Command::ToggleLabels]);
    assert!(frame.bodies.iter().all(|b| b.label.is_none()));

    let frame = scenario.tick(32, &[Command::ToggleLabels, Command::ToggleZoom]);
    assert!(frame.bodies.iter().all(|b| b.label.is_some()));
    assert_eq!(frame.label_font_size, 15.0);
    assert_eq!(ViewState::default(), ViewState { zoomed: false, labeled: true });
}

#[test]
fn timer_readout_format() {
    assert_eq!(timer_readout(0), "Time: 00:00");
    assert_eq!(timer_readout(65), "Time: 01:05");
    assert_eq!(timer_readout(1320), "Time: 22:00");
}

// ==================================================================================
// Clock tests
// ==================================================================================

#[test]
fn clock_floors_wall_time() {
    let clock = SimulationClock::default();
    assert_eq!(clock.elapsed(0), 0);
    assert_eq!(clock.elapsed(999), 0);
    assert_eq!(clock.elapsed(5_999), 5);
}

#[test]
fn scrub_backward_never_goes_negative() {
    let mut clock = SimulationClock::default();
    let wall = 5_000;
    assert_eq!(clock.elapsed(wall), 5);
    for _ in 0..10 {
        clock.scrub(-30, wall);
        assert!(clock.elapsed(wall) >= 0);
    }
    assert_eq!(clock.elapsed(wall), 0);
    // offset keeps tracking wall time afterwards
    assert_eq!(clock.elapsed(wall + 3_000), 3);
}

#[test]
fn scrub_forward_clamps_to_upper_bound() {
    let mut clock = SimulationClock::default();
    let wall = 1_000_000;
    for _ in 0..20 {
        clock.scrub(30, wall);
    }
    assert_eq!(clock.elapsed(wall), 1190);
}

#[test]
fn scrub_range_narrows_with_wall_time() {
    let mut clock = SimulationClock::default();
    // wall time alone is past the bound; any scrub pulls back to it
    clock.scrub(-30, 1_250_000);
    assert_eq!(clock.elapsed(1_250_000), 1190);
}

// ==================================================================================
// Timeline tests
// ==================================================================================

#[test]
fn appearance_ranges_follow_script() {
    let mut sys = default_scenario().system;
    let mut script = TimelineScript::default_script();

    assert!(script.evaluate(253).is_empty());

    let cases = [
        (254, Rgb(255, 205, 0), 15.5),
        (527, Rgb(255, 205, 0), 15.5),
        (528, Rgb(255, 155, 0), 16.0),
        (1035, Rgb(255, 105, 0), 16.5),
        (1199, Rgb(255, 55, 0), 17.0),
        (1289, Rgb(255, 20, 0), 17.5),
    ];
    for (s, color, radius) in cases {
        let effects = script.evaluate(s);
        TimelineScript::apply(effects, &mut sys);
        assert_eq!(sys.bodies[0].color, color, "color at {}", s);
        assert_eq!(sys.bodies[0].radius, radius, "radius at {}", s);
        assert_eq!(sys.bodies[1].name, "Ash Twin");
    }
}

#[test]
fn audio_fires_once_across_repeated_observations() {
    let mut script = TimelineScript::default_script();
    let mut count = 0;
    for s in [1201, 1202, 1203, 1203, 1203, 1203, 1204] {
        count += script.evaluate(s).iter().filter(|e| is_audio(e)).count();
    }
    assert_eq!(count, 1);
}

#[test]
fn backward_scrub_does_not_refire_one_shots() {
    let mut script = TimelineScript::default_script();
    assert_eq!(script.evaluate(1203).iter().filter(|e| is_audio(e)).count(), 1);
    assert_eq!(script.evaluate(1290).iter().filter(|e| is_replace(e)).count(), 1);
    assert!(script.has_fired(5) && script.has_fired(6));

    for s in [1190, 1203, 1250, 1290, 1300] {
        let effects = script.evaluate(s);
        assert!(!effects.iter().any(|e| is_audio(e) || is_replace(e)), "refired at {}", s);
    }
}

#[test]
fn scrub_landing_exactly_on_trigger_fires() {
    let mut script = TimelineScript::default_script();
    script.evaluate(1100);
    let effects = script.evaluate(1203);
    assert_eq!(effects.iter().filter(|e| is_audio(e)).count(), 1);
}

#[test]
fn skipped_second_still_fires() {
    let mut script = TimelineScript::default_script();
    script.evaluate(1289);
    let effects = script.evaluate(1291);
    assert_eq!(effects.iter().filter(|e| is_replace(e)).count(), 1);
}

#[test]
fn replacement_then_growth() {
    let mut sys = default_scenario().system;
    let mut script = TimelineScript::default_script();

    let outcome = TimelineScript::apply(script.evaluate(1290), &mut sys);
    assert!(outcome.replaced);
    assert_eq!(sys.bodies.len(), 1);
    let nova = &sys.bodies[0];
    assert_eq!(nova.name, "Supernova");
    assert_eq!(nova.m, 1.989e31);
    assert_eq!(nova.color, Rgb(0, 200, 255));
    assert_eq!(nova.x, NVec2::zeros());
    assert_eq!(nova.radius, 1.0);

    // grows every tick, not once per second
    TimelineScript::apply(script.evaluate(1291), &mut sys);
    TimelineScript::apply(script.evaluate(1291), &mut sys);
    assert!((sys.bodies[0].radius - 1.66).abs() < 1e-12);

    let outcome = TimelineScript::apply(script.evaluate(1320), &mut sys);
    assert!(outcome.terminated);
}

#[test]
fn audio_cue_reaches_frame_once() {
    let mut scenario = default_scenario();
    let frame = scenario.tick(1_203_000, &[]);
    let cue = frame.audio.expect("audio cue at 1203");
    assert_eq!(cue.volume, 0.5);
    assert_eq!(cue.asset, "sounds/supernova.ogg");

    let frame = scenario.tick(1_203_500, &[]);
    assert!(frame.audio.is_none());
}

#[test]
fn terminates_at_1320() {
    let mut scenario = default_scenario();
    let frame = scenario.tick(1_320_000, &[]);
    assert!(!frame.running);
    assert!(!scenario.running);
}

#[test]
fn terminates_at_1320_after_scrubbing() {
    let mut scenario = default_scenario();
    let scrubs = [Command::ScrubForward; 10];
    let frame = scenario.tick(1_000_000, &scrubs);
    assert_eq!(frame.timer, timer_readout(1190));
    assert!(frame.running);

    scenario.tick(1_005_000, &[Command::ScrubBackward, Command::ScrubForward]);
    assert!(scenario.running);

    // 1130 s of wall time plus the 190 s offset
    let offset = scenario.clock.offset();
    let wall_ms = ((1320 - offset) * 1000) as u64;
    let frame = scenario.tick(wall_ms, &[]);
    assert!(!frame.running);
}

#[test]
fn quit_command_stops_running() {
    let mut scenario = default_scenario();
    let frame = scenario.tick(0, &[Command::Quit]);
    assert!(!frame.running);
    let t = scenario.system.t;
    scenario.tick(16, &[]);
    assert_eq!(scenario.system.t, t, "stopped scenario kept integrating");
}

#[test]
fn headless_run_reaches_supernova_and_stops() {
    let mut scenario = default_scenario();
    let ticks = run_headless(&mut scenario, u64::MAX);

    assert!(!scenario.running);
    assert_eq!(ticks, 1320 * 60 + 1);
    assert_eq!(scenario.system.bodies.len(), 1);
    assert_eq!(scenario.system.bodies[0].name, "Supernova");
    assert!(scenario.system.bodies[0].radius > 1.0);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn bundled_scenario_matches_builtin() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("hearthian_system.yaml");
    let text = std::fs::read_to_string(path).unwrap();
    let cfg: ScenarioConfig = serde_yaml::from_str(&text).unwrap();

    let builtin = ScenarioConfig::default();
    assert_eq!(cfg.engine, builtin.engine);
    assert_eq!(cfg.parameters, builtin.parameters);
    assert_eq!(cfg.view, builtin.view);
    assert_eq!(cfg.clock, builtin.clock);
    assert_eq!(cfg.bodies, builtin.bodies);
    assert_eq!(cfg.timeline.as_ref().map(|t| t.len()), Some(9));

    // the file's timeline behaves like the built-in one
    let mut from_file = Scenario::build_scenario(cfg).unwrap();
    let mut builtin = default_scenario();
    for s in [300u64, 1203, 1290, 1295] {
        let a = from_file.tick(s * 1000, &[]);
        let b = builtin.tick(s * 1000, &[]);
        assert_eq!(a.audio, b.audio, "audio at {}", s);
        assert_eq!(a.bodies.len(), b.bodies.len(), "bodies at {}", s);
        assert_eq!(a.bodies[0].color, b.bodies[0].color, "color at {}", s);
        assert!((a.bodies[0].radius - b.bodies[0].radius).abs() < 1e-12, "radius at {}", s);
    }
    assert!(!from_file.tick(1_320_000, &[]).running);
}

#[test]
fn empty_yaml_is_the_builtin_scenario() {
    let cfg: ScenarioConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(cfg, ScenarioConfig::default());
}

#[test]
fn config_rejects_bad_bodies() {
    let mut cfg = ScenarioConfig::default();
    cfg.bodies[3].m = 0.0;
    assert!(matches!(Scenario::build_scenario(cfg).err(), Some(SimError::NonPositiveMass { .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.bodies[0].x = vec![0.0, 0.0, 0.0];
    assert!(matches!(Scenario::build_scenario(cfg).err(), Some(SimError::BadVector { len: 3, .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.bodies.clear();
    assert!(matches!(Scenario::build_scenario(cfg).err(), Some(SimError::EmptyBodySet)));
}

#[test]
fn config_rejects_malformed_timeline_rules() {
    let two_triggers = TimelineRuleConfig {
        at: Some(10),
        from: Some(20),
        terminate: Some(true),
        ..Default::default()
    };
    let no_effect = TimelineRuleConfig {
        at: Some(10),
        ..Default::default()
    };
    let bad_replacement = TimelineRuleConfig {
        at: Some(10),
        replace_bodies: Some(vec![BodyConfig {
            name: "void".to_string(),
            x: vec![0.0, 0.0],
            v: vec![0.0, 0.0],
            m: -1.0,
            color: Rgb(0, 0, 0),
            radius: 1.0,
        }]),
        ..Default::default()
    };

    for rule in [two_triggers, no_effect] {
        let cfg = ScenarioConfig {
            timeline: Some(vec![rule]),
            ..Default::default()
        };
        assert!(matches!(Scenario::build_scenario(cfg).err(), Some(SimError::InvalidTimeline(_))));
    }

    let cfg = ScenarioConfig {
        timeline: Some(vec![bad_replacement]),
        ..Default::default()
    };
    assert!(matches!(Scenario::build_scenario(cfg).err(), Some(SimError::NonPositiveMass { .. })));
}

#[test]
fn unknown_timeline_keys_fail_to_parse() {
    let yaml = "timeline:\n  - { at: 5, explode: true }\n";
    assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
}
