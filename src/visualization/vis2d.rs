use bevy::prelude::*;
use bevy::audio::Volume;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::command::Command;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Rgb;
use crate::view::frame::{BodyFrame, FrameDescriptor, BACKGROUND, LABEL_COLOR, LABEL_GAP, TRAIL_COLOR};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct LabelIndex(pub usize);

#[derive(Component)]
struct TimerText;

/// Unit circle shared by every body, scaled by the body radius
#[derive(Resource)]
struct BodyMesh(Mesh2dHandle);

/// Commands collected since the last fixed tick
#[derive(Resource, Default)]
struct PendingCommands(Vec<Command>);

/// Output of the latest fixed tick
#[derive(Resource, Default)]
struct CurrentFrame(Option<FrameDescriptor>);

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let window = Window {
        title: scenario.title.clone(),
        resolution: WindowResolution::new(scenario.view.width as f32, scenario.view.height as f32),
        resizable: false,
        ..Default::default()
    };
    let frame_rate = scenario.engine.frame_rate;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(to_color(BACKGROUND)))
        .insert_resource(Time::<Fixed>::from_hz(frame_rate))
        .init_resource::<PendingCommands>()
        .init_resource::<CurrentFrame>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(FixedUpdate, tick_system)
        .add_systems(
            Update,
            (
                collect_input_system,
                sync_bodies_system,
                sync_labels_system,
                draw_trails_system,
                sync_timer_system,
            ),
        )
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    commands.insert_resource(BodyMesh(Mesh2dHandle(meshes.add(Circle::new(1.0)))));

    commands.spawn((
        TextBundle::from_section(
            "Time: 00:00",
            TextStyle {
                font_size: 30.0,
                color: to_color(LABEL_COLOR),
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        TimerText,
    ));
}

fn collect_input_system(keys: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingCommands>) {
    let bindings = [
        (KeyCode::Escape, Command::Quit),
        (KeyCode::KeyZ, Command::ToggleZoom),
        (KeyCode::KeyL, Command::ToggleLabels),
        (KeyCode::ArrowRight, Command::ScrubForward),
        (KeyCode::ArrowLeft, Command::ScrubBackward),
    ];
    for (key, cmd) in bindings {
        if keys.just_pressed(key) {
            pending.0.push(cmd);
        }
    }
}

fn tick_system(
    mut commands: Commands,
    mut scenario: ResMut<Scenario>,
    mut pending: ResMut<PendingCommands>,
    mut current: ResMut<CurrentFrame>,
    time: Res<Time<Real>>,
    asset_server: Res<AssetServer>,
    mut exit: EventWriter<AppExit>,
) {
    let wall_ms = time.elapsed().as_millis() as u64;
    let queued: Vec<Command> = pending.0.drain(..).collect();
    let frame = scenario.tick(wall_ms, &queued);

    if let Some(cue) = &frame.audio {
        info!("playing {} at volume {}", cue.asset, cue.volume);
        commands.spawn(AudioBundle {
            source: asset_server.load(cue.asset.clone()),
            settings: PlaybackSettings::DESPAWN.with_volume(Volume::new(cue.volume)),
        });
    }

    if !frame.running {
        exit.send(AppExit::Success);
    }

    current.0 = Some(frame);
}

fn sync_bodies_system(
    mut commands: Commands,
    current: Res<CurrentFrame>,
    body_mesh: Res<BodyMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BodyIndex, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let Some(frame) = &current.0 else { return };

    // body set was replaced, respawn everything
    if query.iter().count() != frame.bodies.len() {
        for (entity, ..) in query.iter() {
            commands.entity(entity).despawn();
        }
        for (i, b) in frame.bodies.iter().enumerate() {
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: body_mesh.0.clone(),
                    material: materials.add(ColorMaterial::from(to_color(b.color))),
                    transform: body_transform(frame, b),
                    ..Default::default()
                },
                BodyIndex(i),
            ));
        }
        return;
    }

    for (_, BodyIndex(i), mut transform, material) in &mut query {
        if let Some(b) = frame.bodies.get(*i) {
            *transform = body_transform(frame, b);
            if let Some(mat) = materials.get_mut(material) {
                mat.color = to_color(b.color);
            }
        }
    }
}

fn sync_labels_system(
    mut commands: Commands,
    current: Res<CurrentFrame>,
    mut query: Query<(Entity, &LabelIndex, &mut Text, &mut Transform, &mut Visibility)>,
) {
    let Some(frame) = &current.0 else { return };

    if query.iter().count() != frame.bodies.len() {
        for (entity, ..) in query.iter() {
            commands.entity(entity).despawn();
        }
        for (i, b) in frame.bodies.iter().enumerate() {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        b.label.clone().unwrap_or_default(),
                        TextStyle {
                            font_size: frame.label_font_size,
                            color: to_color(LABEL_COLOR),
                            ..Default::default()
                        },
                    ),
                    transform: label_transform(frame, b),
                    ..Default::default()
                },
                LabelIndex(i),
            ));
        }
        return;
    }

    for (_, LabelIndex(i), mut text, mut transform, mut visibility) in &mut query {
        let Some(b) = frame.bodies.get(*i) else { continue };
        *transform = label_transform(frame, b);
        match &b.label {
            Some(name) => {
                text.sections[0].value.clone_from(name);
                text.sections[0].style.font_size = frame.label_font_size;
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn draw_trails_system(mut gizmos: Gizmos, current: Res<CurrentFrame>) {
    let Some(frame) = &current.0 else { return };
    for b in &frame.bodies {
        if b.trail.len() > 1 {
            let points = b.trail.iter().map(|&(x, y)| to_world(frame, (x as f64, y as f64)));
            gizmos.linestrip_2d(points, to_color(TRAIL_COLOR));
        }
    }
}

fn sync_timer_system(current: Res<CurrentFrame>, mut query: Query<&mut Text, With<TimerText>>) {
    let Some(frame) = &current.0 else { return };
    for mut text in &mut query {
        text.sections[0].value.clone_from(&frame.timer);
    }
}

// helpers ==============================================================================

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

/// Screen space (top-left origin, y down) to Bevy world space (centered, y up)
fn to_world(frame: &FrameDescriptor, (sx, sy): (f64, f64)) -> Vec2 {
    let half_w = (frame.width / 2) as f32;
    let half_h = (frame.height / 2) as f32;
    Vec2::new(sx as f32 - half_w, half_h - sy as f32)
}

fn body_transform(frame: &FrameDescriptor, b: &BodyFrame) -> Transform {
    let p = to_world(frame, b.position);
    Transform::from_xyz(p.x, p.y, 1.0).with_scale(Vec3::splat(b.radius as f32))
}

fn label_transform(frame: &FrameDescriptor, b: &BodyFrame) -> Transform {
    let (sx, sy) = b.position;
    let p = to_world(frame, (sx, sy + b.radius + LABEL_GAP));
    Transform::from_xyz(p.x, p.y, 2.0)
}
