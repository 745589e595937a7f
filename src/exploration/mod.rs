//! Free-flight exploration: pilot a probe across a vastly scaled-up solar
//! system and visit every planet.
//!
//! The scene reuses the solar catalog's proportions blown up by a constant
//! factor, so the travel times feel interplanetary while the relative layout
//! stays familiar.  The [`missions::MissionLog`] checklist tracks first
//! visits.

pub mod missions;
pub mod probe;

pub use missions::{MissionHudRoot, MissionLog};
pub use probe::{ChaseCamera, Probe, ProbeIntent};

use bevy::prelude::*;
use rand::Rng;

use crate::constants::{PROBE_SCALE, SUN_RADIUS};
use crate::graphics::{planet_material, sun_material, BodyTextures};
use crate::menu::GameState;
use crate::solar::bodies::{orbit_position, planet_catalog, PlanetId};

/// Distance and sun-size blow-up from the solar catalog to this scene.
const DISTANCE_SCALE: f32 = 1_000.0;
/// Planet meshes grow less than distances so space still feels empty.
const BODY_SCALE: f32 = 400.0;
/// Probe start, sunward of Mercury's orbit.
const PROBE_START: Vec3 = Vec3::new(0.0, 0.0, 9_000.0);

/// One visitable planet and its mesh radius.
#[derive(Component)]
pub struct ExplorationBody {
    pub id: PlanetId,
    pub radius: f32,
}

/// Non-body scene entities (camera, lights, sun), torn down on exit.
#[derive(Component)]
pub struct ExplorationScenery;

/// Build the exploration scene: sun, the eight planets scattered around
/// their scaled orbits, the probe, and the chase camera.
pub fn spawn_exploration_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut log: ResMut<MissionLog>,
    mut intent: ResMut<ProbeIntent>,
    textures: Res<BodyTextures>,
) {
    *log = MissionLog::default();
    *intent = ProbeIntent::default();

    let mut rng = rand::thread_rng();

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS * DISTANCE_SCALE))),
        MeshMaterial3d(sun_material(materials.as_mut(), &textures)),
        Transform::default(),
        PointLight {
            intensity: 1e15,
            range: 500_000.0,
            shadows_enabled: false,
            ..default()
        },
        ExplorationScenery,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            ..default()
        },
        Transform::from_xyz(1.0, 2.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
        ExplorationScenery,
    ));

    for spec in planet_catalog() {
        let radius = spec.size * BODY_SCALE;
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance = spec.orbit_radius * DISTANCE_SCALE;
        // Small random inclination so the bodies are not all on one plane.
        let mut position = orbit_position(angle, distance);
        position.y = distance * rng.gen_range(-0.03..0.03);
        commands.spawn((
            ExplorationBody { id: spec.id, radius },
            Mesh3d(meshes.add(Sphere::new(radius))),
            MeshMaterial3d(planet_material(materials.as_mut(), &textures, spec.id)),
            Transform::from_translation(position),
        ));
    }

    let probe_mesh = meshes.add(Cone {
        radius: 0.8,
        height: 1.8,
    });
    let probe_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.80, 0.85, 0.95),
        metallic: 0.6,
        perceptual_roughness: 0.3,
        ..default()
    });
    commands.spawn((
        Probe::default(),
        Mesh3d(probe_mesh),
        MeshMaterial3d(probe_material),
        Transform::from_translation(PROBE_START)
            .with_scale(Vec3::splat(PROBE_SCALE))
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));

    commands.spawn((
        Camera3d::default(),
        ChaseCamera,
        Transform::from_translation(PROBE_START + Vec3::new(0.0, 120.0, 100.0))
            .looking_at(PROBE_START, Vec3::Y),
        ExplorationScenery,
    ));

    spawn_mission_hud(&mut commands, &log);
}

fn spawn_mission_hud(commands: &mut Commands, log: &MissionLog) {
    commands
        .spawn((
            MissionHudRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                right: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
            ZIndex(5),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PLANET TOUR"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
            parent.spawn((
                missions::MissionListText,
                Text::new(missions::mission_lines(log)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.75, 0.80, 0.90)),
            ));
            parent.spawn((
                Text::new("wasd attitude · shift thrust latch\nctrl reverse · esc pause"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.40, 0.42, 0.52)),
            ));
        });
}

pub struct ExplorationPlugin;

impl Plugin for ExplorationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MissionLog>()
            .init_resource::<ProbeIntent>()
            .add_systems(
                OnTransition {
                    exited: GameState::MainMenu,
                    entered: GameState::ExplorationPlaying,
                },
                spawn_exploration_world,
            )
            .add_systems(
                Update,
                (
                    probe::probe_input_system,
                    probe::probe_flight_system,
                    probe::chase_camera_system,
                    missions::mission_check_system,
                    missions::refresh_mission_hud_system,
                )
                    .chain()
                    .run_if(in_state(GameState::ExplorationPlaying)),
            );
    }
}
