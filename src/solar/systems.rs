//! The orbiting solar scene: spawn, animation, and its control overlay.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::constants::{ORBIT_MULTIPLIER_DEFAULT, SUN_RADIUS};
use crate::graphics::{moon_color, planet_material, sun_material, BodyTextures};
use crate::menu::{GameState, SelectedPlanet};

use super::bodies::{
    advance_angle, orbit_position, planet_catalog, PlanetId, PlanetSpec, MOON_ORBIT_RADIUS,
    MOON_ORBIT_SPEED, MOON_SIZE, RING_INNER_FACTOR, RING_OUTER_FACTOR,
};

/// Everything spawned for the solar scene, torn down on exit.
#[derive(Component)]
pub struct SolarSceneRoot;

/// One orbiting planet and its live orbital state.
#[derive(Component)]
pub struct OrbitingBody {
    pub spec: PlanetSpec,
    pub angle: f32,
}

/// Earth's moon; a child of the Earth entity, orbiting in local space.
#[derive(Component)]
pub struct SolarMoon {
    pub angle: f32,
}

/// The faint circle drawn along one planet's orbit.
#[derive(Component)]
pub struct OrbitRing;

/// Overlay root and the multiplier readout inside it.
#[derive(Component)]
pub struct SolarHudRoot;

#[derive(Component)]
pub struct SolarMultiplierText;

/// Live tuning for the scene, driven from the keyboard.
#[derive(Resource)]
pub struct OrbitTuning {
    /// Multiplier on every base orbital rate.
    pub multiplier: f32,
    /// Freezes orbital motion and spin; the overlay stays interactive.
    pub paused: bool,
    pub show_orbits: bool,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            multiplier: ORBIT_MULTIPLIER_DEFAULT,
            paused: false,
            show_orbits: true,
        }
    }
}

fn ring_color() -> Color {
    Color::srgba(0.5, 0.5, 0.6, 0.35)
}

fn overlay_text_color() -> Color {
    Color::srgb(0.75, 0.80, 0.90)
}

/// Build the whole scene: camera, sun, planets (with Earth's moon and
/// Saturn's ring as children), and the per-planet orbit circles.
pub fn spawn_solar_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tuning: ResMut<OrbitTuning>,
    textures: Res<BodyTextures>,
) {
    *tuning = OrbitTuning::default();

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 180.0, 280.0).looking_at(Vec3::ZERO, Vec3::Y),
        SolarSceneRoot,
    ));

    // The sun lights the scene from its centre.
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(sun_material(materials.as_mut(), &textures)),
        Transform::default(),
        PointLight {
            intensity: 2_000_000_000.0,
            range: 600.0,
            shadows_enabled: false,
            ..default()
        },
        SolarSceneRoot,
    ));

    let flat = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);

    for spec in planet_catalog() {
        let start = orbit_position(0.0, spec.orbit_radius);
        let planet = commands
            .spawn((
                OrbitingBody { spec, angle: 0.0 },
                Mesh3d(meshes.add(Sphere::new(spec.size))),
                MeshMaterial3d(planet_material(materials.as_mut(), &textures, spec.id)),
                Transform::from_translation(start),
                SolarSceneRoot,
            ))
            .id();

        if spec.has_moon {
            let moon = commands
                .spawn((
                    SolarMoon { angle: 0.0 },
                    Mesh3d(meshes.add(Sphere::new(MOON_SIZE))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: moon_color(),
                        base_color_texture: Some(textures.moon.clone()),
                        perceptual_roughness: 1.0,
                        ..default()
                    })),
                    Transform::from_xyz(MOON_ORBIT_RADIUS, 0.0, 0.0),
                ))
                .id();
            commands.entity(planet).add_child(moon);
        }

        if spec.has_ring {
            let ring = commands
                .spawn((
                    Mesh3d(meshes.add(Annulus::new(
                        spec.size * RING_INNER_FACTOR,
                        spec.size * RING_OUTER_FACTOR,
                    ))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgba(0.82, 0.72, 0.50, 0.8),
                        unlit: true,
                        cull_mode: None,
                        ..default()
                    })),
                    Transform::from_rotation(flat),
                ))
                .id();
            commands.entity(planet).add_child(ring);
        }

        // Orbit circle, a thin flat annulus around the sun.
        commands.spawn((
            OrbitRing,
            Mesh3d(meshes.add(Annulus::new(
                spec.orbit_radius - 0.15,
                spec.orbit_radius + 0.15,
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: ring_color(),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                ..default()
            })),
            Transform::from_rotation(flat),
            Visibility::Visible,
            SolarSceneRoot,
        ));
    }

    spawn_solar_overlay(&mut commands);
}

fn spawn_solar_overlay(commands: &mut Commands) {
    commands
        .spawn((
            SolarHudRoot,
            SolarSceneRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
            ZIndex(5),
        ))
        .with_children(|parent| {
            parent.spawn((
                SolarMultiplierText,
                Text::new(multiplier_line(&OrbitTuning::default())),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(overlay_text_color()),
            ));
            parent.spawn((
                Text::new(
                    "up/down speed · space pause · o orbits\n1-8 planet close-up · esc menu",
                ),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.40, 0.42, 0.52)),
            ));
        });
}

/// Overlay readout for the current tuning.
pub fn multiplier_line(tuning: &OrbitTuning) -> String {
    if tuning.paused {
        format!("orbit speed x{:.1} (paused)", tuning.multiplier)
    } else {
        format!("orbit speed x{:.1}", tuning.multiplier)
    }
}

pub fn cleanup_solar_scene(mut commands: Commands, scene: Query<Entity, With<SolarSceneRoot>>) {
    for entity in scene.iter() {
        commands.entity(entity).despawn();
    }
}

/// Keyboard control for the scene.
///
/// Holding Up/Down sweeps the multiplier, Space freezes motion, O toggles the
/// orbit circles, digits jump to a planet close-up, and Esc returns to the
/// main menu.
pub fn solar_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut tuning: ResMut<OrbitTuning>,
    mut selected: ResMut<SelectedPlanet>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        tuning.paused = !tuning.paused;
    }
    if keys.just_pressed(KeyCode::KeyO) {
        tuning.show_orbits = !tuning.show_orbits;
    }

    let step = config.orbit_multiplier_step * time.delta_secs();
    if keys.pressed(KeyCode::ArrowUp) {
        tuning.multiplier = (tuning.multiplier + step).min(config.orbit_multiplier_max);
    }
    if keys.pressed(KeyCode::ArrowDown) {
        tuning.multiplier = (tuning.multiplier - step).max(0.0);
    }

    const DIGITS: [(KeyCode, u8); 8] = [
        (KeyCode::Digit1, 1),
        (KeyCode::Digit2, 2),
        (KeyCode::Digit3, 3),
        (KeyCode::Digit4, 4),
        (KeyCode::Digit5, 5),
        (KeyCode::Digit6, 6),
        (KeyCode::Digit7, 7),
        (KeyCode::Digit8, 8),
    ];
    for (key, digit) in DIGITS {
        if keys.just_pressed(key) {
            if let Some(id) = PlanetId::from_digit(digit) {
                selected.0 = id;
                next_state.set(GameState::PlanetView);
            }
        }
    }

    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::MainMenu);
    }
}

/// Advance every planet along its orbit and spin it on its axis.
pub fn orbit_system(
    time: Res<Time>,
    tuning: Res<OrbitTuning>,
    mut bodies: Query<(&mut OrbitingBody, &mut Transform)>,
) {
    if tuning.paused {
        return;
    }
    let dt = time.delta_secs();

    for (mut body, mut transform) in bodies.iter_mut() {
        let rate = body.spec.orbit_speed * tuning.multiplier;
        body.angle = advance_angle(body.angle, rate, dt);
        transform.translation = orbit_position(body.angle, body.spec.orbit_radius);

        let spin = if body.spec.retrograde {
            -body.spec.rotation_speed
        } else {
            body.spec.rotation_speed
        };
        transform.rotate_y(spin * dt);
    }
}

/// Advance the moon around its parent planet in local space.
pub fn moon_orbit_system(
    time: Res<Time>,
    tuning: Res<OrbitTuning>,
    mut moons: Query<(&mut SolarMoon, &mut Transform)>,
) {
    if tuning.paused {
        return;
    }
    let dt = time.delta_secs();

    for (mut moon, mut transform) in moons.iter_mut() {
        let rate = MOON_ORBIT_SPEED * tuning.multiplier;
        moon.angle = advance_angle(moon.angle, rate, dt);
        transform.translation = orbit_position(moon.angle, MOON_ORBIT_RADIUS);
    }
}

/// Apply the orbit-circle toggle and refresh the overlay readout.
pub fn solar_overlay_system(
    tuning: Res<OrbitTuning>,
    mut rings: Query<&mut Visibility, With<OrbitRing>>,
    mut readout: Query<&mut Text, With<SolarMultiplierText>>,
) {
    if !tuning.is_changed() {
        return;
    }
    let visibility = if tuning.show_orbits {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut ring in rings.iter_mut() {
        *ring = visibility;
    }
    for mut text in readout.iter_mut() {
        *text = Text::new(multiplier_line(&tuning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pause_freezes_the_choreography() {
        let mut world = World::new();
        world.insert_resource(OrbitTuning {
            paused: true,
            ..Default::default()
        });
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(1));
        world.insert_resource(time);
        world.spawn((
            OrbitingBody {
                spec: super::super::bodies::planet_spec(PlanetId::Mercury),
                angle: 0.5,
            },
            Transform::default(),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(orbit_system);
        schedule.run(&mut world);

        let mut bodies = world.query::<&OrbitingBody>();
        let body = bodies.iter(&world).next();
        assert!(matches!(body, Some(b) if b.angle == 0.5));
    }

    #[test]
    fn orbits_advance_with_the_multiplier() {
        let mut world = World::new();
        world.insert_resource(OrbitTuning {
            multiplier: 100.0,
            ..Default::default()
        });
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(1));
        world.insert_resource(time);
        let spec = super::super::bodies::planet_spec(PlanetId::Mercury);
        world.spawn((OrbitingBody { spec, angle: 0.0 }, Transform::default()));

        let mut schedule = Schedule::default();
        schedule.add_systems(orbit_system);
        schedule.run(&mut world);

        let mut bodies = world.query::<(&OrbitingBody, &Transform)>();
        let (body, transform) = bodies
            .iter(&world)
            .next()
            .map(|(b, t)| (b.angle, t.translation))
            .unwrap_or((0.0, Vec3::ZERO));
        assert!((body - 0.6).abs() < 1e-4);
        assert!((transform.length() - spec.orbit_radius).abs() < 1e-3);
    }

    #[test]
    fn readout_reflects_pause() {
        let paused = OrbitTuning {
            paused: true,
            multiplier: 10.0,
            show_orbits: true,
        };
        assert_eq!(multiplier_line(&paused), "orbit speed x10.0 (paused)");
    }
}
