//! Planet close-up: one selected planet, slowly spinning, filling the view.

use bevy::prelude::*;

use crate::constants::{PLANET_VIEW_MOON_RADIUS, PLANET_VIEW_MOON_SPEED, PLANET_VIEW_SPIN};
use crate::graphics::{moon_color, planet_material, BodyTextures};
use crate::menu::{GameState, SelectedPlanet};
use crate::solar::bodies::{advance_angle, orbit_position, planet_spec, PlanetId};

/// Everything spawned for the close-up, torn down on exit.
#[derive(Component)]
pub struct PlanetViewRoot;

/// The featured planet.
#[derive(Component)]
pub struct FeaturedPlanet {
    pub retrograde: bool,
}

/// The moon circling the featured planet (Earth only).
#[derive(Component)]
pub struct ViewMoon {
    pub angle: f32,
}

#[derive(Component)]
pub struct PlanetViewBackButton;

const VIEW_PLANET_RADIUS: f32 = 5.0;

pub fn spawn_planet_view(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    selected: Res<SelectedPlanet>,
    textures: Res<BodyTextures>,
) {
    let spec = planet_spec(selected.0);

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 18.0).looking_at(Vec3::ZERO, Vec3::Y),
        PlanetViewRoot,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            ..default()
        },
        Transform::from_xyz(40.0, 30.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
        PlanetViewRoot,
    ));

    commands.spawn((
        FeaturedPlanet {
            retrograde: spec.retrograde,
        },
        Mesh3d(meshes.add(Sphere::new(VIEW_PLANET_RADIUS))),
        MeshMaterial3d(planet_material(materials.as_mut(), &textures, selected.0)),
        Transform::default(),
        PlanetViewRoot,
    ));

    if selected.0 == PlanetId::Earth {
        commands.spawn((
            ViewMoon { angle: 0.0 },
            Mesh3d(meshes.add(Sphere::new(1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: moon_color(),
                base_color_texture: Some(textures.moon.clone()),
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::from_xyz(PLANET_VIEW_MOON_RADIUS, 0.0, 0.0),
            PlanetViewRoot,
        ));
    }

    spawn_view_overlay(&mut commands, spec.id);
}

fn spawn_view_overlay(commands: &mut Commands, id: PlanetId) {
    commands
        .spawn((
            PlanetViewRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
            ZIndex(5),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(id.label()),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
            parent
                .spawn((
                    PlanetViewBackButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.12, 0.12, 0.18)),
                    BorderColor::all(Color::srgb(0.30, 0.30, 0.46)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("BACK"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.55, 0.55, 0.70)),
                    ));
                });
        });
}

pub fn cleanup_planet_view(mut commands: Commands, scene: Query<Entity, With<PlanetViewRoot>>) {
    for entity in scene.iter() {
        commands.entity(entity).despawn();
    }
}

/// Spin the featured planet; retrograde planets spin the other way.
pub fn spin_planet_system(
    time: Res<Time>,
    mut planets: Query<(&FeaturedPlanet, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (planet, mut transform) in planets.iter_mut() {
        let spin = if planet.retrograde {
            -PLANET_VIEW_SPIN
        } else {
            PLANET_VIEW_SPIN
        };
        transform.rotate_y(spin * dt);
    }
}

/// Circle the moon around the view's centre.
pub fn view_moon_system(time: Res<Time>, mut moons: Query<(&mut ViewMoon, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut moon, mut transform) in moons.iter_mut() {
        moon.angle = advance_angle(moon.angle, PLANET_VIEW_MOON_SPEED, dt);
        transform.translation = orbit_position(moon.angle, PLANET_VIEW_MOON_RADIUS);
    }
}

/// Back button and Esc both return to the solar scene.
#[allow(clippy::type_complexity)]
pub fn planet_view_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<PlanetViewBackButton>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let clicked = buttons.iter().any(|i| *i == Interaction::Pressed);
    if clicked || keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::SolarSystem);
    }
}

pub struct PlanetViewPlugin;

impl Plugin for PlanetViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::PlanetView), spawn_planet_view)
            .add_systems(OnExit(GameState::PlanetView), cleanup_planet_view)
            .add_systems(
                Update,
                (spin_planet_system, view_moon_system, planet_view_input_system)
                    .run_if(in_state(GameState::PlanetView)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn featured_planet_spins_over_time() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(1));
        world.insert_resource(time);
        world.spawn((FeaturedPlanet { retrograde: false }, Transform::default()));

        let mut schedule = Schedule::default();
        schedule.add_systems(spin_planet_system);
        schedule.run(&mut world);

        let mut planets = world.query::<&Transform>();
        let rotation = planets.iter(&world).next().map(|t| t.rotation);
        assert!(matches!(rotation, Some(r) if r != Quat::IDENTITY));
    }

    #[test]
    fn view_moon_keeps_its_radius() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(700));
        world.insert_resource(time);
        world.spawn((
            ViewMoon { angle: 0.0 },
            Transform::from_xyz(PLANET_VIEW_MOON_RADIUS, 0.0, 0.0),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(view_moon_system);
        schedule.run(&mut world);

        let mut moons = world.query::<(&ViewMoon, &Transform)>();
        let (angle, pos) = moons
            .iter(&world)
            .next()
            .map(|(m, t)| (m.angle, t.translation))
            .unwrap_or((0.0, Vec3::ZERO));
        assert!(angle > 0.0);
        assert!((pos.length() - PLANET_VIEW_MOON_RADIUS).abs() < 1e-3);
    }
}
