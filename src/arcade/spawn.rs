//! Arcade scene construction and actor spawning.
//!
//! A fresh session is built by `(reset_session, spawn_arcade_world,
//! setup_hud).chain()` on the menu → playing transition; the restart path
//! chains the world cleanup in front of the same systems.

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::constants::{
    BACKDROP_SIDE_OFFSET, COLLECTIBLE_RADIUS, HAZARD_RADIUS, STREAK_COUNT, STREAK_HALF_EXTENT,
    STREAK_RESET_DEPTH,
};
use crate::graphics::{planet_color, BodyTextures};
use crate::solar::bodies::PlanetId;

use super::state::{
    should_spawn_collectible, ArcadeScenery, Backdrop, Collectible, CollectibleAlive, Hazard,
    HazardSpeed, Invulnerability, ScoreLedger, SessionStamp, Ship, ShipIntent, ShipLives,
    SpeedBoosts, SurvivalTimer,
};

/// Backdrop planets cycle from the outer system inward, restarting at
/// Neptune once Mercury has passed.
pub const BACKDROP_ORDER: [PlanetId; 8] = [
    PlanetId::Neptune,
    PlanetId::Uranus,
    PlanetId::Saturn,
    PlanetId::Jupiter,
    PlanetId::Mars,
    PlanetId::Earth,
    PlanetId::Venus,
    PlanetId::Mercury,
];

/// Random x/y inside the far-plane spawn window, at spawn depth.
pub fn far_plane_position(rng: &mut impl Rng, half_extent: f32, depth: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_extent..half_extent),
        rng.gen_range(-half_extent..half_extent),
        depth,
    )
}

/// Reset every per-session resource from the loaded config and advance the
/// session stamp.
///
/// Runs first in the spawn chain so deferred effects scheduled by a previous
/// session can never fire into this one.
#[allow(clippy::too_many_arguments)]
pub fn reset_session(
    config: Res<GameConfig>,
    mut stamp: ResMut<SessionStamp>,
    mut ledger: ResMut<ScoreLedger>,
    mut lives: ResMut<ShipLives>,
    mut speed: ResMut<HazardSpeed>,
    mut collectible_alive: ResMut<CollectibleAlive>,
    mut boosts: ResMut<SpeedBoosts>,
    mut invulnerability: ResMut<Invulnerability>,
    mut survival: ResMut<SurvivalTimer>,
    mut intent: ResMut<ShipIntent>,
) {
    stamp.0 += 1;
    *ledger = ScoreLedger::default();
    lives.remaining = config.starting_lives;
    speed.current = config.hazard_base_speed;
    *collectible_alive = CollectibleAlive::default();
    *boosts = SpeedBoosts::default();
    *invulnerability = Invulnerability::default();
    *survival = SurvivalTimer::from_interval(config.survival_bonus_interval_secs);
    *intent = ShipIntent::default();
    info!("arcade session {} started", stamp.0);
}

/// Build the arcade scene: camera, light, ship, streak field, the initial
/// actor population, and the backdrop planet pair.
pub fn spawn_arcade_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
    mut collectible_alive: ResMut<CollectibleAlive>,
    textures: Res<BodyTextures>,
) {
    let mut rng = rand::thread_rng();

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 20.0),
        ArcadeScenery,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(30.0, 40.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        ArcadeScenery,
    ));

    // Ship: a cone pointing into the scene.
    let ship_mesh = meshes.add(Cone {
        radius: 0.8,
        height: 1.8,
    });
    let ship_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.80, 0.85, 0.95),
        metallic: 0.6,
        perceptual_roughness: 0.3,
        ..default()
    });
    commands.spawn((
        Ship,
        Mesh3d(ship_mesh),
        MeshMaterial3d(ship_material),
        // Cone apex points +Y by default; tip it away from the camera.
        Transform::from_xyz(0.0, 0.0, 0.0).with_rotation(Quat::from_rotation_x(
            -std::f32::consts::FRAC_PI_2,
        )),
        Visibility::default(),
    ));

    // Streak field, pre-scattered through the whole depth range.
    let streak_mesh = meshes.add(Sphere::new(0.05));
    let streak_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(1.5, 1.5, 1.5),
        unlit: true,
        ..default()
    });
    for _ in 0..STREAK_COUNT {
        let pos = Vec3::new(
            rng.gen_range(-STREAK_HALF_EXTENT..STREAK_HALF_EXTENT),
            rng.gen_range(-STREAK_HALF_EXTENT..STREAK_HALF_EXTENT),
            rng.gen_range(STREAK_RESET_DEPTH..config.despawn_depth),
        );
        commands.spawn((
            super::state::Streak,
            Mesh3d(streak_mesh.clone()),
            MeshMaterial3d(streak_material.clone()),
            Transform::from_translation(pos),
        ));
    }

    // Initial actor population; every slot rolls the collectible policy.
    for _ in 0..config.initial_actor_count {
        let as_collectible = should_spawn_collectible(
            collectible_alive.0,
            rng.gen_range(0.0..1.0),
            config.collectible_probability,
        );
        if as_collectible {
            collectible_alive.0 = true;
        }
        spawn_actor(
            &mut commands,
            meshes.as_mut(),
            materials.as_mut(),
            &mut rng,
            as_collectible,
            &config,
        );
    }

    // Backdrop pair: the lead planet and the one queued behind it.
    for (slot, lead) in [(0usize, true), (1usize, false)] {
        spawn_backdrop(
            &mut commands,
            meshes.as_mut(),
            materials.as_mut(),
            &textures,
            &mut rng,
            slot,
            lead,
        );
    }
}

/// Spawn one streaming actor at the far plane.
pub fn spawn_actor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
    as_collectible: bool,
    config: &GameConfig,
) {
    let position = far_plane_position(rng, config.spawn_half_extent, config.spawn_depth);
    let transform = Transform::from_translation(position);

    if as_collectible {
        let mesh = meshes.add(Sphere::new(COLLECTIBLE_RADIUS));
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.85, 0.20),
            emissive: LinearRgba::rgb(2.0, 1.5, 0.2),
            ..default()
        });
        commands.spawn((Collectible, Mesh3d(mesh), MeshMaterial3d(material), transform));
    } else {
        let mesh = meshes.add(Sphere::new(HAZARD_RADIUS));
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.42, 0.40),
            perceptual_roughness: 1.0,
            ..default()
        });
        commands.spawn((Hazard, Mesh3d(mesh), MeshMaterial3d(material), transform));
    }
}

/// Spawn one backdrop planet in the given cycle slot.
pub fn spawn_backdrop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &BodyTextures,
    rng: &mut impl Rng,
    index: usize,
    lead: bool,
) {
    let id = BACKDROP_ORDER[index % BACKDROP_ORDER.len()];
    let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let depth = if lead { -80.0 } else { -140.0 };

    let mesh = meshes.add(Sphere::new(6.0));
    let material = materials.add(StandardMaterial {
        base_color: planet_color(id),
        base_color_texture: textures.planets.get(&id).cloned(),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Backdrop { lead, index },
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_xyz(side * BACKDROP_SIDE_OFFSET, 0.0, depth),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn session_reset_honors_config_overrides() {
        let mut world = World::new();
        world.insert_resource(GameConfig {
            hazard_base_speed: 25.0,
            starting_lives: 5,
            survival_bonus_interval_secs: 2.0,
            ..GameConfig::default()
        });
        world.init_resource::<SessionStamp>();
        world.init_resource::<ScoreLedger>();
        world.init_resource::<ShipLives>();
        world.init_resource::<HazardSpeed>();
        world.init_resource::<CollectibleAlive>();
        world.init_resource::<SpeedBoosts>();
        world.init_resource::<Invulnerability>();
        world.init_resource::<SurvivalTimer>();
        world.init_resource::<ShipIntent>();

        let mut schedule = Schedule::default();
        schedule.add_systems(reset_session);
        schedule.run(&mut world);

        assert_eq!(world.resource::<ShipLives>().remaining, 5);
        assert_eq!(world.resource::<HazardSpeed>().current, 25.0);
        assert_eq!(
            world.resource::<SurvivalTimer>().0.duration(),
            Duration::from_secs_f32(2.0)
        );
        assert_eq!(world.resource::<SessionStamp>().0, 1);
    }

    #[test]
    fn far_plane_positions_stay_inside_the_window() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let pos = far_plane_position(&mut rng, 10.0, -50.0);
            assert!(pos.x.abs() <= 10.0);
            assert!(pos.y.abs() <= 10.0);
            assert_eq!(pos.z, -50.0);
        }
    }

    #[test]
    fn backdrop_order_walks_outward_in() {
        assert_eq!(BACKDROP_ORDER[0], PlanetId::Neptune);
        assert_eq!(BACKDROP_ORDER[7], PlanetId::Mercury);
    }
}
