//! Actor streaming, interactions, and session progression.
//!
//! Systems here run in a fixed chain (see [`super::ArcadePlugin`]) so each
//! frame reads like the session's turn: move everything, resolve contacts,
//! award bonuses, then settle levels, boosts, and the grace window.

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::constants::{STREAK_HALF_EXTENT, STREAK_RESET_DEPTH};
use crate::graphics::BodyTextures;
use crate::menu::GameState;
use crate::scores::{persist_table, HighScoreTable};

use super::spawn::{far_plane_position, spawn_actor, BACKDROP_ORDER};
use super::state::{
    should_spawn_collectible, level_up_batch, Backdrop, Collectible, CollectibleAlive, Hazard,
    HazardSpeed, Invulnerability, LevelUp, ScoreLedger, SessionStamp, Ship, ShipLives,
    SpeedBoosts, Streak, SurvivalTimer,
};

/// Advance every hazard and collectible toward the camera and recycle those
/// that pass the near boundary.
///
/// A recycled hazard slot rolls the collectible policy: while no collectible
/// is alive it has a fixed chance of coming back as the coin instead.  A
/// collectible that escapes uncollected frees the slot again.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn advance_actors_system(
    mut commands: Commands,
    time: Res<Time>,
    speed: Res<HazardSpeed>,
    config: Res<GameConfig>,
    mut collectible_alive: ResMut<CollectibleAlive>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut hazards: Query<(Entity, &mut Transform), (With<Hazard>, Without<Collectible>)>,
    mut collectibles: Query<(Entity, &mut Transform), With<Collectible>>,
) {
    let step = speed.current * time.delta_secs();
    let mut rng = rand::thread_rng();

    for (entity, mut transform) in hazards.iter_mut() {
        transform.translation.z += step;
        if transform.translation.z <= config.despawn_depth {
            continue;
        }
        let roll: f32 = rng.gen_range(0.0..1.0);
        if should_spawn_collectible(collectible_alive.0, roll, config.collectible_probability) {
            collectible_alive.0 = true;
            commands.entity(entity).despawn();
            spawn_actor(
                &mut commands,
                meshes.as_mut(),
                materials.as_mut(),
                &mut rng,
                true,
                &config,
            );
        } else {
            transform.translation =
                far_plane_position(&mut rng, config.spawn_half_extent, config.spawn_depth);
        }
    }

    for (entity, mut transform) in collectibles.iter_mut() {
        transform.translation.z += step;
        if transform.translation.z <= config.despawn_depth {
            continue;
        }
        // Escaped uncollected; the slot reverts to a hazard.
        collectible_alive.0 = false;
        commands.entity(entity).despawn();
        spawn_actor(
            &mut commands,
            meshes.as_mut(),
            materials.as_mut(),
            &mut rng,
            false,
            &config,
        );
    }
}

/// Resolve ship–hazard proximity.
///
/// Contact costs one life; losing the last life ends the session, anything
/// else opens the grace window.  The whole check is skipped while the window
/// is active.
pub fn hazard_contact_system(
    config: Res<GameConfig>,
    mut invulnerability: ResMut<Invulnerability>,
    mut lives: ResMut<ShipLives>,
    mut next_state: ResMut<NextState<GameState>>,
    ships: Query<&Transform, With<Ship>>,
    hazards: Query<&Transform, With<Hazard>>,
) {
    if invulnerability.active() {
        return;
    }
    let Ok(ship) = ships.single() else {
        return;
    };

    for hazard in hazards.iter() {
        if ship.translation.distance(hazard.translation) < config.collision_radius {
            if lives.lose_one() {
                next_state.set(GameState::ArcadeGameOver);
            } else {
                invulnerability.trigger(config.invulnerability_secs);
            }
            break;
        }
    }
}

/// Resolve ship–collectible proximity: award score, raise the shared speed,
/// and schedule the stamped revert.  Pickups work during the grace window.
#[allow(clippy::too_many_arguments)]
pub fn pickup_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    stamp: Res<SessionStamp>,
    mut ledger: ResMut<ScoreLedger>,
    mut speed: ResMut<HazardSpeed>,
    mut boosts: ResMut<SpeedBoosts>,
    mut collectible_alive: ResMut<CollectibleAlive>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ships: Query<&Transform, With<Ship>>,
    collectibles: Query<(Entity, &Transform), With<Collectible>>,
) {
    let Ok(ship) = ships.single() else {
        return;
    };

    for (entity, transform) in collectibles.iter() {
        if ship.translation.distance(transform.translation) >= config.collision_radius {
            continue;
        }
        ledger.award(config.collect_reward);
        speed.current += config.boost_speed_delta;
        boosts.schedule(config.boost_speed_delta, config.boost_duration_secs, stamp.0);
        collectible_alive.0 = false;
        commands.entity(entity).despawn();
        let mut rng = rand::thread_rng();
        spawn_actor(
            &mut commands,
            meshes.as_mut(),
            materials.as_mut(),
            &mut rng,
            false,
            &config,
        );
    }
}

/// Award the periodic survival bonus.
pub fn survival_bonus_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut survival: ResMut<SurvivalTimer>,
    mut ledger: ResMut<ScoreLedger>,
) {
    survival.0.tick(time.delta());
    let ticks = survival.0.times_finished_this_tick();
    if ticks > 0 {
        ledger.award(config.survival_bonus * ticks);
    }
}

/// Settle level crossings: bump the level, raise the permanent speed, and
/// announce each new level for the batch spawner.
pub fn level_up_system(
    config: Res<GameConfig>,
    mut ledger: ResMut<ScoreLedger>,
    mut speed: ResMut<HazardSpeed>,
    mut writer: MessageWriter<LevelUp>,
) {
    while ledger.ready_to_level_up(config.level_score_threshold) {
        let level = ledger.level_up();
        speed.current += config.hazard_speed_increment;
        writer.write(LevelUp { level });
        info!("level up: {level}");
    }
}

/// React to level announcements with a batch of fresh actors.
///
/// Each slot in the batch rolls the collectible policy, same as the recycle
/// path.
pub fn level_up_spawn_system(
    mut commands: Commands,
    mut reader: MessageReader<LevelUp>,
    config: Res<GameConfig>,
    mut collectible_alive: ResMut<CollectibleAlive>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    for msg in reader.read() {
        for _ in 0..level_up_batch(msg.level, config.level_up_extra_base) {
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
    }
}

/// Expire pending speed-boost reverts.
pub fn boost_revert_system(
    time: Res<Time>,
    stamp: Res<SessionStamp>,
    mut boosts: ResMut<SpeedBoosts>,
    mut speed: ResMut<HazardSpeed>,
) {
    let expired = boosts.tick(time.delta_secs(), stamp.0);
    if expired > 0.0 {
        speed.current -= expired;
    }
}

/// Tick the grace window and blink the ship while it lasts.
pub fn invulnerability_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut invulnerability: ResMut<Invulnerability>,
    mut ships: Query<&mut Visibility, With<Ship>>,
) {
    invulnerability.tick(time.delta_secs());
    let visible = invulnerability.blink_visible(config.blink_interval_secs);
    for mut visibility in ships.iter_mut() {
        *visibility = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Drift the streak field toward the camera and rescatter passed streaks at
/// the far end.
pub fn streak_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut streaks: Query<&mut Transform, With<Streak>>,
) {
    let step = config.streak_speed * time.delta_secs();
    let mut rng = rand::thread_rng();
    for mut transform in streaks.iter_mut() {
        transform.translation.z += step;
        if transform.translation.z > config.despawn_depth {
            transform.translation = Vec3::new(
                rng.gen_range(-STREAK_HALF_EXTENT..STREAK_HALF_EXTENT),
                rng.gen_range(-STREAK_HALF_EXTENT..STREAK_HALF_EXTENT),
                STREAK_RESET_DEPTH,
            );
        }
    }
}

/// Drift and grow the backdrop pair.
///
/// The lead planet drifts toward the camera and scales with the score, the
/// queued one at half rate; a planet that passes the near boundary is hidden
/// until the next pointer advance re-sites it.
pub fn backdrop_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    ledger: Res<ScoreLedger>,
    mut backdrops: Query<(&Backdrop, &mut Transform, &mut Visibility)>,
) {
    let dt = time.delta_secs();

    for (backdrop, mut transform, mut visibility) in backdrops.iter_mut() {
        let rate = if backdrop.lead {
            config.backdrop_drift_speed
        } else {
            config.backdrop_drift_speed * 0.5
        };
        transform.translation.z += rate * dt;

        let scale = if backdrop.lead {
            1.0 + ledger.score as f32 / config.backdrop_scale_divisor
        } else {
            0.5 + ledger.score as f32 / (config.backdrop_scale_divisor * 2.0)
        };
        transform.scale = Vec3::splat(scale);

        if transform.translation.z > config.despawn_depth {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Advance the backdrop pointer on level-up: both planets step one slot down
/// the order and re-site on a random side at their starting depths.
#[allow(clippy::type_complexity)]
pub fn backdrop_advance_system(
    mut reader: MessageReader<LevelUp>,
    textures: Res<BodyTextures>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut backdrops: Query<(
        &mut Backdrop,
        &mut Transform,
        &mut Visibility,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let steps = reader.read().count();
    if steps == 0 {
        return;
    }
    let mut rng = rand::thread_rng();

    for (mut backdrop, mut transform, mut visibility, mut material) in backdrops.iter_mut() {
        backdrop.index += steps;
        let id = BACKDROP_ORDER[backdrop.index % BACKDROP_ORDER.len()];
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let depth = if backdrop.lead { -80.0 } else { -140.0 };
        transform.translation = Vec3::new(
            side * crate::constants::BACKDROP_SIDE_OFFSET,
            0.0,
            depth,
        );
        *visibility = Visibility::Visible;
        *material = MeshMaterial3d(materials.add(StandardMaterial {
            base_color: crate::graphics::planet_color(id),
            base_color_texture: textures.planets.get(&id).cloned(),
            perceptual_roughness: 0.9,
            ..default()
        }));
    }
}

/// Record the finished session's score in the high-score table and persist
/// it.  Runs once on entering the game-over state, before the overlay reads
/// the table.
pub fn submit_final_score(ledger: Res<ScoreLedger>, mut table: ResMut<HighScoreTable>) {
    if table.submit(ledger.score) {
        match persist_table(&table) {
            Ok(()) => info!("recorded high score {}", ledger.score),
            Err(err) => error!("failed to persist high scores: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcade::state::ShipIntent;
    use bevy::state::app::StatesPlugin;
    use std::time::Duration;

    fn arcade_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_state::<GameState>();
        app.insert_state(GameState::ArcadePlaying);
        app.insert_resource(GameConfig::default());
        app.init_resource::<ShipIntent>();
        app.init_resource::<ScoreLedger>();
        app.init_resource::<ShipLives>();
        app.init_resource::<HazardSpeed>();
        app.init_resource::<CollectibleAlive>();
        app.init_resource::<SessionStamp>();
        app.init_resource::<SpeedBoosts>();
        app.init_resource::<Invulnerability>();
        app.init_resource::<SurvivalTimer>();
        app.add_message::<LevelUp>();
        app
    }

    #[test]
    fn contact_costs_a_life_and_opens_the_grace_window() {
        let mut app = arcade_app();
        app.add_systems(Update, hazard_contact_system);
        app.world_mut().spawn((Ship, Transform::from_xyz(0.0, 0.0, 0.0)));
        app.world_mut().spawn((Hazard, Transform::from_xyz(0.5, 0.0, 0.0)));

        app.update();

        assert_eq!(app.world().resource::<ShipLives>().remaining, 2);
        assert!(app.world().resource::<Invulnerability>().active());

        // The window suppresses further contacts entirely.
        app.update();
        assert_eq!(app.world().resource::<ShipLives>().remaining, 2);
    }

    #[test]
    fn contact_on_the_last_life_ends_the_session() {
        let mut app = arcade_app();
        app.add_systems(Update, hazard_contact_system);
        app.insert_resource(ShipLives { remaining: 1 });
        app.world_mut().spawn((Ship, Transform::from_xyz(0.0, 0.0, 0.0)));
        app.world_mut().spawn((Hazard, Transform::from_xyz(0.0, 1.0, 0.0)));

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::ArcadeGameOver
        );
    }

    #[test]
    fn distant_hazards_do_not_collide() {
        let mut app = arcade_app();
        app.add_systems(Update, hazard_contact_system);
        app.world_mut().spawn((Ship, Transform::from_xyz(0.0, 0.0, 0.0)));
        app.world_mut().spawn((Hazard, Transform::from_xyz(0.0, 0.0, -5.0)));

        app.update();

        assert_eq!(app.world().resource::<ShipLives>().remaining, 3);
        assert!(!app.world().resource::<Invulnerability>().active());
    }

    #[test]
    fn crossing_a_threshold_levels_up_and_spawns_a_batch() {
        let mut app = arcade_app();
        app.add_systems(Update, (level_up_system, level_up_spawn_system).chain());
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.insert_resource(ScoreLedger {
            score: 100,
            level: 1,
        });

        app.update();

        let ledger = app.world().resource::<ScoreLedger>();
        assert_eq!(ledger.level, 2);

        let speed = app.world().resource::<HazardSpeed>();
        assert!(
            (speed.current
                - (crate::constants::HAZARD_BASE_SPEED + crate::constants::HAZARD_SPEED_INCREMENT))
                .abs()
                < 1e-4
        );

        // 5 + new level = 7 fresh actors, at most one of them a collectible.
        let mut hazards = app.world_mut().query_filtered::<Entity, With<Hazard>>();
        let hazard_count = hazards.iter(app.world()).count();
        let mut collectibles = app
            .world_mut()
            .query_filtered::<Entity, With<Collectible>>();
        let collectible_count = collectibles.iter(app.world()).count();
        assert_eq!(hazard_count + collectible_count, 7);
        assert!(collectible_count <= 1);
    }

    #[test]
    fn collecting_awards_and_schedules_a_stamped_boost() {
        let mut app = arcade_app();
        app.add_systems(Update, pickup_system);
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.insert_resource(SessionStamp(2));
        app.insert_resource(CollectibleAlive(true));
        app.world_mut().spawn((Ship, Transform::from_xyz(0.0, 0.0, 0.0)));
        app.world_mut()
            .spawn((Collectible, Transform::from_xyz(0.5, 0.0, 0.0)));

        app.update();

        // Score 0/1/3 + collect → 10/1/3.
        let ledger = app.world().resource::<ScoreLedger>();
        assert_eq!((ledger.score, ledger.level), (10, 1));
        assert_eq!(app.world().resource::<ShipLives>().remaining, 3);

        assert!(!app.world().resource::<CollectibleAlive>().0);

        let speed = app.world().resource::<HazardSpeed>();
        assert!(
            (speed.current
                - (crate::constants::HAZARD_BASE_SPEED + crate::constants::BOOST_SPEED_DELTA))
                .abs()
                < 1e-4
        );
        let boosts = app.world().resource::<SpeedBoosts>();
        assert_eq!(boosts.pending.len(), 1);
        assert_eq!(boosts.pending[0].stamp, 2);

        // The collectible is gone and a replacement hazard took the slot.
        let mut collectibles = app
            .world_mut()
            .query_filtered::<Entity, With<Collectible>>();
        assert_eq!(collectibles.iter(app.world()).count(), 0);
        let mut hazards = app.world_mut().query_filtered::<Entity, With<Hazard>>();
        assert_eq!(hazards.iter(app.world()).count(), 1);
    }

    #[test]
    fn escaped_collectible_frees_the_slot_and_keeps_the_count() {
        let mut app = arcade_app();
        app.add_systems(Update, advance_actors_system);
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.insert_resource(CollectibleAlive(true));
        // Parked past the near boundary already.
        app.world_mut()
            .spawn((Collectible, Transform::from_xyz(0.0, 0.0, 15.0)));

        app.update();

        assert!(!app.world().resource::<CollectibleAlive>().0);
        let mut collectibles = app
            .world_mut()
            .query_filtered::<Entity, With<Collectible>>();
        assert_eq!(collectibles.iter(app.world()).count(), 0);
        let mut hazards = app.world_mut().query_filtered::<Entity, With<Hazard>>();
        assert_eq!(hazards.iter(app.world()).count(), 1);
    }

    #[test]
    fn survival_bonus_accrues_once_per_interval() {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        world.init_resource::<ScoreLedger>();
        world.init_resource::<SurvivalTimer>();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(2500));
        world.insert_resource(time);

        let mut schedule = Schedule::default();
        schedule.add_systems(survival_bonus_system);
        schedule.run(&mut world);

        assert_eq!(world.resource::<ScoreLedger>().score, 2);
    }

    #[test]
    fn expired_boosts_lower_the_shared_speed() {
        let mut world = World::new();
        world.insert_resource(SessionStamp(3));
        let mut boosts = SpeedBoosts::default();
        boosts.schedule(12.0, 1.0, 3);
        world.insert_resource(boosts);
        world.insert_resource(HazardSpeed { current: 30.0 });
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(1100));
        world.insert_resource(time);

        let mut schedule = Schedule::default();
        schedule.add_systems(boost_revert_system);
        schedule.run(&mut world);

        assert_eq!(world.resource::<HazardSpeed>().current, 18.0);
        assert!(world.resource::<SpeedBoosts>().pending.is_empty());
    }

    #[test]
    fn stale_session_boosts_never_touch_the_speed() {
        let mut world = World::new();
        world.insert_resource(SessionStamp(4));
        let mut boosts = SpeedBoosts::default();
        boosts.schedule(12.0, 1.0, 3);
        world.insert_resource(boosts);
        world.insert_resource(HazardSpeed { current: 18.0 });
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(1100));
        world.insert_resource(time);

        let mut schedule = Schedule::default();
        schedule.add_systems(boost_revert_system);
        schedule.run(&mut world);

        assert_eq!(world.resource::<HazardSpeed>().current, 18.0);
        assert!(world.resource::<SpeedBoosts>().pending.is_empty());
    }

    #[test]
    fn final_score_lands_in_the_table() {
        let mut world = World::new();
        world.insert_resource(ScoreLedger {
            score: 230,
            level: 3,
        });
        world.insert_resource(HighScoreTable::new(vec![100, 50]));

        let mut schedule = Schedule::default();
        schedule.add_systems(submit_final_score);
        schedule.run(&mut world);

        assert_eq!(
            world.resource::<HighScoreTable>().entries(),
            &[230, 100, 50]
        );
    }
}
