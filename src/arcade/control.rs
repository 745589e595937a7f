//! Keyboard input and ship movement.
//!
//! Input is split into two stages: the keyboard system reduces the raw device
//! state to a [`ShipIntent`], and the apply system turns that intent into a
//! clamped translation.  Tests drive the second stage by writing the intent
//! resource directly.

use bevy::prelude::*;

use crate::config::GameConfig;

use super::state::{Ship, ShipIntent};

/// Reduce WASD / arrow keys to a steer vector.
pub fn keyboard_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ShipIntent>) {
    let mut steer = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        steer.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        steer.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        steer.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        steer.y -= 1.0;
    }
    intent.steer_x = steer.x;
    intent.steer_y = steer.y;
}

/// Move the ship by the frame's intent, clamped to the play window.
pub fn apply_ship_intent_system(
    time: Res<Time>,
    intent: Res<ShipIntent>,
    config: Res<GameConfig>,
    mut ships: Query<&mut Transform, With<Ship>>,
) {
    let step = config.ship_move_speed * time.delta_secs();
    for mut transform in ships.iter_mut() {
        transform.translation.x =
            (transform.translation.x + intent.steer_x * step).clamp(-config.ship_bound, config.ship_bound);
        transform.translation.y =
            (transform.translation.y + intent.steer_y * step).clamp(-config.ship_bound, config.ship_bound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn world_with_ship(x: f32, y: f32) -> World {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        world.insert_resource(ShipIntent::default());
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(100));
        world.insert_resource(time);
        world.spawn((Ship, Transform::from_xyz(x, y, 0.0)));
        world
    }

    fn run_apply(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(apply_ship_intent_system);
        schedule.run(world);
    }

    #[test]
    fn intent_translates_the_ship() {
        let mut world = world_with_ship(0.0, 0.0);
        world.insert_resource(ShipIntent {
            steer_x: 1.0,
            steer_y: -1.0,
        });

        run_apply(&mut world);

        let transform = world
            .query_filtered::<&Transform, With<Ship>>()
            .single(&world)
            .unwrap();
        // 6 u/s * 0.1 s
        assert!((transform.translation.x - 0.6).abs() < 1e-4);
        assert!((transform.translation.y + 0.6).abs() < 1e-4);
    }

    #[test]
    fn ship_is_clamped_to_the_play_window() {
        let mut world = world_with_ship(9.9, -9.9);
        world.insert_resource(ShipIntent {
            steer_x: 1.0,
            steer_y: -1.0,
        });

        for _ in 0..5 {
            run_apply(&mut world);
        }

        let transform = world
            .query_filtered::<&Transform, With<Ship>>()
            .single(&world)
            .unwrap();
        assert_eq!(transform.translation.x, 10.0);
        assert_eq!(transform.translation.y, -10.0);
    }
}
