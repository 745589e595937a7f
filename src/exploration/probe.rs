//! Probe flight: latched thrust, pitch/yaw attitude, and the chase camera.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::constants::{
    CHASE_CAM_DISTANCE, CHASE_CAM_HEIGHT, CHASE_CAM_LERP, PROBE_PITCH_MARGIN,
};

/// The player's probe and its live flight state.
#[derive(Component, Default)]
pub struct Probe {
    /// Signed forward speed (units/s); negative while reversing.
    pub velocity: f32,
    pub pitch: f32,
    pub yaw: f32,
}

/// Camera that trails the probe.
#[derive(Component)]
pub struct ChaseCamera;

/// Per-frame control input, plus the thrust latch.
///
/// Thrust latches on a Shift press and stays on until the next press, so
/// cruising does not require holding a key.
#[derive(Resource, Default)]
pub struct ProbeIntent {
    /// Nose up/down, in -1..=1.
    pub pitch: f32,
    /// Turn left/right, in -1..=1.
    pub yaw: f32,
    pub thrust_latched: bool,
    pub reverse: bool,
}

/// Translate the keyboard into probe intent.
pub fn probe_input_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ProbeIntent>) {
    let mut pitch = 0.0;
    let mut yaw = 0.0;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        pitch += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        pitch -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        yaw += 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        yaw -= 1.0;
    }
    intent.pitch = pitch;
    intent.yaw = yaw;

    if keys.just_pressed(KeyCode::ShiftLeft) || keys.just_pressed(KeyCode::ShiftRight) {
        intent.thrust_latched = !intent.thrust_latched;
    }
    intent.reverse = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
}

/// Pitch clamp keeps the nose short of straight up/down so yaw never gimbals.
pub fn clamp_pitch(pitch: f32) -> f32 {
    let limit = FRAC_PI_2 - PROBE_PITCH_MARGIN;
    pitch.clamp(-limit, limit)
}

/// Frame-rate independent drag on the probe's speed.
pub fn apply_drag(velocity: f32, drag: f32, dt: f32) -> f32 {
    velocity * drag.powf(60.0 * dt)
}

/// Integrate attitude and velocity, then move the probe along its nose.
pub fn probe_flight_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    intent: Res<ProbeIntent>,
    mut probes: Query<(&mut Probe, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut probe, mut transform) in probes.iter_mut() {
        probe.pitch = clamp_pitch(probe.pitch + intent.pitch * config.probe_pitch_rate * dt);
        probe.yaw += intent.yaw * config.probe_yaw_rate * dt;
        transform.rotation = Quat::from_euler(EulerRot::YXZ, probe.yaw, probe.pitch, 0.0);

        if intent.reverse {
            probe.velocity =
                (probe.velocity - config.probe_accel * dt).max(-config.probe_max_reverse);
        } else if intent.thrust_latched {
            probe.velocity = (probe.velocity + config.probe_accel * dt).min(config.probe_max_speed);
        }
        probe.velocity = apply_drag(probe.velocity, config.probe_drag, dt);

        let forward = transform.forward();
        transform.translation += forward * probe.velocity * dt;
    }
}

/// Trail the probe from behind and above, easing toward the ideal seat.
pub fn chase_camera_system(
    time: Res<Time>,
    probes: Query<&Transform, (With<Probe>, Without<ChaseCamera>)>,
    mut cameras: Query<&mut Transform, With<ChaseCamera>>,
) {
    let Ok(probe) = probes.single() else {
        return;
    };
    let seat = probe.translation - probe.forward() * CHASE_CAM_DISTANCE
        + Vec3::Y * CHASE_CAM_HEIGHT;
    let t = 1.0 - (1.0 - CHASE_CAM_LERP).powf(60.0 * time.delta_secs());

    for mut camera in cameras.iter_mut() {
        camera.translation = camera.translation.lerp(seat, t);
        camera.look_at(probe.translation, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pitch_never_reaches_the_pole() {
        assert!(clamp_pitch(10.0) < FRAC_PI_2);
        assert!(clamp_pitch(-10.0) > -FRAC_PI_2);
        assert_eq!(clamp_pitch(0.3), 0.3);
    }

    #[test]
    fn drag_is_frame_rate_independent() {
        // One second of drag should shave the same fraction regardless of
        // how it is subdivided.
        let whole = apply_drag(1000.0, 0.99, 1.0);
        let mut split = 1000.0;
        for _ in 0..4 {
            split = apply_drag(split, 0.99, 0.25);
        }
        assert!((whole - split).abs() < 1e-2);
    }

    #[test]
    fn latched_thrust_accelerates_without_held_input() {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        world.insert_resource(ProbeIntent {
            thrust_latched: true,
            ..Default::default()
        });
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(500));
        world.insert_resource(time);
        world.spawn((Probe::default(), Transform::default()));

        let mut schedule = Schedule::default();
        schedule.add_systems(probe_flight_system);
        schedule.run(&mut world);

        let mut probes = world.query::<(&Probe, &Transform)>();
        let (velocity, z) = probes
            .iter(&world)
            .next()
            .map(|(p, t)| (p.velocity, t.translation.z))
            .unwrap_or((0.0, 0.0));
        assert!(velocity > 0.0);
        // Default attitude faces -Z.
        assert!(z < 0.0);
    }

    #[test]
    fn reverse_speed_is_capped() {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        world.insert_resource(ProbeIntent {
            reverse: true,
            ..Default::default()
        });
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(30));
        world.insert_resource(time);
        world.spawn((Probe::default(), Transform::default()));

        let mut schedule = Schedule::default();
        schedule.add_systems(probe_flight_system);
        schedule.run(&mut world);

        let mut probes = world.query::<&Probe>();
        let velocity = probes.iter(&world).next().map(|p| p.velocity);
        assert!(matches!(velocity, Some(v) if v >= -GameConfig::default().probe_max_reverse));
    }
}
