//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Arcade: actor motion ─────────────────────────────────────────────────
    pub hazard_base_speed: f32,
    pub hazard_speed_increment: f32,
    pub boost_speed_delta: f32,
    pub boost_duration_secs: f32,
    pub spawn_depth: f32,
    pub despawn_depth: f32,
    pub spawn_half_extent: f32,
    pub initial_actor_count: u32,
    pub level_up_extra_base: u32,
    pub collectible_probability: f32,

    // ── Arcade: ship & interaction ───────────────────────────────────────────
    pub collision_radius: f32,
    pub ship_move_speed: f32,
    pub ship_bound: f32,

    // ── Arcade: ledger ───────────────────────────────────────────────────────
    pub collect_reward: u32,
    pub survival_bonus: u32,
    pub survival_bonus_interval_secs: f32,
    pub level_score_threshold: u32,
    pub starting_lives: u32,
    pub invulnerability_secs: f32,
    pub blink_interval_secs: f32,

    // ── Arcade: decoration ───────────────────────────────────────────────────
    pub streak_speed: f32,
    pub backdrop_drift_speed: f32,
    pub backdrop_scale_divisor: f32,

    // ── Solar system view ────────────────────────────────────────────────────
    pub orbit_multiplier_max: f32,
    pub orbit_multiplier_step: f32,

    // ── Exploration ──────────────────────────────────────────────────────────
    pub probe_accel: f32,
    pub probe_max_speed: f32,
    pub probe_max_reverse: f32,
    pub probe_drag: f32,
    pub probe_pitch_rate: f32,
    pub probe_yaw_rate: f32,
    pub mission_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Arcade: actor motion
            hazard_base_speed: HAZARD_BASE_SPEED,
            hazard_speed_increment: HAZARD_SPEED_INCREMENT,
            boost_speed_delta: BOOST_SPEED_DELTA,
            boost_duration_secs: BOOST_DURATION_SECS,
            spawn_depth: SPAWN_DEPTH,
            despawn_depth: DESPAWN_DEPTH,
            spawn_half_extent: SPAWN_HALF_EXTENT,
            initial_actor_count: INITIAL_ACTOR_COUNT,
            level_up_extra_base: LEVEL_UP_EXTRA_BASE,
            collectible_probability: COLLECTIBLE_PROBABILITY,
            // Arcade: ship & interaction
            collision_radius: COLLISION_RADIUS,
            ship_move_speed: SHIP_MOVE_SPEED,
            ship_bound: SHIP_BOUND,
            // Arcade: ledger
            collect_reward: COLLECT_REWARD,
            survival_bonus: SURVIVAL_BONUS,
            survival_bonus_interval_secs: SURVIVAL_BONUS_INTERVAL_SECS,
            level_score_threshold: LEVEL_SCORE_THRESHOLD,
            starting_lives: STARTING_LIVES,
            invulnerability_secs: INVULNERABILITY_SECS,
            blink_interval_secs: BLINK_INTERVAL_SECS,
            // Arcade: decoration
            streak_speed: STREAK_SPEED,
            backdrop_drift_speed: BACKDROP_DRIFT_SPEED,
            backdrop_scale_divisor: BACKDROP_SCALE_DIVISOR,
            // Solar system view
            orbit_multiplier_max: ORBIT_MULTIPLIER_MAX,
            orbit_multiplier_step: ORBIT_MULTIPLIER_STEP,
            // Exploration
            probe_accel: PROBE_ACCEL,
            probe_max_speed: PROBE_MAX_SPEED,
            probe_max_reverse: PROBE_MAX_REVERSE,
            probe_drag: PROBE_DRAG,
            probe_pitch_rate: PROBE_PITCH_RATE,
            probe_yaw_rate: PROBE_YAW_RATE,
            mission_margin: MISSION_MARGIN,
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are logged
/// but do not abort the game.  A missing file is not an error.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("loaded gameplay config from {path}");
            }
            Err(e) => {
                warn!("failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("no {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_constants() {
        let config = GameConfig::default();
        assert_eq!(config.hazard_base_speed, HAZARD_BASE_SPEED);
        assert_eq!(config.collect_reward, COLLECT_REWARD);
        assert_eq!(config.starting_lives, STARTING_LIVES);
        assert_eq!(config.mission_margin, MISSION_MARGIN);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let loaded: GameConfig =
            toml::from_str("hazard_base_speed = 25.0\nstarting_lives = 5\n")
                .unwrap();
        assert_eq!(loaded.hazard_base_speed, 25.0);
        assert_eq!(loaded.starting_lives, 5);
        assert_eq!(loaded.collect_reward, COLLECT_REWARD);
    }

    #[test]
    fn malformed_toml_is_an_error_not_a_panic() {
        assert!(toml::from_str::<GameConfig>("hazard_base_speed = \"fast\"").is_err());
    }
}
