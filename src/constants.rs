//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Runtime overrides come from `assets/game.toml` via [`crate::config`].
//!
//! Speeds are expressed in world units (or radians) per second.  The arcade
//! play area keeps the camera near the origin looking down −Z, with actors
//! entering at the far spawn plane and recycling once they pass the camera.

// ── Arcade: actor motion ──────────────────────────────────────────────────────

/// Depth speed of hazards and collectibles at level 1 (u/s).
///
/// Raising this shortens reaction time across the whole run; the level-up
/// increment stacks on top of it.
pub const HAZARD_BASE_SPEED: f32 = 18.0;

/// Added to the shared depth speed on every level-up (u/s).
pub const HAZARD_SPEED_INCREMENT: f32 = 3.0;

/// Temporary depth-speed bonus granted when a collectible is picked up (u/s).
pub const BOOST_SPEED_DELTA: f32 = 12.0;

/// How long a pickup speed boost lasts before its revert fires (seconds).
pub const BOOST_DURATION_SECS: f32 = 1.0;

/// Depth at which new actors enter the scene (far boundary).
pub const SPAWN_DEPTH: f32 = -50.0;

/// Depth past which an actor is recycled (near boundary, behind the camera).
pub const DESPAWN_DEPTH: f32 = 10.0;

/// Half-extent of the square x/y spawn window at the far boundary.
pub const SPAWN_HALF_EXTENT: f32 = 10.0;

/// Actors alive at session start.  Recycling keeps the population constant;
/// level-ups add `LEVEL_UP_EXTRA_BASE + level` more.
pub const INITIAL_ACTOR_COUNT: u32 = 7;

/// Base size of the level-up batch spawn (plus the new level number).
pub const LEVEL_UP_EXTRA_BASE: u32 = 5;

/// Probability that a recycle slot becomes a collectible when none is alive.
///
/// The draw only happens while no collectible exists, which enforces the
/// at-most-one-collectible rule regardless of this value.
pub const COLLECTIBLE_PROBABILITY: f32 = 0.3;

// ── Arcade: ship & interaction ────────────────────────────────────────────────

/// Proximity threshold for both hazard contact and collectible pickup.
pub const COLLISION_RADIUS: f32 = 1.5;

/// Ship translation speed while a directional key is held (u/s).
pub const SHIP_MOVE_SPEED: f32 = 6.0;

/// Ship x/y positions are clamped to ±this value.
pub const SHIP_BOUND: f32 = 10.0;

/// Visual radius of a hazard sphere.
pub const HAZARD_RADIUS: f32 = 1.2;

/// Visual radius of a collectible sphere.
pub const COLLECTIBLE_RADIUS: f32 = 0.8;

// ── Arcade: ledger ────────────────────────────────────────────────────────────

/// Score granted per collectible picked up.
pub const COLLECT_REWARD: u32 = 10;

/// Score granted by each survival bonus tick.
pub const SURVIVAL_BONUS: u32 = 1;

/// Interval between survival bonus ticks (seconds).
pub const SURVIVAL_BONUS_INTERVAL_SECS: f32 = 1.0;

/// A session levels up when `score >= level * LEVEL_SCORE_THRESHOLD`.
pub const LEVEL_SCORE_THRESHOLD: u32 = 100;

/// Lives at session start.
pub const STARTING_LIVES: u32 = 3;

/// Invulnerability window after a non-terminal hazard contact (seconds).
///
/// Hazard proximity checks are skipped for the whole window; pickups still work.
pub const INVULNERABILITY_SECS: f32 = 3.0;

/// Ship visibility toggle cadence while invulnerable (seconds).
pub const BLINK_INTERVAL_SECS: f32 = 0.2;

// ── Arcade: decoration ────────────────────────────────────────────────────────

/// Number of streak particles giving the speed-lines effect.
pub const STREAK_COUNT: usize = 300;

/// Streak drift toward the camera (u/s).
pub const STREAK_SPEED: f32 = 60.0;

/// Streaks respawn at this depth once they pass the near boundary.
pub const STREAK_RESET_DEPTH: f32 = -100.0;

/// Half-extent of the x/y window streaks are scattered over.
pub const STREAK_HALF_EXTENT: f32 = 20.0;

/// Backdrop planet drift toward the camera (u/s); the queued-up planet moves
/// at half this rate until it takes over.
pub const BACKDROP_DRIFT_SPEED: f32 = 1.2;

/// Score divisor controlling backdrop planet growth (`1 + score / this`).
pub const BACKDROP_SCALE_DIVISOR: f32 = 500.0;

/// Lateral offset of backdrop planets (randomly left or right).
pub const BACKDROP_SIDE_OFFSET: f32 = 30.0;

// ── High scores ───────────────────────────────────────────────────────────────

/// Maximum entries kept in the persisted high-score table.
pub const HIGH_SCORE_CAP: usize = 5;

// ── Solar system view ─────────────────────────────────────────────────────────

/// Radius of the sun mesh in the solar view; planet orbit radii are measured
/// from the same origin.
pub const SUN_RADIUS: f32 = 5.0;

/// Default orbital speed multiplier.
pub const ORBIT_MULTIPLIER_DEFAULT: f32 = 1.0;

/// Upper bound of the orbital speed multiplier.
pub const ORBIT_MULTIPLIER_MAX: f32 = 100.0;

/// Multiplier change per second while an adjust key is held.
pub const ORBIT_MULTIPLIER_STEP: f32 = 10.0;

// ── Planet close-up view ──────────────────────────────────────────────────────

/// Spin rate of the close-up planet (rad/s).
pub const PLANET_VIEW_SPIN: f32 = 0.6;

/// Moon orbit radius in the close-up view (Earth only).
pub const PLANET_VIEW_MOON_RADIUS: f32 = 10.0;

/// Moon orbit rate in the close-up view (rad/s).
pub const PLANET_VIEW_MOON_SPEED: f32 = 1.2;

// ── Exploration ───────────────────────────────────────────────────────────────

/// Forward acceleration while thrust is latched (u/s²).
pub const PROBE_ACCEL: f32 = 468.0;

/// Forward speed cap (u/s).
pub const PROBE_MAX_SPEED: f32 = 4200.0;

/// Reverse speed cap (u/s, applied as a negative bound).
pub const PROBE_MAX_REVERSE: f32 = 2400.0;

/// Per-frame velocity retention while coasting, normalised to 60 Hz: applied
/// as `v *= PROBE_DRAG.powf(60.0 * dt)` so coasting is frame-rate independent.
pub const PROBE_DRAG: f32 = 0.99;

/// Pitch rate while W/S is held (rad/s).
pub const PROBE_PITCH_RATE: f32 = 1.08;

/// Yaw rate while A/D is held (rad/s).
pub const PROBE_YAW_RATE: f32 = 1.32;

/// Pitch is clamped to ±(π/2 − this margin) to avoid gimbal flip.
pub const PROBE_PITCH_MARGIN: f32 = 0.15;

/// Uniform scale applied to the probe model.
pub const PROBE_SCALE: f32 = 6.0;

/// A visit mission completes when probe-to-body distance falls under
/// `body radius + MISSION_MARGIN * PROBE_SCALE`.
pub const MISSION_MARGIN: f32 = 90.0;

/// Chase-camera distance behind the probe.
pub const CHASE_CAM_DISTANCE: f32 = 100.0;

/// Chase-camera height above the probe.
pub const CHASE_CAM_HEIGHT: f32 = 120.0;

/// Chase-camera follow lerp factor, normalised to 60 Hz like [`PROBE_DRAG`].
pub const CHASE_CAM_LERP: f32 = 0.14;
