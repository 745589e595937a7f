//! Arcade components and session resources.
//!
//! All ECS components and Bevy resources that describe one arcade session
//! live here.  Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input + ship movement
//! - [`super::update`] — actor advance, interactions, ledger progression
//! - [`super::spawn`] — scene construction + actor spawning
//! - [`super::hud`] — score/lives/level readout
//!
//! Everything in this module is plain data with pure methods, so the scoring
//! and progression rules are testable without an `App`.

use bevy::prelude::*;

use crate::constants::{HAZARD_BASE_SPEED, STARTING_LIVES};

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.
#[derive(Component)]
pub struct Ship;

/// An obstacle streaming toward the camera.  Contact costs a life.
#[derive(Component)]
pub struct Hazard;

/// The single pickup actor.  Contact grants score and a temporary speed boost.
#[derive(Component)]
pub struct Collectible;

/// One speed-line particle.
#[derive(Component)]
pub struct Streak;

/// A backdrop planet drifting behind the action.
///
/// `lead` marks the planet currently taking centre stage; the queued one
/// drifts at half rate until it takes over.  `index` walks the outer-to-inner
/// planet order as planets recycle past the camera.
#[derive(Component)]
pub struct Backdrop {
    pub lead: bool,
    pub index: usize,
}

/// Camera, lights, and other per-session scenery with no gameplay role.
#[derive(Component)]
pub struct ArcadeScenery;

/// Root node of the in-game HUD.
#[derive(Component)]
pub struct ArcadeHudRoot;

/// Dynamic HUD text: score and level.
#[derive(Component)]
pub struct HudScoreText;

/// Dynamic HUD text: lives remaining.
#[derive(Component)]
pub struct HudLivesText;

// ── Messages ──────────────────────────────────────────────────────────────────

/// Emitted when the ledger crosses a level threshold.  Carries the new level;
/// the spawner reacts with a batch spawn and a speed increment.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Aggregated ship intent for the current frame, derived from the keyboard.
///
/// [`super::control::keyboard_intent_system`] writes it;
/// [`super::control::apply_ship_intent_system`] reads it and moves the ship.
/// Tests can populate this directly to drive the ship without a real device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ShipIntent {
    /// Lateral steer in −1..=1 (right positive).
    pub steer_x: f32,
    /// Vertical steer in −1..=1 (up positive).
    pub steer_y: f32,
}

/// Score and level progression for the running session.
///
/// The level check is `score >= level * threshold`, so level 2 needs 100
/// points, level 3 needs 200, and so on.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLedger {
    pub score: u32,
    pub level: u32,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self { score: 0, level: 1 }
    }
}

impl ScoreLedger {
    /// Add points from any source (pickup or survival bonus).
    #[inline]
    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Whether the score has crossed the next level boundary.
    #[inline]
    pub fn ready_to_level_up(&self, threshold: u32) -> bool {
        self.score >= self.level * threshold
    }

    /// Advance one level and return the new level number.
    #[inline]
    pub fn level_up(&mut self) -> u32 {
        self.level += 1;
        self.level
    }
}

/// Lives remaining in the running session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipLives {
    pub remaining: u32,
}

impl Default for ShipLives {
    fn default() -> Self {
        Self {
            remaining: STARTING_LIVES,
        }
    }
}

impl ShipLives {
    /// Reset to full lives (used on restart and menu return).
    pub fn reset(&mut self) {
        self.remaining = STARTING_LIVES;
    }

    /// Lose one life; returns `true` when that was the last one.
    pub fn lose_one(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

/// The depth speed shared by every hazard and collectible (u/s).
///
/// Level-ups raise it permanently; pickups raise it temporarily through
/// [`SpeedBoosts`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct HazardSpeed {
    pub current: f32,
}

impl Default for HazardSpeed {
    fn default() -> Self {
        Self {
            current: HAZARD_BASE_SPEED,
        }
    }
}

/// Whether a collectible currently exists.  The spawn policy only rolls for a
/// new one while this is `false`, keeping at most one alive at a time.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectibleAlive(pub bool);

/// Monotonic session counter.  Incremented every time a fresh session starts;
/// deferred effects record the stamp they were scheduled under and no-op when
/// it no longer matches, so nothing scheduled in one run can leak into the
/// next.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStamp(pub u64);

/// One scheduled speed-boost revert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostRevert {
    /// Seconds until the revert fires.
    pub remaining: f32,
    /// Speed delta to subtract when it fires.
    pub delta: f32,
    /// Session the boost belongs to.
    pub stamp: u64,
}

/// Pending speed-boost reverts.
///
/// Boosts stack: picking up a second collectible before the first revert
/// fires schedules a second, independent revert, and the shared speed carries
/// both deltas until each expires.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SpeedBoosts {
    pub pending: Vec<BoostRevert>,
}

impl SpeedBoosts {
    /// Schedule a revert of `delta` after `duration` seconds.
    pub fn schedule(&mut self, delta: f32, duration: f32, stamp: u64) {
        self.pending.push(BoostRevert {
            remaining: duration,
            delta,
            stamp,
        });
    }

    /// Advance all pending reverts by `dt` and return the total delta that
    /// expired this frame for the live session.  Reverts stamped by an older
    /// session are dropped without effect.
    pub fn tick(&mut self, dt: f32, live_stamp: u64) -> f32 {
        let mut expired = 0.0;
        self.pending.retain_mut(|revert| {
            if revert.stamp != live_stamp {
                return false;
            }
            revert.remaining -= dt;
            if revert.remaining <= 0.0 {
                expired += revert.delta;
                false
            } else {
                true
            }
        });
        expired
    }
}

/// Post-hit grace window.  While active, hazard contacts are ignored and the
/// ship blinks; pickups still register.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Invulnerability {
    /// Seconds remaining; zero means vulnerable.
    pub remaining: f32,
}

impl Invulnerability {
    #[inline]
    pub fn trigger(&mut self, secs: f32) {
        self.remaining = secs;
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.remaining > 0.0
    }

    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    /// Blink phase for the ship mesh: alternates every `blink_interval`
    /// seconds while the window is active, always visible otherwise.
    #[inline]
    pub fn blink_visible(&self, blink_interval: f32) -> bool {
        if !self.active() {
            return true;
        }
        ((self.remaining / blink_interval) as u32) % 2 == 0
    }
}

/// Repeating timer driving the survival score bonus.
#[derive(Resource, Debug, Clone)]
pub struct SurvivalTimer(pub Timer);

impl Default for SurvivalTimer {
    fn default() -> Self {
        Self::from_interval(crate::constants::SURVIVAL_BONUS_INTERVAL_SECS)
    }
}

impl SurvivalTimer {
    /// Repeating timer with the given bonus interval.
    pub fn from_interval(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Repeating))
    }
}

// ── Presentation snapshot ─────────────────────────────────────────────────────

/// Immutable view of the session handed to the HUD.
///
/// The HUD renders from this alone and never touches the live resources, so
/// presentation cannot mutate gameplay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub invulnerable: bool,
}

impl SessionSnapshot {
    pub fn capture(
        ledger: &ScoreLedger,
        lives: &ShipLives,
        invulnerability: &Invulnerability,
    ) -> Self {
        Self {
            score: ledger.score,
            level: ledger.level,
            lives: lives.remaining,
            invulnerable: invulnerability.active(),
        }
    }
}

// ── Pure spawn policy ─────────────────────────────────────────────────────────

/// Whether a recycled slot should come back as a collectible.
///
/// Only rolls while no collectible is alive; `roll` is a uniform draw in
/// [0, 1).
#[inline]
pub fn should_spawn_collectible(collectible_alive: bool, roll: f32, probability: f32) -> bool {
    !collectible_alive && roll < probability
}

/// How many extra hazards a level-up injects.
#[inline]
pub fn level_up_batch(new_level: u32, extra_base: u32) -> u32 {
    extra_base + new_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        COLLECTIBLE_PROBABILITY, LEVEL_SCORE_THRESHOLD, LEVEL_UP_EXTRA_BASE,
    };

    #[test]
    fn ledger_levels_up_at_multiples_of_the_threshold() {
        let mut ledger = ScoreLedger::default();
        assert!(!ledger.ready_to_level_up(LEVEL_SCORE_THRESHOLD));

        ledger.award(99);
        assert!(!ledger.ready_to_level_up(LEVEL_SCORE_THRESHOLD));

        ledger.award(1);
        assert!(ledger.ready_to_level_up(LEVEL_SCORE_THRESHOLD));
        assert_eq!(ledger.level_up(), 2);

        // Level 3 needs 200, not another 100 from here.
        assert!(!ledger.ready_to_level_up(LEVEL_SCORE_THRESHOLD));
        ledger.award(100);
        assert!(ledger.ready_to_level_up(LEVEL_SCORE_THRESHOLD));
    }

    #[test]
    fn losing_the_last_life_reports_game_over() {
        let mut lives = ShipLives { remaining: 2 };
        assert!(!lives.lose_one());
        assert!(lives.lose_one());
        // Saturates instead of wrapping.
        assert!(lives.lose_one());
        assert_eq!(lives.remaining, 0);
    }

    #[test]
    fn collectible_policy_requires_an_empty_slot() {
        assert!(should_spawn_collectible(false, 0.1, COLLECTIBLE_PROBABILITY));
        assert!(!should_spawn_collectible(true, 0.1, COLLECTIBLE_PROBABILITY));
        assert!(!should_spawn_collectible(false, 0.9, COLLECTIBLE_PROBABILITY));
    }

    #[test]
    fn level_up_batch_grows_with_level() {
        assert_eq!(level_up_batch(2, LEVEL_UP_EXTRA_BASE), 7);
        assert_eq!(level_up_batch(5, LEVEL_UP_EXTRA_BASE), 10);
    }

    #[test]
    fn stacked_boosts_revert_independently() {
        let mut boosts = SpeedBoosts::default();
        boosts.schedule(12.0, 1.0, 7);
        boosts.schedule(12.0, 1.0, 7);

        // Neither has expired yet.
        assert_eq!(boosts.tick(0.5, 7), 0.0);
        assert_eq!(boosts.pending.len(), 2);

        // Both fire in the same frame; deltas add.
        assert_eq!(boosts.tick(0.6, 7), 24.0);
        assert!(boosts.pending.is_empty());
    }

    #[test]
    fn stale_boost_reverts_are_dropped_without_effect() {
        let mut boosts = SpeedBoosts::default();
        boosts.schedule(12.0, 1.0, 7);

        // Session 8 starts before the revert fires.
        assert_eq!(boosts.tick(2.0, 8), 0.0);
        assert!(boosts.pending.is_empty());
    }

    #[test]
    fn invulnerability_expires_and_unblinks() {
        let mut inv = Invulnerability::default();
        assert!(!inv.active());
        assert!(inv.blink_visible(0.2));

        inv.trigger(3.0);
        assert!(inv.active());

        inv.tick(2.9);
        assert!(inv.active());
        inv.tick(0.2);
        assert!(!inv.active());
        assert!(inv.blink_visible(0.2));
    }

    #[test]
    fn snapshot_mirrors_the_live_resources() {
        let ledger = ScoreLedger { score: 140, level: 2 };
        let lives = ShipLives { remaining: 1 };
        let mut inv = Invulnerability::default();
        inv.trigger(1.0);

        let snapshot = SessionSnapshot::capture(&ledger, &lives, &inv);
        assert_eq!(
            snapshot,
            SessionSnapshot {
                score: 140,
                level: 2,
                lives: 1,
                invulnerable: true,
            }
        );
    }
}
