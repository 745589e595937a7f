use super::*;

use crate::arcade::state::{
    ArcadeHudRoot, ArcadeScenery, Backdrop, Collectible, CollectibleAlive, Hazard, HazardSpeed,
    Invulnerability, ScoreLedger, Ship, ShipLives, SpeedBoosts, Streak, SurvivalTimer,
};
use crate::exploration::{
    ExplorationBody, ExplorationScenery, MissionHudRoot, MissionLog, Probe, ProbeIntent,
};

/// Despawn every arcade session entity and reset per-session resources so the
/// mode is completely clean when the player returns to a menu.
///
/// Runs on `OnTransition { ArcadePaused → ArcadeMenu }` and
/// `OnTransition { ArcadeGameOver → ArcadeMenu }`; the restart path chains it
/// in front of the spawn systems instead.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn cleanup_arcade_world(
    mut commands: Commands,
    ships: Query<Entity, With<Ship>>,
    actors: Query<Entity, Or<(With<Hazard>, With<Collectible>)>>,
    decoration: Query<Entity, Or<(With<Streak>, With<Backdrop>)>>,
    scenery: Query<Entity, With<ArcadeScenery>>,
    hud: Query<Entity, With<ArcadeHudRoot>>,
    mut ledger: ResMut<ScoreLedger>,
    mut lives: ResMut<ShipLives>,
    mut speed: ResMut<HazardSpeed>,
    mut collectible_alive: ResMut<CollectibleAlive>,
    mut boosts: ResMut<SpeedBoosts>,
    mut invulnerability: ResMut<Invulnerability>,
    mut survival: ResMut<SurvivalTimer>,
) {
    for e in ships
        .iter()
        .chain(actors.iter())
        .chain(decoration.iter())
        .chain(scenery.iter())
        .chain(hud.iter())
    {
        commands.entity(e).despawn();
    }
    *ledger = ScoreLedger::default();
    lives.reset();
    *speed = HazardSpeed::default();
    *collectible_alive = CollectibleAlive::default();
    *boosts = SpeedBoosts::default();
    *invulnerability = Invulnerability::default();
    *survival = SurvivalTimer::default();
}

/// Despawn every exploration entity and reset the mission log.
///
/// Runs on `OnTransition { ExplorationPaused → MainMenu }`.
#[allow(clippy::type_complexity)]
pub fn cleanup_exploration_world(
    mut commands: Commands,
    probes: Query<Entity, With<Probe>>,
    bodies: Query<Entity, With<ExplorationBody>>,
    scenery: Query<Entity, With<ExplorationScenery>>,
    hud: Query<Entity, With<MissionHudRoot>>,
    mut log: ResMut<MissionLog>,
    mut intent: ResMut<ProbeIntent>,
) {
    for e in probes
        .iter()
        .chain(bodies.iter())
        .chain(scenery.iter())
        .chain(hud.iter())
    {
        commands.entity(e).despawn();
    }
    *log = MissionLog::default();
    *intent = ProbeIntent::default();
}
