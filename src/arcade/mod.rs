//! The arcade mode: a forward-streaming dodge-and-collect session.
//!
//! The player steers a ship across a fixed window while hazards stream from
//! the far plane toward the camera.  Collectibles grant score and a temporary
//! speed boost, survival accrues a trickle of points, and score thresholds
//! level the session up, raising the shared hazard speed permanently and
//! injecting a batch of fresh hazards.

pub mod control;
pub mod hud;
pub mod spawn;
pub mod state;
pub mod update;

use bevy::prelude::*;

use crate::menu::{cleanup, GameState};

pub struct ArcadePlugin;

impl Plugin for ArcadePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<state::ShipIntent>()
            .init_resource::<state::ScoreLedger>()
            .init_resource::<state::ShipLives>()
            .init_resource::<state::HazardSpeed>()
            .init_resource::<state::CollectibleAlive>()
            .init_resource::<state::SessionStamp>()
            .init_resource::<state::SpeedBoosts>()
            .init_resource::<state::Invulnerability>()
            .init_resource::<state::SurvivalTimer>()
            .add_message::<state::LevelUp>()
            // Fresh session from the entry screen.
            .add_systems(
                OnTransition {
                    exited: GameState::ArcadeMenu,
                    entered: GameState::ArcadePlaying,
                },
                (spawn::reset_session, spawn::spawn_arcade_world, hud::setup_hud).chain(),
            )
            // Restart from the game-over overlay tears the old scene down
            // first.
            .add_systems(
                OnTransition {
                    exited: GameState::ArcadeGameOver,
                    entered: GameState::ArcadePlaying,
                },
                (
                    cleanup::cleanup_arcade_world,
                    spawn::reset_session,
                    spawn::spawn_arcade_world,
                    hud::setup_hud,
                )
                    .chain(),
            )
            .add_systems(OnEnter(GameState::ArcadeGameOver), update::submit_final_score)
            .add_systems(
                Update,
                (
                    control::keyboard_intent_system,
                    control::apply_ship_intent_system,
                    update::advance_actors_system,
                    update::hazard_contact_system,
                    update::pickup_system,
                    update::survival_bonus_system,
                    update::level_up_system,
                    update::level_up_spawn_system,
                    update::backdrop_advance_system,
                    update::boost_revert_system,
                    update::invulnerability_system,
                    update::streak_system,
                    update::backdrop_system,
                    hud::refresh_hud_system,
                )
                    .chain()
                    .run_if(in_state(GameState::ArcadePlaying)),
            );
    }
}
