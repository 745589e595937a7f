//! Application state machine and every menu / overlay screen.
//!
//! ## States
//!
//! | State                | Description                                  |
//! |----------------------|----------------------------------------------|
//! | `MainMenu`           | Initial state; mode picker shown             |
//! | `SolarSystem`        | Orbiting solar scene                         |
//! | `PlanetView`         | Close-up of one selected planet              |
//! | `ArcadeMenu`         | Arcade entry screen with high scores         |
//! | `ArcadePlaying`      | Arcade session running                       |
//! | `ArcadePaused`       | Arcade frozen; pause overlay                 |
//! | `ArcadeGameOver`     | Final score + table overlay                  |
//! | `ExplorationPlaying` | Free-flight session running                  |
//! | `ExplorationPaused`  | Exploration frozen; pause overlay            |
//!
//! Every gameplay system elsewhere in the crate runs under
//! `.run_if(in_state(..))`, so scenes are fully inactive outside their state.
//! Scene entity teardown for transitions that leave a session lives in
//! [`cleanup`]; the restart path re-uses the same cleanup systems chained
//! before the spawn systems.

mod arcade_menu;
pub mod cleanup;
mod common;
mod exploration_pause;
mod game_over;
mod main_menu;
mod pause;
pub mod types;

pub use types::*;

use bevy::prelude::*;

/// Registers `GameState`, all menu screens, and the overlay button handlers.
///
/// Must be added before any plugin that calls
/// `.run_if(in_state(GameState::...))`, so the state is registered first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SelectedPlanet>()
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), main_menu::setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), main_menu::cleanup_main_menu)
            .add_systems(
                Update,
                main_menu::menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            // Arcade entry screen
            .add_systems(OnEnter(GameState::ArcadeMenu), arcade_menu::setup_arcade_menu)
            .add_systems(OnExit(GameState::ArcadeMenu), arcade_menu::cleanup_arcade_menu)
            .add_systems(
                Update,
                (
                    arcade_menu::arcade_menu_button_system,
                    arcade_menu::refresh_score_list_system,
                )
                    .run_if(in_state(GameState::ArcadeMenu)),
            )
            // Arcade pause overlay
            .add_systems(OnEnter(GameState::ArcadePaused), pause::setup_pause_menu)
            .add_systems(OnExit(GameState::ArcadePaused), pause::cleanup_pause_menu)
            .add_systems(
                Update,
                pause::toggle_pause_system.run_if(in_state(GameState::ArcadePlaying)),
            )
            .add_systems(
                Update,
                (pause::pause_menu_button_system, pause::pause_resume_input_system)
                    .run_if(in_state(GameState::ArcadePaused)),
            )
            // Game-over overlay; built after the arcade side has recorded
            // the final score so the table it shows is current.
            .add_systems(
                OnEnter(GameState::ArcadeGameOver),
                game_over::setup_game_over.after(crate::arcade::update::submit_final_score),
            )
            .add_systems(OnExit(GameState::ArcadeGameOver), game_over::cleanup_game_over)
            .add_systems(
                Update,
                game_over::game_over_button_system.run_if(in_state(GameState::ArcadeGameOver)),
            )
            // Exploration pause overlay
            .add_systems(
                OnEnter(GameState::ExplorationPaused),
                exploration_pause::setup_exploration_pause,
            )
            .add_systems(
                OnExit(GameState::ExplorationPaused),
                exploration_pause::cleanup_exploration_pause,
            )
            .add_systems(
                Update,
                exploration_pause::toggle_exploration_pause_system
                    .run_if(in_state(GameState::ExplorationPlaying)),
            )
            .add_systems(
                Update,
                (
                    exploration_pause::exploration_pause_button_system,
                    exploration_pause::exploration_resume_input_system,
                )
                    .run_if(in_state(GameState::ExplorationPaused)),
            )
            // Leaving a session for a menu tears the scene down
            .add_systems(
                OnTransition {
                    exited: GameState::ArcadePaused,
                    entered: GameState::ArcadeMenu,
                },
                cleanup::cleanup_arcade_world,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::ArcadeGameOver,
                    entered: GameState::ArcadeMenu,
                },
                cleanup::cleanup_arcade_world,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::ExplorationPaused,
                    entered: GameState::MainMenu,
                },
                cleanup::cleanup_exploration_world,
            );
    }
}
