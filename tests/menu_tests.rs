//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering — so they run
//! fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. A `NextState` request walks the arcade path end to end.
//! 3. States persist across frames with no new transition request.
//! 4. `insert_state` can force-start directly in a gameplay state.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use orrery::menu::GameState;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered via
/// `init_state`.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// No window or rendering is created.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update(); // StateTransition fires before the next Update
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameState` is `MainMenu`.
#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(
        current_state(&app),
        GameState::MainMenu,
        "initial state must be MainMenu"
    );
}

/// The full arcade path: menu → entry screen → playing → paused → playing →
/// game over → entry screen.
#[test]
fn arcade_path_walks_end_to_end() {
    let mut app = app_with_default_state();
    app.update();

    set_state(&mut app, GameState::ArcadeMenu);
    assert_eq!(current_state(&app), GameState::ArcadeMenu);

    set_state(&mut app, GameState::ArcadePlaying);
    assert_eq!(current_state(&app), GameState::ArcadePlaying);

    set_state(&mut app, GameState::ArcadePaused);
    set_state(&mut app, GameState::ArcadePlaying);
    assert_eq!(current_state(&app), GameState::ArcadePlaying);

    set_state(&mut app, GameState::ArcadeGameOver);
    set_state(&mut app, GameState::ArcadeMenu);
    assert_eq!(current_state(&app), GameState::ArcadeMenu);
}

/// Solar scene to planet close-up and back.
#[test]
fn solar_and_close_up_round_trip() {
    let mut app = app_with_default_state();
    app.update();

    set_state(&mut app, GameState::SolarSystem);
    set_state(&mut app, GameState::PlanetView);
    assert_eq!(current_state(&app), GameState::PlanetView);

    set_state(&mut app, GameState::SolarSystem);
    assert_eq!(current_state(&app), GameState::SolarSystem);
}

/// A gameplay state persists across additional frames — no accidental
/// reversion.
#[test]
fn gameplay_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    set_state(&mut app, GameState::ExplorationPlaying);

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(
        current_state(&app),
        GameState::ExplorationPlaying,
        "ExplorationPlaying must remain stable without a new transition"
    );
}

/// `insert_state` can force the initial state directly into gameplay.
#[test]
fn insert_state_starts_in_arcade() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(GameState::ArcadePlaying);
    app.update();

    assert_eq!(
        current_state(&app),
        GameState::ArcadePlaying,
        "insert_state(ArcadePlaying) must start directly in gameplay"
    );
}

/// Requesting the current state again is a no-op — state stays.
#[test]
fn redundant_transition_is_stable() {
    let mut app = app_with_default_state();
    app.update();
    set_state(&mut app, GameState::SolarSystem);
    set_state(&mut app, GameState::SolarSystem);
    assert_eq!(current_state(&app), GameState::SolarSystem);
}
