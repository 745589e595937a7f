use bevy::prelude::*;

use crate::solar::bodies::PlanetId;

/// Top-level application state machine.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Main-menu splash screen; shown on startup.
    #[default]
    MainMenu,
    /// Orbiting solar-system scene with the settings controls.
    SolarSystem,
    /// Close-up view of a single planet picked from the solar scene.
    PlanetView,
    /// Arcade mode entry screen with the high-score table.
    ArcadeMenu,
    /// Active arcade session.
    ArcadePlaying,
    /// Arcade session frozen; pause overlay visible.
    ArcadePaused,
    /// Arcade session ended; final score and table shown.
    ArcadeGameOver,
    /// Free-flight exploration session.
    ExplorationPlaying,
    /// Exploration frozen; pause overlay visible.
    ExplorationPaused,
}

/// Which planet the close-up view should present.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedPlanet(pub PlanetId);

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Solar System" button.
#[derive(Component)]
pub struct MenuSolarButton;

/// Tags the "Asteroid Run" button.
#[derive(Component)]
pub struct MenuArcadeButton;

/// Tags the "Exploration" button.
#[derive(Component)]
pub struct MenuExploreButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the arcade entry screen; despawned on `OnExit(ArcadeMenu)`.
#[derive(Component)]
pub struct ArcadeMenuRoot;

/// Tags the "Start" button on the arcade entry screen.
#[derive(Component)]
pub struct ArcadeStartButton;

/// Tags the "Reset Scores" button on the arcade entry screen.
#[derive(Component)]
pub struct ArcadeResetScoresButton;

/// Tags the "Back" button on the arcade entry screen.
#[derive(Component)]
pub struct ArcadeBackButton;

/// Dynamic text listing the persisted high scores.
#[derive(Component)]
pub struct ArcadeScoreListText;

/// Root node of the arcade pause overlay; despawned on `OnExit(ArcadePaused)`.
#[derive(Component)]
pub struct PauseMenuRoot;

/// Tags the "Resume" button in the arcade pause overlay.
#[derive(Component)]
pub struct PauseResumeButton;

/// Tags the "Menu" button in the arcade pause overlay.
#[derive(Component)]
pub struct PauseMenuButton;

/// Root node of the game-over overlay; despawned on `OnExit(ArcadeGameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the "Play Again" button in the game-over overlay.
#[derive(Component)]
pub struct GameOverPlayAgainButton;

/// Tags the "Menu" button in the game-over overlay.
#[derive(Component)]
pub struct GameOverMenuButton;

/// Tags the "Quit" button in the game-over overlay.
#[derive(Component)]
pub struct GameOverQuitButton;

/// Root node of the exploration pause overlay; despawned on
/// `OnExit(ExplorationPaused)`.
#[derive(Component)]
pub struct ExplorationPauseRoot;

/// Tags the "Resume" button in the exploration pause overlay.
#[derive(Component)]
pub struct ExplorationResumeButton;

/// Tags the "Main Menu" button in the exploration pause overlay.
#[derive(Component)]
pub struct ExplorationQuitButton;
