use bevy::prelude::*;
use bevy::window::WindowResolution;

use orrery::arcade::ArcadePlugin;
use orrery::config::{self, GameConfig};
use orrery::exploration::ExplorationPlugin;
use orrery::graphics::{self, BodyTextures};
use orrery::menu::MenuPlugin;
use orrery::planet_view::PlanetViewPlugin;
use orrery::scores::ScoresPlugin;
use orrery::solar::SolarPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup
        // schedule.
        .insert_resource(GameConfig::default())
        .init_resource::<BodyTextures>()
        .add_plugins(MenuPlugin)
        .add_plugins(ScoresPlugin)
        .add_plugins(SolarPlugin)
        .add_plugins(PlanetViewPlugin)
        .add_plugins(ArcadePlugin)
        .add_plugins(ExplorationPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                graphics::setup_ui_camera.after(config::load_game_config),
                graphics::load_body_textures.after(config::load_game_config),
            ),
        )
        .run();
}
