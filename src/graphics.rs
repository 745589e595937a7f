//! Shared rendering helpers: the UI camera and body art.
//!
//! Scenes spawn their own `Camera3d` (despawned with the scene); the single
//! persistent 2D camera here carries every menu and HUD on top of whichever
//! scene is active.  Body art is keyed by [`PlanetId`]: each planet has a
//! fallback colour that renders whenever its texture asset is absent, so a
//! missing file degrades to flat colour instead of aborting.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;

use crate::solar::bodies::PlanetId;

/// Marker for the persistent UI camera.
#[derive(Component)]
pub struct UiCamera;

/// Texture handles for the sun, moon, and each planet.
///
/// Handles are requested once at startup; a handle whose file is missing
/// simply never resolves and the material keeps its base colour.
#[derive(Resource, Default)]
pub struct BodyTextures {
    pub planets: HashMap<PlanetId, Handle<Image>>,
    pub sun: Handle<Image>,
    pub moon: Handle<Image>,
}

/// Spawn the persistent UI camera.
///
/// Renders after the scene cameras (order 1) without clearing, so overlays
/// composite over the 3D view.
pub fn setup_ui_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
        UiCamera,
    ));
}

/// Request every body texture from the asset server at startup.
pub fn load_body_textures(mut textures: ResMut<BodyTextures>, asset_server: Res<AssetServer>) {
    for id in PlanetId::ALL {
        let path = format!("textures/{}.jpg", id.label().to_lowercase());
        textures.planets.insert(id, asset_server.load(path));
    }
    textures.sun = asset_server.load("textures/sun.jpg");
    textures.moon = asset_server.load("textures/moon.jpg");
}

/// Fallback colour for each planet, used as the material base colour.
pub fn planet_color(id: PlanetId) -> Color {
    match id {
        PlanetId::Mercury => Color::srgb(0.55, 0.52, 0.48),
        PlanetId::Venus => Color::srgb(0.85, 0.70, 0.40),
        PlanetId::Earth => Color::srgb(0.25, 0.45, 0.80),
        PlanetId::Mars => Color::srgb(0.75, 0.33, 0.18),
        PlanetId::Jupiter => Color::srgb(0.78, 0.62, 0.45),
        PlanetId::Saturn => Color::srgb(0.82, 0.72, 0.50),
        PlanetId::Uranus => Color::srgb(0.55, 0.78, 0.82),
        PlanetId::Neptune => Color::srgb(0.25, 0.35, 0.85),
    }
}

pub fn sun_color() -> Color {
    Color::srgb(1.0, 0.85, 0.30)
}

pub fn moon_color() -> Color {
    Color::srgb(0.65, 0.65, 0.65)
}

/// Standard material for one planet: texture when it resolves, colour
/// otherwise.
pub fn planet_material(
    materials: &mut Assets<StandardMaterial>,
    textures: &BodyTextures,
    id: PlanetId,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: planet_color(id),
        base_color_texture: textures.planets.get(&id).cloned(),
        perceptual_roughness: 0.9,
        ..default()
    })
}

/// Self-lit sun material.
pub fn sun_material(
    materials: &mut Assets<StandardMaterial>,
    textures: &BodyTextures,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: sun_color(),
        base_color_texture: Some(textures.sun.clone()),
        emissive: LinearRgba::rgb(4.0, 3.2, 1.0),
        ..default()
    })
}
