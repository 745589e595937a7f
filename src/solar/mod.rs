//! The orbiting solar scene.
//!
//! Eight planets circle a self-lit sun in textbook-toy proportions, with
//! Earth's moon and Saturn's ring as child entities.  A keyboard-driven
//! [`systems::OrbitTuning`] resource sweeps the shared speed multiplier,
//! pauses the choreography, and toggles the orbit circles; digit keys jump
//! into the planet close-up.

pub mod bodies;
pub mod systems;

use bevy::prelude::*;

use crate::menu::GameState;

pub struct SolarPlugin;

impl Plugin for SolarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<systems::OrbitTuning>()
            .add_systems(OnEnter(GameState::SolarSystem), systems::spawn_solar_scene)
            .add_systems(OnExit(GameState::SolarSystem), systems::cleanup_solar_scene)
            .add_systems(
                Update,
                (
                    systems::solar_input_system,
                    systems::orbit_system,
                    systems::moon_orbit_system,
                    systems::solar_overlay_system,
                )
                    .chain()
                    .run_if(in_state(GameState::SolarSystem)),
            );
    }
}
