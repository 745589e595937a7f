//! A small solar-system playground built on Bevy.
//!
//! Four scenes hang off one state machine: an orbiting solar scene, a planet
//! close-up, a forward-streaming arcade mode with a persistent high-score
//! table, and a free-flight exploration mode with a visit-every-planet
//! checklist.

pub mod arcade;
pub mod config;
pub mod constants;
pub mod exploration;
pub mod graphics;
pub mod menu;
pub mod planet_view;
pub mod scores;
pub mod solar;
