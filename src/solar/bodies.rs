//! The planet catalog and orbit math.
//!
//! Catalog values follow the classic textbook-toy proportions rather than real
//! ephemerides: radii and distances are chosen to read well on screen, and
//! orbital rates fall off with distance so the inner planets visibly lap the
//! outer ones.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::constants::SUN_RADIUS;

/// Identifies one of the eight planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanetId {
    #[default]
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    /// All planets, innermost first.
    pub const ALL: [PlanetId; 8] = [
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }

    /// Map the 1–8 digit row to a planet, innermost first.
    pub fn from_digit(digit: u8) -> Option<PlanetId> {
        match digit {
            1..=8 => Some(Self::ALL[(digit - 1) as usize]),
            _ => None,
        }
    }
}

/// Static description of one planet in the solar scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub id: PlanetId,
    /// Distance from the sun's centre.
    pub orbit_radius: f32,
    /// Mesh radius.
    pub size: f32,
    /// Base orbital rate (rad/s) before the speed multiplier.
    pub orbit_speed: f32,
    /// Axial spin rate (rad/s).
    pub rotation_speed: f32,
    /// Retrograde spin (Venus, Uranus).
    pub retrograde: bool,
    /// Earth carries a moon child.
    pub has_moon: bool,
    /// Saturn carries a flat ring.
    pub has_ring: bool,
}

/// Moon orbit radius around Earth in the solar scene.
pub const MOON_ORBIT_RADIUS: f32 = 3.0;
/// Moon mesh radius.
pub const MOON_SIZE: f32 = 0.3;
/// Moon orbital rate (rad/s); deliberately slower than Earth's spin.
pub const MOON_ORBIT_SPEED: f32 = 0.0009;
/// Saturn's ring spans 1.8–3 times the planet radius.
pub const RING_INNER_FACTOR: f32 = 1.8;
pub const RING_OUTER_FACTOR: f32 = 3.0;

/// The full catalog, innermost first.
///
/// Rates are per-second conversions of a 60 Hz frame-stepped scene, so the
/// relative choreography is preserved at any frame rate.
pub fn planet_catalog() -> [PlanetSpec; 8] {
    [
        PlanetSpec {
            id: PlanetId::Mercury,
            orbit_radius: SUN_RADIUS + 8.0,
            size: 0.4,
            orbit_speed: 0.006,
            rotation_speed: 0.012,
            retrograde: false,
            has_moon: false,
            has_ring: false,
        },
        PlanetSpec {
            id: PlanetId::Venus,
            orbit_radius: SUN_RADIUS + 12.0,
            size: 0.9,
            orbit_speed: 0.0042,
            rotation_speed: 0.006,
            retrograde: true,
            has_moon: false,
            has_ring: false,
        },
        PlanetSpec {
            id: PlanetId::Earth,
            orbit_radius: SUN_RADIUS + 16.0,
            size: 1.0,
            orbit_speed: 0.003,
            rotation_speed: 0.06,
            retrograde: false,
            has_moon: true,
            has_ring: false,
        },
        PlanetSpec {
            id: PlanetId::Mars,
            orbit_radius: SUN_RADIUS + 22.0,
            size: 0.7,
            orbit_speed: 0.0018,
            rotation_speed: 0.048,
            retrograde: false,
            has_moon: false,
            has_ring: false,
        },
        PlanetSpec {
            id: PlanetId::Jupiter,
            orbit_radius: SUN_RADIUS + 60.0,
            size: 3.5,
            orbit_speed: 0.0006,
            rotation_speed: 0.12,
            retrograde: false,
            has_moon: false,
            has_ring: false,
        },
        PlanetSpec {
            id: PlanetId::Saturn,
            orbit_radius: SUN_RADIUS + 100.0,
            size: 2.8,
            orbit_speed: 0.00048,
            rotation_speed: 0.108,
            retrograde: false,
            has_moon: false,
            has_ring: true,
        },
        PlanetSpec {
            id: PlanetId::Uranus,
            orbit_radius: SUN_RADIUS + 150.0,
            size: 2.0,
            orbit_speed: 0.00024,
            rotation_speed: 0.06,
            retrograde: true,
            has_moon: false,
            has_ring: false,
        },
        PlanetSpec {
            id: PlanetId::Neptune,
            orbit_radius: SUN_RADIUS + 200.0,
            size: 1.9,
            orbit_speed: 0.00012,
            rotation_speed: 0.072,
            retrograde: false,
            has_moon: false,
            has_ring: false,
        },
    ]
}

/// Look up one planet's spec.
pub fn planet_spec(id: PlanetId) -> PlanetSpec {
    planet_catalog()[PlanetId::ALL.iter().position(|&p| p == id).unwrap_or(0)]
}

/// Advance an orbital angle, wrapped into [0, TAU).
///
/// The wrap keeps angles bounded over arbitrarily long sessions without
/// drifting the derived position.
#[inline]
pub fn advance_angle(angle: f32, rate: f32, dt: f32) -> f32 {
    (angle + rate * dt).rem_euclid(TAU)
}

/// Derive a body's position on the ecliptic plane from its angle.
#[inline]
pub fn orbit_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_innermost_first() {
        let catalog = planet_catalog();
        for pair in catalog.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
            assert!(pair[0].orbit_speed > pair[1].orbit_speed);
        }
    }

    #[test]
    fn digits_map_to_planets_in_catalog_order() {
        assert_eq!(PlanetId::from_digit(1), Some(PlanetId::Mercury));
        assert_eq!(PlanetId::from_digit(8), Some(PlanetId::Neptune));
        assert_eq!(PlanetId::from_digit(0), None);
        assert_eq!(PlanetId::from_digit(9), None);
    }

    #[test]
    fn angle_stays_wrapped_over_long_runs() {
        let mut angle = 0.0;
        for _ in 0..100_000 {
            angle = advance_angle(angle, 1.7, 0.016);
        }
        assert!((0.0..TAU).contains(&angle));
    }

    #[test]
    fn negative_rates_wrap_into_range_too() {
        let angle = advance_angle(0.1, -1.0, 0.5);
        assert!((0.0..TAU).contains(&angle));
    }

    #[test]
    fn orbit_position_stays_on_the_circle() {
        let pos = orbit_position(1.234, 21.0);
        assert!((pos.length() - 21.0).abs() < 1e-4);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn spec_lookup_matches_catalog() {
        assert!(planet_spec(PlanetId::Saturn).has_ring);
        assert!(planet_spec(PlanetId::Earth).has_moon);
        assert!(planet_spec(PlanetId::Venus).retrograde);
    }
}
