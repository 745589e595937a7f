//! The visit-every-planet mission log and its HUD.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::solar::bodies::PlanetId;

use super::probe::Probe;
use super::ExplorationBody;

/// Root node of the mission checklist overlay.
#[derive(Component)]
pub struct MissionHudRoot;

#[derive(Component)]
pub struct MissionListText;

/// Progress through the tour, one entry per planet.
#[derive(Resource)]
pub struct MissionLog {
    pub entries: Vec<(PlanetId, bool)>,
}

impl Default for MissionLog {
    fn default() -> Self {
        Self {
            entries: PlanetId::ALL.iter().map(|&id| (id, false)).collect(),
        }
    }
}

impl MissionLog {
    /// Mark a planet visited; true only the first time.
    pub fn mark_visited(&mut self, id: PlanetId) -> bool {
        for entry in self.entries.iter_mut() {
            if entry.0 == id && !entry.1 {
                entry.1 = true;
                return true;
            }
        }
        false
    }

    pub fn visited_count(&self) -> usize {
        self.entries.iter().filter(|e| e.1).count()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.1)
    }
}

/// Whether the probe is close enough to a body to count as a visit.
///
/// `margin` is the configured margin already scaled by the probe's size, so
/// the window tracks both bodies.
#[inline]
pub fn within_visit_range(distance: f32, body_radius: f32, margin: f32) -> bool {
    distance < body_radius + margin
}

/// Render the checklist, one line per planet.
pub fn mission_lines(log: &MissionLog) -> String {
    let mut lines: Vec<String> = log
        .entries
        .iter()
        .map(|(id, visited)| {
            format!("[{}] {}", if *visited { "x" } else { " " }, id.label())
        })
        .collect();
    if log.is_complete() {
        lines.push("tour complete!".to_string());
    }
    lines.join("\n")
}

/// Check the probe against every body and log first visits.
pub fn mission_check_system(
    config: Res<GameConfig>,
    mut log: ResMut<MissionLog>,
    probes: Query<&Transform, With<Probe>>,
    bodies: Query<(&ExplorationBody, &Transform)>,
) {
    let Ok(probe) = probes.single() else {
        return;
    };
    let margin = config.mission_margin * crate::constants::PROBE_SCALE;

    for (body, transform) in bodies.iter() {
        let distance = probe.translation.distance(transform.translation);
        if within_visit_range(distance, body.radius, margin)
            && log.mark_visited(body.id)
        {
            info!(
                "visited {} ({}/{})",
                body.id.label(),
                log.visited_count(),
                log.entries.len()
            );
        }
    }
}

/// Refresh the checklist overlay whenever the log changes.
pub fn refresh_mission_hud_system(
    log: Res<MissionLog>,
    mut list: Query<&mut Text, With<MissionListText>>,
) {
    if !log.is_changed() {
        return;
    }
    for mut text in list.iter_mut() {
        *text = Text::new(mission_lines(&log));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_counts_once() {
        let mut log = MissionLog::default();
        assert!(log.mark_visited(PlanetId::Mars));
        assert!(!log.mark_visited(PlanetId::Mars));
        assert_eq!(log.visited_count(), 1);
        assert!(!log.is_complete());
    }

    #[test]
    fn visiting_all_eight_completes_the_tour() {
        let mut log = MissionLog::default();
        for id in PlanetId::ALL {
            log.mark_visited(id);
        }
        assert!(log.is_complete());
        assert!(mission_lines(&log).ends_with("tour complete!"));
    }

    #[test]
    fn visit_window_scales_with_the_body() {
        // Probe skimming a big planet, margin already probe-scaled.
        assert!(within_visit_range(1900.0, 1400.0, 540.0));
        // Same distance from a small one is a miss.
        assert!(!within_visit_range(1900.0, 160.0, 540.0));
    }

    #[test]
    fn checklist_marks_visits() {
        let mut log = MissionLog::default();
        log.mark_visited(PlanetId::Mercury);
        let lines = mission_lines(&log);
        assert!(lines.starts_with("[x] Mercury"));
        assert!(lines.contains("[ ] Venus"));
    }
}
