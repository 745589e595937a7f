//! In-session HUD: score, level, and remaining lives.

use bevy::prelude::*;

use super::state::{
    ArcadeHudRoot, HudLivesText, HudScoreText, Invulnerability, ScoreLedger, SessionSnapshot,
    ShipLives,
};

fn score_color() -> Color {
    Color::srgb(0.90, 0.95, 1.0)
}

fn lives_color() -> Color {
    Color::srgb(0.95, 0.60, 0.55)
}

fn grace_color() -> Color {
    Color::srgb(0.95, 0.85, 0.45)
}

/// One line per HUD fact, rendered from a snapshot.
pub fn score_line(snapshot: &SessionSnapshot) -> String {
    format!("Score {}  ·  Level {}", snapshot.score, snapshot.level)
}

pub fn lives_line(snapshot: &SessionSnapshot) -> String {
    if snapshot.invulnerable {
        format!("Lives {}  (shielded)", snapshot.lives)
    } else {
        format!("Lives {}", snapshot.lives)
    }
}

/// Spawn the HUD corner card.  Runs last in the session spawn chain.
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            ArcadeHudRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
            ZIndex(5),
        ))
        .with_children(|parent| {
            parent.spawn((
                HudScoreText,
                Text::new("Score 0  ·  Level 1"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(score_color()),
            ));
            parent.spawn((
                HudLivesText,
                Text::new("Lives 3"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(lives_color()),
            ));
        });
}

/// Refresh the HUD whenever any of the session resources changed.
#[allow(clippy::type_complexity)]
pub fn refresh_hud_system(
    ledger: Res<ScoreLedger>,
    lives: Res<ShipLives>,
    invulnerability: Res<Invulnerability>,
    mut score_text: Query<&mut Text, (With<HudScoreText>, Without<HudLivesText>)>,
    mut lives_text: Query<(&mut Text, &mut TextColor), With<HudLivesText>>,
) {
    if !(ledger.is_changed() || lives.is_changed() || invulnerability.is_changed()) {
        return;
    }
    let snapshot = SessionSnapshot::capture(&ledger, &lives, &invulnerability);

    for mut text in score_text.iter_mut() {
        *text = Text::new(score_line(&snapshot));
    }
    for (mut text, mut color) in lives_text.iter_mut() {
        *text = Text::new(lives_line(&snapshot));
        *color = TextColor(if snapshot.invulnerable {
            grace_color()
        } else {
            lives_color()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_lines_render_the_snapshot() {
        let snapshot = SessionSnapshot {
            score: 140,
            level: 2,
            lives: 1,
            invulnerable: false,
        };
        assert_eq!(score_line(&snapshot), "Score 140  ·  Level 2");
        assert_eq!(lives_line(&snapshot), "Lives 1");
    }

    #[test]
    fn grace_window_is_called_out() {
        let snapshot = SessionSnapshot {
            score: 0,
            level: 1,
            lives: 2,
            invulnerable: true,
        };
        assert_eq!(lives_line(&snapshot), "Lives 2  (shielded)");
    }
}
