use bevy::prelude::*;

pub(super) fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

pub(super) fn mode_card_bg() -> Color {
    Color::srgb(0.06, 0.09, 0.18)
}
pub(super) fn mode_card_border() -> Color {
    Color::srgb(0.22, 0.38, 0.72)
}
pub(super) fn mode_label_color() -> Color {
    Color::srgb(0.90, 0.90, 1.0)
}
pub(super) fn mode_desc_color() -> Color {
    Color::srgb(0.45, 0.50, 0.65)
}
pub(super) fn back_bg() -> Color {
    Color::srgb(0.12, 0.12, 0.18)
}
pub(super) fn back_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn back_text() -> Color {
    Color::srgb(0.55, 0.55, 0.70)
}

pub(super) fn resume_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn resume_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn resume_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn score_row_color() -> Color {
    Color::srgb(0.80, 0.95, 1.0)
}
pub(super) fn danger_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn danger_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn danger_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}

/// Render the high-score table as one line per rank.
pub(super) fn format_score_rows(entries: &[u32]) -> String {
    if entries.is_empty() {
        return "no scores yet".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, score)| format!("{}. {score}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rows_are_ranked_from_one() {
        assert_eq!(format_score_rows(&[120, 75, 40]), "1. 120\n2. 75\n3. 40");
    }

    #[test]
    fn empty_table_has_a_placeholder() {
        assert_eq!(format_score_rows(&[]), "no scores yet");
    }
}
