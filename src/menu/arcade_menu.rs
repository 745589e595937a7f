use super::common::*;
use super::*;

use crate::scores::{HighScoreResetRequest, HighScoreTable};

/// Spawn the arcade entry screen: title, high-score table, Start / Reset /
/// Back buttons.
pub(super) fn setup_arcade_menu(mut commands: Commands, table: Res<HighScoreTable>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            ArcadeMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("ASTEROID RUN"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 8.0);

            root.spawn((
                Text::new("WASD to steer  ·  grab the coin  ·  dodge the rocks"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 28.0);

            // High-score card
            root.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    padding: UiRect::all(Val::Px(20.0)),
                    row_gap: Val::Px(8.0),
                    border: UiRect::all(Val::Px(2.0)),
                    min_width: Val::Px(220.0),
                    ..default()
                },
                BackgroundColor(mode_card_bg()),
                BorderColor::all(mode_card_border()),
            ))
            .with_children(|card| {
                card.spawn((
                    Text::new("HIGH SCORES"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(mode_label_color()),
                ));
                card.spawn((
                    Text::new(format_score_rows(table.entries())),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(score_row_color()),
                    ArcadeScoreListText,
                ));
            });

            spacer(root, 28.0);

            root.spawn((
                Button,
                Node {
                    width: Val::Px(220.0),
                    height: Val::Px(50.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(start_bg()),
                BorderColor::all(start_border()),
                ArcadeStartButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("START"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(start_text()),
                ));
            });

            spacer(root, 14.0);

            root.spawn((
                Button,
                Node {
                    width: Val::Px(220.0),
                    height: Val::Px(44.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(danger_bg()),
                BorderColor::all(danger_border()),
                ArcadeResetScoresButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("RESET SCORES"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(danger_text()),
                ));
            });

            spacer(root, 14.0);

            root.spawn((
                Button,
                Node {
                    width: Val::Px(220.0),
                    height: Val::Px(44.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(back_bg()),
                BorderColor::all(back_border()),
                ArcadeBackButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("BACK"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(back_text()),
                ));
            });
        });
}

/// Recursively despawn the arcade entry screen.
pub(super) fn cleanup_arcade_menu(
    mut commands: Commands,
    query: Query<Entity, With<ArcadeMenuRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Keep the score list in sync with the table (it changes when a reset
/// request is handled while this screen is open).
pub(super) fn refresh_score_list_system(
    table: Res<HighScoreTable>,
    mut list: Query<&mut Text, With<ArcadeScoreListText>>,
) {
    if !table.is_changed() {
        return;
    }
    for mut text in list.iter_mut() {
        *text = Text::new(format_score_rows(table.entries()));
    }
}

/// Handle Start / Reset Scores / Back presses on the arcade entry screen.
#[allow(clippy::type_complexity)]
pub(super) fn arcade_menu_button_system(
    start_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<ArcadeStartButton>)>,
    reset_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<ArcadeResetScoresButton>),
    >,
    back_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<ArcadeBackButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut reset_writer: MessageWriter<HighScoreResetRequest>,
) {
    for (interaction, children) in start_query.iter() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::ArcadePlaying);
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(start_text());
                    }
                }
            }
        }
    }

    for (interaction, children) in reset_query.iter() {
        match interaction {
            Interaction::Pressed => {
                reset_writer.write(HighScoreResetRequest);
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(danger_text());
                    }
                }
            }
        }
    }

    for (interaction, children) in back_query.iter() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::MainMenu);
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(back_text());
                    }
                }
            }
        }
    }
}
