use super::common::*;
use super::*;

use crate::arcade::state::ScoreLedger;
use crate::scores::HighScoreTable;

/// Spawn the game-over overlay centred over the frozen world.
///
/// Shows the final score, the updated high-score table, and buttons for an
/// immediate rematch or a retreat to the arcade menu.
pub(super) fn setup_game_over(
    mut commands: Commands,
    ledger: Res<ScoreLedger>,
    table: Res<HighScoreTable>,
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("GAME OVER"),
                        TextFont {
                            font_size: 46.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.22, 0.22)),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(format!(
                            "Score: {}   ·   reached level {}",
                            ledger.score, ledger.level
                        )),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    card.spawn((
                        Text::new(format_score_rows(table.entries())),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(score_row_color()),
                    ));

                    spacer(card, 8.0);

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(resume_bg()),
                        BorderColor::all(resume_border()),
                        GameOverPlayAgainButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("PLAY AGAIN"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(resume_text()),
                        ));
                    });

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(back_bg()),
                        BorderColor::all(back_border()),
                        GameOverMenuButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("MENU"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(back_text()),
                        ));
                    });

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(quit_bg()),
                        BorderColor::all(quit_border()),
                        GameOverQuitButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("QUIT"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(quit_text()),
                        ));
                    });

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("Press Enter to play again"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all game-over overlay entities.
pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Play Again / Menu / Quit actions in the game-over overlay.
#[allow(clippy::type_complexity)]
pub(super) fn game_over_button_system(
    play_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<GameOverPlayAgainButton>),
    >,
    menu_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<GameOverMenuButton>)>,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<GameOverQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let wants_play_again = keys.just_pressed(KeyCode::Enter)
        || play_query.iter().any(|(i, _)| *i == Interaction::Pressed);

    if wants_play_again {
        next_state.set(GameState::ArcadePlaying);
        return;
    }

    for (interaction, children) in play_query.iter() {
        match interaction {
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
                        *color = TextColor(resume_text());
                    }
                }
            }
            Interaction::Pressed => {}
        }
    }

    for (interaction, children) in menu_query.iter() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::ArcadeMenu);
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

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                exit.write(AppExit::Success);
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
                        *color = TextColor(quit_text());
                    }
                }
            }
        }
    }
}
