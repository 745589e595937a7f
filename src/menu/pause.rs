use super::common::*;
use super::*;

/// ESC while in `ArcadePlaying` → transition to `ArcadePaused`.
pub(super) fn toggle_pause_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::ArcadePaused);
    }
}

/// ESC while in `ArcadePaused` → transition back to `ArcadePlaying`.
pub(super) fn pause_resume_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::ArcadePlaying);
    }
}

/// Spawn the arcade pause overlay.
///
/// Layout (appears centred over the frozen game world):
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ ░░░░░░░░░ semi-transparent overlay ░░░░░░░░ │
/// │ ░░░░░   ┌───────────────────────┐   ░░░░░░ │
/// │ ░░░░░   │      — PAUSED —       │   ░░░░░░ │
/// │ ░░░░░   │    [ RESUME ]         │   ░░░░░░ │
/// │ ░░░░░   │    [ MENU   ]         │   ░░░░░░ │
/// │ ░░░░░   │   ESC to resume       │   ░░░░░░ │
/// │ ░░░░░   └───────────────────────┘   ░░░░░░ │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_pause_menu(mut commands: Commands) {
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.70)),
            ZIndex(200),
            PauseMenuRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(280.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.04, 0.04, 0.07)),
                    BorderColor::all(Color::srgb(0.30, 0.30, 0.46)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("PAUSED"),
                        TextFont {
                            font_size: 38.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(48.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(resume_bg()),
                        BorderColor::all(resume_border()),
                        PauseResumeButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("RESUME"),
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
                            height: Val::Px(48.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(back_bg()),
                        BorderColor::all(back_border()),
                        PauseMenuButton,
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

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("ESC → resume"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all pause-overlay entities.
pub(super) fn cleanup_pause_menu(
    mut commands: Commands,
    query: Query<Entity, With<PauseMenuRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Resume and Menu presses in the arcade pause overlay.
///
/// - **Resume** → transitions back to [`GameState::ArcadePlaying`].
/// - **Menu** → transitions to [`GameState::ArcadeMenu`]; the session world is
///   torn down by the transition cleanup system.
#[allow(clippy::type_complexity)]
pub(super) fn pause_menu_button_system(
    resume_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PauseResumeButton>)>,
    menu_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PauseMenuButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, children) in resume_query.iter() {
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
                        *color = TextColor(resume_text());
                    }
                }
            }
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
}
