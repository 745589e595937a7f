use super::common::*;
use super::*;

/// Spawn the full-screen main-menu overlay.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │              ORRERY                         │
/// │   An interactive solar system               │
/// │                                             │
/// │         [ SOLAR SYSTEM ]                    │
/// │         [ ASTEROID RUN ]                    │
/// │         [ EXPLORATION  ]                    │
/// │            [ QUIT ]                         │
/// │                                             │
/// │          v0.1.0  ·  Bevy 0.17               │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_main_menu(mut commands: Commands) {
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
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("ORRERY"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("An interactive solar system"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 52.0);

            mode_button(root, "SOLAR SYSTEM", "orbits, speeds, planet close-ups", MenuSolarButton);
            spacer(root, 14.0);
            mode_button(root, "ASTEROID RUN", "dodge rocks, chase the coin", MenuArcadeButton);
            spacer(root, 14.0);
            mode_button(root, "EXPLORATION", "free flight across the system", MenuExploreButton);

            spacer(root, 14.0);

            root.spawn((
                Button,
                Node {
                    width: Val::Px(260.0),
                    height: Val::Px(50.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(quit_bg()),
                BorderColor::all(quit_border()),
                MenuQuitButton,
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

            spacer(root, 52.0);

            root.spawn((
                Text::new("v0.1.0  ·  Bevy 0.17"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Spawn one mode card: a label button with a one-line description under it.
fn mode_button(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    desc: &str,
    marker: impl Component,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(260.0),
                height: Val::Px(62.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(mode_card_bg()),
            BorderColor::all(mode_card_border()),
            marker,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(mode_label_color()),
            ));
            btn.spawn((
                Text::new(desc),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(mode_desc_color()),
            ));
        });
}

/// Recursively despawn all main-menu entities.
pub(super) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle the mode picker and Quit button presses.
///
/// - **Solar System** → transitions to [`GameState::SolarSystem`].
/// - **Asteroid Run** → transitions to [`GameState::ArcadeMenu`].
/// - **Exploration** → transitions to [`GameState::ExplorationPlaying`].
/// - **Quit** → sends [`bevy::app::AppExit`] to gracefully shut down.
#[allow(clippy::type_complexity)]
pub(super) fn menu_button_system(
    solar_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuSolarButton>)>,
    arcade_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuArcadeButton>)>,
    explore_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<MenuExploreButton>),
    >,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    for (interaction, children) in solar_query.iter() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::SolarSystem);
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
                        *color = TextColor(mode_label_color());
                    }
                }
            }
        }
    }

    for (interaction, children) in arcade_query.iter() {
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
                        *color = TextColor(mode_label_color());
                    }
                }
            }
        }
    }

    for (interaction, children) in explore_query.iter() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::ExplorationPlaying);
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
                        *color = TextColor(mode_label_color());
                    }
                }
            }
        }
    }

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                exit.write(bevy::app::AppExit::Success);
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
