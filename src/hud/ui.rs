//! Native HUD drawn with Bevy UI nodes.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::events::CreateMoleculeRequested;
use crate::hud::HudState;

const ENABLED_BG: Color = Color::srgb(0.20, 0.55, 0.30);
const DISABLED_BG: Color = Color::srgb(0.30, 0.30, 0.33);
const ENABLED_TEXT: Color = Color::WHITE;
const DISABLED_TEXT: Color = Color::srgb(0.60, 0.60, 0.62);

#[derive(Component)]
pub struct AtomCountLabel;

#[derive(Component)]
pub struct CreateMoleculeButton;

#[derive(Component)]
pub struct CreateMoleculeLabel;

#[derive(Component)]
pub struct MessageBox;

#[derive(Component)]
pub struct MessageText;

pub struct UiHudPlugin;

impl Plugin for UiHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Play), spawn_hud).add_systems(
            Update,
            (
                press_create_button,
                sync_hud_view.run_if(resource_changed::<HudState>),
            )
                .run_if(in_state(AppState::Play)),
        );
    }
}

pub fn spawn_hud(mut commands: Commands, hud: Res<HudState>) {
    commands
        .spawn((
            Name::new("HudPanel"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(hud.count_label()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                AtomCountLabel,
            ));
            panel
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        align_self: AlignSelf::FlexStart,
                        ..default()
                    },
                    BackgroundColor(DISABLED_BG),
                    CreateMoleculeButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Create H₂O (C)"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(DISABLED_TEXT),
                        CreateMoleculeLabel,
                    ));
                });
        });

    commands
        .spawn((
            Name::new("MessageBox"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            Visibility::Hidden,
            MessageBox,
        ))
        .with_children(|message| {
            message.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                MessageText,
            ));
        });
}

/// A disabled button swallows clicks, like a disabled page button would.
pub fn press_create_button(
    hud: Res<HudState>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<CreateMoleculeButton>)>,
    mut requests: EventWriter<CreateMoleculeRequested>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed && hud.create_enabled {
            requests.write(CreateMoleculeRequested);
        }
    }
}

pub fn sync_hud_view(
    hud: Res<HudState>,
    mut count_text: Query<&mut Text, (With<AtomCountLabel>, Without<MessageText>)>,
    mut message_text: Query<&mut Text, (With<MessageText>, Without<AtomCountLabel>)>,
    mut button_bg: Query<&mut BackgroundColor, With<CreateMoleculeButton>>,
    mut button_label: Query<&mut TextColor, With<CreateMoleculeLabel>>,
    mut message_box: Query<&mut Visibility, With<MessageBox>>,
) {
    for mut text in &mut count_text {
        text.0 = hud.count_label();
    }
    for mut text in &mut message_text {
        text.0.clone_from(&hud.message);
    }
    let (bg, fg) = if hud.create_enabled {
        (ENABLED_BG, ENABLED_TEXT)
    } else {
        (DISABLED_BG, DISABLED_TEXT)
    };
    for mut color in &mut button_bg {
        color.0 = bg;
    }
    for mut color in &mut button_label {
        color.0 = fg;
    }
    for mut visibility in &mut message_box {
        *visibility = if hud.message_visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
