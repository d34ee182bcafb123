//! World setup systems for camera, lighting and the HUD

use bevy::prelude::*;

use super::components::{CameraSettings, HudText, MainCamera};

/// System to setup the camera and lights
pub fn setup_world(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_translation(settings.offset).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Key light casting the shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Back light
    commands.spawn((
        DirectionalLight {
            illuminance: 4000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 3.0, -4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// System to setup the score display
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                HudText::Score,
            ));

            parent.spawn((
                Text::new("Best: 0"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                HudText::Best,
            ));

            parent.spawn((
                Text::new("Arrow keys or swipe to move"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.5)),
                HudText::Status,
            ));
        });
}
