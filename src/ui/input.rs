//! Input handling systems

use bevy::prelude::*;

use super::components::{GameWorldResource, SwipeState};
use crate::simulation::Direction;

/// Handle arrow keys, restart and exit
pub fn handle_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<GameWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    for (key, direction) in [
        (KeyCode::ArrowUp, Direction::Forward),
        (KeyCode::ArrowDown, Direction::Backward),
        (KeyCode::ArrowLeft, Direction::Left),
        (KeyCode::ArrowRight, Direction::Right),
    ] {
        if keyboard.just_pressed(key) {
            game.0.request_move(direction);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) && game.0.session.is_game_over {
        game.0.restart();
    }
}

/// Turn single-finger swipes into moves
pub fn handle_touch(
    touches: Res<Touches>,
    mut swipe: ResMut<SwipeState>,
    mut game: ResMut<GameWorldResource>,
) {
    for touch in touches.iter_just_pressed() {
        let position = touch.position();
        swipe.0.begin(position.x, position.y);
    }

    for touch in touches.iter_just_released() {
        let position = touch.position();
        if let Some(direction) = swipe.0.end(position.x, position.y) {
            game.0.request_move(direction);
        }
    }

    if touches.iter_just_canceled().next().is_some() {
        swipe.0.cancel();
    }
}
