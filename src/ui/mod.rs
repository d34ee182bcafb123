//! UI module that visualizes the game state using Bevy
//!
//! This module is purely a host - all game logic is in the `simulation` module.
//! The UI feeds frames and input into `GameWorld` and renders it with Bevy's 3D graphics.

mod components;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{EntityMappings, GameWorldResource};

use components::*;
use input::{handle_keyboard, handle_touch};
use spawner::spawn_chicken;
use sync::{sync_chicken, sync_lanes, sync_vehicles, tick_game, update_hud_text};
use world::{setup_hud, setup_world};

/// Plugin to register all UI systems
pub struct CrossyRoadUIPlugin;

impl Plugin for CrossyRoadUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameWorldResource>()
            .init_resource::<EntityMappings>()
            .init_resource::<CameraSettings>()
            .init_resource::<SwipeState>()
            .add_systems(Startup, (setup_world, setup_hud, spawn_chicken))
            .add_systems(
                Update,
                (
                    handle_keyboard,
                    handle_touch,
                    tick_game,
                    sync_lanes,
                    sync_vehicles,
                    sync_chicken,
                    update_hud_text,
                )
                    .chain(),
            );
    }
}
