//! Systems for syncing Bevy entities with game state

use bevy::prelude::*;

use super::components::{
    to_bevy, CameraSettings, Chicken, EntityMappings, GameWorldResource, HudText, MainCamera,
    SimSynced, VehicleLink, WORLD_SCALE,
};
use super::spawner::spawn_lane_visual;

/// System to run one game frame at the current time
pub fn tick_game(time: Res<Time>, mut game: ResMut<GameWorldResource>) {
    let report = game.0.frame(time.elapsed_secs_f64() * 1000.0);
    if let Some(collision) = report.collision {
        info!(
            "Chicken hit on lane {}, final score {}",
            collision.lane, collision.final_score
        );
    }
}

/// System to rebuild lane visuals after a reset and add newly generated lanes
pub fn sync_lanes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    game: Res<GameWorldResource>,
    mut mappings: ResMut<EntityMappings>,
    synced_query: Query<Entity, With<SimSynced>>,
) {
    let world = &game.0;

    if mappings.games_played != world.session.games_played {
        for entity in synced_query.iter() {
            commands.entity(entity).despawn();
        }
        mappings.lanes.clear();
        mappings.games_played = world.session.games_played;
    }

    for lane in world.backdrop.iter().chain(world.lanes.iter()) {
        if !mappings.lanes.contains_key(&lane.index) {
            spawn_lane_visual(
                &mut commands,
                &mut meshes,
                &mut materials,
                lane,
                &world.config,
                &mut mappings,
            );
        }
    }
}

/// System to move vehicle visuals to their simulated offsets
pub fn sync_vehicles(
    game: Res<GameWorldResource>,
    mut vehicle_query: Query<(&VehicleLink, &mut Transform)>,
) {
    let world = &game.0;
    for (link, mut transform) in vehicle_query.iter_mut() {
        let Ok(lane_index) = usize::try_from(link.lane) else {
            continue;
        };
        if let Some(vehicle) = world
            .lanes
            .get(lane_index)
            .and_then(|lane| lane.vehicles().get(link.index))
        {
            transform.translation.x = vehicle.x.into_inner() * WORLD_SCALE;
        }
    }
}

/// System to place the chicken and trail it with the camera
pub fn sync_chicken(
    game: Res<GameWorldResource>,
    settings: Res<CameraSettings>,
    mut chicken_query: Query<&mut Transform, (With<Chicken>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, (With<MainCamera>, Without<Chicken>)>,
) {
    let scene = game.0.scene();

    if let Ok(mut transform) = chicken_query.single_mut() {
        transform.translation = to_bevy(scene.player);
    }

    if let Ok(mut transform) = camera_query.single_mut() {
        let focus = to_bevy(scene.camera_focus);
        *transform =
            Transform::from_translation(focus + settings.offset).looking_at(focus, Vec3::Y);
    }
}

/// System to update the HUD text
pub fn update_hud_text(game: Res<GameWorldResource>, mut text_query: Query<(&HudText, &mut Text)>) {
    let session = &game.0.session;

    for (hud_text, mut text) in text_query.iter_mut() {
        match hud_text {
            HudText::Score => {
                **text = format!("Score: {}", session.score);
            }
            HudText::Best => {
                **text = format!("Best: {}", session.best_score);
            }
            HudText::Status => {
                **text = if session.is_game_over {
                    format!(
                        "GAME OVER - final score {} (press R)",
                        session.last_final_score.unwrap_or_default()
                    )
                } else if let Some(last) = session.last_final_score {
                    format!("Last game: {}", last)
                } else {
                    "Arrow keys or swipe to move".to_string()
                };
            }
        }
    }
}
