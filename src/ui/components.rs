//! UI components and resources for linking Bevy entities to game state

use bevy::prelude::*;
use std::collections::HashMap;

use crate::simulation::{GameWorld, Position, SwipeTracker};

/// Bevy units per world unit; one board cell becomes one Bevy unit
pub const WORLD_SCALE: f32 = 1.0 / 84.0;

/// Convert a game position (x along the lane, y forward, z up) to Bevy space
pub fn to_bevy(position: Position) -> Vec3 {
    Vec3::new(
        position.x * WORLD_SCALE,
        position.z * WORLD_SCALE,
        -position.y * WORLD_SCALE,
    )
}

/// Resource wrapper for the game world
#[derive(Resource)]
pub struct GameWorldResource(pub GameWorld);

impl Default for GameWorldResource {
    fn default() -> Self {
        Self(GameWorld::default())
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker component for the chicken
#[derive(Component)]
pub struct Chicken;

/// Resource to control how the camera trails the chicken
#[derive(Resource)]
pub struct CameraSettings {
    /// Offset from the followed point
    pub offset: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset: Vec3::new(2.0, 9.0, 7.0),
        }
    }
}

/// Marker for entities rebuilt whenever a new game starts
#[derive(Component)]
pub struct SimSynced;

/// Links a Bevy entity to a lane
#[derive(Component)]
pub struct LaneLink(pub i64);

/// Links a Bevy entity to a vehicle of a lane
#[derive(Component)]
pub struct VehicleLink {
    pub lane: i64,
    pub index: usize,
}

/// Resource to track Bevy entities mapped to lanes
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub lanes: HashMap<i64, Entity>,
    /// Game the current visuals were built for
    pub games_played: u32,
}

/// In-progress touch gesture
#[derive(Resource, Default)]
pub struct SwipeState(pub SwipeTracker);

/// Marker for HUD text elements
#[derive(Component)]
pub enum HudText {
    Score,
    Best,
    Status,
}
