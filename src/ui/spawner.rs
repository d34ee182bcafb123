//! Systems for spawning visual entities from game state
//!
//! Every shape is a cuboid sized in game units and scaled by `WORLD_SCALE`.

use bevy::prelude::*;
use std::f32::consts::PI;

use super::components::{
    to_bevy, Chicken, EntityMappings, GameWorldResource, LaneLink, SimSynced, VehicleLink,
    WORLD_SCALE,
};
use crate::simulation::{
    GameConfig, Lane, LaneContent, Position, TravelDirection, Vehicle, VehicleType,
};

const VEHICLE_COLORS: [Color; 3] = [
    Color::srgb(0.647, 0.145, 0.137),
    Color::srgb(0.741, 0.714, 0.220),
    Color::srgb(0.471, 0.694, 0.294),
];

/// System to spawn the chicken
pub fn spawn_chicken(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    game: Res<GameWorldResource>,
) {
    let world = &game.0;
    let size = world.config.chicken_size * world.config.zoom * WORLD_SCALE;
    let unit = world.config.zoom * WORLD_SCALE;

    commands
        .spawn((
            Chicken,
            Transform::from_translation(to_bevy(world.player.position())),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Body
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(size, 20.0 * unit, size))),
                MeshMaterial3d(materials.add(Color::WHITE)),
                Transform::from_xyz(0.0, 10.0 * unit, 0.0),
            ));
            // Comb
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.0 * unit, 2.0 * unit, 4.0 * unit))),
                MeshMaterial3d(materials.add(Color::srgb(0.941, 0.380, 0.604))),
                Transform::from_xyz(0.0, 21.0 * unit, 0.0),
            ));
        });
}

/// Spawn the ground, trees and vehicles of one lane
pub fn spawn_lane_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    lane: &Lane,
    config: &GameConfig,
    mappings: &mut ResMut<EntityMappings>,
) {
    let board = config.board_width() * WORLD_SCALE;
    let cell = config.cell_size() * WORLD_SCALE;
    let unit = config.zoom * WORLD_SCALE;

    let (middle_color, side_color, thickness) = if lane.lane_type().is_road() {
        (
            Color::srgb_u8(0x45, 0x4a, 0x59),
            Color::srgb_u8(0x39, 0x3d, 0x49),
            0.02,
        )
    } else {
        (
            Color::srgb_u8(0xba, 0xf4, 0x55),
            Color::srgb_u8(0x99, 0xc8, 0x46),
            3.0 * unit,
        )
    };

    let origin = to_bevy(Position::new(0.0, config.lane_y(lane.index), 0.0));

    let entity = commands
        .spawn((
            SimSynced,
            LaneLink(lane.index),
            Transform::from_translation(origin),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // The playable strip plus darker run-off on both sides
            for (offset, color) in [(-board, side_color), (0.0, middle_color), (board, side_color)] {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(board, thickness, cell))),
                    MeshMaterial3d(materials.add(color)),
                    Transform::from_xyz(offset, -thickness / 2.0, 0.0),
                ));
            }

            if let LaneContent::Forest { trees } = &lane.content {
                for (&column, &height) in trees {
                    let x = config.column_center_x(column) * WORLD_SCALE;
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::new(15.0 * unit, 20.0 * unit, 15.0 * unit))),
                        MeshMaterial3d(materials.add(Color::srgb_u8(0x4d, 0x29, 0x26))),
                        Transform::from_xyz(x, 10.0 * unit, 0.0),
                    ));
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::new(30.0 * unit, height * unit, 30.0 * unit))),
                        MeshMaterial3d(materials.add(Color::srgb_u8(0x7a, 0xa2, 0x1d))),
                        Transform::from_xyz(x, (height / 2.0 + 20.0) * unit, 0.0),
                    ));
                }
            }
        })
        .id();
    mappings.lanes.insert(lane.index, entity);

    if let LaneContent::Road {
        direction,
        vehicles,
        ..
    } = &lane.content
    {
        for (index, vehicle) in vehicles.iter().enumerate() {
            spawn_vehicle_visual(
                commands, meshes, materials, lane.index, index, vehicle, *direction, config,
            );
        }
    }
}

/// Spawn a single car or truck
#[allow(clippy::too_many_arguments)]
pub fn spawn_vehicle_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    lane_index: i64,
    index: usize,
    vehicle: &Vehicle,
    direction: TravelDirection,
    config: &GameConfig,
) {
    let unit = config.zoom * WORLD_SCALE;
    let color = VEHICLE_COLORS[vehicle.color_index % VEHICLE_COLORS.len()];
    let wheel_color = Color::srgb_u8(0x33, 0x33, 0x33);

    // Models face -x; turn the ones driving toward +x around
    let rotation = match direction {
        TravelDirection::Leftward => Quat::IDENTITY,
        TravelDirection::Rightward => Quat::from_rotation_y(PI),
    };
    let position = Position::new(vehicle.x.into_inner(), config.lane_y(lane_index), 0.0);

    let mut parts: Vec<(Vec3, Color, Vec3)> = Vec::new();
    match vehicle.vehicle_type {
        VehicleType::Car => {
            parts.push((Vec3::new(60.0, 15.0, 30.0), color, Vec3::new(0.0, 12.0, 0.0)));
            parts.push((
                Vec3::new(33.0, 12.0, 24.0),
                Color::srgb(0.8, 0.8, 0.8),
                Vec3::new(6.0, 25.5, 0.0),
            ));
            for x in [-18.0, 18.0] {
                parts.push((Vec3::new(12.0, 12.0, 33.0), wheel_color, Vec3::new(x, 6.0, 0.0)));
            }
        }
        VehicleType::Truck => {
            let cargo_color = Color::srgb_u8(0xb4, 0xc6, 0xfc);
            parts.push((Vec3::new(100.0, 5.0, 25.0), cargo_color, Vec3::new(0.0, 10.0, 0.0)));
            parts.push((Vec3::new(75.0, 40.0, 35.0), cargo_color, Vec3::new(15.0, 30.0, 0.0)));
            parts.push((Vec3::new(25.0, 30.0, 30.0), color, Vec3::new(-40.0, 20.0, 0.0)));
            for x in [-38.0, -10.0, 30.0] {
                parts.push((Vec3::new(12.0, 12.0, 33.0), wheel_color, Vec3::new(x, 6.0, 0.0)));
            }
        }
    }

    commands
        .spawn((
            SimSynced,
            VehicleLink {
                lane: lane_index,
                index,
            },
            Transform::from_translation(to_bevy(position)).with_rotation(rotation),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for (size, color, offset) in parts {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::from_size(size * unit))),
                    MeshMaterial3d(materials.add(color)),
                    Transform::from_translation(offset * unit),
                ));
            }
        });
}
