//! Vehicle movement along road lanes
//!
//! Standalone implementation that doesn't depend on Bevy.

use log::trace;
use ordered_float::OrderedFloat;

use super::config::GameConfig;
use super::lane::{Lane, LaneContent, Vehicle};
use super::types::TravelDirection;

/// Horizontal limits of a road lane's track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub min: f32,
    pub max: f32,
}

impl TrackBounds {
    pub fn from_config(config: &GameConfig) -> Self {
        let (min, max) = config.track_bounds();
        Self { min, max }
    }
}

impl Vehicle {
    /// Move the vehicle `distance` world units in `direction`
    ///
    /// Once past the bound it drives toward, the vehicle reappears at the
    /// opposite bound. Returns true if it wrapped.
    pub fn advance(
        &mut self,
        direction: TravelDirection,
        distance: f32,
        bounds: TrackBounds,
    ) -> bool {
        self.x += direction.sign() * distance;

        match direction {
            TravelDirection::Rightward if self.x > OrderedFloat(bounds.max) => {
                self.x = OrderedFloat(bounds.min);
                true
            }
            TravelDirection::Leftward if self.x < OrderedFloat(bounds.min) => {
                self.x = OrderedFloat(bounds.max);
                true
            }
            _ => false,
        }
    }
}

/// Advance every vehicle of a road lane by `delta_ms` of elapsed time
///
/// Does nothing for fields and forests. Returns the number of vehicles that
/// wrapped around.
pub fn advance_lane(lane: &mut Lane, delta_ms: f32, config: &GameConfig) -> usize {
    let LaneContent::Road {
        direction,
        speed,
        vehicles,
        ..
    } = &mut lane.content
    else {
        return 0;
    };

    let distance = *speed / config.speed_divisor * delta_ms.max(0.0);
    let bounds = TrackBounds::from_config(config);

    let mut wrapped = 0;
    for vehicle in vehicles.iter_mut() {
        if vehicle.advance(*direction, distance, bounds) {
            wrapped += 1;
        }
    }

    if wrapped > 0 {
        trace!("{} vehicle(s) wrapped on lane {}", wrapped, lane.index);
    }
    wrapped
}
