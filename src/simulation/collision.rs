//! Collision detection and recovery

use super::car::SimCar;
use super::types::{CarId, RoadLayout, SimConfig, EGO_RESET_SPEED};

/// First detected overlap between the ego and a traffic car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub ego: CarId,
    pub other: CarId,
}

/// Check the ego footprint against all traffic, stopping at the first hit
pub fn check_collision(
    ego: &SimCar,
    traffic: &[SimCar],
    layout: &RoadLayout,
) -> Option<CollisionEvent> {
    let ego_rect = ego.rect(layout);
    traffic
        .iter()
        .find(|car| ego_rect.intersects(&car.rect(layout)))
        .map(|car| CollisionEvent {
            ego: ego.id,
            other: car.id,
        })
}

/// The ego as it restarts after a collision
pub fn reset_ego(ego: &SimCar, config: &SimConfig) -> SimCar {
    SimCar::ego(
        ego.id,
        config.ego_start_lane(),
        config.ego_start_y(),
        EGO_RESET_SPEED,
    )
}
