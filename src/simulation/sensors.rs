//! Spatial queries over the traffic set
//!
//! All queries are pure linear scans; the traffic collection carries no
//! ordering.

use ordered_float::OrderedFloat;

use super::car::SimCar;
use super::types::{SAFETY_BUFFER_ABOVE, SAFETY_BUFFER_BELOW};

/// Nearest car ahead of `reference_y` in `lane`.
///
/// A car is ahead when its rear edge is strictly above `reference_y`. When
/// several cars share the minimal gap, which one is returned is unspecified.
pub fn nearest_ahead(traffic: &[SimCar], lane: usize, reference_y: f32) -> Option<&SimCar> {
    traffic
        .iter()
        .filter(|car| car.lane == lane && car.bottom() < reference_y)
        .min_by_key(|car| OrderedFloat(reference_y - car.bottom()))
}

/// Gap between `reference_y` and the rear of the nearest car ahead in `lane`
pub fn gap_ahead(traffic: &[SimCar], lane: usize, reference_y: f32) -> Option<f32> {
    nearest_ahead(traffic, lane, reference_y).map(|car| reference_y - car.bottom())
}

/// True when no car in `target_lane` overlaps the window
/// `[ego_y - SAFETY_BUFFER_ABOVE, ego_y + SAFETY_BUFFER_BELOW]`
pub fn is_lane_safe(traffic: &[SimCar], target_lane: usize, ego_y: f32) -> bool {
    let window_top = ego_y - SAFETY_BUFFER_ABOVE;
    let window_bottom = ego_y + SAFETY_BUFFER_BELOW;

    !traffic
        .iter()
        .filter(|car| car.lane == target_lane)
        .any(|car| car.bottom() > window_top && car.y < window_bottom)
}

/// Gap to the nearest car ahead for every lane, indexed by lane
pub fn scan_lanes(traffic: &[SimCar], lanes: usize, reference_y: f32) -> Vec<Option<f32>> {
    (0..lanes)
        .map(|lane| gap_ahead(traffic, lane, reference_y))
        .collect()
}
