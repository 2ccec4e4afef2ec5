//! Manual driving commands delivered by the presentation layer

use super::car::SimCar;
use super::types::{CRAWL_SPEED, MAX_SPEED, SPEED_STEP};

/// A discrete command from the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ToggleAutopilot,
    ChangeLaneLeft,
    ChangeLaneRight,
    IncreaseSpeed,
    DecreaseSpeed,
}

impl InputEvent {
    /// Apply a manual lane or speed command to the ego.
    ///
    /// These apply regardless of autopilot state. Returns false for commands
    /// that do not touch the car.
    pub fn apply_to(&self, ego: &mut SimCar, lanes: usize) -> bool {
        match self {
            InputEvent::ToggleAutopilot => return false,
            InputEvent::ChangeLaneLeft => ego.lane = ego.lane.saturating_sub(1),
            InputEvent::ChangeLaneRight => ego.lane = (ego.lane + 1).min(lanes - 1),
            InputEvent::IncreaseSpeed => ego.speed = (ego.speed + SPEED_STEP).min(MAX_SPEED),
            InputEvent::DecreaseSpeed => ego.speed = (ego.speed - SPEED_STEP).max(CRAWL_SPEED),
        }
        true
    }
}
