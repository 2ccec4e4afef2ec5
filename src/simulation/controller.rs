//! Rule-based autopilot
//!
//! Keeps the current lane at full speed until a car ahead gets within
//! `SAFE_DISTANCE`, then slows to just under that car's speed and looks for a
//! safe lane to pass in, trying left before right.

use log::trace;

use super::car::SimCar;
use super::sensors::{is_lane_safe, nearest_ahead};
use super::types::{FOLLOW_SPEED_MARGIN, MAX_SPEED, MIN_SPEED, SAFE_DISTANCE};

/// Discrete steering action chosen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Keep,
    ChangeLeft,
    ChangeRight,
}

impl Action {
    /// Lane this action leads to, if it exists on a road with `lanes` lanes
    pub fn target_lane(&self, lane: usize, lanes: usize) -> Option<usize> {
        let target = match self {
            Action::Keep => Some(lane),
            Action::ChangeLeft => lane.checked_sub(1),
            Action::ChangeRight => lane.checked_add(1),
        }?;
        (target < lanes).then_some(target)
    }
}

/// Output of one controller evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub target_speed: f32,
}

impl Decision {
    fn cruise() -> Self {
        Self {
            action: Action::Keep,
            target_speed: MAX_SPEED,
        }
    }
}

/// Decide what the ego should do given the current traffic
pub fn decide(ego: &SimCar, traffic: &[SimCar], lanes: usize) -> Decision {
    let Some(blocker) = nearest_ahead(traffic, ego.lane, ego.y) else {
        return Decision::cruise();
    };

    let gap = ego.y - blocker.bottom();
    if gap >= SAFE_DISTANCE {
        return Decision::cruise();
    }

    let target_speed = MIN_SPEED.max(blocker.speed - FOLLOW_SPEED_MARGIN);

    for action in [Action::ChangeLeft, Action::ChangeRight] {
        if let Some(lane) = action.target_lane(ego.lane, lanes) {
            if is_lane_safe(traffic, lane, ego.y) {
                trace!(
                    "Blocked by car {:?} at gap {:.1}, passing via lane {}",
                    blocker.id.0,
                    gap,
                    lane
                );
                return Decision {
                    action,
                    target_speed,
                };
            }
        }
    }

    trace!(
        "Blocked by car {:?} at gap {:.1}, no safe lane, following at {:.2}",
        blocker.id.0,
        gap,
        target_speed
    );

    Decision {
        action: Action::Keep,
        target_speed,
    }
}
