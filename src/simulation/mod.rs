//! Standalone highway simulation module
//!
//! This module contains the simulation and decision-making core. It performs
//! no rendering, timing or input handling of its own; a driver calls
//! `SimWorld::tick` once per frame and reads the state back for display.

mod car;
mod collision;
mod controller;
mod input;
mod score;
mod sensors;
mod spawner;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use car::SimCar;
#[allow(unused_imports)]
pub use collision::{check_collision, reset_ego, CollisionEvent};
#[allow(unused_imports)]
pub use controller::{decide, Action, Decision};
#[allow(unused_imports)]
pub use input::InputEvent;
#[allow(unused_imports)]
pub use score::Score;
#[allow(unused_imports)]
pub use sensors::{gap_ahead, is_lane_safe, nearest_ahead, scan_lanes};
#[allow(unused_imports)]
pub use spawner::TrafficSpawner;
#[allow(unused_imports)]
pub use types::{
    CarId, Rect, RoadLayout, SimConfig, SimId, CRAWL_SPEED, CULL_MARGIN, EGO_HEIGHT,
    EGO_RESET_SPEED, EGO_START_LANE, EGO_START_OFFSET, EGO_START_SPEED, EGO_WIDTH,
    FOLLOW_SPEED_MARGIN, LANES, LANE_WIDTH, MAX_SPEED, MIN_SPEED, SAFETY_BUFFER_ABOVE,
    SAFETY_BUFFER_BELOW, SAFE_DISTANCE, SPAWN_INTERVAL, SPAWN_STAGGER, SPEED_SMOOTHING,
    SPEED_STEP, TRAFFIC_HEIGHT, TRAFFIC_MAX_SPEED, TRAFFIC_MIN_SPEED, TRAFFIC_WIDTH,
    WORLD_HEIGHT, WORLD_WIDTH,
};
pub use world::{SimWorld, TickReport};
