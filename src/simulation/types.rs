//! Core types and constants for the highway simulation
//!
//! Positions are in pixels, speeds in pixels per tick. Decreasing `y` is
//! "forward" on the road.

use anyhow::{ensure, Result};

/// A unique identifier for simulation entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimId(pub usize);

/// A wrapper type for car IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarId(pub SimId);

/// Width of the simulated world
pub const WORLD_WIDTH: f32 = 900.0;

/// Height of the simulated world
pub const WORLD_HEIGHT: f32 = 600.0;

/// Number of parallel lanes on the road
pub const LANES: usize = 3;

/// Width of a single lane
pub const LANE_WIDTH: f32 = 120.0;

/// Lane the ego vehicle starts (and restarts) in
pub const EGO_START_LANE: usize = 1;

/// Distance of the ego start position from the bottom of the world
pub const EGO_START_OFFSET: f32 = 150.0;

/// Ego speed at simulation start
pub const EGO_START_SPEED: f32 = 6.0;

/// Ego speed after collision recovery
pub const EGO_RESET_SPEED: f32 = 4.5;

pub const EGO_WIDTH: f32 = 40.0;
pub const EGO_HEIGHT: f32 = 70.0;
pub const TRAFFIC_WIDTH: f32 = 40.0;
pub const TRAFFIC_HEIGHT: f32 = 70.0;

/// Seconds of accumulated tick time between traffic spawns
pub const SPAWN_INTERVAL: f32 = 1.2;

/// Speed range of spawned traffic (inclusive)
pub const TRAFFIC_MIN_SPEED: f32 = 2.5;
pub const TRAFFIC_MAX_SPEED: f32 = 6.5;

/// Maximum extra distance above the world top a car may spawn at
pub const SPAWN_STAGGER: u32 = 200;

/// Gap below which the controller reacts to the car ahead
pub const SAFE_DISTANCE: f32 = 120.0;

/// Autopilot speed bounds
pub const MAX_SPEED: f32 = 8.0;
pub const MIN_SPEED: f32 = 2.0;

/// Lowest speed the ego can be driven at, manually or by smoothing
pub const CRAWL_SPEED: f32 = 0.5;

/// Speed change applied per manual speed command
pub const SPEED_STEP: f32 = 0.5;

/// How far below the blocking car's speed the controller aims
pub const FOLLOW_SPEED_MARGIN: f32 = 0.5;

/// Per-tick exponential smoothing factor towards the target speed
pub const SPEED_SMOOTHING: f32 = 0.08;

/// Traffic further than this below the world bottom is removed
pub const CULL_MARGIN: f32 = 200.0;

/// Safety window around the ego used for lane-change checks
pub const SAFETY_BUFFER_ABOVE: f32 = 40.0;
pub const SAFETY_BUFFER_BELOW: f32 = 80.0;

/// Axis-aligned bounding box of a vehicle footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge (rear of a vehicle, since forward is decreasing y)
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Horizontal layout of the road inside the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadLayout {
    pub lanes: usize,
    pub lane_width: f32,
    /// Left edge of the leftmost lane
    pub road_x: f32,
}

impl RoadLayout {
    pub fn new(world_width: f32, lanes: usize, lane_width: f32) -> Self {
        // Whole pixels, so the road sits on the same grid as the lane markings
        let road_x = (world_width / 2.0).floor() - (lane_width * lanes as f32 / 2.0).floor();
        Self {
            lanes,
            lane_width,
            road_x,
        }
    }

    /// X position of a footprint of the given width centered in `lane`
    pub fn lane_center_x(&self, lane: usize, width: f32) -> f32 {
        self.road_x + lane as f32 * self.lane_width + (self.lane_width - width) / 2.0
    }

    pub fn contains_lane(&self, lane: usize) -> bool {
        lane < self.lanes
    }

    pub fn road_width(&self) -> f32 {
        self.lane_width * self.lanes as f32
    }
}

/// Construction-time settings for a simulation world
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub lanes: usize,
    pub lane_width: f32,
    /// Seed for reproducible traffic; `None` draws from the thread RNG
    pub seed: Option<u64>,
    /// Whether the controller drives the ego from the first tick
    pub autopilot: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            lanes: LANES,
            lane_width: LANE_WIDTH,
            seed: None,
            autopilot: true,
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reject layouts the simulation cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.lanes > 0, "road must have at least one lane");
        ensure!(
            self.lane_width >= EGO_WIDTH.max(TRAFFIC_WIDTH),
            "lane width {} is narrower than a car",
            self.lane_width
        );
        ensure!(
            self.lane_width * self.lanes as f32 <= self.world_width,
            "road ({} lanes of {}) does not fit in a world {} wide",
            self.lanes,
            self.lane_width,
            self.world_width
        );
        ensure!(
            self.world_height > EGO_START_OFFSET,
            "world height {} leaves no room for the ego start position",
            self.world_height
        );
        Ok(())
    }

    pub fn layout(&self) -> RoadLayout {
        RoadLayout::new(self.world_width, self.lanes, self.lane_width)
    }

    /// Start lane, pulled in to the rightmost lane on narrow roads
    pub fn ego_start_lane(&self) -> usize {
        EGO_START_LANE.min(self.lanes.saturating_sub(1))
    }

    pub fn ego_start_y(&self) -> f32 {
        self.world_height - EGO_START_OFFSET
    }

    /// Vertical line the camera keeps the ego below
    pub fn midpoint(&self) -> f32 {
        (self.world_height / 2.0).floor()
    }

    /// Traffic at or beyond this position is removed
    pub fn cull_limit(&self) -> f32 {
        self.world_height + CULL_MARGIN
    }
}
