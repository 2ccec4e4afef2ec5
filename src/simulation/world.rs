//! Main simulation world that ties everything together
//!
//! `SimWorld` owns the ego vehicle, the traffic set and the session counters,
//! and is the only thing that mutates them. The presentation layer calls
//! `tick` once per frame and reads the results back through the accessors.

use anyhow::{bail, Context, Result};
use log::{debug, info};

use super::car::SimCar;
use super::collision::{check_collision, reset_ego, CollisionEvent};
use super::controller::{decide, Action, Decision};
use super::input::InputEvent;
use super::score::Score;
use super::sensors::{is_lane_safe, scan_lanes};
use super::spawner::TrafficSpawner;
use super::types::{
    CarId, RoadLayout, SimConfig, SimId, CRAWL_SPEED, EGO_START_SPEED, MAX_SPEED,
    SPAWN_INTERVAL, SPEED_SMOOTHING,
};

/// Pixels of world height per row of the terminal road view
const VIEW_ROW_PX: f32 = 20.0;

/// Characters per lane in the terminal road view
const VIEW_LANE_CHARS: usize = 5;

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Controller output, when the autopilot was engaged
    pub decision: Option<Decision>,
    /// Autopilot lane change committed this tick, as (from, to)
    pub lane_change: Option<(usize, usize)>,
    /// Traffic car introduced this tick
    pub spawned: Option<CarId>,
    /// Collision detected (and recovered from) this tick
    pub collision: Option<CollisionEvent>,
}

/// The main simulation world
#[derive(Debug, Clone)]
pub struct SimWorld {
    config: SimConfig,

    layout: RoadLayout,

    /// The single controlled vehicle
    ego: SimCar,

    /// All other cars; never contains the ego
    traffic: Vec<SimCar>,

    autopilot: bool,

    score: Score,

    /// Seconds accumulated since the last spawn
    time_since_spawn: f32,

    spawner: TrafficSpawner,

    /// Next ID to assign
    next_id: usize,
}

impl SimWorld {
    /// Create a world from a validated configuration
    pub fn with_config(config: SimConfig) -> Result<Self> {
        config.validate().context("Invalid simulation configuration")?;

        let layout = config.layout();
        let spawner = TrafficSpawner::from_seed(config.seed);
        let ego = SimCar::ego(
            CarId(SimId(0)),
            config.ego_start_lane(),
            config.ego_start_y(),
            EGO_START_SPEED,
        );

        Ok(Self {
            autopilot: config.autopilot,
            config,
            layout,
            ego,
            traffic: Vec::new(),
            score: Score::new(),
            time_since_spawn: 0.0,
            spawner,
            next_id: 1,
        })
    }

    /// Create a world with default geometry and thread-local randomness
    pub fn new() -> Result<Self> {
        Self::with_config(SimConfig::default())
    }

    /// Create a world with default geometry and a seeded RNG
    pub fn new_with_seed(seed: u64) -> Result<Self> {
        Self::with_config(SimConfig::with_seed(seed))
    }

    fn next_car_id(&mut self) -> CarId {
        let id = CarId(SimId(self.next_id));
        self.next_id += 1;
        id
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn layout(&self) -> &RoadLayout {
        &self.layout
    }

    pub fn ego(&self) -> &SimCar {
        &self.ego
    }

    pub fn traffic(&self) -> &[SimCar] {
        &self.traffic
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn time_since_spawn(&self) -> f32 {
        self.time_since_spawn
    }

    /// Place a traffic car directly, bypassing the spawner
    pub fn add_traffic(&mut self, lane: usize, y: f32, speed: f32) -> Result<CarId> {
        if !self.layout.contains_lane(lane) {
            bail!(
                "Lane {} does not exist on a {}-lane road",
                lane,
                self.layout.lanes
            );
        }

        let id = self.next_car_id();
        self.traffic.push(SimCar::traffic(id, lane, y, speed));
        Ok(id)
    }

    /// Gap to the nearest car ahead of the ego in every lane
    pub fn lane_sensors(&self) -> Vec<Option<f32>> {
        scan_lanes(&self.traffic, self.layout.lanes, self.ego.y)
    }

    /// Apply manual commands; lane and speed commands act even under autopilot
    fn apply_inputs(&mut self, inputs: &[InputEvent]) {
        for input in inputs {
            match input {
                InputEvent::ToggleAutopilot => {
                    self.autopilot = !self.autopilot;
                    info!(
                        "Autopilot {}",
                        if self.autopilot { "engaged" } else { "disengaged" }
                    );
                }
                manual => {
                    manual.apply_to(&mut self.ego, self.layout.lanes);
                }
            }
        }
    }

    fn update_spawner(&mut self, delta_secs: f32) -> Option<CarId> {
        self.time_since_spawn += delta_secs;
        if self.time_since_spawn < SPAWN_INTERVAL {
            return None;
        }

        self.time_since_spawn = 0.0;
        let id = self.next_car_id();
        let car = self.spawner.spawn(id, self.layout.lanes);
        self.traffic.push(car);
        self.score.traffic_spawned += 1;
        Some(id)
    }

    /// Move traffic down the road and drop what has left the world
    fn update_traffic(&mut self) {
        for car in &mut self.traffic {
            car.drift();
        }

        let limit = self.config.cull_limit();
        self.traffic.retain(|car| car.y < limit);
    }

    /// Let the controller steer the ego; returns the decision and any lane change
    fn update_autopilot(&mut self) -> (Decision, Option<(usize, usize)>) {
        let decision = decide(&self.ego, &self.traffic, self.layout.lanes);

        // The lane is checked again before committing, even though the
        // controller only proposes safe lanes.
        let mut lane_change = None;
        if decision.action != Action::Keep {
            if let Some(lane) = decision.action.target_lane(self.ego.lane, self.layout.lanes) {
                if is_lane_safe(&self.traffic, lane, self.ego.y) {
                    debug!(
                        "Autopilot lane change {} -> {} ({:?})",
                        self.ego.lane, lane, decision.action
                    );
                    lane_change = Some((self.ego.lane, lane));
                    self.ego.lane = lane;
                    self.score.autopilot_lane_changes += 1;
                }
            }
        }

        let speed = self.ego.speed + (decision.target_speed - self.ego.speed) * SPEED_SMOOTHING;
        self.ego.speed = speed.clamp(CRAWL_SPEED, MAX_SPEED);

        (decision, lane_change)
    }

    /// Keep the ego below the midpoint by scrolling the whole world down
    fn follow_ego(&mut self) {
        let midpoint = self.config.midpoint();
        if self.ego.y < midpoint {
            let shift = midpoint - self.ego.y;
            self.ego.y += shift;
            for car in &mut self.traffic {
                car.y += shift;
            }
        }
    }

    fn resolve_collisions(&mut self) -> Option<CollisionEvent> {
        let event = check_collision(&self.ego, &self.traffic, &self.layout)?;

        self.score.record_collision();
        info!(
            "Collision #{} with car {:?} in lane {}, resetting",
            self.score.collisions, event.other.0, self.ego.lane
        );

        self.ego = reset_ego(&self.ego, &self.config);
        self.traffic.clear();
        Some(event)
    }

    /// Main simulation tick
    pub fn tick(&mut self, delta_secs: f32, inputs: &[InputEvent]) -> TickReport {
        let mut report = TickReport::default();

        self.score.record_frame(delta_secs);
        self.apply_inputs(inputs);

        report.spawned = self.update_spawner(delta_secs);
        self.update_traffic();

        if self.autopilot {
            let (decision, lane_change) = self.update_autopilot();
            report.decision = Some(decision);
            report.lane_change = lane_change;
        }

        self.ego.advance();
        self.follow_ego();

        report.collision = self.resolve_collisions();
        report
    }

    /// One-line status for a heads-up display
    pub fn hud_line(&self) -> String {
        format!(
            "Autopilot: {}  Lane: {}  Speed: {:.1}  Collisions: {}",
            if self.autopilot { "ON" } else { "OFF" },
            self.ego.lane,
            self.ego.speed,
            self.score.collisions
        )
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Autopilot Simulation Summary ===");
        println!("{}", self.hud_line());
        println!("{}", self.score.summary());
        println!("Traffic: {}", self.traffic.len());

        println!("--- Sensors ---");
        for (lane, gap) in self.lane_sensors().iter().enumerate() {
            match gap {
                Some(gap) => println!("  Lane {}: car ahead at {:.0}px", lane, gap),
                None => println!("  Lane {}: clear", lane),
            }
        }

        if !self.traffic.is_empty() {
            println!("--- Traffic ---");
            for car in &self.traffic {
                println!(
                    "  Car {:?}: lane={}, y={:.1}, speed={:.1}",
                    car.id.0, car.lane, car.y, car.speed
                );
            }
        }
    }

    /// Render the visible road as text: `E` is the ego, `T` traffic
    pub fn road_view(&self) -> String {
        let rows = (self.config.world_height / VIEW_ROW_PX).ceil() as usize;
        let lanes = self.layout.lanes;
        let mut grid = vec![vec![' '; lanes]; rows];

        let mut mark = |car: &SimCar, symbol: char| {
            let top = (car.y / VIEW_ROW_PX).floor();
            let bottom = (car.bottom() / VIEW_ROW_PX).ceil();
            if bottom <= 0.0 {
                return;
            }
            let first = top.max(0.0) as usize;
            let last = (bottom as usize).min(rows);
            for row in grid.iter_mut().take(last).skip(first) {
                row[car.lane] = symbol;
            }
        };

        for car in &self.traffic {
            mark(car, 'T');
        }
        mark(&self.ego, 'E');

        let mut view = String::new();
        for row in &grid {
            view.push('|');
            for (lane, cell) in row.iter().enumerate() {
                let pad = VIEW_LANE_CHARS / 2;
                view.push_str(&" ".repeat(pad));
                view.push(*cell);
                view.push_str(&" ".repeat(VIEW_LANE_CHARS - pad - 1));
                view.push(if lane + 1 == lanes { '|' } else { ':' });
            }
            view.push('\n');
        }
        view
    }

    /// Draw the road view in the terminal
    pub fn draw_road(&self) {
        println!("\n=== Road ===");
        println!("Legend: E=Ego, T=Traffic");
        println!();
        print!("{}", self.road_view());
        println!();
    }
}
