//! Traffic generation
//!
//! Introduces new traffic above the visible top of the world at a random lane,
//! speed and stagger.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::car::SimCar;
use super::types::{
    CarId, SPAWN_STAGGER, TRAFFIC_HEIGHT, TRAFFIC_MAX_SPEED, TRAFFIC_MIN_SPEED,
};

/// Source of new traffic vehicles
#[derive(Debug, Clone)]
pub struct TrafficSpawner {
    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl Default for TrafficSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficSpawner {
    fn new_internal(rng: Option<StdRng>) -> Self {
        Self { rng }
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a spawner with a seeded RNG for reproducible traffic
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new_with_seed(seed),
            None => Self::new(),
        }
    }

    /// Uniform lane index in `[0, lanes)`
    fn random_lane(&mut self, lanes: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..lanes),
            None => rand::rng().random_range(0..lanes),
        }
    }

    /// Uniform traffic speed, both ends inclusive
    fn random_speed(&mut self) -> f32 {
        let range = TRAFFIC_MIN_SPEED..=TRAFFIC_MAX_SPEED;
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Whole-pixel stagger above the top of the world
    fn random_stagger(&mut self) -> f32 {
        let range = 0..=SPAWN_STAGGER;
        let stagger = match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        };
        stagger as f32
    }

    /// Build a new traffic car just above the visible top of the world
    pub fn spawn(&mut self, id: CarId, lanes: usize) -> SimCar {
        let lane = self.random_lane(lanes);
        let y = -TRAFFIC_HEIGHT - self.random_stagger();
        let speed = self.random_speed();

        debug!(
            "Spawned traffic car {:?} in lane {} at y={:.1}, speed={:.2}",
            id.0, lane, y, speed
        );

        SimCar::traffic(id, lane, y, speed)
    }
}
