//! Running counters for a simulation session

/// Collision and progress counters
#[derive(Debug, Clone, Default)]
pub struct Score {
    /// Collisions so far; never decreases
    pub collisions: usize,

    /// Ticks processed
    pub frames: u64,

    /// Simulated time in seconds
    pub time: f32,

    /// Traffic cars spawned over the whole session
    pub traffic_spawned: usize,

    /// Lane changes committed by the autopilot
    pub autopilot_lane_changes: usize,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick of `delta_secs`
    pub fn record_frame(&mut self, delta_secs: f32) {
        self.frames += 1;
        self.time += delta_secs;
    }

    pub fn record_collision(&mut self) {
        self.collisions += 1;
    }

    /// Collisions per simulated minute
    pub fn collision_rate(&self) -> f32 {
        if self.time > 0.0 {
            self.collisions as f32 / self.time * 60.0
        } else {
            0.0
        }
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Frames: {} | Time: {:.1}s | Collisions: {} | Spawned: {} | Lane changes: {}",
            self.frames,
            self.time,
            self.collisions,
            self.traffic_spawned,
            self.autopilot_lane_changes
        )
    }
}
