//! Vehicle model for the highway simulation
//!
//! A car only stores its lane; the horizontal position is always derived from
//! the road layout so the two can never disagree.

use super::types::{
    CarId, Rect, RoadLayout, EGO_HEIGHT, EGO_WIDTH, TRAFFIC_HEIGHT, TRAFFIC_WIDTH,
};

/// A car on the road, either the ego vehicle or a piece of traffic
#[derive(Debug, Clone, PartialEq)]
pub struct SimCar {
    pub id: CarId,
    /// Lane index, always within the road's lane count
    pub lane: usize,
    /// Longitudinal position of the front edge; decreasing is forward
    pub y: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub is_ego: bool,
}

impl SimCar {
    pub fn new(
        id: CarId,
        lane: usize,
        y: f32,
        speed: f32,
        width: f32,
        height: f32,
        is_ego: bool,
    ) -> Self {
        Self {
            id,
            lane,
            y,
            speed,
            width,
            height,
            is_ego,
        }
    }

    /// Create the ego vehicle with its fixed footprint
    pub fn ego(id: CarId, lane: usize, y: f32, speed: f32) -> Self {
        Self::new(id, lane, y, speed, EGO_WIDTH, EGO_HEIGHT, true)
    }

    /// Create a traffic vehicle with its fixed footprint
    pub fn traffic(id: CarId, lane: usize, y: f32, speed: f32) -> Self {
        Self::new(id, lane, y, speed, TRAFFIC_WIDTH, TRAFFIC_HEIGHT, false)
    }

    /// World x position derived from the lane
    pub fn x(&self, layout: &RoadLayout) -> f32 {
        layout.lane_center_x(self.lane, self.width)
    }

    /// Rear edge of the car
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn rect(&self, layout: &RoadLayout) -> Rect {
        Rect::new(self.x(layout), self.y, self.width, self.height)
    }

    /// Traffic drives down the screen at its own speed
    pub fn drift(&mut self) {
        self.y += self.speed;
    }

    /// The ego drives "forward", towards the top of the world
    pub fn advance(&mut self) {
        self.y -= self.speed;
    }
}
