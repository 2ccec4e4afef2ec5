//! Autopilot Traffic Simulation Library
//!
//! A discrete-time highway simulation with a rule-based lane-keeping and
//! lane-change controller driving a single ego vehicle.

pub mod simulation;
