//! Rule-based controller scenarios

use autopilot_sim::simulation::{
    decide, Action, CarId, SimCar, SimId, MAX_SPEED, MIN_SPEED, SAFE_DISTANCE,
};

const EGO_Y: f32 = 450.0;

fn ego_in(lane: usize) -> SimCar {
    SimCar::ego(CarId(SimId(0)), lane, EGO_Y, 6.0)
}

fn car(id: usize, lane: usize, y: f32, speed: f32) -> SimCar {
    SimCar::traffic(CarId(SimId(id)), lane, y, speed)
}

/// Car in `lane` whose rear edge is `gap` ahead of the ego
fn blocker(id: usize, lane: usize, gap: f32, speed: f32) -> SimCar {
    let mut vehicle = car(id, lane, 0.0, speed);
    vehicle.y = EGO_Y - gap - vehicle.height;
    vehicle
}

#[test]
fn test_open_road_cruises_at_max_speed() {
    let decision = decide(&ego_in(1), &[], 3);
    assert_eq!(decision.action, Action::Keep);
    assert_eq!(decision.target_speed, MAX_SPEED);
}

#[test]
fn test_distant_car_is_ignored() {
    let traffic = vec![blocker(1, 1, SAFE_DISTANCE, 3.0)];

    let decision = decide(&ego_in(1), &traffic, 3);
    assert_eq!(decision.action, Action::Keep);
    assert_eq!(decision.target_speed, MAX_SPEED);
}

#[test]
fn test_blocked_prefers_left() {
    let traffic = vec![blocker(1, 1, 50.0, 4.0)];

    let decision = decide(&ego_in(1), &traffic, 3);
    assert_eq!(decision.action, Action::ChangeLeft);
    assert_eq!(decision.target_speed, 3.5);
}

#[test]
fn test_blocked_goes_right_when_left_unsafe() {
    let traffic = vec![blocker(1, 1, 50.0, 4.0), car(2, 0, EGO_Y, 4.0)];

    let decision = decide(&ego_in(1), &traffic, 3);
    assert_eq!(decision.action, Action::ChangeRight);
    assert_eq!(decision.target_speed, 3.5);
}

#[test]
fn test_blocked_with_no_safe_lane_slows_down() {
    let traffic = vec![
        blocker(1, 1, 50.0, 4.0),
        car(2, 0, EGO_Y, 4.0),
        car(3, 2, EGO_Y + 30.0, 4.0),
    ];

    let decision = decide(&ego_in(1), &traffic, 3);
    assert_eq!(decision.action, Action::Keep);
    assert!(decision.target_speed < 4.0);
}

#[test]
fn test_leftmost_lane_passes_on_the_right() {
    let traffic = vec![blocker(1, 0, 50.0, 4.0)];

    let decision = decide(&ego_in(0), &traffic, 3);
    assert_eq!(decision.action, Action::ChangeRight);
}

#[test]
fn test_rightmost_lane_with_unsafe_left_keeps_lane() {
    let traffic = vec![blocker(1, 2, 50.0, 4.0), car(2, 1, EGO_Y - 20.0, 4.0)];

    let decision = decide(&ego_in(2), &traffic, 3);
    assert_eq!(decision.action, Action::Keep);
}

#[test]
fn test_single_lane_road_never_changes_lane() {
    let traffic = vec![blocker(1, 0, 10.0, 5.0)];

    let decision = decide(&ego_in(0), &traffic, 1);
    assert_eq!(decision.action, Action::Keep);
    assert_eq!(decision.target_speed, 4.5);
}

#[test]
fn test_target_speed_is_floored() {
    let traffic = vec![blocker(1, 1, 30.0, 2.2)];

    let decision = decide(&ego_in(1), &traffic, 3);
    assert_eq!(decision.target_speed, MIN_SPEED);
}

#[test]
fn test_action_target_lane() {
    assert_eq!(Action::Keep.target_lane(1, 3), Some(1));
    assert_eq!(Action::ChangeLeft.target_lane(1, 3), Some(0));
    assert_eq!(Action::ChangeLeft.target_lane(0, 3), None);
    assert_eq!(Action::ChangeRight.target_lane(1, 3), Some(2));
    assert_eq!(Action::ChangeRight.target_lane(2, 3), None);
}
