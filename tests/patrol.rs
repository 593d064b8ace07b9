//! Patrol Route Integration Tests
//!
//! Runs full patrol routes through the app wiring (simulated chassis, turn
//! controller, direction reporter) and checks the exact token stream the
//! observer would receive. The token order is the contract: the observer is
//! stateful and draws the path from the stream as it arrives.
//!
//! Run with: `cargo test --test patrol`

use disha_nav::app::NavApp;
use disha_nav::config::{AppConfig, PatrolStep};
use disha_nav::link::MockLink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn test_config(route: Vec<PatrolStep>) -> AppConfig {
    let mut config = AppConfig::sim_defaults();
    config.patrol.route = route;
    // No observer on the other end, no need to pace the re-emission.
    config.reporting.poi_redraw_delay_ms = 0;
    config
}

fn run_route(route: Vec<PatrolStep>) -> Vec<String> {
    let link = MockLink::new();
    let shutdown = Arc::new(AtomicBool::new(false));
    let app = NavApp::new(test_config(route), shutdown);
    app.execute_route(link.clone()).unwrap();
    link.lines()
}

#[test]
fn square_patrol_emits_the_expected_stream() {
    let lines = run_route(vec![
        PatrolStep::Advance,
        PatrolStep::TurnRight,
        PatrolStep::Advance,
        PatrolStep::Mark,
        PatrolStep::TurnRight,
        PatrolStep::Advance,
        PatrolStep::TurnRight,
        PatrolStep::Advance,
        PatrolStep::Halt,
    ]);

    assert_eq!(
        lines,
        vec!["u", "r", "r", "p", "r", "d", "d", "l", "l", "s"]
    );
}

#[test]
fn left_turn_reports_three_clockwise_quarter_turns() {
    let lines = run_route(vec![PatrolStep::TurnLeft, PatrolStep::Halt]);

    assert_eq!(lines, vec!["l", "s"]);
}

#[test]
fn fourth_right_turn_wraps_to_down() {
    let lines = run_route(vec![
        PatrolStep::TurnRight,
        PatrolStep::TurnRight,
        PatrolStep::TurnRight,
        PatrolStep::TurnRight,
        PatrolStep::Halt,
    ]);

    // The accumulator wrap resolves the fourth turn to "down", not "up";
    // the observer depends on the historical rule.
    assert_eq!(lines, vec!["r", "d", "l", "d", "s"]);
}

#[test]
fn route_ends_at_the_first_halt() {
    let lines = run_route(vec![
        PatrolStep::Halt,
        PatrolStep::Advance,
        PatrolStep::Advance,
    ]);

    assert_eq!(lines, vec!["s"]);
}

#[test]
fn shutdown_request_halts_the_patrol() {
    let link = MockLink::new();
    let shutdown = Arc::new(AtomicBool::new(false));
    shutdown.store(true, Ordering::Relaxed);

    let app = NavApp::new(
        test_config(vec![PatrolStep::Advance, PatrolStep::Advance]),
        shutdown,
    );
    app.execute_route(link.clone()).unwrap();

    // The shutdown check runs before the first step; the observer still
    // gets told the robot stopped.
    assert_eq!(link.lines(), vec!["s"]);
}

#[test]
fn zero_drive_speed_times_out_the_first_turn() {
    let mut config = test_config(vec![PatrolStep::TurnRight, PatrolStep::Halt]);
    config.robot.set_multiplier(0);
    config.turn.max_polls = 100;

    let link = MockLink::new();
    let shutdown = Arc::new(AtomicBool::new(false));
    let app = NavApp::new(config, shutdown);

    let err = app.execute_route(link.clone()).unwrap_err();
    assert!(matches!(
        err,
        disha_nav::error::Error::TurnTimeout { target: -90, .. }
    ));

    // The aborted route emits nothing; the turn never completed.
    assert!(link.lines().is_empty());
}
