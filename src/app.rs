//! Daemon orchestration
//!
//! Wires the observer link, the simulated chassis, the turn controller and
//! the direction reporter, then walks the configured patrol route step by
//! step until the route ends or shutdown is requested.

use crate::config::{AppConfig, PatrolStep};
use crate::core::clock::MonotonicClock;
use crate::devices::mock::SimChassis;
use crate::error::Result;
use crate::link::{create_link, ObserverLink};
use crate::motion::{TurnController, TurnRequest, TurnStrategy};
use crate::reporting::DirectionReporter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Main application structure
pub struct NavApp {
    config: AppConfig,
    shutdown: Arc<AtomicBool>,
}

impl NavApp {
    /// Create a new app over a loaded configuration.
    pub fn new(config: AppConfig, shutdown: Arc<AtomicBool>) -> Self {
        Self { config, shutdown }
    }

    /// Build the configured link and run the patrol route over it.
    pub fn run(&self) -> Result<()> {
        let link = create_link(&self.config.link)?;
        self.execute_route(link)
    }

    /// Walk the patrol route, turning and reporting over the given link.
    ///
    /// A turn timeout aborts the route; the error carries the heading the
    /// chassis was left at. Retries are left to the operator.
    pub fn execute_route<L: ObserverLink>(&self, link: L) -> Result<()> {
        let chassis = SimChassis::new(self.config.robot.sim_degrees_per_poll);
        let controller = TurnController::new(MonotonicClock::new(), self.config.turn.budget());
        let mut reporter = DirectionReporter::new(link, self.config.reporting.poi_redraw_delay());
        let mut motor = chassis.motor_handle();
        let mut sensor = chassis.heading_handle();

        let speed = self.config.robot.drive_speed();
        let quarter = self.config.robot.quarter_turn_degrees;
        let route = &self.config.patrol.route;

        log::info!(
            "NavApp: starting patrol, {} steps, drive speed {}",
            route.len(),
            speed
        );

        for (index, step) in route.iter().enumerate() {
            if self.shutdown.load(Ordering::Relaxed) {
                log::info!("NavApp: shutdown requested, halting patrol");
                reporter.stop(false)?;
                return Ok(());
            }

            log::debug!("NavApp: step {} of {}: {:?}", index + 1, route.len(), step);

            match step {
                PatrolStep::Advance => {
                    reporter.report(0)?;
                }
                PatrolStep::TurnRight => {
                    let request = TurnRequest {
                        target_angle: -quarter,
                        left_speed: speed,
                        right_speed: 0,
                        strategy: TurnStrategy::UntilHeadingAtMost,
                    };
                    controller.turn(&mut motor, &mut sensor, request)?;
                    reporter.report(1)?;
                }
                PatrolStep::TurnLeft => {
                    let request = TurnRequest {
                        target_angle: quarter,
                        left_speed: 0,
                        right_speed: speed,
                        strategy: TurnStrategy::UntilHeadingAtLeast,
                    };
                    controller.turn(&mut motor, &mut sensor, request)?;
                    // The protocol delta is an unsigned clockwise quarter-turn
                    // count, so one counter-clockwise turn is three clockwise
                    // ones.
                    reporter.report(3)?;
                }
                PatrolStep::Mark => {
                    reporter.stop(true)?;
                }
                PatrolStep::Halt => {
                    reporter.stop(false)?;
                    break;
                }
            }
        }

        log::info!("NavApp: patrol finished");
        Ok(())
    }
}
