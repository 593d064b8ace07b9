//! Closed-loop turn control
//!
//! A turn re-zeroes the heading sensor, commands the wheel speeds once, then
//! polls the sensor until the completion strategy reports the target angle
//! reached. The loop polls as fast as the sensor allows; pacing belongs to
//! the sensor's `update()`.
//!
//! A stalled sensor or a strategy that never flips would leave a bare loop
//! spinning forever, so each turn is an explicit state machine with a third
//! exit, [`TurnState::TimedOut`], driven by an injected [`Clock`] and a
//! poll/elapsed-time budget. A timed-out turn halts the motors and reports
//! the condition to the caller; turning again has physical side effects, so
//! retries are never automatic.

use crate::core::clock::Clock;
use crate::drivers::{HeadingSensor, MotorDriver};
use crate::error::{Error, Result};
use std::time::Duration;

/// Completion strategy for a commanded turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStrategy {
    /// Keep turning while the heading is at or below the target. Used for
    /// left turns, where the heading climbs toward a positive target.
    UntilHeadingAtLeast,

    /// Keep turning while the heading is at or above the target. Used for
    /// right turns, where the heading falls toward a negative target.
    UntilHeadingAtMost,
}

impl TurnStrategy {
    /// True while the turn should continue.
    ///
    /// Equality keeps turning on both variants: the turn completes on the
    /// first sample strictly past the target.
    pub fn keep_turning(self, current: i64, target: i64) -> bool {
        match self {
            TurnStrategy::UntilHeadingAtLeast => current <= target,
            TurnStrategy::UntilHeadingAtMost => current >= target,
        }
    }
}

/// One commanded turn.
///
/// The sign of `target_angle` follows the strategy by convention: positive
/// with [`TurnStrategy::UntilHeadingAtLeast`], negative with
/// [`TurnStrategy::UntilHeadingAtMost`].
#[derive(Debug, Clone)]
pub struct TurnRequest {
    /// Target heading in degrees relative to the reset point.
    pub target_angle: i64,
    /// Left wheel speed for the duration of the turn.
    pub left_speed: u16,
    /// Right wheel speed for the duration of the turn.
    pub right_speed: u16,
    /// Completion strategy.
    pub strategy: TurnStrategy,
}

/// Turn progress states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Motors commanded, target not yet reached.
    Turning,
    /// Target reached, motors halted.
    Completed,
    /// Budget exhausted before the target, motors halted.
    TimedOut,
}

/// Poll-count and elapsed-time bounds for a single turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnBudget {
    /// Maximum wall time before the turn is abandoned.
    pub max_duration: Duration,
    /// Maximum sensor polls before the turn is abandoned.
    pub max_polls: u64,
}

impl TurnBudget {
    /// True once either bound is reached.
    pub fn exhausted(&self, elapsed: Duration, polls: u64) -> bool {
        elapsed >= self.max_duration || polls >= self.max_polls
    }
}

impl Default for TurnBudget {
    fn default() -> Self {
        // Generous enough that only a stalled sensor or a mismatched
        // strategy trips it, never a slow physical turn.
        Self {
            max_duration: Duration::from_secs(10),
            max_polls: 1_000_000,
        }
    }
}

/// Summary of a completed turn.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// Heading when the strategy flipped.
    pub final_heading: i64,
    /// Sensor polls consumed.
    pub polls: u64,
    /// Wall time consumed.
    pub elapsed: Duration,
}

/// Closed-loop turn executor.
pub struct TurnController<C: Clock> {
    clock: C,
    budget: TurnBudget,
}

impl<C: Clock> TurnController<C> {
    /// Create a controller with the given clock and per-turn budget.
    pub fn new(clock: C, budget: TurnBudget) -> Self {
        Self { clock, budget }
    }

    /// Start a turn: re-zero the heading sensor and command the wheels.
    ///
    /// The returned [`ActiveTurn`] must be polled to drive the turn; the
    /// wheels stay commanded until a poll reaches a terminal state.
    pub fn begin(
        &self,
        motor: &mut dyn MotorDriver,
        sensor: &mut dyn HeadingSensor,
        request: TurnRequest,
    ) -> Result<ActiveTurn<'_, C>> {
        sensor.reset()?;
        motor.set_speeds(request.left_speed, request.right_speed)?;

        log::debug!(
            "TurnController: turn started, target {}°, speeds ({}, {}), {:?}",
            request.target_angle,
            request.left_speed,
            request.right_speed,
            request.strategy
        );

        Ok(ActiveTurn {
            request,
            clock: &self.clock,
            budget: self.budget,
            started_ms: self.clock.now_ms(),
            polls: 0,
            state: TurnState::Turning,
        })
    }

    /// Execute a turn to completion.
    ///
    /// Blocks until the strategy flips or the budget runs out. In both cases
    /// the motors are halted before this returns; a timeout surfaces as
    /// [`Error::TurnTimeout`].
    pub fn turn(
        &self,
        motor: &mut dyn MotorDriver,
        sensor: &mut dyn HeadingSensor,
        request: TurnRequest,
    ) -> Result<TurnReport> {
        let target = request.target_angle;
        let mut active = self.begin(motor, sensor, request)?;

        loop {
            match active.poll(motor, sensor)? {
                TurnState::Turning => continue,
                TurnState::Completed => {
                    let report = TurnReport {
                        final_heading: sensor.heading(),
                        polls: active.polls(),
                        elapsed: active.elapsed(),
                    };
                    log::info!(
                        "TurnController: turn complete at {}° after {} polls in {:?}",
                        report.final_heading,
                        report.polls,
                        report.elapsed
                    );
                    return Ok(report);
                }
                TurnState::TimedOut => {
                    let heading = sensor.heading();
                    let elapsed_ms = active.elapsed().as_millis() as u64;
                    log::warn!(
                        "TurnController: turn abandoned at {}° after {} polls, target {}°",
                        heading,
                        active.polls(),
                        target
                    );
                    return Err(Error::TurnTimeout {
                        target,
                        heading,
                        elapsed_ms,
                    });
                }
            }
        }
    }
}

/// State machine for an in-flight turn.
pub struct ActiveTurn<'a, C: Clock> {
    request: TurnRequest,
    clock: &'a C,
    budget: TurnBudget,
    started_ms: u64,
    polls: u64,
    state: TurnState,
}

impl<C: Clock> ActiveTurn<'_, C> {
    /// Advance the turn by one sensor poll.
    ///
    /// The poll that completes or times out the turn halts the wheels before
    /// returning. Polling a terminal turn is a no-op.
    pub fn poll(
        &mut self,
        motor: &mut dyn MotorDriver,
        sensor: &mut dyn HeadingSensor,
    ) -> Result<TurnState> {
        if self.state != TurnState::Turning {
            return Ok(self.state);
        }

        sensor.update()?;
        self.polls += 1;

        if !self
            .request
            .strategy
            .keep_turning(sensor.heading(), self.request.target_angle)
        {
            motor.set_speeds(0, 0)?;
            self.state = TurnState::Completed;
        } else if self.budget.exhausted(self.elapsed(), self.polls) {
            motor.set_speeds(0, 0)?;
            self.state = TurnState::TimedOut;
        }

        Ok(self.state)
    }

    /// Current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Sensor polls consumed so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Wall time since the turn started.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.clock.now_ms().saturating_sub(self.started_ms))
    }
}
