//! Simulated differential-drive chassis
//!
//! One shared state backs both a motor handle and a heading handle, so a
//! commanded wheel differential shows up in the heading estimate on the next
//! poll. Just enough physics to exercise closed-loop turns without hardware:
//! the heading moves a fixed number of degrees per poll in the direction the
//! wheel speeds imply.

use crate::drivers::{HeadingSensor, MotorDriver};
use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ChassisState {
    left: u16,
    right: u16,
    heading_deg: i64,
}

/// Shared simulated chassis.
#[derive(Clone)]
pub struct SimChassis {
    state: Arc<Mutex<ChassisState>>,
    degrees_per_poll: i64,
}

impl SimChassis {
    /// Create a chassis whose heading moves `degrees_per_poll` degrees per
    /// sensor poll while a turn is commanded. Zero simulates a stalled
    /// heading sensor.
    pub fn new(degrees_per_poll: i64) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChassisState::default())),
            degrees_per_poll,
        }
    }

    /// Motor handle backed by this chassis.
    pub fn motor_handle(&self) -> SimMotor {
        SimMotor {
            state: Arc::clone(&self.state),
        }
    }

    /// Heading handle backed by this chassis.
    pub fn heading_handle(&self) -> SimHeading {
        SimHeading {
            state: Arc::clone(&self.state),
            degrees_per_poll: self.degrees_per_poll,
        }
    }

    /// Currently commanded wheel speeds.
    pub fn wheel_speeds(&self) -> (u16, u16) {
        let state = self.state.lock();
        (state.left, state.right)
    }

    /// Current simulated heading in degrees.
    pub fn heading(&self) -> i64 {
        self.state.lock().heading_deg
    }
}

/// Motor driver half of the simulated chassis.
pub struct SimMotor {
    state: Arc<Mutex<ChassisState>>,
}

impl MotorDriver for SimMotor {
    fn set_speeds(&mut self, left: u16, right: u16) -> Result<()> {
        let mut state = self.state.lock();
        state.left = left;
        state.right = right;
        Ok(())
    }
}

/// Heading sensor half of the simulated chassis.
pub struct SimHeading {
    state: Arc<Mutex<ChassisState>>,
    degrees_per_poll: i64,
}

impl HeadingSensor for SimHeading {
    fn reset(&mut self) -> Result<()> {
        self.state.lock().heading_deg = 0;
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        // Pivot direction comes from the wheel differential: right wheel
        // faster means counter-clockwise, heading up.
        if state.right > state.left {
            state.heading_deg += self.degrees_per_poll;
        } else if state.left > state.right {
            state.heading_deg -= self.degrees_per_poll;
        }
        Ok(())
    }

    fn heading(&self) -> i64 {
        self.state.lock().heading_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_follows_the_wheel_differential() {
        let chassis = SimChassis::new(10);
        let mut motor = chassis.motor_handle();
        let mut sensor = chassis.heading_handle();

        motor.set_speeds(0, 100).unwrap();
        for _ in 0..3 {
            sensor.update().unwrap();
        }
        assert_eq!(sensor.heading(), 30);

        motor.set_speeds(100, 0).unwrap();
        for _ in 0..5 {
            sensor.update().unwrap();
        }
        assert_eq!(sensor.heading(), -20);
    }

    #[test]
    fn equal_speeds_hold_the_heading() {
        let chassis = SimChassis::new(10);
        let mut motor = chassis.motor_handle();
        let mut sensor = chassis.heading_handle();

        motor.set_speeds(100, 100).unwrap();
        sensor.update().unwrap();
        assert_eq!(sensor.heading(), 0);

        motor.set_speeds(0, 0).unwrap();
        sensor.update().unwrap();
        assert_eq!(sensor.heading(), 0);
    }

    #[test]
    fn reset_re_zeroes_the_heading() {
        let chassis = SimChassis::new(15);
        let mut motor = chassis.motor_handle();
        let mut sensor = chassis.heading_handle();

        motor.set_speeds(0, 50).unwrap();
        sensor.update().unwrap();
        assert_eq!(sensor.heading(), 15);

        sensor.reset().unwrap();
        assert_eq!(sensor.heading(), 0);
        assert_eq!(chassis.heading(), 0);
    }
}
