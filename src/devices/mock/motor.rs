//! Command-recording motor driver for tests

use crate::drivers::MotorDriver;
use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every speed command for later assertion.
#[derive(Clone, Default)]
pub struct RecordingMotor {
    commands: Arc<Mutex<Vec<(u16, u16)>>>,
}

impl RecordingMotor {
    /// Create a new recording motor.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received, in order.
    pub fn commands(&self) -> Vec<(u16, u16)> {
        self.commands.lock().clone()
    }
}

impl MotorDriver for RecordingMotor {
    fn set_speeds(&mut self, left: u16, right: u16) -> Result<()> {
        self.commands.lock().push((left, right));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut motor = RecordingMotor::new();
        motor.set_speeds(100, 0).unwrap();
        motor.stop().unwrap();
        assert_eq!(motor.commands(), vec![(100, 0), (0, 0)]);
    }
}
