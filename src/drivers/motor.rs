//! Motor driver trait

use crate::error::Result;

/// Differential drive motor controller.
///
/// Speeds are raw device units; the magnitude range is the device's
/// convention. Zero on both wheels halts the chassis.
pub trait MotorDriver: Send {
    /// Command left and right wheel speeds.
    fn set_speeds(&mut self, left: u16, right: u16) -> Result<()>;

    /// Halt both wheels.
    fn stop(&mut self) -> Result<()> {
        self.set_speeds(0, 0)
    }
}
