//! Heading sensor trait

use crate::error::Result;

/// Closed-loop heading source for turn control.
///
/// Implementations integrate a gyro (or equivalent) into a signed heading
/// in degrees relative to the last reset. The value has no fixed range and
/// grows monotonically during a constant-direction turn; positive is
/// counter-clockwise.
pub trait HeadingSensor: Send {
    /// Re-zero the heading reference.
    fn reset(&mut self) -> Result<()>;

    /// Poll the sensor and fold the latest sample into the heading estimate.
    ///
    /// The turn loop calls this as fast as the sensor allows; pacing belongs
    /// to the implementation.
    fn update(&mut self) -> Result<()>;

    /// Current heading in degrees relative to the last reset.
    fn heading(&self) -> i64;
}
