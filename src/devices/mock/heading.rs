//! Scripted heading sensor for deterministic tests

use crate::drivers::HeadingSensor;
use crate::error::Result;
use std::collections::VecDeque;

/// Replays a fixed sequence of heading samples.
///
/// Each `update` consumes the next sample; once the script is exhausted the
/// last sample holds, which models a sensor that has stopped moving.
pub struct ScriptedHeading {
    samples: VecDeque<i64>,
    current: i64,
    resets: u32,
}

impl ScriptedHeading {
    /// Create a sensor that will replay `samples` in order.
    pub fn new<I: IntoIterator<Item = i64>>(samples: I) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            current: 0,
            resets: 0,
        }
    }

    /// Number of times the sensor has been re-zeroed.
    pub fn resets(&self) -> u32 {
        self.resets
    }
}

impl HeadingSensor for ScriptedHeading {
    fn reset(&mut self) -> Result<()> {
        self.current = 0;
        self.resets += 1;
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        if let Some(sample) = self.samples.pop_front() {
            self.current = sample;
        }
        Ok(())
    }

    fn heading(&self) -> i64 {
        self.current
    }
}
