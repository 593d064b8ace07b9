//! Direction reporting to the drawing observer
//!
//! The reporter owns the facing accumulator and turns relative facing
//! changes into protocol tokens. The observer reconstructs the robot's path
//! purely from the token stream, so emission order is part of the contract.

pub mod protocol;

pub use protocol::DirectionToken;

use crate::core::types::{advance_facing, Facing};
use crate::error::Result;
use crate::link::ObserverLink;
use std::time::Duration;

/// Reports facing changes and status events over the observer link.
pub struct DirectionReporter<L: ObserverLink> {
    link: L,
    position: u8,
    poi_redraw_delay: Duration,
}

impl<L: ObserverLink> DirectionReporter<L> {
    /// Create a reporter facing up (accumulator 0).
    ///
    /// `poi_redraw_delay` is the pause between a point-of-interest mark and
    /// the facing re-emission that follows it; the observer needs the gap to
    /// finish drawing the mark. Pass `Duration::ZERO` in tests.
    pub fn new(link: L, poi_redraw_delay: Duration) -> Self {
        Self {
            link,
            position: 0,
            poi_redraw_delay,
        }
    }

    /// Current facing.
    pub fn facing(&self) -> Facing {
        Facing::from_index(self.position)
    }

    /// Fold a relative facing change into the accumulator and emit the
    /// resulting facing token.
    ///
    /// `delta` counts clockwise quarter-turns. Callers emit 0 for a straight
    /// segment and 1 for a single turn; larger deltas pass through the wrap
    /// rule of [`advance_facing`] unchanged.
    pub fn report(&mut self, delta: u8) -> Result<()> {
        self.position = advance_facing(self.position, delta);
        let token = DirectionToken::from(self.facing());
        log::debug!(
            "DirectionReporter: delta {} -> facing {:?}, emitting '{}'",
            delta,
            self.facing(),
            token.wire()
        );
        self.link.write_line(token.wire())
    }

    /// Report a halt, or mark a point of interest at the current position.
    ///
    /// A point mark is followed, after the redraw delay, by a re-emission of
    /// the current facing token so the observer resumes drawing from the
    /// marked position. The accumulator itself is untouched.
    pub fn stop(&mut self, point_of_interest: bool) -> Result<()> {
        if point_of_interest {
            log::info!("DirectionReporter: marking point of interest");
            self.link.write_line(DirectionToken::PointOfInterest.wire())?;
            if !self.poi_redraw_delay.is_zero() {
                std::thread::sleep(self.poi_redraw_delay);
            }
            return self.report(0);
        }

        log::info!("DirectionReporter: reporting halt");
        self.link.write_line(DirectionToken::Stop.wire())
    }
}
