//! Wire protocol for the observer link
//!
//! Single-character tokens, one per line, newline-terminated:
//!
//! | token | meaning |
//! |-------|---------|
//! | `u` `r` `d` `l` | facing after the latest report |
//! | `s` | halted |
//! | `p` | point of interest at the current position |

use crate::core::types::Facing;

/// Protocol token emitted to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionToken {
    Up,
    Right,
    Down,
    Left,
    Stop,
    PointOfInterest,
}

impl DirectionToken {
    /// Wire payload for this token.
    pub fn wire(self) -> &'static str {
        match self {
            DirectionToken::Up => "u",
            DirectionToken::Right => "r",
            DirectionToken::Down => "d",
            DirectionToken::Left => "l",
            DirectionToken::Stop => "s",
            DirectionToken::PointOfInterest => "p",
        }
    }

    /// Decode a wire payload. Trailing line terminators are ignored.
    pub fn from_wire(payload: &str) -> Option<DirectionToken> {
        match payload.trim_end_matches(['\r', '\n']) {
            "u" => Some(DirectionToken::Up),
            "r" => Some(DirectionToken::Right),
            "d" => Some(DirectionToken::Down),
            "l" => Some(DirectionToken::Left),
            "s" => Some(DirectionToken::Stop),
            "p" => Some(DirectionToken::PointOfInterest),
            _ => None,
        }
    }
}

impl From<Facing> for DirectionToken {
    fn from(facing: Facing) -> Self {
        match facing {
            Facing::Up => DirectionToken::Up,
            Facing::Right => DirectionToken::Right,
            Facing::Down => DirectionToken::Down,
            Facing::Left => DirectionToken::Left,
        }
    }
}
