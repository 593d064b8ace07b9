//! Facing direction and the reporting accumulator arithmetic

use serde::{Deserialize, Serialize};

/// Facing direction of the chassis, one quarter-turn apart.
///
/// The numeric indices (0=up, 1=right, 2=down, 3=left) are the accumulator
/// values the reporting protocol is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    /// Accumulator index for this facing.
    pub fn index(self) -> u8 {
        match self {
            Facing::Up => 0,
            Facing::Right => 1,
            Facing::Down => 2,
            Facing::Left => 3,
        }
    }

    /// Facing for an accumulator value.
    ///
    /// Only 0..=3 occur in practice ([`advance_facing`] never produces a
    /// larger value); anything above 3 maps to `Left`.
    pub fn from_index(index: u8) -> Facing {
        match index {
            0 => Facing::Up,
            1 => Facing::Right,
            2 => Facing::Down,
            _ => Facing::Left,
        }
    }
}

/// Fold a relative quarter-turn count into a facing accumulator.
///
/// Sums above 3 wrap with `3 - (sum % 3)`. This is deliberately NOT a clean
/// modulo-4: 4 resolves to 2 and 5 resolves to 1. The observer's drawing
/// state machine expects exactly this sequence, so the rule must stay as-is.
/// The addition is 8-bit wrapping, matching the width of the accumulator.
pub fn advance_facing(position: u8, delta: u8) -> u8 {
    let mut pos = position.wrapping_add(delta);
    if pos > 3 {
        pos = 3 - (pos % 3);
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_index_round_trip() {
        for facing in [Facing::Up, Facing::Right, Facing::Down, Facing::Left] {
            assert_eq!(Facing::from_index(facing.index()), facing);
        }
    }

    #[test]
    fn advance_stays_in_range_for_any_delta() {
        for start in 0..=3u8 {
            for delta in [0u8, 1, 2, 3, 4, 5, 10] {
                let pos = advance_facing(start, delta);
                assert!(pos <= 3, "advance_facing({}, {}) = {}", start, delta, pos);
            }
        }
    }

    #[test]
    fn advance_by_one_wraps_to_down_not_up() {
        // Four single quarter-turns from 0: the wrap rule lands the fourth
        // step on 2 (down), not back on 0.
        let mut pos = 0u8;
        let mut seen = Vec::new();
        for _ in 0..4 {
            pos = advance_facing(pos, 1);
            seen.push(pos);
        }
        assert_eq!(seen, vec![1, 2, 3, 2]);
    }

    #[test]
    fn wrap_values_are_the_literal_rule() {
        // 4 -> 3 - (4 % 3) = 2, 5 -> 3 - (5 % 3) = 1, 6 -> 3 - (6 % 3) = 3
        assert_eq!(advance_facing(3, 1), 2);
        assert_eq!(advance_facing(3, 2), 1);
        assert_eq!(advance_facing(3, 3), 3);
        assert_eq!(advance_facing(0, 4), 2);
        assert_eq!(advance_facing(0, 5), 1);
        assert_eq!(advance_facing(0, 10), 2);
    }

    #[test]
    fn zero_delta_is_identity() {
        for start in 0..=3u8 {
            assert_eq!(advance_facing(start, 0), start);
        }
    }
}
