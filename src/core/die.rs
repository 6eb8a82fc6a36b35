//! A single die with a configurable number of sides.

use serde::{Deserialize, Serialize};

use super::rng::RollSource;
use crate::error::{PigError, Result};

/// Sides on a standard die.
pub const DEFAULT_SIDES: u32 = 6;

/// The face that ends a turn with no points.
pub const BUST_FACE: u32 = 1;

/// A die. Holds configuration only; randomness comes from the caller's source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Create a die with `sides` faces.
    pub fn new(sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(PigError::InvalidSides { sides });
        }
        Ok(Self { sides })
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll once, uniformly in `1..=sides`.
    pub fn roll(&self, source: &mut impl RollSource) -> u32 {
        source.roll_die(self.sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{FixedRolls, GameRng};

    #[test]
    fn test_default_die() {
        assert_eq!(Die::default().sides(), 6);
    }

    #[test]
    fn test_zero_sides_rejected() {
        assert!(matches!(Die::new(0), Err(PigError::InvalidSides { sides: 0 })));
    }

    #[test]
    fn test_roll_uses_source() {
        let die = Die::default();
        let mut rolls = FixedRolls::new([4, 1]);

        assert_eq!(die.roll(&mut rolls), 4);
        assert_eq!(die.roll(&mut rolls), 1);
    }

    #[test]
    fn test_roll_range_for_large_die() {
        let die = Die::new(20).unwrap();
        let mut rng = GameRng::new(11);

        for _ in 0..500 {
            assert!((1..=20).contains(&die.roll(&mut rng)));
        }
    }
}
