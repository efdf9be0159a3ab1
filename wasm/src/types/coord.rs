use std::fmt;
use std::str::FromStr;

use super::direction::Direction;
use super::error::{ModelError, ModelResult};

/// Integer grid coordinate. Its canonical key is `"{x},{y}"`, the one encoding
/// shared by house keys, tile keys and robot positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Decodes a canonical key. Only strings that `key()` could have produced
    /// are accepted, so `"01,2"`, `"+1,2"`, `" 1,2"` and `"-0,0"` all fail.
    pub fn decode(key: &str) -> ModelResult<Self> {
        let invalid = || ModelError::InvalidHouseKey {
            key: key.to_string(),
        };

        let (x, y) = key.split_once(',').ok_or_else(invalid)?;
        let coord = Coord::new(
            x.parse().map_err(|_| invalid())?,
            y.parse().map_err(|_| invalid())?,
        );

        if coord.key() != key {
            return Err(invalid());
        }
        Ok(coord)
    }

    /// One tile over in `direction`, or `None` past the edge of `i32`.
    pub fn checked_step(&self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Coord::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
        ))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::decode(s)
    }
}
