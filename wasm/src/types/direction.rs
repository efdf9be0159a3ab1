use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{ModelError, ModelResult};

/// One move of the delivery route. Screen orientation: `North` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn from_glyph(glyph: char) -> Option<Direction> {
        match glyph {
            '^' => Some(Direction::North),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            '>' => Some(Direction::East),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::North => '^',
            Direction::South => 'v',
            Direction::West => '<',
            Direction::East => '>',
        }
    }

    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}

impl From<Direction> for char {
    fn from(direction: Direction) -> char {
        direction.glyph()
    }
}

impl TryFrom<char> for Direction {
    type Error = ModelError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        Direction::from_glyph(glyph).ok_or(ModelError::InvalidMove { glyph, position: 0 })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Parses a route such as `"^>v<"`. Whitespace is skipped so pasted,
/// line-wrapped input loads as-is; `position` in errors counts characters.
pub fn parse_moves(moves: &str) -> ModelResult<Vec<Direction>> {
    let mut parsed = Vec::with_capacity(moves.len());
    for (position, glyph) in moves.chars().enumerate() {
        if glyph.is_ascii_whitespace() {
            continue;
        }
        match Direction::from_glyph(glyph) {
            Some(direction) => parsed.push(direction),
            None => return Err(ModelError::InvalidMove { glyph, position }),
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_glyphs() {
        let moves = parse_moves("^v<>").unwrap();
        assert_eq!(
            moves,
            vec![
                Direction::North,
                Direction::South,
                Direction::West,
                Direction::East
            ]
        );
    }

    #[test]
    fn skips_whitespace_in_pasted_routes() {
        let moves = parse_moves(" ^^\n>\r\n<\t").unwrap();
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn reports_position_of_bad_glyph() {
        assert_eq!(
            parse_moves("^^x>"),
            Err(ModelError::InvalidMove {
                glyph: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn glyph_round_trips_through_char() {
        for glyph in ['^', 'v', '<', '>'] {
            let direction = Direction::try_from(glyph).unwrap();
            assert_eq!(char::from(direction), glyph);
        }
        assert!(Direction::try_from('V').is_err());
    }
}
