use serde::{Deserialize, Serialize};

use super::coord::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotPresence {
    pub id: u32,
    pub color_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub key: String,
    pub presents: u32,
    pub robots_present: Vec<RobotPresence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision: Option<bool>,
}

impl Tile {
    pub fn new(coord: Coord, presents: u32, robots_present: Vec<RobotPresence>) -> Self {
        let collision = Some(robots_present.len() >= 2);
        Self {
            x: coord.x,
            y: coord.y,
            key: coord.key(),
            presents,
            robots_present,
            collision,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn is_occupied(&self) -> bool {
        !self.robots_present.is_empty()
    }
}

/// Dense rectangle of tiles: rows ascend by y, tiles within a row by x.
///
/// An empty grid has no rows and the bounds `(0, 0)..(-1, -1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseGrid {
    pub rows: Vec<Vec<Tile>>,
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl HouseGrid {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            min_x: 0,
            min_y: 0,
            max_x: -1,
            max_y: -1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.is_empty() || x < self.min_x || x > self.max_x || y < self.min_y || y > self.max_y
        {
            return None;
        }
        let row = (i64::from(y) - i64::from(self.min_y)) as usize;
        let col = (i64::from(x) - i64::from(self.min_x)) as usize;
        self.rows.get(row).and_then(|tiles| tiles.get(col))
    }

    pub fn tile_by_key(&self, key: &str) -> Option<&Tile> {
        let coord = Coord::decode(key).ok()?;
        self.tile(coord.x, coord.y)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten()
    }

    pub fn collision_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles().filter(|tile| tile.collision == Some(true))
    }
}

impl Default for HouseGrid {
    fn default() -> Self {
        Self::empty()
    }
}
