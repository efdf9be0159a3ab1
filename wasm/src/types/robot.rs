use serde::{Deserialize, Serialize};

use super::coord::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub id: u32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub color_class: String,
    /// `None` until collisions have been computed for this robot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision: Option<bool>,
}

impl Robot {
    pub fn new(id: u32, name: impl Into<String>, color_class: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            x: Coord::ORIGIN.x,
            y: Coord::ORIGIN.y,
            color_class: color_class.into(),
            collision: None,
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn move_to(&mut self, coord: Coord) {
        self.x = coord.x;
        self.y = coord.y;
    }
}

/// Display projection of a [`Robot`]; `position` is the canonical tile key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotPosition {
    pub id: u32,
    pub name: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_class: Option<String>,
}

impl From<&Robot> for RobotPosition {
    fn from(robot: &Robot) -> Self {
        Self {
            id: robot.id,
            name: robot.name.clone(),
            position: robot.coord().key(),
            color_class: Some(robot.color_class.clone()),
        }
    }
}
