use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::robot::{Robot, RobotPosition};

/// `[key, presents]` entry, in the order houses first received a present.
pub type HouseEntry = (String, u32);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub houses: Vec<HouseEntry>,
    pub robots: Vec<Robot>,
    pub move_index: u64,
}

impl SimulationState {
    pub fn new(houses: Vec<HouseEntry>, robots: Vec<Robot>, move_index: u64) -> Self {
        Self {
            houses,
            robots,
            move_index,
        }
    }

    pub fn robot_positions(&self) -> Vec<RobotPosition> {
        self.robots.iter().map(RobotPosition::from).collect()
    }

    pub fn total_presents(&self) -> u64 {
        self.houses.iter().map(|(_, presents)| u64::from(*presents)).sum()
    }
}

/// What a single applied move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub move_index: u64,
    pub robot_id: u32,
    pub direction: Direction,
    pub from: String,
    pub to: String,
    pub delivered: bool,
    pub collision: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn houses_serialize_as_key_count_pairs() {
        let state = SimulationState::new(
            vec![("0,0".to_string(), 3), ("2,1".to_string(), 1)],
            vec![],
            4,
        );
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "houses": [["0,0", 3], ["2,1", 1]],
                "robots": [],
                "moveIndex": 4
            })
        );
        assert_eq!(state.total_presents(), 4);
    }

    #[test]
    fn outcome_direction_serializes_as_glyph() {
        let outcome = MoveOutcome {
            move_index: 0,
            robot_id: 1,
            direction: Direction::West,
            from: "0,0".to_string(),
            to: "-1,0".to_string(),
            delivered: true,
            collision: false,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["direction"], "<");
        assert_eq!(value["robotId"], 1);
    }
}
