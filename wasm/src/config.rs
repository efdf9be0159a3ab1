use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLOR_CLASSES, DEFAULT_ROBOT_COUNT, DEFAULT_TICK_RATE, MAX_GRID_TILES, MAX_ROBOTS,
};
use crate::types::{parse_moves, Direction, ModelError, ModelResult, Robot};

/// Settings for a delivery run, usually handed over from JavaScript as a plain
/// object. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    pub robot_count: usize,
    /// Optional display names; robots without one are called "Robot N".
    pub robot_names: Vec<String>,
    pub color_classes: Vec<String>,
    pub moves: String,
    pub tick_rate: u32,
    /// Largest grid `get_house_grid` will build, in tiles.
    pub max_grid_tiles: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            robot_count: DEFAULT_ROBOT_COUNT,
            robot_names: Vec::new(),
            color_classes: DEFAULT_COLOR_CLASSES.iter().map(|c| c.to_string()).collect(),
            moves: String::new(),
            tick_rate: DEFAULT_TICK_RATE,
            max_grid_tiles: MAX_GRID_TILES,
        }
    }
}

impl SimulationConfig {
    pub fn new(robot_count: usize, moves: impl Into<String>) -> Self {
        Self {
            robot_count,
            moves: moves.into(),
            ..Self::default()
        }
    }

    /// Checks the settings and returns the parsed route.
    pub fn validate(&self) -> ModelResult<Vec<Direction>> {
        if self.robot_count == 0 {
            return Err(invalid("robotCount must be at least 1"));
        }
        if self.robot_count > MAX_ROBOTS {
            return Err(ModelError::InvalidConfig {
                reason: format!("robotCount must be at most {MAX_ROBOTS}"),
            });
        }
        if self.color_classes.is_empty() {
            return Err(invalid("colorClasses must not be empty"));
        }
        if self.tick_rate == 0 {
            return Err(invalid("tickRate must be at least 1"));
        }
        if self.max_grid_tiles == 0 {
            return Err(invalid("maxGridTiles must be at least 1"));
        }
        parse_moves(&self.moves)
    }

    /// Fleet at the origin, ids counting from 1.
    pub fn build_robots(&self) -> Vec<Robot> {
        (0..self.robot_count)
            .map(|index| {
                let id = index as u32 + 1;
                let name = self
                    .robot_names
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("Robot {id}"));
                let color = &self.color_classes[index % self.color_classes.len()];
                Robot::new(id, name, color.as_str())
            })
            .collect()
    }
}

fn invalid(reason: &str) -> ModelError {
    ModelError::InvalidConfig {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: SimulationConfig =
            serde_json::from_value(serde_json::json!({"moves": "^>"})).unwrap();
        assert_eq!(config.robot_count, DEFAULT_ROBOT_COUNT);
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(config.color_classes.len(), DEFAULT_COLOR_CLASSES.len());
        assert_eq!(config.validate().unwrap().len(), 2);
    }

    #[test]
    fn rejects_empty_fleet_and_palette() {
        assert!(matches!(
            SimulationConfig::new(0, "^").validate(),
            Err(ModelError::InvalidConfig { .. })
        ));

        let mut config = SimulationConfig::new(1, "^");
        config.color_classes.clear();
        assert!(matches!(config.validate(), Err(ModelError::InvalidConfig { .. })));

        let mut config = SimulationConfig::new(1, "^");
        config.tick_rate = 0;
        assert!(matches!(config.validate(), Err(ModelError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_fleets_above_the_robot_cap() {
        for robot_count in [MAX_ROBOTS + 1, u32::MAX as usize, usize::MAX] {
            assert!(matches!(
                SimulationConfig::new(robot_count, "").validate(),
                Err(ModelError::InvalidConfig { .. })
            ));
        }
        assert!(SimulationConfig::new(MAX_ROBOTS, "").validate().is_ok());
    }

    #[test]
    fn grid_limit_comes_from_config() {
        let config: SimulationConfig =
            serde_json::from_value(serde_json::json!({"maxGridTiles": 64})).unwrap();
        assert_eq!(config.max_grid_tiles, 64);
        assert_eq!(SimulationConfig::default().max_grid_tiles, MAX_GRID_TILES);

        let mut config = SimulationConfig::new(1, "");
        config.max_grid_tiles = 0;
        assert!(matches!(config.validate(), Err(ModelError::InvalidConfig { .. })));
    }

    #[test]
    fn surfaces_bad_moves() {
        assert_eq!(
            SimulationConfig::new(1, "^?").validate(),
            Err(ModelError::InvalidMove {
                glyph: '?',
                position: 1
            })
        );
    }

    #[test]
    fn builds_named_and_colored_robots() {
        let mut config = SimulationConfig::new(3, "");
        config.robot_names = vec!["Santa".to_string()];
        config.color_classes = vec!["red".to_string(), "blue".to_string()];

        let robots = config.build_robots();
        let names: Vec<_> = robots.iter().map(|r| r.name.as_str()).collect();
        let colors: Vec<_> = robots.iter().map(|r| r.color_class.as_str()).collect();
        let ids: Vec<_> = robots.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(names, vec!["Santa", "Robot 2", "Robot 3"]);
        assert_eq!(colors, vec!["red", "blue", "red"]);
    }
}
