use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::constants::MAX_GRID_TILES;
use crate::types::{
    Coord, HouseGrid, ModelError, ModelResult, Robot, RobotPresence, SimulationState, Tile,
};

/// Derives the dense [`HouseGrid`] for a snapshot.
pub struct HouseGridBuilder {
    tile_limit: usize,
}

impl HouseGridBuilder {
    pub fn new() -> Self {
        Self::with_tile_limit(MAX_GRID_TILES)
    }

    pub fn with_tile_limit(tile_limit: usize) -> Self {
        Self { tile_limit }
    }

    pub fn tile_limit(&self) -> usize {
        self.tile_limit
    }

    pub fn build(&self, state: &SimulationState) -> ModelResult<HouseGrid> {
        let mut bounds: Option<Bounds> = None;

        let mut presents: HashMap<Coord, u32> = HashMap::with_capacity(state.houses.len());
        for (key, count) in &state.houses {
            let coord = Coord::decode(key).map_err(|err| {
                warn!(key = %key, "rejecting snapshot with undecodable house key");
                err
            })?;
            if presents.insert(coord, *count).is_some() {
                warn!(key = %key, "rejecting snapshot with duplicate house key");
                return Err(ModelError::DuplicateHouseKey { key: key.clone() });
            }
            bounds = Some(Bounds::include(bounds, coord));
        }

        let mut seen_ids = HashSet::with_capacity(state.robots.len());
        let mut occupants: HashMap<Coord, Vec<&Robot>> = HashMap::new();
        for robot in &state.robots {
            if !seen_ids.insert(robot.id) {
                warn!(robot_id = robot.id, "rejecting snapshot with duplicate robot id");
                return Err(ModelError::DuplicateRobotId { id: robot.id });
            }
            let coord = robot.coord();
            occupants.entry(coord).or_default().push(robot);
            bounds = Some(Bounds::include(bounds, coord));
        }

        let Some(bounds) = bounds else {
            return Ok(HouseGrid::empty());
        };

        let (width, height) = bounds.dimensions();
        let too_large = ModelError::GridTooLarge {
            width,
            height,
            limit: self.tile_limit,
        };
        if width.saturating_mul(height) > self.tile_limit as u64 {
            return Err(too_large);
        }

        // Inside the limit the allocation can still fail on a small wasm heap.
        let mut rows = Vec::new();
        rows.try_reserve_exact(height as usize)
            .map_err(|_| too_large.clone())?;
        for y in bounds.min.y..=bounds.max.y {
            let mut row = Vec::new();
            row.try_reserve_exact(width as usize)
                .map_err(|_| too_large.clone())?;
            for x in bounds.min.x..=bounds.max.x {
                let coord = Coord::new(x, y);
                let robots_present = occupants
                    .get(&coord)
                    .map(|group| presences(group))
                    .unwrap_or_default();
                row.push(Tile::new(
                    coord,
                    presents.get(&coord).copied().unwrap_or(0),
                    robots_present,
                ));
            }
            rows.push(row);
        }

        debug!(
            move_index = state.move_index,
            width, height, "derived house grid"
        );

        Ok(HouseGrid {
            rows,
            min_x: bounds.min.x,
            min_y: bounds.min.y,
            max_x: bounds.max.x,
            max_y: bounds.max.y,
        })
    }
}

impl Default for HouseGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn presences(group: &[&Robot]) -> Vec<RobotPresence> {
    let collision = group.len() >= 2;
    group
        .iter()
        .map(|robot| RobotPresence {
            id: robot.id,
            color_class: robot.color_class.clone(),
            collision: Some(collision),
        })
        .collect()
}

#[derive(Clone, Copy)]
struct Bounds {
    min: Coord,
    max: Coord,
}

impl Bounds {
    fn include(bounds: Option<Bounds>, coord: Coord) -> Bounds {
        match bounds {
            None => Bounds {
                min: coord,
                max: coord,
            },
            Some(b) => Bounds {
                min: Coord::new(b.min.x.min(coord.x), b.min.y.min(coord.y)),
                max: Coord::new(b.max.x.max(coord.x), b.max.y.max(coord.y)),
            },
        }
    }

    fn dimensions(&self) -> (u64, u64) {
        let width = (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64;
        let height = (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u64;
        (width, height)
    }
}
