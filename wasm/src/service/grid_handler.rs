use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

use crate::data::HouseGridBuilder;
use crate::types::{Robot, RobotPosition, SimulationState};

/// Derives the tile grid for a `SimulationState` object built outside the
/// handler, e.g. a snapshot replayed from history. `max_tiles` overrides the
/// default tile limit.
#[wasm_bindgen]
pub fn derive_house_grid(state: JsValue, max_tiles: Option<usize>) -> Result<JsValue, JsError> {
    let state: SimulationState = serde_wasm_bindgen::from_value(state)?;
    let grid = grid_builder(max_tiles).build(&state)?;
    Ok(serde_wasm_bindgen::to_value(&grid)?)
}

#[wasm_bindgen]
pub fn project_robot(robot: JsValue) -> Result<JsValue, JsError> {
    let robot: Robot = serde_wasm_bindgen::from_value(robot)?;
    Ok(serde_wasm_bindgen::to_value(&RobotPosition::from(&robot))?)
}

fn grid_builder(max_tiles: Option<usize>) -> HouseGridBuilder {
    max_tiles.map_or_else(HouseGridBuilder::new, HouseGridBuilder::with_tile_limit)
}
