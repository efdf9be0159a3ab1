//! Data model and move replay for Santa's delivery robots, compiled to
//! WebAssembly for the browser UI.
//!
//! Houses hold presents, robots walk a shared route in turns, and every
//! snapshot can be turned into a dense [`HouseGrid`] of tiles for display.

mod constants;
mod data;
mod dependency;
mod logic;
mod service;

pub mod config;
pub mod types;

pub use config::SimulationConfig;
pub use constants::{DEFAULT_COLOR_CLASSES, MAX_GRID_TILES};
pub use data::HouseGridBuilder;
pub use logic::SimulationLogic;
pub use service::{derive_house_grid, project_robot, SimulationHandler};
pub use types::{
    Coord, Direction, HouseEntry, HouseGrid, ModelError, ModelResult, MoveOutcome, Robot,
    RobotPosition, RobotPresence, SimulationState, Tile,
};

/// Derives the tile grid for `state` with the default tile limit.
pub fn house_grid(state: &SimulationState) -> ModelResult<HouseGrid> {
    HouseGridBuilder::new().build(state)
}
